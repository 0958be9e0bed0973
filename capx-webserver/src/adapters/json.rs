pub use capx_boundary::*;

use capx_core::{entities as e, taxonomy::SkillSetsUpdate, usecases};

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    fn ids(ids: Vec<String>) -> Vec<e::Id> {
        ids.into_iter().map(e::Id::from).collect()
    }

    fn opt_ids(ids_or_none: Option<Vec<String>>) -> Option<Vec<e::Id>> {
        ids_or_none.map(ids)
    }

    pub fn new_account(from: NewAccount) -> usecases::NewAccount {
        let NewAccount {
            username,
            email,
            password,
        } = from;
        usecases::NewAccount {
            username,
            email,
            password,
        }
    }

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            name,
            type_of_location,
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            related_skills,
        } = from;
        usecases::NewEvent {
            name,
            location_type: type_of_location.into(),
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            related_skills: ids(related_skills),
        }
    }

    /// A complete replacement of an event.
    ///
    /// Missing optional values are cleared.
    pub fn event_replacement(from: NewEvent) -> usecases::EventUpdate {
        let NewEvent {
            name,
            type_of_location,
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            related_skills,
        } = from;
        usecases::EventUpdate {
            name: Some(name),
            location_type: Some(type_of_location.into()),
            openstreetmap_id: Some(openstreetmap_id.unwrap_or_default()),
            url: Some(url.unwrap_or_default()),
            wikidata_qid: Some(wikidata_qid.unwrap_or_default()),
            time_begin: Some(time_begin),
            time_end: Some(time_end),
            related_skills: Some(ids(related_skills)),
        }
    }

    pub fn event_update(from: EventUpdate) -> usecases::EventUpdate {
        let EventUpdate {
            name,
            type_of_location,
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            related_skills,
        } = from;
        usecases::EventUpdate {
            name,
            location_type: type_of_location.map(Into::into),
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            related_skills: opt_ids(related_skills),
        }
    }

    pub fn new_participation(from: NewParticipation) -> usecases::NewParticipation {
        let NewParticipation {
            event,
            participant,
            role,
        } = from;
        usecases::NewParticipation {
            event: event.into(),
            participant: participant.into(),
            role: role.into(),
        }
    }

    pub fn participation_update(from: ParticipationUpdate) -> usecases::ParticipationUpdate {
        let ParticipationUpdate {
            event,
            participant,
            role,
            confirmed_organizer,
            confirmed_participant,
        } = from;
        usecases::ParticipationUpdate {
            event: event.map(Into::into),
            participant: participant.map(Into::into),
            role: role.map(Into::into),
            confirmed_organizer,
            confirmed_participant,
        }
    }

    pub fn new_org_participation(from: NewOrgParticipation) -> usecases::NewOrgParticipation {
        let NewOrgParticipation {
            event,
            organization,
            role,
        } = from;
        usecases::NewOrgParticipation {
            event: event.into(),
            organization: organization.into(),
            role: role.into(),
        }
    }

    pub fn org_participation_update(
        from: OrgParticipationUpdate,
    ) -> usecases::OrgParticipationUpdate {
        let OrgParticipationUpdate {
            event,
            organization,
            role,
            confirmed_organizer,
            confirmed_organization,
        } = from;
        usecases::OrgParticipationUpdate {
            event: event.map(Into::into),
            organization: organization.map(Into::into),
            role: role.map(Into::into),
            confirmed_organizer,
            confirmed_organization,
        }
    }

    pub fn new_skill(from: NewSkill) -> usecases::NewSkill {
        let NewSkill {
            name,
            description,
            wikidata_item,
            supertypes,
        } = from;
        usecases::NewSkill {
            name,
            description,
            wikidata_item,
            supertypes: ids(supertypes),
        }
    }

    pub fn skill_update(from: SkillUpdate) -> usecases::SkillUpdate {
        let SkillUpdate {
            name,
            description,
            wikidata_item,
            supertypes,
        } = from;
        usecases::SkillUpdate {
            name,
            description,
            wikidata_item,
            supertypes: opt_ids(supertypes),
        }
    }

    pub fn new_territory(from: NewTerritory) -> usecases::NewTerritory {
        let NewTerritory { name, parents } = from;
        usecases::NewTerritory {
            name,
            parents: ids(parents),
        }
    }

    pub fn new_language(from: NewLanguage) -> usecases::NewLanguage {
        let NewLanguage {
            name,
            autonym,
            code,
        } = from;
        usecases::NewLanguage {
            name,
            autonym,
            code,
        }
    }

    pub fn new_wikimedia_project(from: NewWikimediaProject) -> usecases::NewWikimediaProject {
        let NewWikimediaProject { name, code } = from;
        usecases::NewWikimediaProject { name, code }
    }

    pub fn new_organization(from: NewOrganization) -> usecases::NewOrganization {
        let NewOrganization {
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories,
            managers,
        } = from;
        usecases::NewOrganization {
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories: ids(territories),
            managers: ids(managers),
        }
    }

    pub fn organization_update(from: OrganizationUpdate) -> usecases::OrganizationUpdate {
        let OrganizationUpdate {
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories,
            managers,
        } = from;
        usecases::OrganizationUpdate {
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories: opt_ids(territories),
            managers: opt_ids(managers),
        }
    }

    pub fn profile_update(from: ProfileUpdate) -> usecases::ProfileUpdate {
        let ProfileUpdate {
            display_name,
            pronoun,
            about,
            profile_image,
            wikidata_qid,
            wiki_alt,
            team,
            contact,
            social,
            territories,
            affiliations,
            languages,
            wikimedia_projects,
            skills_known,
            skills_available,
            skills_wanted,
        } = from;
        usecases::ProfileUpdate {
            display_name,
            pronoun: pronoun.map(Into::into),
            about,
            profile_image,
            wikidata_qid,
            wiki_alt,
            team,
            contact,
            social,
            territories: opt_ids(territories),
            affiliations: opt_ids(affiliations),
            languages: opt_ids(languages),
            wikimedia_projects: opt_ids(wikimedia_projects),
            skills: SkillSetsUpdate {
                known: opt_ids(skills_known),
                available: opt_ids(skills_available),
                wanted: opt_ids(skills_wanted),
            },
        }
    }

    pub fn new_bug(from: NewBug) -> usecases::NewBug {
        let NewBug {
            title,
            description,
            bug_type,
        } = from;
        usecases::NewBug {
            title,
            description,
            bug_type: bug_type.map(Into::into).unwrap_or_default(),
        }
    }

    pub fn bug_update(from: BugUpdate) -> usecases::BugUpdate {
        let BugUpdate {
            title,
            description,
            bug_type,
            status,
        } = from;
        usecases::BugUpdate {
            title,
            description,
            bug_type: bug_type.map(Into::into),
            status: status.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_event_clears_missing_optional_values() {
        let event = NewEvent {
            name: "Wikimania".into(),
            type_of_location: LocationType::Hybrid,
            openstreetmap_id: None,
            url: Some("https://wikimania.wikimedia.org".into()),
            wikidata_qid: None,
            time_begin: 10,
            time_end: 20,
            related_skills: vec![],
        };
        let update = from_json::event_replacement(event);
        assert_eq!(Some(String::new()), update.openstreetmap_id);
        assert_eq!(Some(String::new()), update.wikidata_qid);
        assert_eq!(Some(vec![]), update.related_skills);
        assert_eq!(Some(e::LocationType::Hybrid), update.location_type);
    }

    #[test]
    fn profile_update_keeps_omitted_skill_sets() {
        let update = from_json::profile_update(ProfileUpdate {
            skills_available: Some(vec!["a".into()]),
            ..Default::default()
        });
        assert!(update.skills.known.is_none());
        assert_eq!(Some(vec![e::Id::from("a")]), update.skills.available);
    }
}
