use super::{check_references, dedup_ids, parse_optional_url, prelude::*};
use crate::{
    authorization::{
        profile::{authorize, ProfileAction},
        Actor,
    },
    taxonomy::{merge_skill_sets, SkillSetsUpdate},
    util::{parse::trimmed_or_none, validate::Validate},
};

/// Changes of a profile.
///
/// `None` keeps the current value, blank strings
/// clear optional values.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name       : Option<String>,
    pub pronoun            : Option<Pronoun>,
    pub about              : Option<String>,
    pub profile_image      : Option<String>,
    pub wikidata_qid       : Option<String>,
    pub wiki_alt           : Option<String>,
    pub team               : Option<String>,
    pub contact            : Option<String>,
    pub social             : Option<Vec<String>>,
    pub territories        : Option<Vec<Id>>,
    pub affiliations       : Option<Vec<Id>>,
    pub languages          : Option<Vec<Id>>,
    pub wikimedia_projects : Option<Vec<Id>>,
    pub skills             : SkillSetsUpdate,
}

fn replace_text(target: &mut Option<String>, text: Option<String>) {
    if text.is_some() {
        *target = trimmed_or_none(text);
    }
}

pub fn update_profile<R>(
    repo: &R,
    actor: &Actor,
    account: &Id,
    update: ProfileUpdate,
) -> Result<Profile>
where
    R: ProfileRepo
        + SkillRepo
        + TerritoryRepo
        + OrganizationRepo
        + LanguageRepo
        + WikimediaProjectRepo,
{
    let mut profile = repo.get_profile(account)?;
    authorize(actor, ProfileAction::Update { owner: account })?;
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
        skills,
    } = update;
    profile.skills = merge_skill_sets(&profile.skills, skills)?;
    replace_text(&mut profile.display_name, display_name);
    if pronoun.is_some() {
        profile.pronoun = pronoun;
    }
    replace_text(&mut profile.about, about);
    if profile_image.is_some() {
        profile.profile_image = parse_optional_url(profile_image)?;
    }
    replace_text(&mut profile.wikidata_qid, wikidata_qid);
    replace_text(&mut profile.wiki_alt, wiki_alt);
    replace_text(&mut profile.team, team);
    replace_text(&mut profile.contact, contact);
    if let Some(social) = social {
        let mut links = Vec::with_capacity(social.len());
        for link in social {
            if let Some(url) = parse_optional_url(Some(link))? {
                links.push(url);
            }
        }
        profile.social = links;
    }
    if let Some(territories) = territories {
        profile.territories = dedup_ids(territories);
    }
    if let Some(affiliations) = affiliations {
        profile.affiliations = dedup_ids(affiliations);
    }
    if let Some(languages) = languages {
        profile.languages = dedup_ids(languages);
    }
    if let Some(wikimedia_projects) = wikimedia_projects {
        profile.wikimedia_projects = dedup_ids(wikimedia_projects);
    }
    profile.validate()?;
    check_profile_references(repo, &profile)?;
    log::debug!("Updating profile of account {}", profile.account);
    repo.update_profile(&profile)?;
    Ok(profile)
}

fn check_profile_references<R>(repo: &R, profile: &Profile) -> Result<()>
where
    R: SkillRepo + TerritoryRepo + OrganizationRepo + LanguageRepo + WikimediaProjectRepo,
{
    // Available skills are a subset of the known ones.
    let ProfileSkills { known, wanted, .. } = &profile.skills;
    for skills in [known, wanted] {
        check_references(
            skills,
            |id| repo.get_skill(id).map(|_| ()),
            Error::UnknownSkill,
        )?;
    }
    check_references(
        &profile.territories,
        |id| repo.get_territory(id).map(|_| ()),
        Error::UnknownTerritory,
    )?;
    check_references(
        &profile.affiliations,
        |id| repo.get_org(id).map(|_| ()),
        Error::UnknownOrganization,
    )?;
    check_references(
        &profile.languages,
        |id| repo.get_language(id).map(|_| ()),
        Error::UnknownLanguage,
    )?;
    check_references(
        &profile.wikimedia_projects,
        |id| repo.get_wikimedia_project(id).map(|_| ()),
        Error::UnknownWikimediaProject,
    )
}

/// Deletes the profile together with the owning account.
pub fn delete_profile<R>(repo: &R, actor: &Actor, account: &Id) -> Result<()>
where
    R: AccountRepo + ProfileRepo,
{
    repo.get_profile(account)?;
    authorize(actor, ProfileAction::Delete { owner: account })?;
    log::debug!("Deleting account {}", account);
    repo.delete_account(account)?;
    Ok(())
}

pub fn get_profile<R: ProfileRepo>(repo: &R, account: &Id) -> Result<Profile> {
    Ok(repo.get_profile(account)?)
}

pub fn all_profiles<R: ProfileRepo>(repo: &R) -> Result<Vec<Profile>> {
    Ok(repo.all_profiles()?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{languages::*, skills::*, tests::*, wikimedia_projects::*},
        *,
    };
    use crate::{authorization::Denial, repositories::Error as RepoError};

    struct Fixture {
        db: MockDb,
        owner: Actor,
        rust: Id,
        python: Id,
    }

    impl Fixture {
        fn new() -> Self {
            let db = MockDb::default();
            let owner = add_account(&db, "owner", false);
            let staff = add_account(&db, "staff", true);
            let mut ids = vec![];
            for name in ["Rust", "Python"] {
                let new = NewSkill {
                    name: name.into(),
                    description: None,
                    wikidata_item: None,
                    supertypes: vec![],
                };
                ids.push(create_skill(&db, &staff, new).unwrap().id);
            }
            let python = ids.pop().unwrap();
            let rust = ids.pop().unwrap();
            Self {
                db,
                owner,
                rust,
                python,
            }
        }

        fn update_skills(&self, skills: SkillSetsUpdate) -> Result<Profile> {
            let update = ProfileUpdate {
                skills,
                ..Default::default()
            };
            update_profile(&self.db, &self.owner, &self.owner.account, update)
        }
    }

    #[test]
    fn available_skills_must_be_known() {
        let f = Fixture::new();
        let skills = SkillSetsUpdate {
            available: Some(vec![f.rust.clone()]),
            ..Default::default()
        };
        assert!(matches!(
            f.update_skills(skills),
            Err(Error::SkillSetConflict(_))
        ));
        let skills = SkillSetsUpdate {
            known: Some(vec![f.rust.clone(), f.python.clone()]),
            available: Some(vec![f.rust.clone()]),
            ..Default::default()
        };
        assert!(f.update_skills(skills).is_ok());
        // Persisted known skills are considered when omitted.
        let skills = SkillSetsUpdate {
            available: Some(vec![f.python.clone()]),
            ..Default::default()
        };
        let profile = f.update_skills(skills).unwrap();
        assert_eq!(vec![f.python.clone()], profile.skills.available);
        // Shrinking the known skills must not orphan available ones.
        let skills = SkillSetsUpdate {
            known: Some(vec![f.rust.clone()]),
            ..Default::default()
        };
        assert!(matches!(
            f.update_skills(skills),
            Err(Error::SkillSetConflict(_))
        ));
    }

    #[test]
    fn unknown_skills_are_rejected() {
        let f = Fixture::new();
        let skills = SkillSetsUpdate {
            wanted: Some(vec![Id::new()]),
            ..Default::default()
        };
        assert!(matches!(
            f.update_skills(skills),
            Err(Error::UnknownSkill(_))
        ));
    }

    #[test]
    fn update_text_fields() {
        let f = Fixture::new();
        let update = ProfileUpdate {
            display_name: Some(" Alice ".into()),
            pronoun: Some(Pronoun::SheHer),
            social: Some(vec!["https://example.org/alice".into(), "".into()]),
            ..Default::default()
        };
        let profile = update_profile(&f.db, &f.owner, &f.owner.account, update).unwrap();
        assert_eq!(Some("Alice"), profile.display_name.as_deref());
        assert_eq!(Some(Pronoun::SheHer), profile.pronoun);
        assert_eq!(1, profile.social.len());
        let update = ProfileUpdate {
            display_name: Some(String::new()),
            ..Default::default()
        };
        let profile = update_profile(&f.db, &f.owner, &f.owner.account, update).unwrap();
        assert!(profile.display_name.is_none());
        assert_eq!(Some(Pronoun::SheHer), profile.pronoun);
    }

    #[test]
    fn update_languages_and_wikimedia_projects() {
        let f = Fixture::new();
        let staff = add_account(&f.db, "linguist", true);
        let german = NewLanguage {
            name: "German".into(),
            autonym: Some("Deutsch".into()),
            code: "de".into(),
        };
        let german = create_language(&f.db, &staff, german).unwrap();
        let commons = NewWikimediaProject {
            name: "Wikimedia Commons".into(),
            code: "commons".into(),
        };
        let commons = create_wikimedia_project(&f.db, &staff, commons).unwrap();
        let update = ProfileUpdate {
            languages: Some(vec![german.id.clone(), german.id.clone()]),
            wikimedia_projects: Some(vec![commons.id.clone()]),
            ..Default::default()
        };
        let profile = update_profile(&f.db, &f.owner, &f.owner.account, update).unwrap();
        assert_eq!(vec![german.id.clone()], profile.languages);
        assert_eq!(vec![commons.id.clone()], profile.wikimedia_projects);
        let unknown = Id::new();
        let update = ProfileUpdate {
            languages: Some(vec![german.id.clone(), unknown.clone()]),
            ..Default::default()
        };
        assert!(matches!(
            update_profile(&f.db, &f.owner, &f.owner.account, update),
            Err(Error::UnknownLanguage(id)) if id == unknown
        ));
        let update = ProfileUpdate {
            wikimedia_projects: Some(vec![unknown.clone()]),
            ..Default::default()
        };
        assert!(matches!(
            update_profile(&f.db, &f.owner, &f.owner.account, update),
            Err(Error::UnknownWikimediaProject(_))
        ));
        let profile = get_profile(&f.db, &f.owner.account).unwrap();
        assert_eq!(vec![german.id], profile.languages);
        assert_eq!(vec![commons.id], profile.wikimedia_projects);
    }

    #[test]
    fn only_owner_updates_and_deletes() {
        let f = Fixture::new();
        let other = add_account(&f.db, "other", false);
        assert!(matches!(
            update_profile(&f.db, &other, &f.owner.account, Default::default()),
            Err(Error::Forbidden(Denial::ProfileOwner))
        ));
        assert!(matches!(
            delete_profile(&f.db, &other, &f.owner.account),
            Err(Error::Forbidden(Denial::ProfileOwner))
        ));
        assert!(delete_profile(&f.db, &f.owner, &f.owner.account).is_ok());
        assert!(matches!(
            f.db.get_account(&f.owner.account),
            Err(RepoError::NotFound)
        ));
        assert!(matches!(
            get_profile(&f.db, &f.owner.account),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn deleting_the_creator_keeps_the_event() {
        use super::super::events::create_event;
        let f = Fixture::new();
        let event = create_event(&f.db, &f.owner, new_event("Wikimania")).unwrap();
        delete_profile(&f.db, &f.owner, &f.owner.account).unwrap();
        let event = f.db.get_event(&event.id).unwrap();
        assert!(event.creator.is_none());
        assert!(f.db.participations_of_event(&event.id).unwrap().is_empty());
    }
}
