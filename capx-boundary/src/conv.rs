use super::*;
use capx_entities as e;
use e::time::{Timestamp as Secs, TimestampMs};

fn secs(ts: TimestampMs) -> i64 {
    Secs::from(ts).as_secs()
}

fn ids(ids: Vec<e::id::Id>) -> Vec<String> {
    ids.into_iter().map(String::from).collect()
}

impl From<e::account::Account> for Account {
    fn from(from: e::account::Account) -> Self {
        let e::account::Account {
            id,
            username,
            email,
            password: _,
            is_staff,
            is_active,
            date_joined,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.map(e::email::EmailAddress::into_string),
            is_staff,
            is_active,
            date_joined: date_joined.as_secs(),
        }
    }
}

impl From<e::event::LocationType> for LocationType {
    fn from(from: e::event::LocationType) -> Self {
        use e::event::LocationType as E;
        match from {
            E::Virtual => Self::Virtual,
            E::InPerson => Self::InPerson,
            E::Hybrid => Self::Hybrid,
        }
    }
}

impl From<LocationType> for e::event::LocationType {
    fn from(from: LocationType) -> Self {
        match from {
            LocationType::Virtual => Self::Virtual,
            LocationType::InPerson => Self::InPerson,
            LocationType::Hybrid => Self::Hybrid,
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            name,
            location_type,
            openstreetmap_id,
            url,
            wikidata_qid,
            time_begin,
            time_end,
            creator,
            related_skills,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            type_of_location: location_type.into(),
            openstreetmap_id: openstreetmap_id.map(|url| url.to_string()),
            url: url.map(|url| url.to_string()),
            wikidata_qid,
            time_begin: time_begin.as_secs(),
            time_end: time_end.as_secs(),
            creator: creator.map(String::from),
            related_skills: ids(related_skills),
            created_at: secs(created_at),
            updated_at: secs(updated_at),
        }
    }
}

impl From<e::participation::ParticipantRole> for ParticipantRole {
    fn from(from: e::participation::ParticipantRole) -> Self {
        use e::participation::ParticipantRole as E;
        match from {
            E::Organizer => Self::Organizer,
            E::Committee => Self::Committee,
            E::Volunteer => Self::Volunteer,
        }
    }
}

impl From<ParticipantRole> for e::participation::ParticipantRole {
    fn from(from: ParticipantRole) -> Self {
        match from {
            ParticipantRole::Organizer => Self::Organizer,
            ParticipantRole::Committee => Self::Committee,
            ParticipantRole::Volunteer => Self::Volunteer,
        }
    }
}

impl From<e::participation::Participation> for Participation {
    fn from(from: e::participation::Participation) -> Self {
        let confirmed = from.is_confirmed();
        let e::participation::Participation {
            id,
            event,
            participant,
            role,
            confirmed_organizer,
            confirmed_participant,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            event: event.into(),
            participant: participant.into(),
            role: role.into(),
            confirmed_organizer,
            confirmed_participant,
            confirmed,
            created_at: secs(created_at),
            updated_at: secs(updated_at),
        }
    }
}

impl From<e::participation::OrgRole> for OrgRole {
    fn from(from: e::participation::OrgRole) -> Self {
        use e::participation::OrgRole as E;
        match from {
            E::Organizer => Self::Organizer,
            E::Sponsor => Self::Sponsor,
            E::Supporter => Self::Supporter,
        }
    }
}

impl From<OrgRole> for e::participation::OrgRole {
    fn from(from: OrgRole) -> Self {
        match from {
            OrgRole::Organizer => Self::Organizer,
            OrgRole::Sponsor => Self::Sponsor,
            OrgRole::Supporter => Self::Supporter,
        }
    }
}

impl From<e::participation::OrgParticipation> for OrgParticipation {
    fn from(from: e::participation::OrgParticipation) -> Self {
        let confirmed = from.is_confirmed();
        let e::participation::OrgParticipation {
            id,
            event,
            organization,
            role,
            confirmed_organizer,
            confirmed_organization,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            event: event.into(),
            organization: organization.into(),
            role: role.into(),
            confirmed_organizer,
            confirmed_organization,
            confirmed,
            created_at: secs(created_at),
            updated_at: secs(updated_at),
        }
    }
}

impl From<e::skill::Skill> for Skill {
    fn from(from: e::skill::Skill) -> Self {
        let e::skill::Skill {
            id,
            name,
            description,
            wikidata_item,
            supertypes,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            wikidata_item,
            supertypes: ids(supertypes),
            created_at: secs(created_at),
        }
    }
}

impl From<e::territory::Territory> for Territory {
    fn from(from: e::territory::Territory) -> Self {
        let e::territory::Territory { id, name, parents } = from;
        Self {
            id: id.into(),
            name,
            parents: ids(parents),
        }
    }
}

impl From<e::language::Language> for Language {
    fn from(from: e::language::Language) -> Self {
        let e::language::Language {
            id,
            name,
            autonym,
            code,
        } = from;
        Self {
            id: id.into(),
            name,
            autonym,
            code,
        }
    }
}

impl From<e::language::WikimediaProject> for WikimediaProject {
    fn from(from: e::language::WikimediaProject) -> Self {
        let e::language::WikimediaProject { id, name, code } = from;
        Self {
            id: id.into(),
            name,
            code,
        }
    }
}

impl From<e::organization::Organization> for Organization {
    fn from(from: e::organization::Organization) -> Self {
        let e::organization::Organization {
            id,
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories,
            managers,
            created_at,
        } = from;
        Self {
            id: id.into(),
            display_name,
            acronym,
            profile_image: profile_image.map(|url| url.to_string()),
            home_project: home_project.map(|url| url.to_string()),
            contact,
            social_media: social_media.map(|url| url.to_string()),
            territories: ids(territories),
            managers: ids(managers),
            created_at: secs(created_at),
        }
    }
}

impl From<e::profile::Pronoun> for Pronoun {
    fn from(from: e::profile::Pronoun) -> Self {
        use e::profile::Pronoun as E;
        match from {
            E::HeHim => Self::HeHim,
            E::SheHer => Self::SheHer,
            E::TheyThem => Self::TheyThem,
            E::NotSpecified => Self::NotSpecified,
            E::Other => Self::Other,
        }
    }
}

impl From<Pronoun> for e::profile::Pronoun {
    fn from(from: Pronoun) -> Self {
        match from {
            Pronoun::HeHim => Self::HeHim,
            Pronoun::SheHer => Self::SheHer,
            Pronoun::TheyThem => Self::TheyThem,
            Pronoun::NotSpecified => Self::NotSpecified,
            Pronoun::Other => Self::Other,
        }
    }
}

impl From<e::profile::Profile> for Profile {
    fn from(from: e::profile::Profile) -> Self {
        let e::profile::Profile {
            account,
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
        } = from;
        Self {
            account: account.into(),
            display_name,
            pronoun: pronoun.map(Into::into),
            about,
            profile_image: profile_image.map(|url| url.to_string()),
            wikidata_qid,
            wiki_alt,
            team,
            contact,
            social: social.into_iter().map(|url| url.to_string()).collect(),
            territories: ids(territories),
            affiliations: ids(affiliations),
            languages: ids(languages),
            wikimedia_projects: ids(wikimedia_projects),
            skills_known: ids(skills.known),
            skills_available: ids(skills.available),
            skills_wanted: ids(skills.wanted),
        }
    }
}

impl From<e::bug::BugType> for BugType {
    fn from(from: e::bug::BugType) -> Self {
        use e::bug::BugType as E;
        match from {
            E::Error => Self::Error,
            E::NewFeature => Self::NewFeature,
            E::Improvement => Self::Improvement,
            E::TestCase => Self::TestCase,
        }
    }
}

impl From<BugType> for e::bug::BugType {
    fn from(from: BugType) -> Self {
        match from {
            BugType::Error => Self::Error,
            BugType::NewFeature => Self::NewFeature,
            BugType::Improvement => Self::Improvement,
            BugType::TestCase => Self::TestCase,
        }
    }
}

impl From<e::bug::BugStatus> for BugStatus {
    fn from(from: e::bug::BugStatus) -> Self {
        use e::bug::BugStatus as E;
        match from {
            E::ToDo => Self::ToDo,
            E::Assigned => Self::Assigned,
            E::InProgress => Self::InProgress,
            E::UnderReview => Self::UnderReview,
            E::Done => Self::Done,
        }
    }
}

impl From<BugStatus> for e::bug::BugStatus {
    fn from(from: BugStatus) -> Self {
        match from {
            BugStatus::ToDo => Self::ToDo,
            BugStatus::Assigned => Self::Assigned,
            BugStatus::InProgress => Self::InProgress,
            BugStatus::UnderReview => Self::UnderReview,
            BugStatus::Done => Self::Done,
        }
    }
}

impl From<e::bug::Bug> for Bug {
    fn from(from: e::bug::Bug) -> Self {
        let e::bug::Bug {
            id,
            author,
            title,
            description,
            bug_type,
            status,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            author: author.into(),
            title,
            description,
            bug_type: bug_type.into(),
            status: status.into(),
            created_at: secs(created_at),
            updated_at: secs(updated_at),
        }
    }
}

impl From<e::bug::Attachment> for Attachment {
    fn from(from: e::bug::Attachment) -> Self {
        let e::bug::Attachment {
            id,
            bug,
            file_name,
            content_type,
            size,
            uploaded_at,
        } = from;
        Self {
            id: id.into(),
            bug: bug.into(),
            file_name,
            content_type,
            size,
            uploaded_at: secs(uploaded_at),
        }
    }
}
