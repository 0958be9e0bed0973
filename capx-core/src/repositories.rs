// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AccountRepo {
    fn create_account(&self, account: &Account) -> Result<()>;
    fn update_account(&self, account: &Account) -> Result<()>;
    // Deletes the profile and all participations of the account.
    // Events created by the account lose their creator.
    fn delete_account(&self, id: &Id) -> Result<()>;

    fn get_account(&self, id: &Id) -> Result<Account>;
    fn try_get_account_by_username(&self, username: &str) -> Result<Option<Account>>;
    fn all_accounts(&self) -> Result<Vec<Account>>;
}

pub trait ProfileRepo {
    fn create_profile(&self, profile: &Profile) -> Result<()>;
    fn update_profile(&self, profile: &Profile) -> Result<()>;

    fn get_profile(&self, account: &Id) -> Result<Profile>;
    fn all_profiles(&self) -> Result<Vec<Profile>>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &Id) -> Result<()>;

    fn get_event(&self, id: &Id) -> Result<Event>;
    // Ordered by begin
    fn all_events_chronologically(&self) -> Result<Vec<Event>>;
}

pub trait ParticipationRepo {
    fn create_participation(&self, participation: &Participation) -> Result<()>;
    fn update_participation(&self, participation: &Participation) -> Result<()>;
    fn delete_participation(&self, id: &Id) -> Result<()>;

    fn get_participation(&self, id: &Id) -> Result<Participation>;
    fn participations_of_event(&self, event: &Id) -> Result<Vec<Participation>>;
    fn all_participations(&self) -> Result<Vec<Participation>>;
}

pub trait OrgParticipationRepo {
    fn create_org_participation(&self, participation: &OrgParticipation) -> Result<()>;
    fn update_org_participation(&self, participation: &OrgParticipation) -> Result<()>;
    fn delete_org_participation(&self, id: &Id) -> Result<()>;

    fn get_org_participation(&self, id: &Id) -> Result<OrgParticipation>;
    fn org_participations_of_event(&self, event: &Id) -> Result<Vec<OrgParticipation>>;
    fn all_org_participations(&self) -> Result<Vec<OrgParticipation>>;
}

pub trait SkillRepo {
    fn create_skill(&self, skill: &Skill) -> Result<()>;
    fn update_skill(&self, skill: &Skill) -> Result<()>;
    fn delete_skill(&self, id: &Id) -> Result<()>;

    fn get_skill(&self, id: &Id) -> Result<Skill>;
    fn all_skills(&self) -> Result<Vec<Skill>>;
    // Ids of all skills that refer to the given skill as a supertype.
    fn subtypes_of_skill(&self, id: &Id) -> Result<Vec<Id>>;
    // The given skills together with all their transitive supertypes.
    // Unknown ids are skipped.
    fn ancestors_of_skills(&self, ids: &[Id]) -> Result<Vec<Skill>>;
}

pub trait OrganizationRepo {
    fn create_org(&self, org: &Organization) -> Result<()>;
    fn update_org(&self, org: &Organization) -> Result<()>;
    fn delete_org(&self, id: &Id) -> Result<()>;

    fn get_org(&self, id: &Id) -> Result<Organization>;
    fn all_orgs(&self) -> Result<Vec<Organization>>;
}

pub trait TerritoryRepo {
    fn create_territory(&self, territory: &Territory) -> Result<()>;

    fn get_territory(&self, id: &Id) -> Result<Territory>;
    fn all_territories(&self) -> Result<Vec<Territory>>;
}

pub trait LanguageRepo {
    fn create_language(&self, language: &Language) -> Result<()>;

    fn get_language(&self, id: &Id) -> Result<Language>;
    fn all_languages(&self) -> Result<Vec<Language>>;
}

pub trait WikimediaProjectRepo {
    fn create_wikimedia_project(&self, project: &WikimediaProject) -> Result<()>;

    fn get_wikimedia_project(&self, id: &Id) -> Result<WikimediaProject>;
    fn all_wikimedia_projects(&self) -> Result<Vec<WikimediaProject>>;
}

pub trait BugRepo {
    fn create_bug(&self, bug: &Bug) -> Result<()>;
    fn update_bug(&self, bug: &Bug) -> Result<()>;
    fn delete_bug(&self, id: &Id) -> Result<()>;

    fn get_bug(&self, id: &Id) -> Result<Bug>;
    fn all_bugs(&self) -> Result<Vec<Bug>>;
    fn bugs_by_author(&self, author: &Id) -> Result<Vec<Bug>>;
}

pub trait AttachmentRepo {
    fn create_attachment(&self, attachment: &Attachment, content: &AttachmentContent) -> Result<()>;
    fn delete_attachment(&self, id: &Id) -> Result<()>;

    fn get_attachment(&self, id: &Id) -> Result<Attachment>;
    fn load_attachment_content(&self, id: &Id) -> Result<AttachmentContent>;
    fn attachments_of_bug(&self, bug: &Id) -> Result<Vec<Attachment>>;
    fn count_attachments_of_bug(&self, bug: &Id) -> Result<usize>;
}
