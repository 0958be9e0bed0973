use crate::{
    authorization::Denial,
    repositories,
    taxonomy::{GraphError, SkillSetConflict},
    util::validate::{
        BugInvalidation, EventInvalidation, CatalogInvalidation, OrganizationInvalidation,
        ProfileInvalidation, SkillInvalidation,
    },
};
use capx_entities::id::Id;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid name")]
    Name,
    #[error("Invalid title")]
    Title,
    #[error("The description is too long")]
    Description,
    #[error("Invalid display name")]
    DisplayName,
    #[error("The text about yourself is too long")]
    About,
    #[error("Invalid acronym")]
    Acronym,
    #[error("Invalid autonym")]
    Autonym,
    #[error("Invalid code")]
    Code,
    #[error("Invalid Wikidata identifier")]
    WikidataQid,
    #[error("Invalid OpenStreetMap URL")]
    OpenStreetMapUrl,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid username")]
    Username,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(#[from] Denial),
    #[error("Unknown skill {0}")]
    UnknownSkill(Id),
    #[error("Unknown account {0}")]
    UnknownAccount(Id),
    #[error("Unknown organization {0}")]
    UnknownOrganization(Id),
    #[error("Unknown territory {0}")]
    UnknownTerritory(Id),
    #[error("Unknown language {0}")]
    UnknownLanguage(Id),
    #[error("Unknown Wikimedia project {0}")]
    UnknownWikimediaProject(Id),
    #[error("Unknown event {0}")]
    UnknownEvent(Id),
    #[error("A skill cannot be a subtype of itself")]
    SkillCycle,
    #[error(transparent)]
    SkillSetConflict(#[from] SkillSetConflict),
    #[error("Cannot add more than 3 attachments per bug.")]
    TooManyAttachments,
    #[error("File size exceeds the limit of 1 MB.")]
    AttachmentTooLarge,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<capx_entities::password::ParseError> for Error {
    fn from(_: capx_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<capx_entities::url::ParseError> for Error {
    fn from(_: capx_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Name => Self::Name,
            EventInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
            EventInvalidation::WikidataQid => Self::WikidataQid,
            EventInvalidation::OpenStreetMapUrl => Self::OpenStreetMapUrl,
        }
    }
}

impl From<SkillInvalidation> for Error {
    fn from(err: SkillInvalidation) -> Self {
        match err {
            SkillInvalidation::Name => Self::Name,
            SkillInvalidation::Description => Self::Description,
            SkillInvalidation::WikidataItem => Self::WikidataQid,
        }
    }
}

impl From<OrganizationInvalidation> for Error {
    fn from(err: OrganizationInvalidation) -> Self {
        match err {
            OrganizationInvalidation::DisplayName => Self::DisplayName,
            OrganizationInvalidation::Acronym => Self::Acronym,
        }
    }
}

impl From<ProfileInvalidation> for Error {
    fn from(err: ProfileInvalidation) -> Self {
        match err {
            ProfileInvalidation::DisplayName => Self::DisplayName,
            ProfileInvalidation::About => Self::About,
            ProfileInvalidation::WikidataQid => Self::WikidataQid,
        }
    }
}

impl From<CatalogInvalidation> for Error {
    fn from(err: CatalogInvalidation) -> Self {
        match err {
            CatalogInvalidation::Name => Self::Name,
            CatalogInvalidation::Autonym => Self::Autonym,
            CatalogInvalidation::Code => Self::Code,
        }
    }
}

impl From<BugInvalidation> for Error {
    fn from(err: BugInvalidation) -> Self {
        match err {
            BugInvalidation::Title => Self::Title,
            BugInvalidation::Description => Self::Description,
        }
    }
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownSkill(id) => Self::UnknownSkill(id),
            GraphError::Cycle => Self::SkillCycle,
        }
    }
}
