use crate::repositories::*;

/// All repositories combined.
pub trait Db:
    AccountRepo
    + ProfileRepo
    + EventRepo
    + ParticipationRepo
    + OrgParticipationRepo
    + SkillRepo
    + OrganizationRepo
    + TerritoryRepo
    + LanguageRepo
    + WikimediaProjectRepo
    + BugRepo
    + AttachmentRepo
{
}

impl<T> Db for T where
    T: AccountRepo
        + ProfileRepo
        + EventRepo
        + ParticipationRepo
        + OrgParticipationRepo
        + SkillRepo
        + OrganizationRepo
        + TerritoryRepo
        + LanguageRepo
        + WikimediaProjectRepo
        + BugRepo
        + AttachmentRepo
{
}
