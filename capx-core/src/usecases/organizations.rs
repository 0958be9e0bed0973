use super::{check_references, dedup_ids, parse_optional_url, prelude::*};
use crate::{
    authorization::{
        organization::{authorize, is_visible, OrganizationAction},
        Actor,
    },
    repositories::Error as RepoError,
    util::{
        diff::Diff,
        parse::trimmed_or_none,
        validate::Validate,
    },
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewOrganization {
    pub display_name  : String,
    pub acronym       : Option<String>,
    pub profile_image : Option<String>,
    pub home_project  : Option<String>,
    pub contact       : Option<String>,
    pub social_media  : Option<String>,
    pub territories   : Vec<Id>,
    pub managers      : Vec<Id>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct OrganizationUpdate {
    pub display_name  : Option<String>,
    pub acronym       : Option<String>,
    pub profile_image : Option<String>,
    pub home_project  : Option<String>,
    pub contact       : Option<String>,
    pub social_media  : Option<String>,
    pub territories   : Option<Vec<Id>>,
    pub managers      : Option<Vec<Id>>,
}

fn check_org_references<R>(repo: &R, org: &Organization) -> Result<()>
where
    R: AccountRepo + TerritoryRepo,
{
    check_references(
        &org.territories,
        |id| repo.get_territory(id).map(|_| ()),
        Error::UnknownTerritory,
    )?;
    check_references(
        &org.managers,
        |id| repo.get_account(id).map(|_| ()),
        Error::UnknownAccount,
    )
}

pub fn create_org<R>(repo: &R, actor: &Actor, new_org: NewOrganization) -> Result<Organization>
where
    R: OrganizationRepo + AccountRepo + TerritoryRepo,
{
    authorize(actor, OrganizationAction::Create)?;
    let NewOrganization {
        display_name,
        acronym,
        profile_image,
        home_project,
        contact,
        social_media,
        territories,
        managers,
    } = new_org;
    let org = Organization {
        id: Id::new(),
        display_name: display_name.trim().to_owned(),
        acronym: trimmed_or_none(acronym),
        profile_image: parse_optional_url(profile_image)?,
        home_project: parse_optional_url(home_project)?,
        contact: trimmed_or_none(contact),
        social_media: parse_optional_url(social_media)?,
        territories: dedup_ids(territories),
        managers: dedup_ids(managers),
        created_at: TimestampMs::now(),
    };
    org.validate()?;
    check_org_references(repo, &org)?;
    log::debug!("Creating new organization: id = {}", org.id);
    repo.create_org(&org)?;
    Ok(org)
}

pub fn update_org<R>(
    repo: &R,
    actor: &Actor,
    id: &Id,
    update: OrganizationUpdate,
) -> Result<Organization>
where
    R: OrganizationRepo + AccountRepo + TerritoryRepo,
{
    let current = get_org(repo, actor, id)?;
    let OrganizationUpdate {
        display_name,
        acronym,
        profile_image,
        home_project,
        contact,
        social_media,
        territories,
        managers,
    } = update;
    let mut proposed = current.clone();
    if let Some(display_name) = display_name {
        proposed.display_name = display_name.trim().to_owned();
    }
    if acronym.is_some() {
        proposed.acronym = trimmed_or_none(acronym);
    }
    if profile_image.is_some() {
        proposed.profile_image = parse_optional_url(profile_image)?;
    }
    if home_project.is_some() {
        proposed.home_project = parse_optional_url(home_project)?;
    }
    if contact.is_some() {
        proposed.contact = trimmed_or_none(contact);
    }
    if social_media.is_some() {
        proposed.social_media = parse_optional_url(social_media)?;
    }
    if let Some(territories) = territories {
        proposed.territories = dedup_ids(territories);
    }
    if let Some(managers) = managers {
        proposed.managers = dedup_ids(managers);
    }
    let changes = current.changed_fields(&proposed);
    authorize(
        actor,
        OrganizationAction::Update {
            current: &current,
            changes: &changes,
        },
    )?;
    if changes.is_empty() {
        return Ok(current);
    }
    proposed.validate()?;
    check_org_references(repo, &proposed)?;
    log::debug!("Updating organization {}: {}", proposed.id, changes);
    repo.update_org(&proposed)?;
    Ok(proposed)
}

pub fn delete_org<R: OrganizationRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<()> {
    get_org(repo, actor, id)?;
    authorize(actor, OrganizationAction::Delete)?;
    repo.delete_org(id)?;
    Ok(())
}

/// Organizations without managers do not exist for non-staff actors.
pub fn get_org<R: OrganizationRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<Organization> {
    let org = repo.get_org(id)?;
    if !is_visible(actor, &org) {
        return Err(RepoError::NotFound.into());
    }
    Ok(org)
}

pub fn list_orgs<R: OrganizationRepo>(repo: &R, actor: &Actor) -> Result<Vec<Organization>> {
    let mut orgs = repo.all_orgs()?;
    orgs.retain(|org| is_visible(actor, org));
    Ok(orgs)
}
