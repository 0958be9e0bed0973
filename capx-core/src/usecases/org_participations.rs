use std::collections::HashMap;

use super::{
    events::event_team,
    participations::{referenced_event, EventTeams},
    prelude::*,
};
use crate::{
    authorization::{
        org_participation::{authorize, is_visible, OrgParticipationAction},
        Actor,
    },
    repositories::Error as RepoError,
    util::diff::Diff,
};

#[derive(Debug, Clone)]
pub struct NewOrgParticipation {
    pub event: Id,
    pub organization: Id,
    pub role: OrgRole,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct OrgParticipationUpdate {
    pub event                  : Option<Id>,
    pub organization           : Option<Id>,
    pub role                   : Option<OrgRole>,
    pub confirmed_organizer    : Option<bool>,
    pub confirmed_organization : Option<bool>,
}

fn referenced_org<R: OrganizationRepo>(repo: &R, id: &Id) -> Result<Organization> {
    repo.get_org(id).map_err(|err| match err {
        RepoError::NotFound => Error::UnknownOrganization(id.clone()),
        err => err.into(),
    })
}

/// Adds an organization to an event.
///
/// The record is confirmed by the event side and awaits
/// the confirmation of a manager of the organization.
pub fn add_org_participation<R>(
    repo: &R,
    actor: &Actor,
    new_participation: NewOrgParticipation,
) -> Result<OrgParticipation>
where
    R: EventRepo + ParticipationRepo + OrgParticipationRepo + OrganizationRepo,
{
    let NewOrgParticipation {
        event,
        organization,
        role,
    } = new_participation;
    let event = referenced_event(repo, &event)?;
    let team = event_team(repo, &event)?;
    authorize(actor, OrgParticipationAction::Create { team: &team })?;
    let organization = referenced_org(repo, &organization)?;
    let now = TimestampMs::now();
    let participation = OrgParticipation {
        id: Id::new(),
        event: event.id,
        organization: organization.id,
        role,
        confirmed_organizer: true,
        confirmed_organization: false,
        created_at: now,
        updated_at: now,
    };
    log::debug!(
        "Adding organization {} to event {}",
        participation.organization,
        participation.event
    );
    repo.create_org_participation(&participation)?;
    Ok(participation)
}

pub fn update_org_participation<R>(
    repo: &R,
    actor: &Actor,
    id: &Id,
    update: OrgParticipationUpdate,
) -> Result<OrgParticipation>
where
    R: EventRepo + ParticipationRepo + OrgParticipationRepo + OrganizationRepo,
{
    let current = repo.get_org_participation(id)?;
    let team = event_team(repo, &repo.get_event(&current.event)?)?;
    let organization = repo.get_org(&current.organization)?;
    let OrgParticipationUpdate {
        event,
        organization: proposed_organization,
        role,
        confirmed_organizer,
        confirmed_organization,
    } = update;
    let proposed = OrgParticipation {
        event: event.unwrap_or_else(|| current.event.clone()),
        organization: proposed_organization.unwrap_or_else(|| current.organization.clone()),
        role: role.unwrap_or(current.role),
        confirmed_organizer: confirmed_organizer.unwrap_or(current.confirmed_organizer),
        confirmed_organization: confirmed_organization.unwrap_or(current.confirmed_organization),
        ..current.clone()
    };
    let changes = current.changed_fields(&proposed);
    authorize(
        actor,
        OrgParticipationAction::Update {
            team: &team,
            organization: &organization,
            changes: &changes,
        },
    )?;
    if changes.is_empty() {
        return Ok(current);
    }
    if proposed.event != current.event {
        referenced_event(repo, &proposed.event)?;
    }
    if proposed.organization != current.organization {
        referenced_org(repo, &proposed.organization)?;
    }
    let participation = OrgParticipation {
        updated_at: TimestampMs::now(),
        ..proposed
    };
    log::debug!("Updating organization participation {}: {}", participation.id, changes);
    repo.update_org_participation(&participation)?;
    Ok(participation)
}

pub fn delete_org_participation<R>(repo: &R, actor: &Actor, id: &Id) -> Result<()>
where
    R: EventRepo + ParticipationRepo + OrgParticipationRepo + OrganizationRepo,
{
    let current = repo.get_org_participation(id)?;
    let team = event_team(repo, &repo.get_event(&current.event)?)?;
    let organization = repo.get_org(&current.organization)?;
    authorize(
        actor,
        OrgParticipationAction::Delete {
            team: &team,
            organization: &organization,
        },
    )?;
    repo.delete_org_participation(id)?;
    Ok(())
}

pub fn get_org_participation<R>(repo: &R, actor: &Actor, id: &Id) -> Result<OrgParticipation>
where
    R: EventRepo + ParticipationRepo + OrgParticipationRepo + OrganizationRepo,
{
    let participation = repo.get_org_participation(id)?;
    let team = event_team(repo, &repo.get_event(&participation.event)?)?;
    let organization = repo.get_org(&participation.organization)?;
    if !is_visible(actor, &team, &organization, &participation) {
        return Err(RepoError::NotFound.into());
    }
    Ok(participation)
}

pub fn list_org_participations<R>(
    repo: &R,
    actor: &Actor,
    event: Option<&Id>,
) -> Result<Vec<OrgParticipation>>
where
    R: EventRepo + ParticipationRepo + OrgParticipationRepo + OrganizationRepo,
{
    let participations = match event {
        Some(event) => {
            repo.get_event(event)?;
            repo.org_participations_of_event(event)?
        }
        None => repo.all_org_participations()?,
    };
    if actor.is_staff {
        return Ok(participations);
    }
    let orgs: HashMap<_, _> = repo
        .all_orgs()?
        .into_iter()
        .map(|org| (org.id.clone(), org))
        .collect();
    let mut teams = EventTeams::default();
    let mut visible = Vec::with_capacity(participations.len());
    for participation in participations {
        let organization = orgs
            .get(&participation.organization)
            .ok_or(RepoError::NotFound)?;
        let team = teams.get_or_load(repo, &participation.event)?;
        if is_visible(actor, team, organization, &participation) {
            visible.push(participation);
        }
    }
    Ok(visible)
}
