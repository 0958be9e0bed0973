use super::{event::EventTeam, *};
use crate::util::diff::{ChangedFields, OrgParticipationField};

#[derive(Debug, Clone, Copy)]
pub enum OrgParticipationAction<'a> {
    Create {
        team: &'a EventTeam,
    },
    Update {
        team: &'a EventTeam,
        organization: &'a Organization,
        changes: &'a ChangedFields<OrgParticipationField>,
    },
    Delete {
        team: &'a EventTeam,
        organization: &'a Organization,
    },
}

pub fn authorize(actor: &Actor, action: OrgParticipationAction<'_>) -> Decision {
    use OrgParticipationField as F;
    if actor.is_staff {
        return Ok(());
    }
    match action {
        OrgParticipationAction::Create { team } => allow_if(
            team.is_member(&actor.account),
            Denial::CreateOrgParticipation,
        ),
        OrgParticipationAction::Update {
            team,
            organization,
            changes,
        } => {
            let is_team = team.is_member(&actor.account);
            let is_manager = organization.is_managed_by(&actor.account);
            allow_if(is_team || is_manager, Denial::EditOrgParticipations)?;
            if changes.contains(F::Event) || changes.contains(F::Organization) {
                return Err(Denial::ReassignOrganization);
            }
            if changes.contains(F::ConfirmedOrganization) && !is_manager {
                return Err(Denial::ConfirmOrganization);
            }
            // Everything except the organization side belongs to the event.
            allow_if(
                is_team || changes.is_subset_of(&[F::ConfirmedOrganization]),
                Denial::EditOrgParticipations,
            )
        }
        OrgParticipationAction::Delete { team, organization } => allow_if(
            team.is_member(&actor.account) || organization.is_managed_by(&actor.account),
            Denial::DeleteOrgParticipation,
        ),
    }
}

/// Confirmed records are public. Unconfirmed records are only visible
/// to staff, the team of the event and the managers of the organization.
pub fn is_visible(
    actor: &Actor,
    team: &EventTeam,
    organization: &Organization,
    participation: &OrgParticipation,
) -> bool {
    actor.is_staff
        || participation.is_confirmed()
        || team.is_member(&actor.account)
        || organization.is_managed_by(&actor.account)
}
