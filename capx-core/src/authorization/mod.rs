//! Access policy evaluator.
//!
//! Every resource type has a single `authorize` function that takes the
//! acting account, the intended action and the persisted state the action
//! applies to. The caller is responsible for loading that state.

use thiserror::Error;

use crate::entities::*;

pub mod bug;
pub mod event;
pub mod language;
pub mod org_participation;
pub mod organization;
pub mod participation;
pub mod profile;
pub mod skill;
pub mod territory;
pub mod wikimedia_project;

/// The authenticated account on whose behalf an action is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub account: Id,
    pub is_staff: bool,
}

impl Actor {
    pub fn is(&self, account: &Id) -> bool {
        &self.account == account
    }
}

impl From<&Account> for Actor {
    fn from(from: &Account) -> Self {
        Self {
            account: from.id.clone(),
            is_staff: from.is_staff,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("You do not have permission to perform this action.")]
    StaffOnly,
    #[error("Only the organizer or staff can edit this event")]
    EditEvent,
    #[error("Only staff can delete an event")]
    DeleteEvent,
    #[error("Only the organizer, committee or staff can create a participant")]
    CreateParticipant,
    #[error("Only the organizer, committee or staff can edit participants")]
    EditParticipants,
    #[error("The creator of the event cannot be unconfirmed")]
    UnconfirmCreator,
    #[error("Only the participant can confirm or unconfirm themselves")]
    ConfirmOtherParticipant,
    #[error("Only staff can move a participant to another event or account")]
    ReassignParticipant,
    #[error("Only staff can delete a participant")]
    DeleteParticipant,
    #[error("Only the organizer, committee or staff can add an organization")]
    CreateOrgParticipation,
    #[error("Only the organizer, committee or staff can edit organizations of this event")]
    EditOrgParticipations,
    #[error("Only a manager of the organization can confirm or unconfirm it")]
    ConfirmOrganization,
    #[error("Only staff can move an organization to another event")]
    ReassignOrganization,
    #[error("Only the organizer, committee, a manager of the organization or staff can remove it")]
    DeleteOrgParticipation,
    #[error("This skill is referenced by other items and cannot be deleted.")]
    SkillReferenced,
    #[error("Only a manager of the organization or staff can edit it")]
    EditOrganization,
    #[error("Only staff can change the managers of an organization")]
    ChangeManagers,
    #[error("Only the owner can change this profile")]
    ProfileOwner,
    #[error("Only the author or staff can change this bug")]
    BugAuthor,
    #[error("Only staff can change the status of a bug")]
    BugStatus,
}

pub type Decision = Result<(), Denial>;

fn allow_if(condition: bool, denial: Denial) -> Decision {
    if condition {
        Ok(())
    } else {
        Err(denial)
    }
}

fn staff_only(actor: &Actor, denial: Denial) -> Decision {
    allow_if(actor.is_staff, denial)
}
