use super::{event::EventTeam, *};
use crate::util::diff::{ChangedFields, ParticipationField};

#[derive(Debug, Clone, Copy)]
pub enum ParticipationAction<'a> {
    Create {
        team: &'a EventTeam,
    },
    Update {
        team: &'a EventTeam,
        current: &'a Participation,
        proposed: &'a Participation,
        changes: &'a ChangedFields<ParticipationField>,
    },
    Delete,
}

pub fn authorize(actor: &Actor, action: ParticipationAction<'_>) -> Decision {
    match action {
        ParticipationAction::Create { team } => allow_if(
            actor.is_staff || team.is_member(&actor.account),
            Denial::CreateParticipant,
        ),
        ParticipationAction::Update {
            team,
            current,
            proposed,
            changes,
        } => authorize_update(actor, team, current, proposed, changes),
        ParticipationAction::Delete => staff_only(actor, Denial::DeleteParticipant),
    }
}

fn authorize_update(
    actor: &Actor,
    team: &EventTeam,
    current: &Participation,
    proposed: &Participation,
    changes: &ChangedFields<ParticipationField>,
) -> Decision {
    use ParticipationField as F;
    if actor.is_staff {
        return Ok(());
    }
    let is_participant = actor.is(&current.participant);
    if !team.is_member(&actor.account) {
        // Outside of the team only the participant may confirm or
        // unconfirm the own record, nothing else.
        allow_if(
            is_participant && changes.is_subset_of(&[F::ConfirmedParticipant]),
            Denial::EditParticipants,
        )?;
    }
    if changes.contains(F::Event) || changes.contains(F::Participant) {
        return Err(Denial::ReassignParticipant);
    }
    if changes.contains(F::ConfirmedOrganizer)
        && !proposed.confirmed_organizer
        && team.is_creator(&current.participant)
    {
        return Err(Denial::UnconfirmCreator);
    }
    if changes.contains(F::ConfirmedParticipant) && !is_participant {
        return Err(Denial::ConfirmOtherParticipant);
    }
    Ok(())
}

/// Confirmed records are public. Unconfirmed records are only visible
/// to staff, the participant and the team of the event.
pub fn is_visible(actor: &Actor, team: &EventTeam, participation: &Participation) -> bool {
    actor.is_staff
        || participation.is_confirmed()
        || actor.is(&participation.participant)
        || team.is_member(&actor.account)
}
