use std::collections::BTreeSet;

use super::*;

/// Accounts with edit rights on an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTeam {
    creator: Option<Id>,
    members: BTreeSet<Id>,
}

impl EventTeam {
    /// Organizers and committee members of the event, independent
    /// of their confirmation state.
    pub fn new(event: &Event, participations: &[Participation]) -> Self {
        let members = participations
            .iter()
            .filter(|p| p.event == event.id && p.role.is_team())
            .map(|p| p.participant.clone())
            .collect();
        Self {
            creator: event.creator.clone(),
            members,
        }
    }

    pub fn creator(&self) -> Option<&Id> {
        self.creator.as_ref()
    }

    pub fn is_creator(&self, account: &Id) -> bool {
        self.creator.as_ref() == Some(account)
    }

    pub fn is_member(&self, account: &Id) -> bool {
        self.members.contains(account)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventAction<'a> {
    Create,
    Update { team: &'a EventTeam },
    Delete,
}

pub fn authorize(actor: &Actor, action: EventAction<'_>) -> Decision {
    match action {
        EventAction::Create => Ok(()),
        EventAction::Update { team } => allow_if(
            actor.is_staff || team.is_member(&actor.account),
            Denial::EditEvent,
        ),
        EventAction::Delete => staff_only(actor, Denial::DeleteEvent),
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use capx_entities::builders::*;

    fn participation(event: &Event, account: &Id, role: ParticipantRole) -> Participation {
        Participation {
            id: Id::new(),
            event: event.id.clone(),
            participant: account.clone(),
            role,
            confirmed_organizer: false,
            confirmed_participant: false,
            created_at: TimestampMs::now(),
            updated_at: TimestampMs::now(),
        }
    }

    #[test]
    fn team_consists_of_organizers_and_committee() {
        let organizer = Id::new();
        let committee = Id::new();
        let volunteer = Id::new();
        let event = Event::build().creator(Some(&organizer)).finish();
        let other_event = Event::build().finish();
        let participations = vec![
            participation(&event, &organizer, ParticipantRole::Organizer),
            participation(&event, &committee, ParticipantRole::Committee),
            participation(&event, &volunteer, ParticipantRole::Volunteer),
            participation(&other_event, &volunteer, ParticipantRole::Organizer),
        ];
        let team = EventTeam::new(&event, &participations);
        assert!(team.is_member(&organizer));
        assert!(team.is_member(&committee));
        assert!(!team.is_member(&volunteer));
        assert!(team.is_creator(&organizer));
        assert!(!team.is_creator(&committee));
    }

    #[test]
    fn anybody_can_create_events() {
        assert!(authorize(&user(), EventAction::Create).is_ok());
    }

    #[test]
    fn only_team_or_staff_can_update() {
        let actor = user();
        let event = Event::build().finish();
        let mut participations = vec![participation(
            &event,
            &actor.account,
            ParticipantRole::Volunteer,
        )];
        let team = EventTeam::new(&event, &participations);
        assert_eq!(
            Err(Denial::EditEvent),
            authorize(&actor, EventAction::Update { team: &team })
        );
        assert!(authorize(&staff(), EventAction::Update { team: &team }).is_ok());

        participations[0].role = ParticipantRole::Committee;
        let team = EventTeam::new(&event, &participations);
        assert!(authorize(&actor, EventAction::Update { team: &team }).is_ok());
    }

    #[test]
    fn only_staff_can_delete() {
        assert_eq!(
            Err(Denial::DeleteEvent),
            authorize(&user(), EventAction::Delete)
        );
        assert!(authorize(&staff(), EventAction::Delete).is_ok());
    }
}
