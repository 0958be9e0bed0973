use std::collections::HashMap;

use super::{events::event_team, prelude::*};
use crate::{
    authorization::{
        event::EventTeam,
        participation::{authorize, is_visible, ParticipationAction},
        Actor,
    },
    repositories::Error as RepoError,
    util::diff::Diff,
};

#[derive(Debug, Clone)]
pub struct NewParticipation {
    pub event: Id,
    pub participant: Id,
    pub role: ParticipantRole,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ParticipationUpdate {
    pub event                 : Option<Id>,
    pub participant           : Option<Id>,
    pub role                  : Option<ParticipantRole>,
    pub confirmed_organizer   : Option<bool>,
    pub confirmed_participant : Option<bool>,
}

pub(super) fn referenced_event<R: EventRepo>(repo: &R, id: &Id) -> Result<Event> {
    repo.get_event(id).map_err(|err| match err {
        RepoError::NotFound => Error::UnknownEvent(id.clone()),
        err => err.into(),
    })
}

fn referenced_account<R: AccountRepo>(repo: &R, id: &Id) -> Result<()> {
    match repo.get_account(id) {
        Ok(_) => Ok(()),
        Err(RepoError::NotFound) => Err(Error::UnknownAccount(id.clone())),
        Err(err) => Err(err.into()),
    }
}

/// Invites an account to an event.
///
/// The invitation is confirmed by the organizer side and
/// awaits the confirmation of the participant.
pub fn add_participation<R>(
    repo: &R,
    actor: &Actor,
    new_participation: NewParticipation,
) -> Result<Participation>
where
    R: AccountRepo + EventRepo + ParticipationRepo,
{
    let NewParticipation {
        event,
        participant,
        role,
    } = new_participation;
    let event = referenced_event(repo, &event)?;
    let team = event_team(repo, &event)?;
    authorize(actor, ParticipationAction::Create { team: &team })?;
    referenced_account(repo, &participant)?;
    let now = TimestampMs::now();
    let participation = Participation {
        id: Id::new(),
        event: event.id,
        participant,
        role,
        confirmed_organizer: true,
        confirmed_participant: false,
        created_at: now,
        updated_at: now,
    };
    log::debug!(
        "Adding participant {} to event {}",
        participation.participant,
        participation.event
    );
    repo.create_participation(&participation)?;
    Ok(participation)
}

pub fn update_participation<R>(
    repo: &R,
    actor: &Actor,
    id: &Id,
    update: ParticipationUpdate,
) -> Result<Participation>
where
    R: AccountRepo + EventRepo + ParticipationRepo,
{
    let current = repo.get_participation(id)?;
    let team = event_team(repo, &repo.get_event(&current.event)?)?;
    let ParticipationUpdate {
        event,
        participant,
        role,
        confirmed_organizer,
        confirmed_participant,
    } = update;
    let proposed = Participation {
        event: event.unwrap_or_else(|| current.event.clone()),
        participant: participant.unwrap_or_else(|| current.participant.clone()),
        role: role.unwrap_or(current.role),
        confirmed_organizer: confirmed_organizer.unwrap_or(current.confirmed_organizer),
        confirmed_participant: confirmed_participant.unwrap_or(current.confirmed_participant),
        ..current.clone()
    };
    let changes = current.changed_fields(&proposed);
    authorize(
        actor,
        ParticipationAction::Update {
            team: &team,
            current: &current,
            proposed: &proposed,
            changes: &changes,
        },
    )?;
    if changes.is_empty() {
        return Ok(current);
    }
    if proposed.event != current.event {
        referenced_event(repo, &proposed.event)?;
    }
    if proposed.participant != current.participant {
        referenced_account(repo, &proposed.participant)?;
    }
    let participation = Participation {
        updated_at: TimestampMs::now(),
        ..proposed
    };
    log::debug!("Updating participation {}: {}", participation.id, changes);
    repo.update_participation(&participation)?;
    Ok(participation)
}

pub fn delete_participation<R: ParticipationRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<()> {
    repo.get_participation(id)?;
    authorize(actor, ParticipationAction::Delete)?;
    repo.delete_participation(id)?;
    Ok(())
}

pub fn get_participation<R>(repo: &R, actor: &Actor, id: &Id) -> Result<Participation>
where
    R: EventRepo + ParticipationRepo,
{
    let participation = repo.get_participation(id)?;
    let event = repo.get_event(&participation.event)?;
    let team = event_team(repo, &event)?;
    if !is_visible(actor, &team, &participation) {
        return Err(RepoError::NotFound.into());
    }
    Ok(participation)
}

/// Lists the participation records that are visible to the actor,
/// optionally restricted to a single event.
pub fn list_participations<R>(
    repo: &R,
    actor: &Actor,
    event: Option<&Id>,
) -> Result<Vec<Participation>>
where
    R: EventRepo + ParticipationRepo,
{
    let participations = match event {
        Some(event) => {
            repo.get_event(event)?;
            repo.participations_of_event(event)?
        }
        None => repo.all_participations()?,
    };
    if actor.is_staff {
        return Ok(participations);
    }
    let mut teams = EventTeams::default();
    let mut visible = Vec::with_capacity(participations.len());
    for participation in participations {
        let team = teams.get_or_load(repo, &participation.event)?;
        if is_visible(actor, team, &participation) {
            visible.push(participation);
        }
    }
    Ok(visible)
}

/// Teams of events, loaded on demand.
#[derive(Default)]
pub(super) struct EventTeams(HashMap<Id, EventTeam>);

impl EventTeams {
    pub(super) fn get_or_load<R>(&mut self, repo: &R, event: &Id) -> Result<&EventTeam>
    where
        R: EventRepo + ParticipationRepo,
    {
        if !self.0.contains_key(event) {
            let team = event_team(repo, &repo.get_event(event)?)?;
            self.0.insert(event.clone(), team);
        }
        self.0
            .get(event)
            .ok_or_else(|| RepoError::NotFound.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{events::create_event, tests::*},
        *,
    };
    use crate::authorization::Denial;

    struct Fixture {
        db: MockDb,
        creator: Actor,
        volunteer: Actor,
        staff: Actor,
        event: Event,
    }

    impl Fixture {
        fn new() -> Self {
            let db = MockDb::default();
            let creator = add_account(&db, "creator", false);
            let volunteer = add_account(&db, "volunteer", false);
            let staff = add_account(&db, "staff", true);
            let event = create_event(&db, &creator, new_event("Wikimania")).unwrap();
            Self {
                db,
                creator,
                volunteer,
                staff,
                event,
            }
        }

        fn invite(&self, account: &Actor, role: ParticipantRole) -> Participation {
            let new = NewParticipation {
                event: self.event.id.clone(),
                participant: account.account.clone(),
                role,
            };
            add_participation(&self.db, &self.creator, new).unwrap()
        }

        fn creator_record(&self) -> Participation {
            self.db
                .participations_of_event(&self.event.id)
                .unwrap()
                .into_iter()
                .find(|p| p.participant == self.creator.account)
                .unwrap()
        }
    }

    #[test]
    fn invitation_is_confirmed_by_organizer_side() {
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        assert!(p.confirmed_organizer);
        assert!(!p.confirmed_participant);
        assert!(!p.is_confirmed());
    }

    #[test]
    fn only_team_can_invite() {
        let f = Fixture::new();
        let other = add_account(&f.db, "other", false);
        let new = NewParticipation {
            event: f.event.id.clone(),
            participant: other.account.clone(),
            role: ParticipantRole::Volunteer,
        };
        assert!(matches!(
            add_participation(&f.db, &f.volunteer, new.clone()),
            Err(Error::Forbidden(Denial::CreateParticipant))
        ));
        assert!(add_participation(&f.db, &f.staff, new.clone()).is_ok());
        assert!(matches!(
            add_participation(&f.db, &f.creator, new),
            Err(Error::Repo(RepoError::AlreadyExists))
        ));
    }

    #[test]
    fn participant_confirms_own_record() {
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        let update = ParticipationUpdate {
            confirmed_participant: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            update_participation(&f.db, &f.creator, &p.id, update.clone()),
            Err(Error::Forbidden(Denial::ConfirmOtherParticipant))
        ));
        let p = update_participation(&f.db, &f.volunteer, &p.id, update).unwrap();
        assert!(p.is_confirmed());
    }

    #[test]
    fn participant_cannot_promote_themselves() {
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        let update = ParticipationUpdate {
            role: Some(ParticipantRole::Organizer),
            ..Default::default()
        };
        assert!(matches!(
            update_participation(&f.db, &f.volunteer, &p.id, update),
            Err(Error::Forbidden(Denial::EditParticipants))
        ));
    }

    #[test]
    fn creator_cannot_be_unconfirmed() {
        let f = Fixture::new();
        let committee = add_account(&f.db, "committee", false);
        f.invite(&committee, ParticipantRole::Committee);
        let record = f.creator_record();
        let update = ParticipationUpdate {
            confirmed_organizer: Some(false),
            ..Default::default()
        };
        for actor in [&f.creator, &committee] {
            assert!(matches!(
                update_participation(&f.db, actor, &record.id, update.clone()),
                Err(Error::Forbidden(Denial::UnconfirmCreator))
            ));
        }
        let record = update_participation(&f.db, &f.staff, &record.id, update).unwrap();
        assert!(!record.confirmed_organizer);
    }

    #[test]
    fn unchanged_update_is_a_no_op() {
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        let update = ParticipationUpdate {
            confirmed_participant: Some(false),
            ..Default::default()
        };
        let unchanged = update_participation(&f.db, &f.volunteer, &p.id, update).unwrap();
        assert_eq!(p, unchanged);
    }

    #[test]
    fn only_staff_can_delete() {
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        assert!(matches!(
            delete_participation(&f.db, &f.creator, &p.id),
            Err(Error::Forbidden(Denial::DeleteParticipant))
        ));
        assert!(delete_participation(&f.db, &f.staff, &p.id).is_ok());
    }

    #[test]
    fn unconfirmed_records_are_hidden_from_outsiders() {
        let f = Fixture::new();
        let outsider = add_account(&f.db, "outsider", false);
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        assert_eq!(1, list_participations(&f.db, &outsider, None).unwrap().len());
        assert_eq!(2, list_participations(&f.db, &f.volunteer, None).unwrap().len());
        assert_eq!(
            2,
            list_participations(&f.db, &f.creator, Some(&f.event.id))
                .unwrap()
                .len()
        );
        assert!(matches!(
            get_participation(&f.db, &outsider, &p.id),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(get_participation(&f.db, &f.volunteer, &p.id).is_ok());
    }

    #[test]
    fn scenario_volunteer_edits_event_after_promotion() {
        use super::super::events::{update_event, EventUpdate};
        let f = Fixture::new();
        let p = f.invite(&f.volunteer, ParticipantRole::Volunteer);
        let update = EventUpdate {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_event(&f.db, &f.volunteer, &f.event.id, update.clone()),
            Err(Error::Forbidden(Denial::EditEvent))
        ));
        let promotion = ParticipationUpdate {
            role: Some(ParticipantRole::Organizer),
            ..Default::default()
        };
        update_participation(&f.db, &f.creator, &p.id, promotion).unwrap();
        assert!(update_event(&f.db, &f.volunteer, &f.event.id, update).is_ok());
    }
}
