use super::{check_references, dedup_ids, parse_optional_url, prelude::*};
use crate::{
    authorization::{
        event::{authorize, EventAction, EventTeam},
        Actor,
    },
    util::{
        parse::trimmed_or_none,
        validate::Validate,
    },
};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name             : String,
    pub location_type    : LocationType,
    pub openstreetmap_id : Option<String>,
    pub url              : Option<String>,
    pub wikidata_qid     : Option<String>,
    pub time_begin       : i64,
    pub time_end         : i64,
    pub related_skills   : Vec<Id>,
}

/// Changes of an existing event.
///
/// `None` keeps the current value, blank strings
/// clear optional values.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub name             : Option<String>,
    pub location_type    : Option<LocationType>,
    pub openstreetmap_id : Option<String>,
    pub url              : Option<String>,
    pub wikidata_qid     : Option<String>,
    pub time_begin       : Option<i64>,
    pub time_end         : Option<i64>,
    pub related_skills   : Option<Vec<Id>>,
}

/// Loads the organizers and committee members of an event.
pub fn event_team<R: ParticipationRepo>(repo: &R, event: &Event) -> Result<EventTeam> {
    let participations = repo.participations_of_event(&event.id)?;
    Ok(EventTeam::new(event, &participations))
}

/// Creates a new event and enrolls the creator as
/// a confirmed organizer.
pub fn create_event<R>(repo: &R, actor: &Actor, new_event: NewEvent) -> Result<Event>
where
    R: EventRepo + ParticipationRepo + SkillRepo,
{
    authorize(actor, EventAction::Create)?;
    let NewEvent {
        name,
        location_type,
        openstreetmap_id,
        url,
        wikidata_qid,
        time_begin,
        time_end,
        related_skills,
    } = new_event;
    let related_skills = dedup_ids(related_skills);
    check_references(&related_skills, |id| repo.get_skill(id).map(|_| ()), Error::UnknownSkill)?;
    let now = TimestampMs::now();
    let event = Event {
        id: Id::new(),
        name: name.trim().to_owned(),
        location_type,
        openstreetmap_id: parse_optional_url(openstreetmap_id)?,
        url: parse_optional_url(url)?,
        wikidata_qid: trimmed_or_none(wikidata_qid),
        time_begin: Timestamp::from_secs(time_begin),
        time_end: Timestamp::from_secs(time_end),
        creator: Some(actor.account.clone()),
        related_skills,
        created_at: now,
        updated_at: now,
    };
    event.validate()?;
    log::debug!("Creating new event: id = {}", event.id);
    repo.create_event(&event)?;
    let organizer = Participation {
        id: Id::new(),
        event: event.id.clone(),
        participant: actor.account.clone(),
        role: ParticipantRole::Organizer,
        confirmed_organizer: true,
        confirmed_participant: true,
        created_at: now,
        updated_at: now,
    };
    repo.create_participation(&organizer)?;
    Ok(event)
}

pub fn update_event<R>(repo: &R, actor: &Actor, id: &Id, update: EventUpdate) -> Result<Event>
where
    R: EventRepo + ParticipationRepo + SkillRepo,
{
    let mut event = repo.get_event(id)?;
    let team = event_team(repo, &event)?;
    authorize(actor, EventAction::Update { team: &team })?;
    let EventUpdate {
        name,
        location_type,
        openstreetmap_id,
        url,
        wikidata_qid,
        time_begin,
        time_end,
        related_skills,
    } = update;
    if let Some(name) = name {
        event.name = name.trim().to_owned();
    }
    if let Some(location_type) = location_type {
        event.location_type = location_type;
    }
    if openstreetmap_id.is_some() {
        event.openstreetmap_id = parse_optional_url(openstreetmap_id)?;
    }
    if url.is_some() {
        event.url = parse_optional_url(url)?;
    }
    if wikidata_qid.is_some() {
        event.wikidata_qid = trimmed_or_none(wikidata_qid);
    }
    if let Some(begin) = time_begin {
        event.time_begin = Timestamp::from_secs(begin);
    }
    if let Some(end) = time_end {
        event.time_end = Timestamp::from_secs(end);
    }
    if let Some(skills) = related_skills {
        let skills = dedup_ids(skills);
        check_references(&skills, |id| repo.get_skill(id).map(|_| ()), Error::UnknownSkill)?;
        event.related_skills = skills;
    }
    event.validate()?;
    event.updated_at = TimestampMs::now();
    log::debug!("Updating event: id = {}", event.id);
    repo.update_event(&event)?;
    Ok(event)
}

pub fn delete_event<R: EventRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<()> {
    // Unknown events are reported before missing permissions
    repo.get_event(id)?;
    authorize(actor, EventAction::Delete)?;
    repo.delete_event(id)?;
    Ok(())
}

pub fn get_event<R: EventRepo>(repo: &R, id: &Id) -> Result<Event> {
    Ok(repo.get_event(id)?)
}

pub fn all_events<R: EventRepo>(repo: &R) -> Result<Vec<Event>> {
    Ok(repo.all_events_chronologically()?)
}
