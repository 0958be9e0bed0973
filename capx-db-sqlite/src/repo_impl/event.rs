use super::*;

impl<'a> EventRepo for DbReadOnly<'a> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn update_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn delete_event(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_event(&self, id: &Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
}

impl<'a> EventRepo for DbConnection<'a> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_event(&self, id: &Id) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }
    fn get_event(&self, id: &Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
}

fn new_event(event: &Event, creator_rowid: Option<i64>) -> models::NewEvent<'_> {
    let Event {
        id,
        name,
        location_type,
        openstreetmap_id,
        url,
        wikidata_qid,
        time_begin,
        time_end,
        creator: _,
        related_skills: _,
        created_at,
        updated_at,
    } = event;
    models::NewEvent {
        id: id.as_str(),
        name,
        location_type: store_enum(*location_type),
        openstreetmap_id: openstreetmap_id.as_ref().map(Url::as_str),
        url: url.as_ref().map(Url::as_str),
        wikidata_qid: wikidata_qid.as_deref(),
        time_begin: time_begin.as_secs(),
        time_end: time_end.as_secs(),
        creator_rowid,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    }
}

fn resolve_creator_rowid(conn: &mut SqliteConnection, event: &Event) -> Result<Option<i64>> {
    event
        .creator
        .as_ref()
        .map(|creator| resolve_account_rowid(conn, creator))
        .transpose()
}

fn create_event(conn: &mut SqliteConnection, event: &Event) -> Result<()> {
    let creator_rowid = resolve_creator_rowid(conn, event)?;
    diesel::insert_into(schema::events::table)
        .values(&new_event(event, creator_rowid))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let event_rowid = resolve_event_rowid(conn, &event.id)?;
    insert_related_skills(conn, event_rowid, &event.related_skills)
}

fn update_event(conn: &mut SqliteConnection, event: &Event) -> Result<()> {
    use schema::{event_skills::dsl as skill_dsl, events::dsl};
    let creator_rowid = resolve_creator_rowid(conn, event)?;
    let count = diesel::update(schema::events::table.filter(dsl::id.eq(event.id.as_str())))
        .set(&new_event(event, creator_rowid))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    let event_rowid = resolve_event_rowid(conn, &event.id)?;
    diesel::delete(schema::event_skills::table.filter(skill_dsl::event_rowid.eq(event_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_related_skills(conn, event_rowid, &event.related_skills)
}

fn insert_related_skills(conn: &mut SqliteConnection, event_rowid: i64, skills: &[Id]) -> Result<()> {
    for skill in skills {
        let skill_rowid = resolve_skill_rowid(conn, skill)?;
        diesel::insert_into(schema::event_skills::table)
            .values(&models::NewEventSkill {
                event_rowid,
                skill_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

// Memberships of individuals and organizations are deleted by the database.
fn delete_event(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::events::dsl;
    let count = diesel::delete(schema::events::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_event(conn: &mut SqliteConnection, id: &Id) -> Result<Event> {
    use schema::events::dsl;
    let entity = schema::events::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    load_event(conn, entity)
}

fn all_events_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Event>> {
    use schema::events::dsl;
    let entities = schema::events::table
        .order_by((dsl::time_begin, dsl::rowid))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_event(conn, entity))
        .collect()
}

fn load_event(conn: &mut SqliteConnection, entity: models::EventEntity) -> Result<Event> {
    use schema::{accounts::dsl as acc_dsl, event_skills::dsl as es_dsl, skills::dsl as skill_dsl};
    let models::EventEntity {
        rowid,
        id,
        name,
        location_type,
        openstreetmap_id,
        url,
        wikidata_qid,
        time_begin,
        time_end,
        creator_rowid,
        created_at,
        updated_at,
    } = entity;
    let creator = creator_rowid
        .map(|rowid| {
            schema::accounts::table
                .select(acc_dsl::id)
                .filter(acc_dsl::rowid.eq(rowid))
                .first::<String>(conn)
                .map_err(from_diesel_err)
        })
        .transpose()?
        .map(Id::from);
    let related_skills = schema::event_skills::table
        .inner_join(schema::skills::table.on(skill_dsl::rowid.eq(es_dsl::skill_rowid)))
        .select(skill_dsl::id)
        .filter(es_dsl::event_rowid.eq(rowid))
        .order_by(skill_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect();
    Ok(Event {
        id: id.into(),
        name,
        location_type: load_enum(location_type, "location type")?,
        openstreetmap_id: openstreetmap_id.and_then(load_url),
        url: url.and_then(load_url),
        wikidata_qid,
        time_begin: Timestamp::from_secs(time_begin),
        time_end: Timestamp::from_secs(time_end),
        creator,
        related_skills,
        created_at: TimestampMs::from_millis(created_at),
        updated_at: TimestampMs::from_millis(updated_at),
    })
}
