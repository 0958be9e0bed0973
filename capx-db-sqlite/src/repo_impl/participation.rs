use super::*;

impl<'a> ParticipationRepo for DbReadOnly<'a> {
    fn create_participation(&self, _participation: &Participation) -> Result<()> {
        unreachable!();
    }
    fn update_participation(&self, _participation: &Participation) -> Result<()> {
        unreachable!();
    }
    fn delete_participation(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_participation(&self, id: &Id) -> Result<Participation> {
        get_participation(&mut self.conn.borrow_mut(), id)
    }
    fn participations_of_event(&self, event: &Id) -> Result<Vec<Participation>> {
        load_participations(&mut self.conn.borrow_mut(), Some(event))
    }
    fn all_participations(&self) -> Result<Vec<Participation>> {
        load_participations(&mut self.conn.borrow_mut(), None)
    }
}

impl<'a> ParticipationRepo for DbConnection<'a> {
    fn create_participation(&self, participation: &Participation) -> Result<()> {
        create_participation(&mut self.conn.borrow_mut(), participation)
    }
    fn update_participation(&self, participation: &Participation) -> Result<()> {
        update_participation(&mut self.conn.borrow_mut(), participation)
    }
    fn delete_participation(&self, id: &Id) -> Result<()> {
        delete_participation(&mut self.conn.borrow_mut(), id)
    }
    fn get_participation(&self, id: &Id) -> Result<Participation> {
        get_participation(&mut self.conn.borrow_mut(), id)
    }
    fn participations_of_event(&self, event: &Id) -> Result<Vec<Participation>> {
        load_participations(&mut self.conn.borrow_mut(), Some(event))
    }
    fn all_participations(&self) -> Result<Vec<Participation>> {
        load_participations(&mut self.conn.borrow_mut(), None)
    }
}

fn new_participation<'p>(
    conn: &mut SqliteConnection,
    participation: &'p Participation,
) -> Result<models::NewParticipation<'p>> {
    let Participation {
        id,
        event,
        participant,
        role,
        confirmed_organizer,
        confirmed_participant,
        created_at,
        updated_at,
    } = participation;
    Ok(models::NewParticipation {
        id: id.as_str(),
        event_rowid: resolve_event_rowid(conn, event)?,
        account_rowid: resolve_account_rowid(conn, participant)?,
        role: store_enum(*role),
        confirmed_organizer: *confirmed_organizer,
        confirmed_participant: *confirmed_participant,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    })
}

fn create_participation(conn: &mut SqliteConnection, participation: &Participation) -> Result<()> {
    let new_participation = new_participation(conn, participation)?;
    diesel::insert_into(schema::event_participants::table)
        .values(&new_participation)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_participation(conn: &mut SqliteConnection, participation: &Participation) -> Result<()> {
    use schema::event_participants::dsl;
    let changeset = new_participation(conn, participation)?;
    let count = diesel::update(
        schema::event_participants::table.filter(dsl::id.eq(participation.id.as_str())),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_participation(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::event_participants::dsl;
    let count = diesel::delete(schema::event_participants::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_participation(conn: &mut SqliteConnection, id: &Id) -> Result<Participation> {
    use schema::{
        accounts::dsl as acc_dsl, event_participants::dsl, events::dsl as event_dsl,
    };
    let entity = schema::event_participants::table
        .inner_join(schema::events::table.on(event_dsl::rowid.eq(dsl::event_rowid)))
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::account_rowid)))
        .select((
            dsl::id,
            event_dsl::id,
            acc_dsl::id,
            dsl::role,
            dsl::confirmed_organizer,
            dsl::confirmed_participant,
            dsl::created_at,
            dsl::updated_at,
        ))
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::ParticipationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_participation(entity)
}

fn load_participations(
    conn: &mut SqliteConnection,
    event: Option<&Id>,
) -> Result<Vec<Participation>> {
    use schema::{
        accounts::dsl as acc_dsl, event_participants::dsl, events::dsl as event_dsl,
    };
    let mut query = schema::event_participants::table
        .inner_join(schema::events::table.on(event_dsl::rowid.eq(dsl::event_rowid)))
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::account_rowid)))
        .select((
            dsl::id,
            event_dsl::id,
            acc_dsl::id,
            dsl::role,
            dsl::confirmed_organizer,
            dsl::confirmed_participant,
            dsl::created_at,
            dsl::updated_at,
        ))
        .order_by(dsl::rowid)
        .into_boxed();
    if let Some(event) = event {
        query = query.filter(event_dsl::id.eq(event.as_str()));
    }
    query
        .load::<models::ParticipationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_participation)
        .collect()
}

fn load_participation(entity: models::ParticipationEntity) -> Result<Participation> {
    let models::ParticipationEntity {
        id,
        event_id,
        account_id,
        role,
        confirmed_organizer,
        confirmed_participant,
        created_at,
        updated_at,
    } = entity;
    Ok(Participation {
        id: id.into(),
        event: event_id.into(),
        participant: account_id.into(),
        role: load_enum(role, "participant role")?,
        confirmed_organizer,
        confirmed_participant,
        created_at: TimestampMs::from_millis(created_at),
        updated_at: TimestampMs::from_millis(updated_at),
    })
}
