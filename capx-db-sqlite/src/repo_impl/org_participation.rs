use super::*;

impl<'a> OrgParticipationRepo for DbReadOnly<'a> {
    fn create_org_participation(&self, _participation: &OrgParticipation) -> Result<()> {
        unreachable!();
    }
    fn update_org_participation(&self, _participation: &OrgParticipation) -> Result<()> {
        unreachable!();
    }
    fn delete_org_participation(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_org_participation(&self, id: &Id) -> Result<OrgParticipation> {
        get_org_participation(&mut self.conn.borrow_mut(), id)
    }
    fn org_participations_of_event(&self, event: &Id) -> Result<Vec<OrgParticipation>> {
        load_org_participations(&mut self.conn.borrow_mut(), Some(event))
    }
    fn all_org_participations(&self) -> Result<Vec<OrgParticipation>> {
        load_org_participations(&mut self.conn.borrow_mut(), None)
    }
}

impl<'a> OrgParticipationRepo for DbConnection<'a> {
    fn create_org_participation(&self, participation: &OrgParticipation) -> Result<()> {
        create_org_participation(&mut self.conn.borrow_mut(), participation)
    }
    fn update_org_participation(&self, participation: &OrgParticipation) -> Result<()> {
        update_org_participation(&mut self.conn.borrow_mut(), participation)
    }
    fn delete_org_participation(&self, id: &Id) -> Result<()> {
        delete_org_participation(&mut self.conn.borrow_mut(), id)
    }
    fn get_org_participation(&self, id: &Id) -> Result<OrgParticipation> {
        get_org_participation(&mut self.conn.borrow_mut(), id)
    }
    fn org_participations_of_event(&self, event: &Id) -> Result<Vec<OrgParticipation>> {
        load_org_participations(&mut self.conn.borrow_mut(), Some(event))
    }
    fn all_org_participations(&self) -> Result<Vec<OrgParticipation>> {
        load_org_participations(&mut self.conn.borrow_mut(), None)
    }
}

fn new_org_participation<'p>(
    conn: &mut SqliteConnection,
    participation: &'p OrgParticipation,
) -> Result<models::NewOrgParticipation<'p>> {
    let OrgParticipation {
        id,
        event,
        organization,
        role,
        confirmed_organizer,
        confirmed_organization,
        created_at,
        updated_at,
    } = participation;
    Ok(models::NewOrgParticipation {
        id: id.as_str(),
        event_rowid: resolve_event_rowid(conn, event)?,
        org_rowid: resolve_organization_rowid(conn, organization)?,
        role: store_enum(*role),
        confirmed_organizer: *confirmed_organizer,
        confirmed_organization: *confirmed_organization,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    })
}

fn create_org_participation(
    conn: &mut SqliteConnection,
    participation: &OrgParticipation,
) -> Result<()> {
    let new_participation = new_org_participation(conn, participation)?;
    diesel::insert_into(schema::event_organizations::table)
        .values(&new_participation)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_org_participation(
    conn: &mut SqliteConnection,
    participation: &OrgParticipation,
) -> Result<()> {
    use schema::event_organizations::dsl;
    let changeset = new_org_participation(conn, participation)?;
    let count = diesel::update(
        schema::event_organizations::table.filter(dsl::id.eq(participation.id.as_str())),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_org_participation(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::event_organizations::dsl;
    let count =
        diesel::delete(schema::event_organizations::table.filter(dsl::id.eq(id.as_str())))
            .execute(conn)
            .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_org_participation(conn: &mut SqliteConnection, id: &Id) -> Result<OrgParticipation> {
    use schema::{
        event_organizations::dsl, events::dsl as event_dsl, organizations::dsl as org_dsl,
    };
    let entity = schema::event_organizations::table
        .inner_join(schema::events::table.on(event_dsl::rowid.eq(dsl::event_rowid)))
        .inner_join(schema::organizations::table.on(org_dsl::rowid.eq(dsl::org_rowid)))
        .select((
            dsl::id,
            event_dsl::id,
            org_dsl::id,
            dsl::role,
            dsl::confirmed_organizer,
            dsl::confirmed_organization,
            dsl::created_at,
            dsl::updated_at,
        ))
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::OrgParticipationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_org_participation(entity)
}

fn load_org_participations(
    conn: &mut SqliteConnection,
    event: Option<&Id>,
) -> Result<Vec<OrgParticipation>> {
    use schema::{
        event_organizations::dsl, events::dsl as event_dsl, organizations::dsl as org_dsl,
    };
    let mut query = schema::event_organizations::table
        .inner_join(schema::events::table.on(event_dsl::rowid.eq(dsl::event_rowid)))
        .inner_join(schema::organizations::table.on(org_dsl::rowid.eq(dsl::org_rowid)))
        .select((
            dsl::id,
            event_dsl::id,
            org_dsl::id,
            dsl::role,
            dsl::confirmed_organizer,
            dsl::confirmed_organization,
            dsl::created_at,
            dsl::updated_at,
        ))
        .order_by(dsl::rowid)
        .into_boxed();
    if let Some(event) = event {
        query = query.filter(event_dsl::id.eq(event.as_str()));
    }
    query
        .load::<models::OrgParticipationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_org_participation)
        .collect()
}

fn load_org_participation(entity: models::OrgParticipationEntity) -> Result<OrgParticipation> {
    let models::OrgParticipationEntity {
        id,
        event_id,
        org_id,
        role,
        confirmed_organizer,
        confirmed_organization,
        created_at,
        updated_at,
    } = entity;
    Ok(OrgParticipation {
        id: id.into(),
        event: event_id.into(),
        organization: org_id.into(),
        role: load_enum(role, "organization role")?,
        confirmed_organizer,
        confirmed_organization,
        created_at: TimestampMs::from_millis(created_at),
        updated_at: TimestampMs::from_millis(updated_at),
    })
}
