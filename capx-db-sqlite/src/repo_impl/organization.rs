use super::*;

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_org(&self, _org: &Organization) -> Result<()> {
        unreachable!();
    }
    fn update_org(&self, _org: &Organization) -> Result<()> {
        unreachable!();
    }
    fn delete_org(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_org(&self, id: &Id) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn all_orgs(&self) -> Result<Vec<Organization>> {
        all_orgs(&mut self.conn.borrow_mut())
    }
}

impl<'a> OrganizationRepo for DbConnection<'a> {
    fn create_org(&self, org: &Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn update_org(&self, org: &Organization) -> Result<()> {
        update_org(&mut self.conn.borrow_mut(), org)
    }
    fn delete_org(&self, id: &Id) -> Result<()> {
        delete_org(&mut self.conn.borrow_mut(), id)
    }
    fn get_org(&self, id: &Id) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn all_orgs(&self) -> Result<Vec<Organization>> {
        all_orgs(&mut self.conn.borrow_mut())
    }
}

fn new_org(org: &Organization) -> models::NewOrganization<'_> {
    let Organization {
        id,
        display_name,
        acronym,
        profile_image,
        home_project,
        contact,
        social_media,
        territories: _,
        managers: _,
        created_at,
    } = org;
    models::NewOrganization {
        id: id.as_str(),
        display_name,
        acronym: acronym.as_deref(),
        profile_image: profile_image.as_ref().map(Url::as_str),
        home_project: home_project.as_ref().map(Url::as_str),
        contact: contact.as_deref(),
        created_at: created_at.as_millis(),
        social_media: social_media.as_ref().map(Url::as_str),
    }
}

fn create_org(conn: &mut SqliteConnection, org: &Organization) -> Result<()> {
    diesel::insert_into(schema::organizations::table)
        .values(&new_org(org))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let org_rowid = resolve_organization_rowid(conn, &org.id)?;
    insert_org_relations(conn, org_rowid, org)
}

fn update_org(conn: &mut SqliteConnection, org: &Organization) -> Result<()> {
    use schema::{
        organization_managers::dsl as mgr_dsl, organization_territories::dsl as terr_dsl,
        organizations::dsl,
    };
    let count = diesel::update(schema::organizations::table.filter(dsl::id.eq(org.id.as_str())))
        .set(&new_org(org))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    let org_rowid = resolve_organization_rowid(conn, &org.id)?;
    diesel::delete(schema::organization_managers::table.filter(mgr_dsl::org_rowid.eq(org_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(
        schema::organization_territories::table.filter(terr_dsl::org_rowid.eq(org_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    insert_org_relations(conn, org_rowid, org)
}

fn insert_org_relations(conn: &mut SqliteConnection, org_rowid: i64, org: &Organization) -> Result<()> {
    for manager in &org.managers {
        let account_rowid = resolve_account_rowid(conn, manager)?;
        diesel::insert_into(schema::organization_managers::table)
            .values(&models::NewOrganizationManager {
                org_rowid,
                account_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for territory_rowid in resolve_territory_rowids(conn, &org.territories)? {
        diesel::insert_into(schema::organization_territories::table)
            .values(&models::NewOrganizationTerritory {
                org_rowid,
                territory_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

// Memberships in events and affiliations of profiles are deleted by the database.
fn delete_org(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::organizations::dsl;
    let count = diesel::delete(schema::organizations::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_org(conn: &mut SqliteConnection, id: &Id) -> Result<Organization> {
    use schema::organizations::dsl;
    let entity = schema::organizations::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::OrganizationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_org(conn, entity)
}

fn all_orgs(conn: &mut SqliteConnection) -> Result<Vec<Organization>> {
    use schema::organizations::dsl;
    let entities = schema::organizations::table
        .order_by(dsl::display_name)
        .load::<models::OrganizationEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_org(conn, entity))
        .collect()
}

fn load_org(conn: &mut SqliteConnection, entity: models::OrganizationEntity) -> Result<Organization> {
    use schema::{
        accounts::dsl as acc_dsl, organization_managers::dsl as mgr_dsl,
        organization_territories::dsl as org_terr_dsl, territories::dsl as terr_dsl,
    };
    let models::OrganizationEntity {
        rowid,
        id,
        display_name,
        acronym,
        profile_image,
        home_project,
        contact,
        created_at,
        social_media,
    } = entity;
    let managers = schema::organization_managers::table
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(mgr_dsl::account_rowid)))
        .select(acc_dsl::id)
        .filter(mgr_dsl::org_rowid.eq(rowid))
        .order_by(acc_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect();
    let territories = schema::organization_territories::table
        .inner_join(schema::territories::table.on(terr_dsl::rowid.eq(org_terr_dsl::territory_rowid)))
        .select(terr_dsl::id)
        .filter(org_terr_dsl::org_rowid.eq(rowid))
        .order_by(terr_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect();
    Ok(Organization {
        id: id.into(),
        display_name,
        acronym,
        profile_image: profile_image.and_then(load_url),
        home_project: home_project.and_then(load_url),
        contact,
        social_media: social_media.and_then(load_url),
        territories,
        managers,
        created_at: TimestampMs::from_millis(created_at),
    })
}
