use super::*;

impl<'a> TerritoryRepo for DbReadOnly<'a> {
    fn create_territory(&self, _territory: &Territory) -> Result<()> {
        unreachable!();
    }
    fn get_territory(&self, id: &Id) -> Result<Territory> {
        get_territory(&mut self.conn.borrow_mut(), id)
    }
    fn all_territories(&self) -> Result<Vec<Territory>> {
        all_territories(&mut self.conn.borrow_mut())
    }
}

impl<'a> TerritoryRepo for DbConnection<'a> {
    fn create_territory(&self, territory: &Territory) -> Result<()> {
        create_territory(&mut self.conn.borrow_mut(), territory)
    }
    fn get_territory(&self, id: &Id) -> Result<Territory> {
        get_territory(&mut self.conn.borrow_mut(), id)
    }
    fn all_territories(&self) -> Result<Vec<Territory>> {
        all_territories(&mut self.conn.borrow_mut())
    }
}

fn create_territory(conn: &mut SqliteConnection, territory: &Territory) -> Result<()> {
    let Territory { id, name, parents } = territory;
    diesel::insert_into(schema::territories::table)
        .values(&models::NewTerritory {
            id: id.as_str(),
            name,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let territory_rowid = resolve_territory_rowid(conn, id)?;
    for parent_rowid in resolve_territory_rowids(conn, parents)? {
        diesel::insert_into(schema::territory_parents::table)
            .values(&models::NewTerritoryParent {
                territory_rowid,
                parent_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn get_territory(conn: &mut SqliteConnection, id: &Id) -> Result<Territory> {
    use schema::territories::dsl;
    let entity = schema::territories::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::TerritoryEntity>(conn)
        .map_err(from_diesel_err)?;
    load_territory(conn, entity)
}

fn all_territories(conn: &mut SqliteConnection) -> Result<Vec<Territory>> {
    use schema::territories::dsl;
    let entities = schema::territories::table
        .order_by(dsl::name)
        .load::<models::TerritoryEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_territory(conn, entity))
        .collect()
}

fn load_territory(conn: &mut SqliteConnection, entity: models::TerritoryEntity) -> Result<Territory> {
    use schema::{territories::dsl, territory_parents::dsl as parent_dsl};
    let models::TerritoryEntity { rowid, id, name } = entity;
    let parents = schema::territory_parents::table
        .inner_join(schema::territories::table.on(dsl::rowid.eq(parent_dsl::parent_rowid)))
        .select(dsl::id)
        .filter(parent_dsl::territory_rowid.eq(rowid))
        .order_by(dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect();
    Ok(Territory {
        id: id.into(),
        name,
        parents,
    })
}
