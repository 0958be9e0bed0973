use super::*;

pub fn create_org(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_org: usecases::NewOrganization,
) -> Result<Organization> {
    let org = connections.exclusive()?.transaction(|conn| {
        usecases::create_org(conn, actor, new_org).map_err(|err| report("create organization", err))
    })?;
    info!("Created organization {} '{}'", org.id, org.display_name);
    Ok(org)
}

pub fn update_org(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::OrganizationUpdate,
) -> Result<Organization> {
    let org = connections.exclusive()?.transaction(|conn| {
        usecases::update_org(conn, actor, id, update)
            .map_err(|err| report("update organization", err))
    })?;
    info!("Updated organization {} by {}", org.id, actor.account);
    Ok(org)
}

pub fn delete_org(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_org(conn, actor, id).map_err(|err| report("delete organization", err))
    })?;
    info!("Deleted organization {}", id);
    Ok(())
}

pub fn get_org(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<Organization> {
    let conn = connections.shared()?;
    Ok(usecases::get_org(&conn, actor, id)?)
}

pub fn list_orgs(connections: &sqlite::Connections, actor: &Actor) -> Result<Vec<Organization>> {
    let conn = connections.shared()?;
    Ok(usecases::list_orgs(&conn, actor)?)
}

pub fn create_territory(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_territory: usecases::NewTerritory,
) -> Result<Territory> {
    let territory = connections.exclusive()?.transaction(|conn| {
        usecases::create_territory(conn, actor, new_territory)
            .map_err(|err| report("create territory", err))
    })?;
    info!("Created territory {} '{}'", territory.id, territory.name);
    Ok(territory)
}

pub fn all_territories(connections: &sqlite::Connections) -> Result<Vec<Territory>> {
    let conn = connections.shared()?;
    Ok(usecases::all_territories(&conn)?)
}
