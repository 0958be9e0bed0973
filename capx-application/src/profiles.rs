use super::*;

pub fn update_profile(
    connections: &sqlite::Connections,
    actor: &Actor,
    account: &Id,
    update: usecases::ProfileUpdate,
) -> Result<Profile> {
    let profile = connections.exclusive()?.transaction(|conn| {
        usecases::update_profile(conn, actor, account, update)
            .map_err(|err| report("update profile", err))
    })?;
    info!("Updated profile of account {}", profile.account);
    Ok(profile)
}

/// Deletes the account together with its profile.
pub fn delete_profile(connections: &sqlite::Connections, actor: &Actor, account: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_profile(conn, actor, account).map_err(|err| report("delete profile", err))
    })?;
    info!("Deleted account {} by {}", account, actor.account);
    Ok(())
}

pub fn get_profile(connections: &sqlite::Connections, account: &Id) -> Result<Profile> {
    let conn = connections.shared()?;
    Ok(usecases::get_profile(&conn, account)?)
}

pub fn all_profiles(connections: &sqlite::Connections) -> Result<Vec<Profile>> {
    let conn = connections.shared()?;
    Ok(usecases::all_profiles(&conn)?)
}
