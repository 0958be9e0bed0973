use super::*;

pub fn register_account(
    connections: &sqlite::Connections,
    new_account: usecases::NewAccount,
) -> Result<Account> {
    let account = connections.exclusive()?.transaction(|conn| {
        usecases::create_account(conn, new_account).map_err(|err| report("register account", err))
    })?;
    info!(
        "Registered account {} with username '{}'",
        account.id, account.username
    );
    Ok(account)
}

pub fn login(connections: &sqlite::Connections, credentials: &usecases::Credentials) -> Result<Account> {
    let conn = connections.shared()?;
    let account = usecases::login(&conn, credentials).map_err(|err| {
        info!("Login of '{}' failed: {}", credentials.username, err);
        err
    })?;
    debug!("Account {} logged in", account.id);
    Ok(account)
}

pub fn current_account(connections: &sqlite::Connections, account: &Id) -> Result<Account> {
    let conn = connections.shared()?;
    Ok(usecases::current_account(&conn, account)?)
}

/// Resolves the acting account of an authenticated request.
pub fn authenticate(connections: &sqlite::Connections, account: &Id) -> Result<Actor> {
    let conn = connections.shared()?;
    Ok(usecases::authenticate_actor(&conn, account)?)
}

pub fn change_staff_status(
    connections: &sqlite::Connections,
    username: &str,
    is_staff: bool,
) -> Result<Account> {
    let account = connections.exclusive()?.transaction(|conn| {
        usecases::change_staff_status(conn, username, is_staff).map_err(|err| {
            warn!("Failed to change staff status of '{}': {}", username, err);
            err
        })
    })?;
    info!(
        "Changed staff status of account {} to {}",
        account.id, account.is_staff
    );
    Ok(account)
}
