use super::prelude::*;
use crate::{repositories::Error as RepoError, util::validate};

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

/// Registers a new account together with its empty profile.
pub fn create_account<R>(repo: &R, new_account: NewAccount) -> Result<Account>
where
    R: AccountRepo + ProfileRepo,
{
    let NewAccount {
        username,
        email,
        password,
    } = new_account;
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let email = match email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => {
            let email = email.parse::<EmailAddress>().map_err(|_| Error::Email)?;
            if !validate::is_valid_email(email.as_str()) {
                return Err(Error::Email);
            }
            Some(email)
        }
        None => None,
    };
    let password = password.parse::<Password>()?;
    if repo.try_get_account_by_username(&username)?.is_some() {
        return Err(Error::UserExists);
    }
    let account = Account {
        id: Id::new(),
        username,
        email,
        password,
        is_staff: false,
        is_active: true,
        date_joined: Timestamp::now(),
    };
    log::debug!("Creating new account: username = {}", account.username);
    repo.create_account(&account).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    repo.create_profile(&Profile::new(account.id.clone()))?;
    Ok(account)
}

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login<R: AccountRepo>(repo: &R, login: &Credentials) -> Result<Account> {
    match repo.try_get_account_by_username(login.username)? {
        Some(account) if account.is_active && account.password.verify(login.password) => {
            Ok(account)
        }
        _ => Err(Error::Credentials),
    }
}

/// Resolves the acting account of an authenticated request.
pub fn authenticate_actor<R: AccountRepo>(repo: &R, account: &Id) -> Result<Actor> {
    current_account(repo, account).map(|account| Actor::from(&account))
}

pub fn current_account<R: AccountRepo>(repo: &R, account: &Id) -> Result<Account> {
    match repo.get_account(account) {
        Ok(account) if account.is_active => Ok(account),
        Ok(_) | Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(err.into()),
    }
}

/// Grants or revokes the staff role.
pub fn change_staff_status<R: AccountRepo>(
    repo: &R,
    username: &str,
    is_staff: bool,
) -> Result<Account> {
    let mut account = repo
        .try_get_account_by_username(username)?
        .ok_or(RepoError::NotFound)?;
    if account.is_staff != is_staff {
        account.is_staff = is_staff;
        repo.update_account(&account)?;
    }
    Ok(account)
}
