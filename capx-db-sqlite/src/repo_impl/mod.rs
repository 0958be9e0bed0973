// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive, ToPrimitive};

use capx_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod account;
mod attachment;
mod bug;
mod event;
mod language;
mod org_participation;
mod organization;
mod participation;
mod profile;
mod skill;
mod territory;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Updates and deletes of a single record by id.
fn expect_single_row(affected: usize) -> Result<()> {
    match affected {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        n => Err(anyhow!("Unexpected number of affected rows: {n}").into()),
    }
}

fn load_url(url: String) -> Option<Url> {
    url.parse()
        .map_err(|err| {
            // This should never happen if URLs have been validated properly on insert
            log::error!("Failed to load invalid URL '{url}': {err}");
            err
        })
        .ok()
}

fn load_enum<T: FromPrimitive>(value: i16, what: &str) -> Result<T> {
    T::from_i16(value).ok_or_else(|| anyhow!("Invalid {what}: {value}").into())
}

fn store_enum<T: ToPrimitive + Copy>(value: T) -> i16 {
    // All stored enums are fieldless with small discriminants
    value.to_i16().unwrap_or_default()
}

fn resolve_account_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::accounts::dsl;
    schema::accounts::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve account id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_event_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::events::dsl;
    schema::events::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve event id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_skill_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::skills::dsl;
    schema::skills::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve skill id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_organization_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::organizations::dsl;
    schema::organizations::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve organization id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_territory_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::territories::dsl;
    schema::territories::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve territory id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_language_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::languages::dsl;
    schema::languages::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve language id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_wikimedia_project_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::wikimedia_projects::dsl;
    schema::wikimedia_projects::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve Wikimedia project id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_bug_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::bugs::dsl;
    schema::bugs::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve bug id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_territory_rowids(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<i64>> {
    ids.iter()
        .map(|id| resolve_territory_rowid(conn, id))
        .collect()
}
