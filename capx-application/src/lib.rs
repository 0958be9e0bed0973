//! Transactional flows on top of the use cases.
//!
//! Every mutation runs in a single exclusive transaction,
//! reads share the connection pool.

#[macro_use]
extern crate log;

mod accounts;
mod bugs;
mod events;
mod languages;
mod organizations;
mod participations;
mod profiles;
mod skills;

pub mod prelude {
    pub use super::{
        accounts::*, bugs::*, events::*, languages::*, organizations::*, participations::*,
        profiles::*, skills::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use capx_core::{authorization::Actor, entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use capx_db_sqlite::Connections;
}

/// Logs the failure of a flow, storage failures as errors.
pub(crate) fn report(action: &str, err: usecases::Error) -> usecases::Error {
    use capx_core::repositories::Error as RepoError;
    match &err {
        usecases::Error::Repo(RepoError::Io(_) | RepoError::Other(_)) => {
            error!("Failed to {action}: {err}");
        }
        _ => {
            debug!("Rejected to {action}: {err}");
        }
    }
    err
}
