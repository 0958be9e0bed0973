mod accounts;
mod attachments;
mod bugs;
mod error;
mod events;
mod languages;
mod org_participations;
mod organizations;
mod participations;
mod profiles;
mod skills;
mod territories;
mod wikimedia_projects;

#[cfg(test)]
pub mod tests;

pub use self::{
    accounts::*, attachments::*, bugs::*, error::Error, events::*, languages::*,
    org_participations::*, organizations::*, participations::*, profiles::*, skills::*,
    territories::*, wikimedia_projects::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{authorization::Actor, db::*, entities::*, repositories::*};
}

use self::prelude::*;
use crate::{repositories::Error as RepoError, util::parse::parse_url_param};

/// Loads all referenced entities or fails with the first unknown id.
fn check_references<F>(ids: &[Id], exists: F, unknown: fn(Id) -> Error) -> Result<()>
where
    F: Fn(&Id) -> std::result::Result<(), RepoError>,
{
    for id in ids {
        match exists(id) {
            Ok(()) => {}
            Err(RepoError::NotFound) => return Err(unknown(id.clone())),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn dedup_ids(mut ids: Vec<Id>) -> Vec<Id> {
    ids.sort();
    ids.dedup();
    ids
}

/// Blank values mean "no URL".
fn parse_optional_url(url: Option<String>) -> Result<Option<Url>> {
    Ok(url.as_deref().map(parse_url_param).transpose()?.flatten())
}
