//! # capx-core
//!
//! Business rules of the CapX capacity exchange: repository traits,
//! the access policy evaluator, the skill taxonomy guard and the use
//! cases that combine them.

pub mod authorization;
pub mod db;
pub mod repositories;
pub mod taxonomy;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use capx_entities::{
        account::*, bug::*, email::*, event::*, id::*, language::*, organization::*,
        participation::*, password::*, profile::*, skill::*, territory::*, time::*, url::*,
    };
}
