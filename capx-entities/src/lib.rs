#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # capx-entities
//!
//! Reusable, agnostic domain entities for the CapX capacity exchange.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod bug;
pub mod email;
pub mod event;
pub mod id;
pub mod language;
pub mod organization;
pub mod participation;
pub mod password;
pub mod profile;
pub mod skill;
pub mod territory;
pub mod time;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
