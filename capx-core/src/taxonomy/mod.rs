//! Integrity rules of the skill taxonomy.

mod graph;
mod profile_skills;

pub use self::{graph::*, profile_skills::*};
