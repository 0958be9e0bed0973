use crate::{id::Id, time::TimestampMs};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id            : Id,
    pub name          : String,
    pub description   : Option<String>,
    pub wikidata_item : Option<String>,
    /// Skills this one is a subtype of.
    pub supertypes    : Vec<Id>,
    pub created_at    : TimestampMs,
}
