use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::*, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum LocationType {
    Virtual  = 0,
    InPerson = 1,
    Hybrid   = 2,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id               : Id,
    pub name             : String,
    pub location_type    : LocationType,
    pub openstreetmap_id : Option<Url>,
    pub url              : Option<Url>,
    pub wikidata_qid     : Option<String>,
    // Both begin/end time stamps are stored with second precision!
    pub time_begin       : Timestamp,
    pub time_end         : Timestamp,
    /// `None` after the creating account has been deleted.
    pub creator          : Option<Id>,
    pub related_skills   : Vec<Id>,
    pub created_at       : TimestampMs,
    pub updated_at       : TimestampMs,
}
