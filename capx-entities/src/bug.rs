use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::TimestampMs};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum BugType {
    #[default]
    Error       = 0,
    NewFeature  = 1,
    Improvement = 2,
    TestCase    = 3,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum BugStatus {
    #[default]
    ToDo        = 0,
    Assigned    = 1,
    InProgress  = 2,
    UnderReview = 3,
    Done        = 4,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bug {
    pub id          : Id,
    pub author      : Id,
    pub title       : String,
    pub description : String,
    pub bug_type    : BugType,
    pub status      : BugStatus,
    pub created_at  : TimestampMs,
    pub updated_at  : TimestampMs,
}

/// Metadata of a file that is attached to a bug.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id           : Id,
    pub bug          : Id,
    pub file_name    : Option<String>,
    pub content_type : Option<String>,
    pub size         : u64,
    pub uploaded_at  : TimestampMs,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AttachmentContent(pub Vec<u8>);

impl std::fmt::Debug for AttachmentContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttachmentContent({} bytes)", self.0.len())
    }
}
