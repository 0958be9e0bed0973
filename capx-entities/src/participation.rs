//! Memberships of individuals and organizations in events.
//!
//! Each side of a membership confirms it independently. A membership
//! only counts as confirmed if both sides agreed.

use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::TimestampMs};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum ParticipantRole {
    Organizer = 0,
    Committee = 1,
    Volunteer = 2,
}

impl ParticipantRole {
    /// Organizers and committee members are allowed to edit
    /// the event and its memberships.
    pub const fn is_team(self) -> bool {
        matches!(self, Self::Organizer | Self::Committee)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    pub id                     : Id,
    pub event                  : Id,
    pub participant            : Id,
    pub role                   : ParticipantRole,
    pub confirmed_organizer    : bool,
    pub confirmed_participant  : bool,
    pub created_at             : TimestampMs,
    pub updated_at             : TimestampMs,
}

impl Participation {
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed_organizer && self.confirmed_participant
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum OrgRole {
    Organizer = 0,
    Sponsor   = 1,
    Supporter = 2,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgParticipation {
    pub id                     : Id,
    pub event                  : Id,
    pub organization           : Id,
    pub role                   : OrgRole,
    pub confirmed_organizer    : bool,
    pub confirmed_organization : bool,
    pub created_at             : TimestampMs,
    pub updated_at             : TimestampMs,
}

impl OrgParticipation {
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed_organizer && self.confirmed_organization
    }
}
