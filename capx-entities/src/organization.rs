use crate::{id::Id, time::TimestampMs, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id            : Id,
    pub display_name  : String,
    pub acronym       : Option<String>,
    pub profile_image : Option<Url>,
    pub home_project  : Option<Url>,
    pub contact       : Option<String>,
    pub social_media  : Option<Url>,
    pub territories   : Vec<Id>,
    pub managers      : Vec<Id>,
    pub created_at    : TimestampMs,
}

impl Organization {
    pub fn is_managed_by(&self, account: &Id) -> bool {
        self.managers.iter().any(|m| m == account)
    }

    pub fn has_managers(&self) -> bool {
        !self.managers.is_empty()
    }
}
