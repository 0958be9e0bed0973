use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id          : Id,
    pub username    : String,
    pub email       : Option<EmailAddress>,
    pub password    : Password,
    pub is_staff    : bool,
    pub is_active   : bool,
    pub date_joined : Timestamp,
}
