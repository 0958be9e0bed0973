use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id      : Id,
    pub name    : String,
    pub parents : Vec<Id>,
}
