use crate::id::Id;

/// A spoken or written language.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id      : Id,
    /// English name
    pub name    : String,
    /// Name of the language in the language itself
    pub autonym : Option<String>,
    pub code    : String,
}

/// A project of the Wikimedia movement, e.g. Wikipedia or Wikidata.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikimediaProject {
    pub id   : Id,
    pub name : String,
    pub code : String,
}
