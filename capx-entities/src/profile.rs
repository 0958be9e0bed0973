use strum::{AsRefStr, EnumString};

use crate::{id::Id, url::Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Pronoun {
    HeHim,
    SheHer,
    TheyThem,
    NotSpecified,
    Other,
}

/// The three independent skill sets of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSkills {
    pub known: Vec<Id>,
    pub available: Vec<Id>,
    pub wanted: Vec<Id>,
}

/// Personal data of an account.
///
/// Every account owns exactly one profile that is identified
/// by the id of the account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub account            : Id,
    pub display_name       : Option<String>,
    pub pronoun            : Option<Pronoun>,
    pub about              : Option<String>,
    pub profile_image      : Option<Url>,
    pub wikidata_qid       : Option<String>,
    pub wiki_alt           : Option<String>,
    pub team               : Option<String>,
    pub contact            : Option<String>,
    pub social             : Vec<Url>,
    pub territories        : Vec<Id>,
    pub affiliations       : Vec<Id>,
    pub languages          : Vec<Id>,
    pub wikimedia_projects : Vec<Id>,
    pub skills             : ProfileSkills,
}

impl Profile {
    pub fn new(account: Id) -> Self {
        Self {
            account,
            display_name: None,
            pronoun: None,
            about: None,
            profile_image: None,
            wikidata_qid: None,
            wiki_alt: None,
            team: None,
            contact: None,
            social: vec![],
            territories: vec![],
            affiliations: vec![],
            languages: vec![],
            wikimedia_projects: vec![],
            skills: Default::default(),
        }
    }
}
