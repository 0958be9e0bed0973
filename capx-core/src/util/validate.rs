use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::entities::*;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_DISPLAY_NAME_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_BUG_TITLE_LEN: usize = 200;
pub const MAX_ABOUT_LEN: usize = 2000;
pub const MAX_ACRONYM_LEN: usize = 10;
pub const MAX_EVENT_QID_LEN: usize = 10;
pub const MAX_SKILL_ITEM_LEN: usize = 30;
pub const MAX_LANGUAGE_CODE_LEN: usize = 10;
pub const MAX_PROJECT_CODE_LEN: usize = 40;

lazy_static! {
    static ref WIKIDATA_QID_REGEX: Regex = Regex::new(r"^Q[1-9]\d*$").unwrap();
    static ref OSM_URL_REGEX: Regex =
        Regex::new(r"^https://www\.openstreetmap\.org/(node|way|relation)/\d+$").unwrap();
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]{1,150}$").unwrap();
}

pub fn is_valid_wikidata_qid(qid: &str, max_len: usize) -> bool {
    qid.len() <= max_len && WIKIDATA_QID_REGEX.is_match(qid)
}

pub fn is_valid_openstreetmap_url(url: &Url) -> bool {
    OSM_URL_REGEX.is_match(url.as_str())
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

fn is_valid_name(name: &str, max_len: usize) -> bool {
    !name.trim().is_empty() && name.chars().count() <= max_len
}

fn fits(text: Option<&str>, max_len: usize) -> bool {
    text.map_or(true, |t| t.chars().count() <= max_len)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid Wikidata QID")]
    WikidataQid,
    #[error("Invalid OpenStreetMap URL")]
    OpenStreetMapUrl,
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name, MAX_NAME_LEN) {
            return Err(Self::Error::Name);
        }
        if self.time_end < self.time_begin {
            return Err(Self::Error::EndDateBeforeStart);
        }
        if let Some(qid) = &self.wikidata_qid {
            if !is_valid_wikidata_qid(qid, MAX_EVENT_QID_LEN) {
                return Err(Self::Error::WikidataQid);
            }
        }
        if let Some(osm) = &self.openstreetmap_id {
            if !is_valid_openstreetmap_url(osm) {
                return Err(Self::Error::OpenStreetMapUrl);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("The description is too long")]
    Description,
    #[error("Invalid Wikidata item")]
    WikidataItem,
}

impl Validate for Skill {
    type Error = SkillInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name, MAX_NAME_LEN) {
            return Err(Self::Error::Name);
        }
        if !fits(self.description.as_deref(), MAX_DESCRIPTION_LEN) {
            return Err(Self::Error::Description);
        }
        if let Some(item) = &self.wikidata_item {
            if !is_valid_wikidata_qid(item, MAX_SKILL_ITEM_LEN) {
                return Err(Self::Error::WikidataItem);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrganizationInvalidation {
    #[error("Invalid display name")]
    DisplayName,
    #[error("Invalid acronym")]
    Acronym,
}

impl Validate for Organization {
    type Error = OrganizationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.display_name, MAX_DISPLAY_NAME_LEN) {
            return Err(Self::Error::DisplayName);
        }
        if let Some(acronym) = &self.acronym {
            if !is_valid_name(acronym, MAX_ACRONYM_LEN) {
                return Err(Self::Error::Acronym);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileInvalidation {
    #[error("Invalid display name")]
    DisplayName,
    #[error("The text about yourself is too long")]
    About,
    #[error("Invalid Wikidata QID")]
    WikidataQid,
}

impl Validate for Profile {
    type Error = ProfileInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !fits(self.display_name.as_deref(), MAX_DISPLAY_NAME_LEN) {
            return Err(Self::Error::DisplayName);
        }
        if !fits(self.about.as_deref(), MAX_ABOUT_LEN) {
            return Err(Self::Error::About);
        }
        if let Some(qid) = &self.wikidata_qid {
            if !is_valid_wikidata_qid(qid, MAX_EVENT_QID_LEN) {
                return Err(Self::Error::WikidataQid);
            }
        }
        Ok(())
    }
}

/// Entries of the language and Wikimedia project catalogs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid autonym")]
    Autonym,
    #[error("Invalid code")]
    Code,
}

impl Validate for Language {
    type Error = CatalogInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name, MAX_NAME_LEN) {
            return Err(Self::Error::Name);
        }
        if !fits(self.autonym.as_deref(), MAX_NAME_LEN) {
            return Err(Self::Error::Autonym);
        }
        if !is_valid_name(&self.code, MAX_LANGUAGE_CODE_LEN) {
            return Err(Self::Error::Code);
        }
        Ok(())
    }
}

impl Validate for WikimediaProject {
    type Error = CatalogInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name, MAX_NAME_LEN) {
            return Err(Self::Error::Name);
        }
        if !is_valid_name(&self.code, MAX_PROJECT_CODE_LEN) {
            return Err(Self::Error::Code);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BugInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("The description is too long")]
    Description,
}

impl Validate for Bug {
    type Error = BugInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.title, MAX_BUG_TITLE_LEN) {
            return Err(Self::Error::Title);
        }
        if !fits(Some(&self.description), MAX_DESCRIPTION_LEN) {
            return Err(Self::Error::Description);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capx_entities::builders::*;

    #[test]
    fn wikidata_qids() {
        assert!(is_valid_wikidata_qid("Q42", 10));
        assert!(!is_valid_wikidata_qid("Q0", 10));
        assert!(!is_valid_wikidata_qid("42", 10));
        assert!(!is_valid_wikidata_qid("q42", 10));
        assert!(!is_valid_wikidata_qid("Q12345678901", 10));
    }

    #[test]
    fn openstreetmap_urls() {
        let valid: Url = "https://www.openstreetmap.org/node/123".parse().unwrap();
        let invalid: Url = "https://www.openstreetmap.org/foo/123".parse().unwrap();
        assert!(is_valid_openstreetmap_url(&valid));
        assert!(!is_valid_openstreetmap_url(&invalid));
    }

    #[test]
    fn usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("a.b@c+d-e_f"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("with space"));
    }

    #[test]
    fn event_end_before_begin() {
        let e = Event::build().begin(100).end(99).finish();
        assert_eq!(Err(EventInvalidation::EndDateBeforeStart), e.validate());
        let e = Event::build().begin(100).end(100).finish();
        assert!(e.validate().is_ok());
    }

    #[test]
    fn event_with_empty_name() {
        let e = Event::build().name("  ").finish();
        assert_eq!(Err(EventInvalidation::Name), e.validate());
    }

    #[test]
    fn skill_with_invalid_item() {
        let s = Skill::build().wikidata_item("X1").finish();
        assert_eq!(Err(SkillInvalidation::WikidataItem), s.validate());
        let s = Skill::build().wikidata_item("Q1").finish();
        assert!(s.validate().is_ok());
    }
}
