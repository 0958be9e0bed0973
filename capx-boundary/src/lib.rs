use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    /// The HTTP status code of the response.
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewAccount {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Account {
    pub id          : String,
    pub username    : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email       : Option<String>,
    pub is_staff    : bool,
    pub is_active   : bool,
    pub date_joined : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Virtual,
    InPerson,
    Hybrid,
}

/// Timestamps are seconds since the unix epoch.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Event {
    pub id               : String,
    pub name             : String,
    pub type_of_location : LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openstreetmap_id : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url              : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikidata_qid     : Option<String>,
    pub time_begin       : i64,
    pub time_end         : i64,
    pub creator          : Option<String>,
    pub related_skills   : Vec<String>,
    pub created_at       : i64,
    pub updated_at       : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEvent {
    pub name             : String,
    pub type_of_location : LocationType,
    #[serde(default)]
    pub openstreetmap_id : Option<String>,
    #[serde(default)]
    pub url              : Option<String>,
    #[serde(default)]
    pub wikidata_qid     : Option<String>,
    pub time_begin       : i64,
    pub time_end         : i64,
    #[serde(default)]
    pub related_skills   : Vec<String>,
}

/// Partial changes of an event.
///
/// Missing fields are kept, blank strings clear optional values.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct EventUpdate {
    pub name             : Option<String>,
    pub type_of_location : Option<LocationType>,
    pub openstreetmap_id : Option<String>,
    pub url              : Option<String>,
    pub wikidata_qid     : Option<String>,
    pub time_begin       : Option<i64>,
    pub time_end         : Option<i64>,
    pub related_skills   : Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Organizer,
    Committee,
    Volunteer,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Participation {
    pub id                    : String,
    pub event                 : String,
    pub participant           : String,
    pub role                  : ParticipantRole,
    pub confirmed_organizer   : bool,
    pub confirmed_participant : bool,
    /// Both sides agreed.
    pub confirmed             : bool,
    pub created_at            : i64,
    pub updated_at            : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewParticipation {
    pub event: String,
    pub participant: String,
    pub role: ParticipantRole,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct ParticipationUpdate {
    pub event                 : Option<String>,
    pub participant           : Option<String>,
    pub role                  : Option<ParticipantRole>,
    pub confirmed_organizer   : Option<bool>,
    pub confirmed_participant : Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    Organizer,
    Sponsor,
    Supporter,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OrgParticipation {
    pub id                     : String,
    pub event                  : String,
    pub organization           : String,
    pub role                   : OrgRole,
    pub confirmed_organizer    : bool,
    pub confirmed_organization : bool,
    pub confirmed              : bool,
    pub created_at             : i64,
    pub updated_at             : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewOrgParticipation {
    pub event: String,
    pub organization: String,
    pub role: OrgRole,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct OrgParticipationUpdate {
    pub event                  : Option<String>,
    pub organization           : Option<String>,
    pub role                   : Option<OrgRole>,
    pub confirmed_organizer    : Option<bool>,
    pub confirmed_organization : Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Skill {
    pub id            : String,
    pub name          : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikidata_item : Option<String>,
    pub supertypes    : Vec<String>,
    pub created_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewSkill {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub wikidata_item: Option<String>,
    #[serde(default)]
    pub supertypes: Vec<String>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub wikidata_item: Option<String>,
    pub supertypes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Territory {
    pub id: String,
    pub name: String,
    pub parents: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewTerritory {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Language {
    pub id      : String,
    pub name    : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonym : Option<String>,
    pub code    : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewLanguage {
    pub name: String,
    #[serde(default)]
    pub autonym: Option<String>,
    pub code: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct WikimediaProject {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewWikimediaProject {
    pub name: String,
    pub code: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Organization {
    pub id            : String,
    pub display_name  : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_project  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media  : Option<String>,
    pub territories   : Vec<String>,
    pub managers      : Vec<String>,
    pub created_at    : i64,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewOrganization {
    pub display_name  : String,
    pub acronym       : Option<String>,
    pub profile_image : Option<String>,
    pub home_project  : Option<String>,
    pub contact       : Option<String>,
    pub social_media  : Option<String>,
    pub territories   : Vec<String>,
    pub managers      : Vec<String>,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct OrganizationUpdate {
    pub display_name  : Option<String>,
    pub acronym       : Option<String>,
    pub profile_image : Option<String>,
    pub home_project  : Option<String>,
    pub contact       : Option<String>,
    pub social_media  : Option<String>,
    pub territories   : Option<Vec<String>>,
    pub managers      : Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "kebab-case")]
pub enum Pronoun {
    HeHim,
    SheHer,
    TheyThem,
    NotSpecified,
    Other,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Profile {
    pub account            : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronoun            : Option<Pronoun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about              : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image      : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikidata_qid       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_alt           : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team               : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact            : Option<String>,
    pub social             : Vec<String>,
    pub territories        : Vec<String>,
    pub affiliations       : Vec<String>,
    pub languages          : Vec<String>,
    pub wikimedia_projects : Vec<String>,
    pub skills_known       : Vec<String>,
    pub skills_available   : Vec<String>,
    pub skills_wanted      : Vec<String>,
}

/// Partial changes of a profile.
///
/// Omitted skill sets are checked against the stored ones.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct ProfileUpdate {
    pub display_name       : Option<String>,
    pub pronoun            : Option<Pronoun>,
    pub about              : Option<String>,
    pub profile_image      : Option<String>,
    pub wikidata_qid       : Option<String>,
    pub wiki_alt           : Option<String>,
    pub team               : Option<String>,
    pub contact            : Option<String>,
    pub social             : Option<Vec<String>>,
    pub territories        : Option<Vec<String>>,
    pub affiliations       : Option<Vec<String>>,
    pub languages          : Option<Vec<String>>,
    pub wikimedia_projects : Option<Vec<String>>,
    pub skills_known       : Option<Vec<String>>,
    pub skills_available   : Option<Vec<String>>,
    pub skills_wanted      : Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum BugType {
    Error,
    NewFeature,
    Improvement,
    TestCase,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    ToDo,
    Assigned,
    InProgress,
    UnderReview,
    Done,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Bug {
    pub id          : String,
    pub author      : String,
    pub title       : String,
    pub description : String,
    pub bug_type    : BugType,
    pub status      : BugStatus,
    pub created_at  : i64,
    pub updated_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewBug {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub bug_type: Option<BugType>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct BugUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub bug_type: Option<BugType>,
    pub status: Option<BugStatus>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Attachment {
    pub id           : String,
    pub bug          : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type : Option<String>,
    pub size         : u64,
    pub uploaded_at  : i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_spelling() {
        let json = serde_json::to_string(&LocationType::InPerson).unwrap();
        assert_eq!(r#""in_person""#, json);
        let json = serde_json::to_string(&BugStatus::UnderReview).unwrap();
        assert_eq!(r#""under_review""#, json);
        let pronoun: Pronoun = serde_json::from_str(r#""they-them""#).unwrap();
        assert!(matches!(pronoun, Pronoun::TheyThem));
    }

    #[test]
    fn updates_accept_any_subset_of_fields() {
        let update: ParticipationUpdate =
            serde_json::from_str(r#"{"confirmed_participant":true}"#).unwrap();
        assert_eq!(Some(true), update.confirmed_participant);
        assert!(update.role.is_none());
        assert!(update.confirmed_organizer.is_none());

        let update: ProfileUpdate = serde_json::from_str(r#"{"skills_known":["a"]}"#).unwrap();
        assert_eq!(Some(vec!["a".to_string()]), update.skills_known);
        assert!(update.skills_available.is_none());
    }

    #[test]
    fn omitted_optional_fields_of_new_event() {
        let event: NewEvent = serde_json::from_str(
            r#"{"name":"Wikimania","type_of_location":"hybrid","time_begin":1,"time_end":2}"#,
        )
        .unwrap();
        assert!(event.url.is_none());
        assert!(event.related_skills.is_empty());
    }
}
