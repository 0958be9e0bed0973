#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = accounts, treat_none_as_null = true)]
pub struct NewAccount<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: Option<&'a str>,
    pub password: &'a str,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: i64,
}

#[derive(Queryable)]
pub struct AccountEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = skills, treat_none_as_null = true)]
pub struct NewSkill<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub wikidata_item: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct SkillEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub wikidata_item: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = skill_supertypes)]
pub struct NewSkillSupertype {
    pub skill_rowid: i64,
    pub supertype_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = territories)]
pub struct NewTerritory<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct TerritoryEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = territory_parents)]
pub struct NewTerritoryParent {
    pub territory_rowid: i64,
    pub parent_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = languages)]
pub struct NewLanguage<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub autonym: Option<&'a str>,
    pub code: &'a str,
}

#[derive(Queryable)]
pub struct LanguageEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub autonym: Option<String>,
    pub code: String,
}

#[derive(Insertable)]
#[diesel(table_name = wikimedia_projects)]
pub struct NewWikimediaProject<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub code: &'a str,
}

#[derive(Queryable)]
pub struct WikimediaProjectEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = organizations, treat_none_as_null = true)]
pub struct NewOrganization<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
    pub acronym: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub home_project: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub created_at: i64,
    pub social_media: Option<&'a str>,
}

#[derive(Queryable)]
pub struct OrganizationEntity {
    pub rowid: i64,
    pub id: String,
    pub display_name: String,
    pub acronym: Option<String>,
    pub profile_image: Option<String>,
    pub home_project: Option<String>,
    pub contact: Option<String>,
    pub created_at: i64,
    pub social_media: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = organization_managers)]
pub struct NewOrganizationManager {
    pub org_rowid: i64,
    pub account_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = organization_territories)]
pub struct NewOrganizationTerritory {
    pub org_rowid: i64,
    pub territory_rowid: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = profiles, treat_none_as_null = true)]
pub struct NewProfile<'a> {
    pub account_rowid: i64,
    pub display_name: Option<&'a str>,
    pub pronoun: Option<&'a str>,
    pub about: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub wikidata_qid: Option<&'a str>,
    pub wiki_alt: Option<&'a str>,
    pub team: Option<&'a str>,
    pub contact: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ProfileEntity {
    pub account_id: String,
    pub account_rowid: i64,
    pub display_name: Option<String>,
    pub pronoun: Option<String>,
    pub about: Option<String>,
    pub profile_image: Option<String>,
    pub wikidata_qid: Option<String>,
    pub wiki_alt: Option<String>,
    pub team: Option<String>,
    pub contact: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = profile_skills)]
pub struct NewProfileSkill {
    pub account_rowid: i64,
    pub skill_rowid: i64,
    pub kind: i16,
}

#[derive(Insertable)]
#[diesel(table_name = profile_territories)]
pub struct NewProfileTerritory {
    pub account_rowid: i64,
    pub territory_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = profile_affiliations)]
pub struct NewProfileAffiliation {
    pub account_rowid: i64,
    pub org_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = profile_languages)]
pub struct NewProfileLanguage {
    pub account_rowid: i64,
    pub language_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = profile_wikimedia_projects)]
pub struct NewProfileWikimediaProject {
    pub account_rowid: i64,
    pub project_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = profile_links)]
pub struct NewProfileLink<'a> {
    pub account_rowid: i64,
    pub position: i64,
    pub url: &'a str,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events, treat_none_as_null = true)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub location_type: i16,
    pub openstreetmap_id: Option<&'a str>,
    pub url: Option<&'a str>,
    pub wikidata_qid: Option<&'a str>,
    pub time_begin: i64,
    pub time_end: i64,
    pub creator_rowid: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub location_type: i16,
    pub openstreetmap_id: Option<String>,
    pub url: Option<String>,
    pub wikidata_qid: Option<String>,
    pub time_begin: i64,
    pub time_end: i64,
    pub creator_rowid: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_skills)]
pub struct NewEventSkill {
    pub event_rowid: i64,
    pub skill_rowid: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = event_participants)]
pub struct NewParticipation<'a> {
    pub id: &'a str,
    pub event_rowid: i64,
    pub account_rowid: i64,
    pub role: i16,
    pub confirmed_organizer: bool,
    pub confirmed_participant: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct ParticipationEntity {
    pub id: String,
    // Joined columns
    pub event_id: String,
    pub account_id: String,
    pub role: i16,
    pub confirmed_organizer: bool,
    pub confirmed_participant: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = event_organizations)]
pub struct NewOrgParticipation<'a> {
    pub id: &'a str,
    pub event_rowid: i64,
    pub org_rowid: i64,
    pub role: i16,
    pub confirmed_organizer: bool,
    pub confirmed_organization: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct OrgParticipationEntity {
    pub id: String,
    // Joined columns
    pub event_id: String,
    pub org_id: String,
    pub role: i16,
    pub confirmed_organizer: bool,
    pub confirmed_organization: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = bugs)]
pub struct NewBug<'a> {
    pub id: &'a str,
    pub author_rowid: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub bug_type: i16,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct BugEntity {
    pub id: String,
    // Joined column
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub bug_type: i16,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = attachments)]
pub struct NewAttachment<'a> {
    pub id: &'a str,
    pub bug_rowid: i64,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub size: i64,
    pub content: &'a [u8],
    pub uploaded_at: i64,
}

#[derive(Queryable)]
pub struct AttachmentEntity {
    pub id: String,
    // Joined column
    pub bug_id: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: i64,
    pub uploaded_at: i64,
}
