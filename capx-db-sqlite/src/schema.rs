///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    accounts (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        email -> Nullable<Text>,
        password -> Text,
        is_staff -> Bool,
        is_active -> Bool,
        date_joined -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Skills
///////////////////////////////////////////////////////////////////////

table! {
    skills (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        wikidata_item -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    skill_supertypes (skill_rowid, supertype_rowid) {
        skill_rowid -> BigInt,
        supertype_rowid -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Territories
///////////////////////////////////////////////////////////////////////

table! {
    territories (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    territory_parents (territory_rowid, parent_rowid) {
        territory_rowid -> BigInt,
        parent_rowid -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Languages and Wikimedia projects
///////////////////////////////////////////////////////////////////////

table! {
    languages (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        autonym -> Nullable<Text>,
        code -> Text,
    }
}

table! {
    wikimedia_projects (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        code -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organizations (rowid) {
        rowid -> BigInt,
        id -> Text,
        display_name -> Text,
        acronym -> Nullable<Text>,
        profile_image -> Nullable<Text>,
        home_project -> Nullable<Text>,
        contact -> Nullable<Text>,
        created_at -> BigInt,
        social_media -> Nullable<Text>,
    }
}

table! {
    organization_managers (org_rowid, account_rowid) {
        org_rowid -> BigInt,
        account_rowid -> BigInt,
    }
}

table! {
    organization_territories (org_rowid, territory_rowid) {
        org_rowid -> BigInt,
        territory_rowid -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Profiles
///////////////////////////////////////////////////////////////////////

table! {
    profiles (account_rowid) {
        account_rowid -> BigInt,
        display_name -> Nullable<Text>,
        pronoun -> Nullable<Text>,
        about -> Nullable<Text>,
        profile_image -> Nullable<Text>,
        wikidata_qid -> Nullable<Text>,
        wiki_alt -> Nullable<Text>,
        team -> Nullable<Text>,
        contact -> Nullable<Text>,
    }
}

table! {
    profile_skills (account_rowid, skill_rowid, kind) {
        account_rowid -> BigInt,
        skill_rowid -> BigInt,
        kind -> SmallInt,
    }
}

table! {
    profile_territories (account_rowid, territory_rowid) {
        account_rowid -> BigInt,
        territory_rowid -> BigInt,
    }
}

table! {
    profile_affiliations (account_rowid, org_rowid) {
        account_rowid -> BigInt,
        org_rowid -> BigInt,
    }
}

table! {
    profile_languages (account_rowid, language_rowid) {
        account_rowid -> BigInt,
        language_rowid -> BigInt,
    }
}

table! {
    profile_wikimedia_projects (account_rowid, project_rowid) {
        account_rowid -> BigInt,
        project_rowid -> BigInt,
    }
}

table! {
    profile_links (account_rowid, position) {
        account_rowid -> BigInt,
        position -> BigInt,
        url -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        location_type -> SmallInt,
        openstreetmap_id -> Nullable<Text>,
        url -> Nullable<Text>,
        wikidata_qid -> Nullable<Text>,
        time_begin -> BigInt,
        time_end -> BigInt,
        creator_rowid -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    event_skills (event_rowid, skill_rowid) {
        event_rowid -> BigInt,
        skill_rowid -> BigInt,
    }
}

table! {
    event_participants (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_rowid -> BigInt,
        account_rowid -> BigInt,
        role -> SmallInt,
        confirmed_organizer -> Bool,
        confirmed_participant -> Bool,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    event_organizations (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_rowid -> BigInt,
        org_rowid -> BigInt,
        role -> SmallInt,
        confirmed_organizer -> Bool,
        confirmed_organization -> Bool,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Bugs
///////////////////////////////////////////////////////////////////////

table! {
    bugs (rowid) {
        rowid -> BigInt,
        id -> Text,
        author_rowid -> BigInt,
        title -> Text,
        description -> Text,
        bug_type -> SmallInt,
        status -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    attachments (rowid) {
        rowid -> BigInt,
        id -> Text,
        bug_rowid -> BigInt,
        file_name -> Nullable<Text>,
        content_type -> Nullable<Text>,
        size -> BigInt,
        content -> Binary,
        uploaded_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    accounts,
    attachments,
    bugs,
    event_organizations,
    event_participants,
    event_skills,
    events,
    languages,
    organization_managers,
    organization_territories,
    organizations,
    profile_affiliations,
    profile_languages,
    profile_links,
    profile_skills,
    profile_territories,
    profile_wikimedia_projects,
    profiles,
    skill_supertypes,
    skills,
    territories,
    territory_parents,
    wikimedia_projects,
);
