use super::*;

const SKILL_KIND_KNOWN: i16 = 0;
const SKILL_KIND_AVAILABLE: i16 = 1;
const SKILL_KIND_WANTED: i16 = 2;

impl<'a> ProfileRepo for DbReadOnly<'a> {
    fn create_profile(&self, _profile: &Profile) -> Result<()> {
        unreachable!();
    }
    fn update_profile(&self, _profile: &Profile) -> Result<()> {
        unreachable!();
    }
    fn get_profile(&self, account: &Id) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), account)
    }
    fn all_profiles(&self) -> Result<Vec<Profile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
}

impl<'a> ProfileRepo for DbConnection<'a> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn get_profile(&self, account: &Id) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), account)
    }
    fn all_profiles(&self) -> Result<Vec<Profile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
}

fn new_profile(account_rowid: i64, profile: &Profile) -> models::NewProfile<'_> {
    let Profile {
        account: _,
        display_name,
        pronoun,
        about,
        profile_image,
        wikidata_qid,
        wiki_alt,
        team,
        contact,
        social: _,
        territories: _,
        affiliations: _,
        languages: _,
        wikimedia_projects: _,
        skills: _,
    } = profile;
    models::NewProfile {
        account_rowid,
        display_name: display_name.as_deref(),
        pronoun: pronoun.as_ref().map(AsRef::as_ref),
        about: about.as_deref(),
        profile_image: profile_image.as_ref().map(Url::as_str),
        wikidata_qid: wikidata_qid.as_deref(),
        wiki_alt: wiki_alt.as_deref(),
        team: team.as_deref(),
        contact: contact.as_deref(),
    }
}

fn create_profile(conn: &mut SqliteConnection, profile: &Profile) -> Result<()> {
    let account_rowid = resolve_account_rowid(conn, &profile.account)?;
    diesel::insert_into(schema::profiles::table)
        .values(&new_profile(account_rowid, profile))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_profile_relations(conn, account_rowid, profile)
}

fn update_profile(conn: &mut SqliteConnection, profile: &Profile) -> Result<()> {
    use schema::profiles::dsl;
    let account_rowid = resolve_account_rowid(conn, &profile.account)?;
    let count = diesel::update(schema::profiles::table.filter(dsl::account_rowid.eq(account_rowid)))
        .set(&new_profile(account_rowid, profile))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    delete_profile_relations(conn, account_rowid)?;
    insert_profile_relations(conn, account_rowid, profile)
}

fn delete_profile_relations(conn: &mut SqliteConnection, account_rowid: i64) -> Result<()> {
    use schema::{
        profile_affiliations::dsl as aff_dsl, profile_languages::dsl as lang_dsl,
        profile_links::dsl as link_dsl, profile_skills::dsl as skill_dsl,
        profile_territories::dsl as terr_dsl, profile_wikimedia_projects::dsl as proj_dsl,
    };
    diesel::delete(schema::profile_skills::table.filter(skill_dsl::account_rowid.eq(account_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(
        schema::profile_territories::table.filter(terr_dsl::account_rowid.eq(account_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(
        schema::profile_affiliations::table.filter(aff_dsl::account_rowid.eq(account_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(
        schema::profile_languages::table.filter(lang_dsl::account_rowid.eq(account_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(
        schema::profile_wikimedia_projects::table.filter(proj_dsl::account_rowid.eq(account_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(schema::profile_links::table.filter(link_dsl::account_rowid.eq(account_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn insert_profile_relations(
    conn: &mut SqliteConnection,
    account_rowid: i64,
    profile: &Profile,
) -> Result<()> {
    let ProfileSkills {
        known,
        available,
        wanted,
    } = &profile.skills;
    let skill_sets = [
        (SKILL_KIND_KNOWN, known),
        (SKILL_KIND_AVAILABLE, available),
        (SKILL_KIND_WANTED, wanted),
    ];
    for (kind, skills) in skill_sets {
        for skill in skills {
            let skill_rowid = resolve_skill_rowid(conn, skill)?;
            diesel::insert_into(schema::profile_skills::table)
                .values(&models::NewProfileSkill {
                    account_rowid,
                    skill_rowid,
                    kind,
                })
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
    }
    for territory_rowid in resolve_territory_rowids(conn, &profile.territories)? {
        diesel::insert_into(schema::profile_territories::table)
            .values(&models::NewProfileTerritory {
                account_rowid,
                territory_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for org in &profile.affiliations {
        let org_rowid = resolve_organization_rowid(conn, org)?;
        diesel::insert_into(schema::profile_affiliations::table)
            .values(&models::NewProfileAffiliation {
                account_rowid,
                org_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for language in &profile.languages {
        let language_rowid = resolve_language_rowid(conn, language)?;
        diesel::insert_into(schema::profile_languages::table)
            .values(&models::NewProfileLanguage {
                account_rowid,
                language_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for project in &profile.wikimedia_projects {
        let project_rowid = resolve_wikimedia_project_rowid(conn, project)?;
        diesel::insert_into(schema::profile_wikimedia_projects::table)
            .values(&models::NewProfileWikimediaProject {
                account_rowid,
                project_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    for (position, url) in profile.social.iter().enumerate() {
        diesel::insert_into(schema::profile_links::table)
            .values(&models::NewProfileLink {
                account_rowid,
                position: position as i64,
                url: url.as_str(),
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn get_profile(conn: &mut SqliteConnection, account: &Id) -> Result<Profile> {
    use schema::{accounts::dsl as acc_dsl, profiles::dsl};
    let entity = schema::profiles::table
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::account_rowid)))
        .select((
            acc_dsl::id,
            dsl::account_rowid,
            dsl::display_name,
            dsl::pronoun,
            dsl::about,
            dsl::profile_image,
            dsl::wikidata_qid,
            dsl::wiki_alt,
            dsl::team,
            dsl::contact,
        ))
        .filter(acc_dsl::id.eq(account.as_str()))
        .first::<models::ProfileEntity>(conn)
        .map_err(from_diesel_err)?;
    load_profile(conn, entity)
}

fn all_profiles(conn: &mut SqliteConnection) -> Result<Vec<Profile>> {
    use schema::{accounts::dsl as acc_dsl, profiles::dsl};
    let entities = schema::profiles::table
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::account_rowid)))
        .select((
            acc_dsl::id,
            dsl::account_rowid,
            dsl::display_name,
            dsl::pronoun,
            dsl::about,
            dsl::profile_image,
            dsl::wikidata_qid,
            dsl::wiki_alt,
            dsl::team,
            dsl::contact,
        ))
        .order_by(acc_dsl::username)
        .load::<models::ProfileEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_profile(conn, entity))
        .collect()
}

fn load_profile(conn: &mut SqliteConnection, entity: models::ProfileEntity) -> Result<Profile> {
    let models::ProfileEntity {
        account_id,
        account_rowid,
        display_name,
        pronoun,
        about,
        profile_image,
        wikidata_qid,
        wiki_alt,
        team,
        contact,
    } = entity;
    let pronoun = pronoun
        .map(|pronoun| {
            pronoun
                .parse::<Pronoun>()
                .map_err(|_| anyhow!("Invalid pronoun: {pronoun}"))
        })
        .transpose()?;
    Ok(Profile {
        account: account_id.into(),
        display_name,
        pronoun,
        about,
        profile_image: profile_image.and_then(load_url),
        wikidata_qid,
        wiki_alt,
        team,
        contact,
        social: load_profile_links(conn, account_rowid)?,
        territories: load_profile_territories(conn, account_rowid)?,
        affiliations: load_profile_affiliations(conn, account_rowid)?,
        languages: load_profile_languages(conn, account_rowid)?,
        wikimedia_projects: load_profile_wikimedia_projects(conn, account_rowid)?,
        skills: load_profile_skills(conn, account_rowid)?,
    })
}

fn load_profile_skills(conn: &mut SqliteConnection, account_rowid: i64) -> Result<ProfileSkills> {
    use schema::{profile_skills::dsl, skills::dsl as skill_dsl};
    let rows = schema::profile_skills::table
        .inner_join(schema::skills::table.on(skill_dsl::rowid.eq(dsl::skill_rowid)))
        .select((skill_dsl::id, dsl::kind))
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(skill_dsl::id)
        .load::<(String, i16)>(conn)
        .map_err(from_diesel_err)?;
    let mut skills = ProfileSkills::default();
    for (id, kind) in rows {
        let set = match kind {
            SKILL_KIND_KNOWN => &mut skills.known,
            SKILL_KIND_AVAILABLE => &mut skills.available,
            SKILL_KIND_WANTED => &mut skills.wanted,
            _ => return Err(anyhow!("Invalid profile skill kind: {kind}").into()),
        };
        set.push(id.into());
    }
    Ok(skills)
}

fn load_profile_territories(conn: &mut SqliteConnection, account_rowid: i64) -> Result<Vec<Id>> {
    use schema::{profile_territories::dsl, territories::dsl as terr_dsl};
    Ok(schema::profile_territories::table
        .inner_join(schema::territories::table.on(terr_dsl::rowid.eq(dsl::territory_rowid)))
        .select(terr_dsl::id)
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(terr_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn load_profile_affiliations(conn: &mut SqliteConnection, account_rowid: i64) -> Result<Vec<Id>> {
    use schema::{organizations::dsl as org_dsl, profile_affiliations::dsl};
    Ok(schema::profile_affiliations::table
        .inner_join(schema::organizations::table.on(org_dsl::rowid.eq(dsl::org_rowid)))
        .select(org_dsl::id)
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(org_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn load_profile_languages(conn: &mut SqliteConnection, account_rowid: i64) -> Result<Vec<Id>> {
    use schema::{languages::dsl as lang_dsl, profile_languages::dsl};
    Ok(schema::profile_languages::table
        .inner_join(schema::languages::table.on(lang_dsl::rowid.eq(dsl::language_rowid)))
        .select(lang_dsl::id)
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(lang_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn load_profile_wikimedia_projects(
    conn: &mut SqliteConnection,
    account_rowid: i64,
) -> Result<Vec<Id>> {
    use schema::{profile_wikimedia_projects::dsl, wikimedia_projects::dsl as proj_dsl};
    Ok(schema::profile_wikimedia_projects::table
        .inner_join(schema::wikimedia_projects::table.on(proj_dsl::rowid.eq(dsl::project_rowid)))
        .select(proj_dsl::id)
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(proj_dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn load_profile_links(conn: &mut SqliteConnection, account_rowid: i64) -> Result<Vec<Url>> {
    use schema::profile_links::dsl;
    Ok(schema::profile_links::table
        .select(dsl::url)
        .filter(dsl::account_rowid.eq(account_rowid))
        .order_by(dsl::position)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .filter_map(load_url)
        .collect())
}
