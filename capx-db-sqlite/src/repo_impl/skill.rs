use std::collections::HashSet;

use super::*;

impl<'a> SkillRepo for DbReadOnly<'a> {
    fn create_skill(&self, _skill: &Skill) -> Result<()> {
        unreachable!();
    }
    fn update_skill(&self, _skill: &Skill) -> Result<()> {
        unreachable!();
    }
    fn delete_skill(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_skill(&self, id: &Id) -> Result<Skill> {
        get_skill(&mut self.conn.borrow_mut(), id)
    }
    fn all_skills(&self) -> Result<Vec<Skill>> {
        all_skills(&mut self.conn.borrow_mut())
    }
    fn subtypes_of_skill(&self, id: &Id) -> Result<Vec<Id>> {
        subtypes_of_skill(&mut self.conn.borrow_mut(), id)
    }
    fn ancestors_of_skills(&self, ids: &[Id]) -> Result<Vec<Skill>> {
        ancestors_of_skills(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> SkillRepo for DbConnection<'a> {
    fn create_skill(&self, skill: &Skill) -> Result<()> {
        create_skill(&mut self.conn.borrow_mut(), skill)
    }
    fn update_skill(&self, skill: &Skill) -> Result<()> {
        update_skill(&mut self.conn.borrow_mut(), skill)
    }
    fn delete_skill(&self, id: &Id) -> Result<()> {
        delete_skill(&mut self.conn.borrow_mut(), id)
    }
    fn get_skill(&self, id: &Id) -> Result<Skill> {
        get_skill(&mut self.conn.borrow_mut(), id)
    }
    fn all_skills(&self) -> Result<Vec<Skill>> {
        all_skills(&mut self.conn.borrow_mut())
    }
    fn subtypes_of_skill(&self, id: &Id) -> Result<Vec<Id>> {
        subtypes_of_skill(&mut self.conn.borrow_mut(), id)
    }
    fn ancestors_of_skills(&self, ids: &[Id]) -> Result<Vec<Skill>> {
        ancestors_of_skills(&mut self.conn.borrow_mut(), ids)
    }
}

fn new_skill(skill: &Skill) -> models::NewSkill<'_> {
    let Skill {
        id,
        name,
        description,
        wikidata_item,
        supertypes: _,
        created_at,
    } = skill;
    models::NewSkill {
        id: id.as_str(),
        name,
        description: description.as_deref(),
        wikidata_item: wikidata_item.as_deref(),
        created_at: created_at.as_millis(),
    }
}

fn create_skill(conn: &mut SqliteConnection, skill: &Skill) -> Result<()> {
    diesel::insert_into(schema::skills::table)
        .values(&new_skill(skill))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let skill_rowid = resolve_skill_rowid(conn, &skill.id)?;
    insert_supertypes(conn, skill_rowid, &skill.supertypes)
}

fn update_skill(conn: &mut SqliteConnection, skill: &Skill) -> Result<()> {
    use schema::{skill_supertypes::dsl as sup_dsl, skills::dsl};
    let count = diesel::update(schema::skills::table.filter(dsl::id.eq(skill.id.as_str())))
        .set(&new_skill(skill))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    let skill_rowid = resolve_skill_rowid(conn, &skill.id)?;
    diesel::delete(schema::skill_supertypes::table.filter(sup_dsl::skill_rowid.eq(skill_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_supertypes(conn, skill_rowid, &skill.supertypes)
}

fn insert_supertypes(conn: &mut SqliteConnection, skill_rowid: i64, supertypes: &[Id]) -> Result<()> {
    for supertype in supertypes {
        let supertype_rowid = resolve_skill_rowid(conn, supertype)?;
        diesel::insert_into(schema::skill_supertypes::table)
            .values(&models::NewSkillSupertype {
                skill_rowid,
                supertype_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

// References from events and profiles are deleted by the database.
fn delete_skill(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::skills::dsl;
    let count = diesel::delete(schema::skills::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_skill(conn: &mut SqliteConnection, id: &Id) -> Result<Skill> {
    use schema::skills::dsl;
    let entity = schema::skills::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::SkillEntity>(conn)
        .map_err(from_diesel_err)?;
    load_skill(conn, entity)
}

fn all_skills(conn: &mut SqliteConnection) -> Result<Vec<Skill>> {
    use schema::skills::dsl;
    let entities = schema::skills::table
        .order_by(dsl::name)
        .load::<models::SkillEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_skill(conn, entity))
        .collect()
}

fn subtypes_of_skill(conn: &mut SqliteConnection, id: &Id) -> Result<Vec<Id>> {
    use schema::{skill_supertypes::dsl as sup_dsl, skills::dsl};
    let supertype_rowid = resolve_skill_rowid(conn, id)?;
    Ok(schema::skill_supertypes::table
        .inner_join(schema::skills::table.on(dsl::rowid.eq(sup_dsl::skill_rowid)))
        .select(dsl::id)
        .filter(sup_dsl::supertype_rowid.eq(supertype_rowid))
        .order_by(dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

// Walks up the hierarchy one level per query.
fn ancestors_of_skills(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<Skill>> {
    use schema::{skill_supertypes::dsl as sup_dsl, skills::dsl};
    let ids: Vec<_> = ids.iter().map(Id::as_str).collect();
    let mut pending = schema::skills::table
        .select(dsl::rowid)
        .filter(dsl::id.eq_any(ids))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?;
    let mut visited = HashSet::new();
    while !pending.is_empty() {
        visited.extend(pending.iter().copied());
        let frontier = std::mem::take(&mut pending);
        pending = schema::skill_supertypes::table
            .select(sup_dsl::supertype_rowid)
            .filter(sup_dsl::skill_rowid.eq_any(frontier))
            .distinct()
            .load::<i64>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .filter(|rowid| !visited.contains(rowid))
            .collect();
    }
    let rowids: Vec<_> = visited.into_iter().collect();
    let entities = schema::skills::table
        .filter(dsl::rowid.eq_any(rowids))
        .order_by(dsl::name)
        .load::<models::SkillEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_skill(conn, entity))
        .collect()
}

fn load_skill(conn: &mut SqliteConnection, entity: models::SkillEntity) -> Result<Skill> {
    use schema::{skill_supertypes::dsl as sup_dsl, skills::dsl};
    let models::SkillEntity {
        rowid,
        id,
        name,
        description,
        wikidata_item,
        created_at,
    } = entity;
    let supertypes = schema::skill_supertypes::table
        .inner_join(schema::skills::table.on(dsl::rowid.eq(sup_dsl::supertype_rowid)))
        .select(dsl::id)
        .filter(sup_dsl::skill_rowid.eq(rowid))
        .order_by(dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect();
    Ok(Skill {
        id: id.into(),
        name,
        description,
        wikidata_item,
        supertypes,
        created_at: TimestampMs::from_millis(created_at),
    })
}
