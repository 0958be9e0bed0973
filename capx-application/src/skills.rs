use super::*;

pub fn create_skill(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_skill: usecases::NewSkill,
) -> Result<Skill> {
    let skill = connections.exclusive()?.transaction(|conn| {
        usecases::create_skill(conn, actor, new_skill).map_err(|err| report("create skill", err))
    })?;
    info!("Created skill {} '{}'", skill.id, skill.name);
    Ok(skill)
}

pub fn update_skill(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::SkillUpdate,
) -> Result<Skill> {
    let skill = connections.exclusive()?.transaction(|conn| {
        usecases::update_skill(conn, actor, id, update).map_err(|err| report("update skill", err))
    })?;
    info!("Updated skill {}", skill.id);
    Ok(skill)
}

pub fn delete_skill(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_skill(conn, actor, id).map_err(|err| report("delete skill", err))
    })?;
    info!("Deleted skill {}", id);
    Ok(())
}

pub fn get_skill(connections: &sqlite::Connections, id: &Id) -> Result<Skill> {
    let conn = connections.shared()?;
    Ok(usecases::get_skill(&conn, id)?)
}

pub fn all_skills(connections: &sqlite::Connections) -> Result<Vec<Skill>> {
    let conn = connections.shared()?;
    Ok(usecases::all_skills(&conn)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_skill(name: &str, supertypes: Vec<Id>) -> usecases::NewSkill {
        usecases::NewSkill {
            name: name.into(),
            description: None,
            wikidata_item: None,
            supertypes,
        }
    }

    #[test]
    fn referenced_skills_cannot_be_deleted() {
        let fixture = BackendFixture::new();
        let admin = fixture.actor(&fixture.register_staff("admin"));
        let parent =
            super::create_skill(&fixture.db_connections, &admin, new_skill("Design", vec![]))
                .unwrap();
        let child = super::create_skill(
            &fixture.db_connections,
            &admin,
            new_skill("Graphic design", vec![parent.id.clone()]),
        )
        .unwrap();
        let err = super::delete_skill(&fixture.db_connections, &admin, &parent.id).unwrap_err();
        assert_eq!(
            "This skill is referenced by other items and cannot be deleted.",
            err.to_string()
        );
        super::delete_skill(&fixture.db_connections, &admin, &child.id).unwrap();
        super::delete_skill(&fixture.db_connections, &admin, &parent.id).unwrap();
        assert!(super::all_skills(&fixture.db_connections).unwrap().is_empty());
    }

    #[test]
    fn cycles_are_rejected() {
        let fixture = BackendFixture::new();
        let admin = fixture.actor(&fixture.register_staff("admin"));
        let a = super::create_skill(&fixture.db_connections, &admin, new_skill("A", vec![]))
            .unwrap();
        let b = super::create_skill(&fixture.db_connections, &admin, new_skill("B", vec![a.id.clone()]))
            .unwrap();
        assert!(super::update_skill(
            &fixture.db_connections,
            &admin,
            &a.id,
            usecases::SkillUpdate {
                supertypes: Some(vec![b.id.clone()]),
                ..Default::default()
            },
        )
        .is_err());
        assert!(super::get_skill(&fixture.db_connections, &a.id)
            .unwrap()
            .supertypes
            .is_empty());
    }

    #[test]
    fn only_staff_creates_skills() {
        let fixture = BackendFixture::new();
        let alice = fixture.actor(&fixture.register("alice"));
        assert!(matches!(
            super::create_skill(&fixture.db_connections, &alice, new_skill("Design", vec![])),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden(_)
            )))
        ));
    }
}
