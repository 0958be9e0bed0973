use super::*;

pub fn create_language(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_language: usecases::NewLanguage,
) -> Result<Language> {
    let language = connections.exclusive()?.transaction(|conn| {
        usecases::create_language(conn, actor, new_language)
            .map_err(|err| report("create language", err))
    })?;
    info!("Created language {} '{}'", language.id, language.code);
    Ok(language)
}

pub fn all_languages(connections: &sqlite::Connections) -> Result<Vec<Language>> {
    let conn = connections.shared()?;
    Ok(usecases::all_languages(&conn)?)
}

pub fn create_wikimedia_project(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_project: usecases::NewWikimediaProject,
) -> Result<WikimediaProject> {
    let project = connections.exclusive()?.transaction(|conn| {
        usecases::create_wikimedia_project(conn, actor, new_project)
            .map_err(|err| report("create Wikimedia project", err))
    })?;
    info!("Created Wikimedia project {} '{}'", project.id, project.code);
    Ok(project)
}

pub fn all_wikimedia_projects(connections: &sqlite::Connections) -> Result<Vec<WikimediaProject>> {
    let conn = connections.shared()?;
    Ok(usecases::all_wikimedia_projects(&conn)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn languages_are_sorted_by_name() {
        let fixture = BackendFixture::new();
        let admin = fixture.actor(&fixture.register_staff("admin"));
        for (name, code) in [("Portuguese", "pt"), ("German", "de")] {
            super::create_language(
                &fixture.db_connections,
                &admin,
                usecases::NewLanguage {
                    name: name.into(),
                    autonym: None,
                    code: code.into(),
                },
            )
            .unwrap();
        }
        let codes: Vec<_> = super::all_languages(&fixture.db_connections)
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(vec!["de", "pt"], codes);
    }

    #[test]
    fn users_cannot_create_wikimedia_projects() {
        let fixture = BackendFixture::new();
        let alice = fixture.actor(&fixture.register("alice"));
        let err = super::create_wikimedia_project(
            &fixture.db_connections,
            &alice,
            usecases::NewWikimediaProject {
                name: "Wikisource".into(),
                code: "wikisource".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden(_)))
        ));
        assert!(super::all_wikimedia_projects(&fixture.db_connections)
            .unwrap()
            .is_empty());
    }
}
