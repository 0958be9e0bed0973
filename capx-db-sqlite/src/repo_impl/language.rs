use super::*;

impl<'a> LanguageRepo for DbReadOnly<'a> {
    fn create_language(&self, _language: &Language) -> Result<()> {
        unreachable!();
    }
    fn get_language(&self, id: &Id) -> Result<Language> {
        get_language(&mut self.conn.borrow_mut(), id)
    }
    fn all_languages(&self) -> Result<Vec<Language>> {
        all_languages(&mut self.conn.borrow_mut())
    }
}

impl<'a> LanguageRepo for DbConnection<'a> {
    fn create_language(&self, language: &Language) -> Result<()> {
        create_language(&mut self.conn.borrow_mut(), language)
    }
    fn get_language(&self, id: &Id) -> Result<Language> {
        get_language(&mut self.conn.borrow_mut(), id)
    }
    fn all_languages(&self) -> Result<Vec<Language>> {
        all_languages(&mut self.conn.borrow_mut())
    }
}

impl<'a> WikimediaProjectRepo for DbReadOnly<'a> {
    fn create_wikimedia_project(&self, _project: &WikimediaProject) -> Result<()> {
        unreachable!();
    }
    fn get_wikimedia_project(&self, id: &Id) -> Result<WikimediaProject> {
        get_wikimedia_project(&mut self.conn.borrow_mut(), id)
    }
    fn all_wikimedia_projects(&self) -> Result<Vec<WikimediaProject>> {
        all_wikimedia_projects(&mut self.conn.borrow_mut())
    }
}

impl<'a> WikimediaProjectRepo for DbConnection<'a> {
    fn create_wikimedia_project(&self, project: &WikimediaProject) -> Result<()> {
        create_wikimedia_project(&mut self.conn.borrow_mut(), project)
    }
    fn get_wikimedia_project(&self, id: &Id) -> Result<WikimediaProject> {
        get_wikimedia_project(&mut self.conn.borrow_mut(), id)
    }
    fn all_wikimedia_projects(&self) -> Result<Vec<WikimediaProject>> {
        all_wikimedia_projects(&mut self.conn.borrow_mut())
    }
}

fn create_language(conn: &mut SqliteConnection, language: &Language) -> Result<()> {
    let Language {
        id,
        name,
        autonym,
        code,
    } = language;
    diesel::insert_into(schema::languages::table)
        .values(&models::NewLanguage {
            id: id.as_str(),
            name,
            autonym: autonym.as_deref(),
            code,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_language(conn: &mut SqliteConnection, id: &Id) -> Result<Language> {
    use schema::languages::dsl;
    let entity = schema::languages::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::LanguageEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_language(entity))
}

fn all_languages(conn: &mut SqliteConnection) -> Result<Vec<Language>> {
    use schema::languages::dsl;
    Ok(schema::languages::table
        .order_by(dsl::name)
        .load::<models::LanguageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_language)
        .collect())
}

fn load_language(entity: models::LanguageEntity) -> Language {
    let models::LanguageEntity {
        rowid: _,
        id,
        name,
        autonym,
        code,
    } = entity;
    Language {
        id: id.into(),
        name,
        autonym,
        code,
    }
}

fn create_wikimedia_project(conn: &mut SqliteConnection, project: &WikimediaProject) -> Result<()> {
    let WikimediaProject { id, name, code } = project;
    diesel::insert_into(schema::wikimedia_projects::table)
        .values(&models::NewWikimediaProject {
            id: id.as_str(),
            name,
            code,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_wikimedia_project(conn: &mut SqliteConnection, id: &Id) -> Result<WikimediaProject> {
    use schema::wikimedia_projects::dsl;
    let entity = schema::wikimedia_projects::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::WikimediaProjectEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_wikimedia_project(entity))
}

fn all_wikimedia_projects(conn: &mut SqliteConnection) -> Result<Vec<WikimediaProject>> {
    use schema::wikimedia_projects::dsl;
    Ok(schema::wikimedia_projects::table
        .order_by(dsl::name)
        .load::<models::WikimediaProjectEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_wikimedia_project)
        .collect())
}

fn load_wikimedia_project(entity: models::WikimediaProjectEntity) -> WikimediaProject {
    let models::WikimediaProjectEntity {
        rowid: _,
        id,
        name,
        code,
    } = entity;
    WikimediaProject {
        id: id.into(),
        name,
        code,
    }
}
