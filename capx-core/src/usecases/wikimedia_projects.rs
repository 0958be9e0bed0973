use super::prelude::*;
use crate::{
    authorization::{
        wikimedia_project::{authorize, WikimediaProjectAction},
        Actor,
    },
    util::validate::Validate,
};

#[derive(Debug, Clone)]
pub struct NewWikimediaProject {
    pub name: String,
    pub code: String,
}

pub fn create_wikimedia_project<R: WikimediaProjectRepo>(
    repo: &R,
    actor: &Actor,
    new_project: NewWikimediaProject,
) -> Result<WikimediaProject> {
    authorize(actor, WikimediaProjectAction::Create)?;
    let NewWikimediaProject { name, code } = new_project;
    let project = WikimediaProject {
        id: Id::new(),
        name: name.trim().to_owned(),
        code: code.trim().to_owned(),
    };
    project.validate()?;
    log::debug!("Creating new Wikimedia project: code = {}", project.code);
    repo.create_wikimedia_project(&project)?;
    Ok(project)
}

pub fn all_wikimedia_projects<R: WikimediaProjectRepo>(repo: &R) -> Result<Vec<WikimediaProject>> {
    Ok(repo.all_wikimedia_projects()?)
}
