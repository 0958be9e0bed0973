use super::*;

#[get("/organizations")]
pub fn get_organizations(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Organization>> {
    let actor = auth.actor(db)?;
    Ok(json_list(flows::list_orgs(db, &actor)?))
}

#[post("/organizations", format = "application/json", data = "<new_org>")]
pub fn post_organization(
    db: &State<Connections>,
    auth: Auth,
    new_org: JsonResult<json::NewOrganization>,
) -> CreatedResult<json::Organization> {
    let actor = auth.actor(db)?;
    let new_org = from_json::new_organization(new_org?.into_inner());
    let org = flows::create_org(db, &actor, new_org)?;
    created(org.into())
}

#[get("/organizations/<id>")]
pub fn get_organization(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
) -> Result<json::Organization> {
    let actor = auth.actor(db)?;
    let org = flows::get_org(db, &actor, &id.into())?;
    Ok(Json(org.into()))
}

#[put("/organizations/<id>", format = "application/json", data = "<update>")]
pub fn put_organization(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::OrganizationUpdate>,
) -> Result<json::Organization> {
    let actor = auth.actor(db)?;
    let update = from_json::organization_update(update?.into_inner());
    let org = flows::update_org(db, &actor, &id.into(), update)?;
    Ok(Json(org.into()))
}

#[delete("/organizations/<id>")]
pub fn delete_organization(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_org(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}

#[get("/territories")]
pub fn get_territories(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Territory>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_territories(db)?))
}

#[post("/territories", format = "application/json", data = "<new_territory>")]
pub fn post_territory(
    db: &State<Connections>,
    auth: Auth,
    new_territory: JsonResult<json::NewTerritory>,
) -> CreatedResult<json::Territory> {
    let actor = auth.actor(db)?;
    let new_territory = from_json::new_territory(new_territory?.into_inner());
    let territory = flows::create_territory(db, &actor, new_territory)?;
    created(territory.into())
}

#[get("/languages")]
pub fn get_languages(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Language>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_languages(db)?))
}

#[post("/languages", format = "application/json", data = "<new_language>")]
pub fn post_language(
    db: &State<Connections>,
    auth: Auth,
    new_language: JsonResult<json::NewLanguage>,
) -> CreatedResult<json::Language> {
    let actor = auth.actor(db)?;
    let new_language = from_json::new_language(new_language?.into_inner());
    let language = flows::create_language(db, &actor, new_language)?;
    created(language.into())
}

#[get("/wikimedia_projects")]
pub fn get_wikimedia_projects(
    db: &State<Connections>,
    auth: Auth,
) -> Result<Vec<json::WikimediaProject>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_wikimedia_projects(db)?))
}

#[post("/wikimedia_projects", format = "application/json", data = "<new_project>")]
pub fn post_wikimedia_project(
    db: &State<Connections>,
    auth: Auth,
    new_project: JsonResult<json::NewWikimediaProject>,
) -> CreatedResult<json::WikimediaProject> {
    let actor = auth.actor(db)?;
    let new_project = from_json::new_wikimedia_project(new_project?.into_inner());
    let project = flows::create_wikimedia_project(db, &actor, new_project)?;
    created(project.into())
}
