use super::*;

#[get("/events_participants?<event>")]
pub fn get_participations(
    db: &State<Connections>,
    auth: Auth,
    event: Option<&str>,
) -> Result<Vec<json::Participation>> {
    let actor = auth.actor(db)?;
    let event = event.map(Id::from);
    Ok(json_list(flows::list_participations(db, &actor, event.as_ref())?))
}

#[post("/events_participants", format = "application/json", data = "<new_participation>")]
pub fn post_participation(
    db: &State<Connections>,
    auth: Auth,
    new_participation: JsonResult<json::NewParticipation>,
) -> CreatedResult<json::Participation> {
    let actor = auth.actor(db)?;
    let new_participation = from_json::new_participation(new_participation?.into_inner());
    let participation = flows::add_participation(db, &actor, new_participation)?;
    created(participation.into())
}

#[get("/events_participants/<id>")]
pub fn get_participation(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
) -> Result<json::Participation> {
    let actor = auth.actor(db)?;
    let participation = flows::get_participation(db, &actor, &id.into())?;
    Ok(Json(participation.into()))
}

#[put("/events_participants/<id>", format = "application/json", data = "<update>")]
pub fn put_participation(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::ParticipationUpdate>,
) -> Result<json::Participation> {
    let actor = auth.actor(db)?;
    let update = from_json::participation_update(update?.into_inner());
    let participation = flows::update_participation(db, &actor, &id.into(), update)?;
    Ok(Json(participation.into()))
}

#[patch("/events_participants/<_id>")]
pub fn patch_participation(_id: &str) -> StatusResult {
    Err(ApiError::method_not_allowed("PATCH"))
}

#[delete("/events_participants/<id>")]
pub fn delete_participation(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_participation(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}

#[get("/events_organizations?<event>")]
pub fn get_org_participations(
    db: &State<Connections>,
    auth: Auth,
    event: Option<&str>,
) -> Result<Vec<json::OrgParticipation>> {
    let actor = auth.actor(db)?;
    let event = event.map(Id::from);
    Ok(json_list(flows::list_org_participations(db, &actor, event.as_ref())?))
}

#[post("/events_organizations", format = "application/json", data = "<new_participation>")]
pub fn post_org_participation(
    db: &State<Connections>,
    auth: Auth,
    new_participation: JsonResult<json::NewOrgParticipation>,
) -> CreatedResult<json::OrgParticipation> {
    let actor = auth.actor(db)?;
    let new_participation = from_json::new_org_participation(new_participation?.into_inner());
    let participation = flows::add_org_participation(db, &actor, new_participation)?;
    created(participation.into())
}

#[get("/events_organizations/<id>")]
pub fn get_org_participation(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
) -> Result<json::OrgParticipation> {
    let actor = auth.actor(db)?;
    let participation = flows::get_org_participation(db, &actor, &id.into())?;
    Ok(Json(participation.into()))
}

#[put("/events_organizations/<id>", format = "application/json", data = "<update>")]
pub fn put_org_participation(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::OrgParticipationUpdate>,
) -> Result<json::OrgParticipation> {
    let actor = auth.actor(db)?;
    let update = from_json::org_participation_update(update?.into_inner());
    let participation = flows::update_org_participation(db, &actor, &id.into(), update)?;
    Ok(Json(participation.into()))
}

#[patch("/events_organizations/<_id>")]
pub fn patch_org_participation(_id: &str) -> StatusResult {
    Err(ApiError::method_not_allowed("PATCH"))
}

#[delete("/events_organizations/<id>")]
pub fn delete_org_participation(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_org_participation(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}
