use super::*;

#[get("/events")]
pub fn get_events(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Event>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_events(db)?))
}

#[post("/events", format = "application/json", data = "<new_event>")]
pub fn post_event(
    db: &State<Connections>,
    auth: Auth,
    new_event: JsonResult<json::NewEvent>,
) -> CreatedResult<json::Event> {
    let actor = auth.actor(db)?;
    let new_event = from_json::new_event(new_event?.into_inner());
    let event = flows::create_event(db, &actor, new_event)?;
    created(event.into())
}

#[get("/events/<id>")]
pub fn get_event(db: &State<Connections>, auth: Auth, id: &str) -> Result<json::Event> {
    auth.actor(db)?;
    let event = flows::get_event(db, &id.into())?;
    Ok(Json(event.into()))
}

#[put("/events/<id>", format = "application/json", data = "<event>")]
pub fn put_event(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    event: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let actor = auth.actor(db)?;
    let update = from_json::event_replacement(event?.into_inner());
    let event = flows::update_event(db, &actor, &id.into(), update)?;
    Ok(Json(event.into()))
}

#[patch("/events/<id>", format = "application/json", data = "<update>")]
pub fn patch_event(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::EventUpdate>,
) -> Result<json::Event> {
    let actor = auth.actor(db)?;
    let update = from_json::event_update(update?.into_inner());
    let event = flows::update_event(db, &actor, &id.into(), update)?;
    Ok(Json(event.into()))
}

#[delete("/events/<id>")]
pub fn delete_event(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_event(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}
