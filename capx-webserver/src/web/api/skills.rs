use super::*;

#[get("/skills")]
pub fn get_skills(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Skill>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_skills(db)?))
}

#[post("/skills", format = "application/json", data = "<new_skill>")]
pub fn post_skill(
    db: &State<Connections>,
    auth: Auth,
    new_skill: JsonResult<json::NewSkill>,
) -> CreatedResult<json::Skill> {
    let actor = auth.actor(db)?;
    let new_skill = from_json::new_skill(new_skill?.into_inner());
    let skill = flows::create_skill(db, &actor, new_skill)?;
    created(skill.into())
}

#[get("/skills/<id>")]
pub fn get_skill(db: &State<Connections>, auth: Auth, id: &str) -> Result<json::Skill> {
    auth.actor(db)?;
    let skill = flows::get_skill(db, &id.into())?;
    Ok(Json(skill.into()))
}

#[put("/skills/<id>", format = "application/json", data = "<update>")]
pub fn put_skill(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::SkillUpdate>,
) -> Result<json::Skill> {
    let actor = auth.actor(db)?;
    let update = from_json::skill_update(update?.into_inner());
    let skill = flows::update_skill(db, &actor, &id.into(), update)?;
    Ok(Json(skill.into()))
}

#[delete("/skills/<id>")]
pub fn delete_skill(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_skill(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}
