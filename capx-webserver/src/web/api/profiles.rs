use super::*;

#[get("/profiles")]
pub fn get_profiles(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Profile>> {
    auth.actor(db)?;
    Ok(json_list(flows::all_profiles(db)?))
}

#[get("/profiles/<account>")]
pub fn get_profile(db: &State<Connections>, auth: Auth, account: &str) -> Result<json::Profile> {
    auth.actor(db)?;
    let profile = flows::get_profile(db, &account.into())?;
    Ok(Json(profile.into()))
}

#[put("/profiles/<account>", format = "application/json", data = "<update>")]
pub fn put_profile(
    db: &State<Connections>,
    auth: Auth,
    account: &str,
    update: JsonResult<json::ProfileUpdate>,
) -> Result<json::Profile> {
    let actor = auth.actor(db)?;
    let update = from_json::profile_update(update?.into_inner());
    let profile = flows::update_profile(db, &actor, &account.into(), update)?;
    Ok(Json(profile.into()))
}

/// Deletes the profile together with the account.
#[delete("/profiles/<account>")]
pub fn delete_profile(db: &State<Connections>, auth: Auth, account: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_profile(db, &actor, &account.into())?;
    Ok(Status::NoContent)
}
