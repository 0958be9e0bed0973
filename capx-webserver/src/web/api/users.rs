use super::*;

#[post("/users", format = "application/json", data = "<new_account>")]
pub fn post_user(
    db: &State<Connections>,
    new_account: JsonResult<json::NewAccount>,
) -> CreatedResult<json::Account> {
    let new_account = from_json::new_account(new_account?.into_inner());
    let account = flows::register_account(db, new_account)?;
    created(account.into())
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: &State<Connections>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        username: &login.username,
        password: &login.password,
    };
    let account = flows::login(db, &credentials)?;
    let token = jwt_state.generate_token(&account.id)?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[get("/users/current")]
pub fn get_current_user(db: &State<Connections>, auth: Auth) -> Result<json::Account> {
    let account = flows::current_account(db, auth.account()?)?;
    Ok(Json(account.into()))
}
