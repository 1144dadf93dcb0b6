use super::*;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    usecases::login_with_email(
        &db.shared()?,
        &usecases::Credentials {
            email: &email,
            password: &login.password,
        },
    )
    .map_err(|err| {
        log::debug!("Login with email '{}' failed: {}", login.email, err);
        err
    })?;
    let token = jwt_state.generate_token(email.as_str())?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> Result<()> {
    let json::NewUser { email, password } = new_user?.into_inner();
    flows::register_user(&db, &*notify.0, &email.parse()?, &password)?;
    Ok(Json(()))
}

#[post(
    "/confirm-email-address",
    format = "application/json",
    data = "<token>"
)]
pub fn confirm_email_address(
    db: sqlite::Connections,
    token: JsonResult<json::ConfirmEmailAddress>,
) -> Result<()> {
    let token = token?.into_inner().token;
    flows::confirm_email_address(&db, &token)?;
    Ok(Json(()))
}

#[post(
    "/users/reset-password-request",
    format = "application/json",
    data = "<data>"
)]
pub fn post_request_password_reset(
    db: sqlite::Connections,
    notify: &State<Notify>,
    data: JsonResult<json::RequestPasswordReset>,
) -> Result<()> {
    let req = data?.into_inner();
    flows::reset_password_request(&db, &*notify.0, &req.email.parse()?)?;
    Ok(Json(()))
}

#[post("/users/reset-password", format = "application/json", data = "<data>")]
pub fn post_reset_password(
    db: sqlite::Connections,
    data: JsonResult<json::ResetPassword>,
) -> Result<()> {
    let req = data?.into_inner();
    let email_nonce = EmailNonce::decode_from_str(&req.token)?;
    let new_password = req.new_password.parse::<Password>()?;
    flows::reset_password_with_email_nonce(&db, email_nonce, new_password)?;
    Ok(Json(()))
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.email(), account.email())?;
    Ok(Json(user.into()))
}

#[delete("/users/<email>")]
pub fn delete_user(db: sqlite::Connections, account: Account, email: String) -> Result<()> {
    flows::delete_user(&db, account.email(), &email.parse()?)?;
    Ok(Json(()))
}
