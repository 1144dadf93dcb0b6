use anyhow::anyhow;
use rocket::form::{Form, FromForm};

use super::*;
use tw_gateways::facebook;

#[post("/auth/oauth", format = "application/json", data = "<login>")]
pub fn post_oauth_login(
    db: sqlite::Connections,
    oauth: &State<OAuth>,
    login: JsonResult<json::OAuthLogin>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let json::OAuthLogin {
        provider,
        access_token,
    } = login?.into_inner();
    let user = flows::oauth_login(&db, &*oauth.0, provider.into(), &access_token)?;
    let token = jwt_state.generate_token(user.email.as_str())?;
    Ok(Json(json::JwtToken { token }))
}

#[derive(FromForm)]
pub struct SignedRequest {
    signed_request: String,
}

/// Data-deletion callback as specified by Facebook: an HMAC-signed
/// form post naming the app-scoped user id. The response points the
/// provider at a status URL for the issued confirmation code.
#[post("/auth/facebook/data-deletion", data = "<form>")]
pub fn post_facebook_data_deletion(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    form: Form<SignedRequest>,
) -> Result<json::DataDeletionConfirmation> {
    let Some(app_secret) = cfg.facebook_app_secret.as_deref() else {
        return Err(ApiError::OtherWithStatus(
            anyhow!("No Facebook app secret configured"),
            Status::ServiceUnavailable,
        ));
    };
    let request = facebook::parse_signed_request(&form.signed_request, app_secret)
        .map_err(|err| ApiError::OtherWithStatus(err.into(), Status::BadRequest))?;
    let code = flows::process_data_deletion_request(
        &db,
        OAuthProvider::Facebook,
        &request.user_id,
    )?;
    let url = format!(
        "{}/api/auth/facebook/data-deletion/{}",
        cfg.public_url, code
    );
    Ok(Json(json::DataDeletionConfirmation {
        url,
        confirmation_code: code.into(),
    }))
}

#[get("/auth/facebook/data-deletion/<code>")]
pub fn get_facebook_data_deletion_status(
    db: sqlite::Connections,
    code: String,
) -> Result<json::DataDeletionStatus> {
    let entry = flows::data_deletion_status(&db, &code.into())?;
    Ok(Json(to_json::data_deletion_status(entry)))
}
