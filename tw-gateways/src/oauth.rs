use anyhow::{anyhow, Result};
use serde::Deserialize;

use tw_core::gateways::oauth::{ExternalProfile, OAuthGateway};
use tw_entities::{email::EmailAddress, identity::OAuthProvider};

const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const FACEBOOK_PROFILE_URL: &str = "https://graph.facebook.com/v19.0/me";

/// Resolves provider access tokens into user profiles by calling
/// the provider's profile endpoint.
#[derive(Debug, Clone, Default)]
pub struct OAuthClient;

impl OAuthClient {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    sub: String,
    email: Option<String>,
    email_verified: Option<bool>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FacebookProfile {
    id: String,
    email: Option<String>,
    name: Option<String>,
}

impl OAuthGateway for OAuthClient {
    fn fetch_profile(
        &self,
        provider: OAuthProvider,
        access_token: &str,
    ) -> Result<ExternalProfile> {
        match provider {
            OAuthProvider::Google => fetch_google_profile(access_token),
            OAuthProvider::Facebook => fetch_facebook_profile(access_token),
        }
    }
}

fn fetch_google_profile(access_token: &str) -> Result<ExternalProfile> {
    let info: GoogleUserInfo = fetch_json(GOOGLE_USERINFO_URL, &[], Some(access_token))?;
    // An unverified address must not end up as a confirmed account.
    if info.email_verified != Some(true) {
        return Err(anyhow!("Google account e-mail address is not verified"));
    }
    let email = parse_profile_email(info.email)?;
    Ok(ExternalProfile {
        provider: OAuthProvider::Google,
        external_id: info.sub,
        email,
        display_name: info.name,
    })
}

fn fetch_facebook_profile(access_token: &str) -> Result<ExternalProfile> {
    let profile: FacebookProfile = fetch_json(
        FACEBOOK_PROFILE_URL,
        &[("fields", "id,name,email"), ("access_token", access_token)],
        None,
    )?;
    let email = parse_profile_email(profile.email)?;
    Ok(ExternalProfile {
        provider: OAuthProvider::Facebook,
        external_id: profile.id,
        email,
        display_name: profile.name,
    })
}

fn parse_profile_email(email: Option<String>) -> Result<EmailAddress> {
    let email = email.ok_or_else(|| anyhow!("Provider profile without an e-mail address"))?;
    email
        .parse()
        .map_err(|err| anyhow!("Provider profile with an invalid e-mail address: {err}"))
}

#[cfg(not(test))]
fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    bearer_token: Option<&str>,
) -> Result<T> {
    let client = reqwest::blocking::Client::new();
    let mut request = client.get(url).query(query);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }
    let response = request.send()?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "Profile request to {url} failed with status {}",
            response.status()
        ));
    }
    Ok(response.json()?)
}

/// Don't actually contact login providers while running the tests.
#[cfg(test)]
fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    _bearer_token: Option<&str>,
) -> Result<T> {
    log::debug!("Would fetch profile from {url} with query {query:?}");
    Err(anyhow!("No login providers available in tests"))
}
