use core::ops::Deref;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use tw_application::error::AppError;
use tw_core::{
    entities::{email::EmailAddress, user::Role, user::User},
    gateways::{notify::NotificationGateway, oauth::OAuthGateway},
    repositories::UserRepo,
    usecases,
    usecases::Error as ParameterError,
};

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &Vec<String> {
        &self.bearer_tokens
    }

    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        Ok(usecases::authorize_user_by_email(
            repo,
            self.account_email()?,
            min_required_role,
        )?)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn account_email_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<EmailAddress> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .filter_map(|token| jwt_state.validate_token_and_get_email(token).ok())
            .find_map(|email| email.parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let account_email = Self::account_email_from_jwt_in_header(request, &bearer_tokens).await;

        let auth = Self {
            bearer_tokens,
            account_email,
        };

        Outcome::Success(auth)
    }
}

#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct OAuth(pub Box<dyn OAuthGateway + Send + Sync>);

impl Deref for OAuth {
    type Target = dyn OAuthGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
