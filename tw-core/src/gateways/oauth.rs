use anyhow::Result;

use crate::entities::{email::EmailAddress, identity::OAuthProvider};

/// The profile of an authenticated user as reported by the
/// external login provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProfile {
    pub provider     : OAuthProvider,
    pub external_id  : String,
    pub email        : EmailAddress,
    pub display_name : Option<String>,
}

pub trait OAuthGateway {
    /// Resolves an access token issued by the provider into the
    /// profile of the token's subject.
    fn fetch_profile(&self, provider: OAuthProvider, access_token: &str)
        -> Result<ExternalProfile>;
}
