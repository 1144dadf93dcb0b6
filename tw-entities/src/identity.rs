use std::fmt;

use strum::EnumString;

use crate::{email::EmailAddress, time::Timestamp};

/// Supported external login providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// Link between a local account and an account at an external
/// login provider.
///
/// `external_id` is the provider's opaque subject identifier,
/// unique per provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    pub email       : EmailAddress,
    pub provider    : OAuthProvider,
    pub external_id : String,
    pub linked_at   : Timestamp,
}
