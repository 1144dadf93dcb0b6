use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A one-way hashed password.
///
/// The clear text is only ever visible to `FromStr` and `verify()`,
/// neither the entity nor the database see anything but the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Password with less than {} characters", Password::MIN_LEN)]
    TooShort,
    #[error("Unable to hash the password")]
    Hash,
}

impl Password {
    pub const MIN_LEN: usize = 6;

    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn to_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, clear_text: &str) -> bool {
        bcrypt::verify(clear_text, &self.0)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(clear_text: &str) -> Result<Self, Self::Err> {
        if clear_text.chars().count() < Self::MIN_LEN {
            return Err(ParseError::TooShort);
        }
        bcrypt::hash(clear_text).map(Self).map_err(|_| ParseError::Hash)
    }
}
