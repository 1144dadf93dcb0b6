use std::collections::HashSet;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account email
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    /// Without a configured secret every restart invalidates all
    /// previously issued tokens.
    pub fn new(secret: Option<&str>) -> Self {
        let secret = secret.map(ToOwned::to_owned).unwrap_or_else(generate_secret);
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            time_valid: Duration::days(1),
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, email: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: email.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_email(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens reject themselves, they only need to be dropped
    // from the blacklist.
    fn remove_invalid_tokens(&self) {
        self.lock().retain(|token| {
            decode::<Claims>(token, &self.decoding_key, &Validation::default()).is_ok()
        });
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.blacklist.lock()
    }
}

/// Generates a Rocket-compatible secret (Rocket expects a
/// 256-bit base64 encoded string)
fn generate_secret() -> String {
    BASE64.encode(rand::random::<[u8; 32]>())
}
