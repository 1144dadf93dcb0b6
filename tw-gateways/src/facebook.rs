use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// A verified `signed_request` as posted by Facebook to the data
/// deletion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDeletionRequest {
    pub user_id: String,
    pub issued_at: Option<i64>,
}

#[derive(Debug, Error)]
pub enum SignedRequestError {
    #[error("Malformed signed request")]
    Format,
    #[error("Unsupported signature algorithm: {0}")]
    Algorithm(String),
    #[error("Invalid signature")]
    Signature,
}

#[derive(Debug, Deserialize)]
struct SignedRequestPayload {
    algorithm: String,
    user_id: String,
    #[serde(default)]
    issued_at: Option<i64>,
}

/// Decodes and verifies a Facebook `signed_request` parameter.
///
/// The request consists of a base64url encoded HMAC-SHA256 signature
/// and a base64url encoded JSON payload, joined by a dot. The
/// signature covers the still encoded payload.
pub fn parse_signed_request(
    signed_request: &str,
    app_secret: &str,
) -> Result<DataDeletionRequest, SignedRequestError> {
    let (encoded_signature, encoded_payload) =
        signed_request.split_once('.').ok_or(SignedRequestError::Format)?;
    let signature = decode_base64url(encoded_signature)?;
    let mut mac = HmacSha256::new_from_slice(app_secret.as_bytes())
        .map_err(|_| SignedRequestError::Signature)?;
    mac.update(encoded_payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| SignedRequestError::Signature)?;
    let payload = decode_base64url(encoded_payload)?;
    let payload: SignedRequestPayload =
        serde_json::from_slice(&payload).map_err(|_| SignedRequestError::Format)?;
    if !payload.algorithm.eq_ignore_ascii_case("HMAC-SHA256") {
        return Err(SignedRequestError::Algorithm(payload.algorithm));
    }
    Ok(DataDeletionRequest {
        user_id: payload.user_id,
        issued_at: payload.issued_at,
    })
}

// Facebook encodes without padding, but some client libraries pad.
fn decode_base64url(encoded: &str) -> Result<Vec<u8>, SignedRequestError> {
    URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|_| SignedRequestError::Format)
}
