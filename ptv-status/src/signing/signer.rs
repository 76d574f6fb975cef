//! URL signing for the PTV Timetable API.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::config::Credentials;

use super::error::SignError;

type HmacSha1 = Hmac<Sha1>;

/// Compute the lowercase hex HMAC-SHA1 of `message` keyed by `key`.
///
/// # Examples
///
/// ```
/// use ptv_status::signing::signature;
///
/// let digest = signature("/v3/routes?devid=1000", "secret").unwrap();
/// assert_eq!(digest.len(), 40);
/// assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// ```
pub fn signature(message: &str, key: &str) -> Result<String, SignError> {
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| SignError::InvalidKey)?;
    mac.update(message.as_bytes());
    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

/// Build a signed absolute URL for `path`.
///
/// `path` may already carry a query string. `devid` is appended with `&` in
/// that case and `?` otherwise; the signature is computed over the path,
/// query and `devid`, then appended as the final `signature` parameter.
///
/// # Examples
///
/// ```
/// use ptv_status::signing::sign;
///
/// let url = sign("http://timetableapi.ptv.vic.gov.au", "/v3/routes", "1000", "key").unwrap();
/// assert!(url.starts_with("http://timetableapi.ptv.vic.gov.au/v3/routes?devid=1000&signature="));
///
/// let url = sign("http://host", "/v3/routes?route_types=0", "1000", "key").unwrap();
/// assert!(url.contains("/v3/routes?route_types=0&devid=1000&signature="));
///
/// assert!(sign("http://host", "/v3/routes", "", "key").is_err());
/// ```
pub fn sign(base_url: &str, path: &str, dev_id: &str, key: &str) -> Result<String, SignError> {
    if dev_id.is_empty() {
        return Err(SignError::MissingCredential("developer ID"));
    }
    if key.is_empty() {
        return Err(SignError::MissingCredential("developer key"));
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    let raw = format!("{path}{separator}devid={dev_id}");
    let digest = signature(&raw, key)?;

    Ok(format!("{base_url}{raw}&signature={digest}"))
}

/// Signs request paths against a fixed API origin.
#[derive(Debug, Clone)]
pub struct Signer {
    base_url: String,
    credentials: Credentials,
}

impl Signer {
    /// Create a signer for the given origin and credentials.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Returns the API origin this signer targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the signed absolute URL for `path`.
    pub fn url(&self, path: &str) -> Result<String, SignError> {
        sign(
            &self.base_url,
            path,
            self.credentials.dev_id(),
            self.credentials.key(),
        )
    }
}
