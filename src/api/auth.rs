// Request signing for the Marvel API.
// Derives the per-request hash from a timestamp and the account key pair.

use std::fmt;

use chrono::NaiveDateTime;
use md5::{Digest, Md5};

use crate::error::{CatalogError, Result};

use super::types::Params;

/// Timestamp layout sent as `ts`; the hash is computed over the same string.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d%H:%M:%S";

/// Public/private key pair issued for the developer account.
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Read the key pair from MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY.
    pub fn from_env() -> Result<Self> {
        let public_key = std::env::var("MARVEL_PUBLIC_KEY").map_err(|_| CatalogError::MissingKeys)?;
        let private_key =
            std::env::var("MARVEL_PRIVATE_KEY").map_err(|_| CatalogError::MissingKeys)?;
        Ok(Self::new(public_key, private_key))
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Hex MD5 over timestamp, private key, and public key, in that order.
    pub fn sign(&self, timestamp: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(timestamp.as_bytes());
        hasher.update(self.private_key.as_bytes());
        hasher.update(self.public_key.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Return a copy of `params` with `hash`, `apikey`, and `ts` added for `now`.
    pub fn signed_params(&self, params: &Params, now: NaiveDateTime) -> Params {
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

        let mut signed = params.clone();
        signed.insert("hash", self.sign(&timestamp));
        signed.insert("apikey", &self.public_key);
        signed.insert("ts", timestamp);
        signed
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::key::CacheKey;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_sign_known_vector() {
        // Worked example from the API's authorization docs.
        let credentials = Credentials::new("1234", "abcd");
        assert_eq!(credentials.sign("1"), "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn test_signed_params_fields() {
        let credentials = Credentials::new("pub", "priv");
        let params = Params::new().with("limit", 5);

        let signed = credentials.signed_params(&params, at(13, 5, 7));

        assert_eq!(signed.get("ts"), Some("2024-03-0913:05:07"));
        assert_eq!(signed.get("apikey"), Some("pub"));
        assert_eq!(signed.get("hash"), Some(credentials.sign("2024-03-0913:05:07").as_str()));
        assert_eq!(signed.get("limit"), Some("5"));
        assert_eq!(signed.get("hash").map(str::len), Some(32));
    }

    #[test]
    fn test_signing_leaves_input_untouched() {
        let credentials = Credentials::new("pub", "priv");
        let params = Params::new().with("orderBy", "title");
        let url = "http://gateway.marvel.com:80/v1/public/series";

        let before = CacheKey::build(url, &params);
        let _signed = credentials.signed_params(&params, at(8, 0, 0));
        let after = CacheKey::build(url, &params);

        assert_eq!(before, after);
        assert!(!params.contains("hash"));
        assert!(!params.contains("apikey"));
        assert!(!params.contains("ts"));
    }

    #[test]
    fn test_signature_changes_with_time() {
        let credentials = Credentials::new("pub", "priv");
        let params = Params::new();

        let first = credentials.signed_params(&params, at(8, 0, 0));
        let second = credentials.signed_params(&params, at(8, 0, 1));

        assert_ne!(first.get("hash"), second.get("hash"));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let credentials = Credentials::new("pub", "super-secret");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("pub"));
        assert!(!debug.contains("super-secret"));
    }
}
