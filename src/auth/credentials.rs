//! Secret-wrapped API key.

use secrecy::{ExposeSecret, SecretString};

/// Header the demo API expects the key under.
pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// A CoinGecko API key.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Wrap an API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Get the raw key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("CG-super-secret");
        let debug_str = format!("{:?}", key);
        assert!(!debug_str.contains("CG-super-secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_secret() {
        let key: ApiKey = "CG-abc".into();
        assert_eq!(key.expose_secret(), "CG-abc");
    }
}
