//! Client configuration
//!
//! A [`ClientConfig`] identifies one registry-operator account. It can be
//! built in code, deserialized from JSON, or read from `RRI_*` environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Production reporting host
pub const DEFAULT_BASE_URL: &str = "ry-api.icann.org";

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env_vars {
    /// tld to report for
    pub const TLD: &str = "RRI_TLD";
    /// RRI account username
    pub const USERNAME: &str = "RRI_USERNAME";
    /// RRI account password
    pub const PASSWORD: &str = "RRI_PASSWORD";
    /// Alternate host or origin
    pub const BASE_URL: &str = "RRI_BASE_URL";
    /// Request timeout in seconds
    pub const TIMEOUT_SECS: &str = "RRI_TIMEOUT_SECS";
    /// User-Agent override
    pub const USER_AGENT: &str = "RRI_USER_AGENT";
}

/// Account and connection settings for an [`RriClient`](crate::RriClient)
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// tld the account reports for (e.g. "example")
    pub tld: String,

    /// RRI username
    pub username: String,

    /// RRI password
    /// ⚠️ NEVER log this value
    #[serde(skip_serializing)]
    pub password: String,

    /// Alternate host ("test.example") or origin with scheme
    /// ("http://127.0.0.1:8080"); defaults to the production host
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

// Debug output hides the password
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("tld", &self.tld)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the production host
    pub fn new(
        tld: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            tld: tld.into(),
            username: username.into(),
            password: password.into(),
            base_url: None,
            timeout_secs: None,
            user_agent: None,
        }
    }

    /// Set an alternate host or origin
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load configuration from `RRI_*` environment variables
    pub fn from_env() -> Result<Self, crate::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, crate::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .ok_or_else(|| crate::Error::config(format!("{} is not set", key)))
        };

        let timeout_secs = match lookup(env_vars::TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                crate::Error::config(format!(
                    "{} must be a number of seconds: {}",
                    env_vars::TIMEOUT_SECS,
                    e
                ))
            })?),
            None => None,
        };

        let config = Self {
            tld: required(env_vars::TLD)?,
            username: required(env_vars::USERNAME)?,
            password: required(env_vars::PASSWORD)?,
            base_url: lookup(env_vars::BASE_URL),
            timeout_secs,
            user_agent: lookup(env_vars::USER_AGENT),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.tld.trim().is_empty() {
            return Err(crate::Error::config("tld cannot be empty"));
        }
        if self.username.is_empty() {
            return Err(crate::Error::config("username cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(crate::Error::config("password cannot be empty"));
        }
        if let Some(base_url) = &self.base_url {
            if base_url.trim().is_empty() {
                return Err(crate::Error::config("base_url cannot be empty when set"));
            }
        }
        self.origin()?;
        if self.timeout_secs == Some(0) {
            return Err(crate::Error::config("timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// The origin every URL starts with
    ///
    /// A base URL without a scheme is served over HTTPS. The result has no
    /// trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) unless the base URL is
    /// an `http`/`https` origin with a host and nothing after it but an
    /// optional `/`.
    pub fn origin(&self) -> Result<String, crate::Error> {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_BASE_URL);

        let candidate = if base.contains("://") {
            base.to_string()
        } else {
            format!("https://{}", base)
        };

        let invalid = |reason: &str| {
            crate::Error::config(format!("base_url '{}' {}", base, reason))
        };

        let url = Url::parse(&candidate).map_err(|e| invalid(&format!("is not a URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("must use http or https"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("has no host"));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("must not carry credentials"));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not have a path, query or fragment"));
        }

        Ok(url.origin().ascii_serialization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_origin() {
        let config = ClientConfig::new("example", "testuser", "testpass");
        assert_eq!(config.origin().unwrap(), "https://ry-api.icann.org");
    }

    #[test]
    fn test_origin_from_host() {
        let config = ClientConfig::new("example", "testuser", "testpass")
            .with_base_url("test.example");
        assert_eq!(config.origin().unwrap(), "https://test.example");
    }

    #[test]
    fn test_origin_keeps_explicit_scheme() {
        let config = ClientConfig::new("example", "testuser", "testpass")
            .with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.origin().unwrap(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::new("example", "u", "p").validate().is_ok());
        assert!(ClientConfig::new("", "u", "p").validate().is_err());
        assert!(ClientConfig::new("example", "", "p").validate().is_err());
        assert!(ClientConfig::new("example", "u", "").validate().is_err());
        assert!(ClientConfig::new("example", "u", "p")
            .with_base_url(" ")
            .validate()
            .is_err());
        assert!(ClientConfig::new("example", "u", "p")
            .with_timeout_secs(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_origin_keeps_port() {
        let config = ClientConfig::new("example", "testuser", "testpass")
            .with_base_url("test.example:8443");
        assert_eq!(config.origin().unwrap(), "https://test.example:8443");
    }

    #[test]
    fn test_validate_rejects_malformed_base_url() {
        for base_url in [
            "https://",
            "http://",
            "not a host",
            "ftp://x",
            "https://test.example/api",
            "https://test.example?env=ote",
            "https://test.example/#top",
            "https://user:pw@test.example",
        ] {
            let config = ClientConfig::new("example", "u", "p").with_base_url(base_url);
            assert!(
                matches!(config.validate(), Err(crate::Error::Config(_))),
                "accepted base_url '{}'",
                base_url
            );
            assert!(config.origin().is_err());
        }
    }

    #[test]
    fn test_password_not_serialized() {
        let config = ClientConfig::new("example", "testuser", "secret_pass_12345");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret_pass_12345"));
        assert!(!json.contains("password"));
        assert!(json.contains("testuser"));
    }

    #[test]
    fn test_password_not_exposed_in_debug() {
        let config = ClientConfig::new("example", "testuser", "secret_pass_12345");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("secret_pass_12345"));
        assert!(debug_str.contains("testuser"));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("RRI_TLD", "example"),
            ("RRI_USERNAME", "testuser"),
            ("RRI_PASSWORD", "testpass"),
            ("RRI_BASE_URL", "test.example"),
            ("RRI_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.tld, "example");
        assert_eq!(config.base_url.as_deref(), Some("test.example"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_from_lookup_missing_password() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            ("RRI_TLD", "example"),
            ("RRI_USERNAME", "testuser"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("RRI_PASSWORD"));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup_from(&[
            ("RRI_TLD", "example"),
            ("RRI_USERNAME", "testuser"),
            ("RRI_PASSWORD", "testpass"),
            ("RRI_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_str() {
        let config = ClientConfig::from_json_str(
            r#"{"tld": "example", "username": "testuser", "password": "testpass"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.origin().unwrap(), "https://ry-api.icann.org");

        assert!(matches!(
            ClientConfig::from_json_str("{"),
            Err(crate::Error::Json(_))
        ));
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"tld": "", "username": "u", "password": "p"}"#),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rri.json");
        std::fs::write(
            &path,
            r#"{"tld": "example", "username": "testuser", "password": "testpass", "timeout_secs": 10}"#,
        )
        .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.timeout_secs, Some(10));

        let missing = ClientConfig::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(crate::Error::Io(_))));
    }
}
