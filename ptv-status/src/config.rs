//! Runtime configuration.
//!
//! Credentials and client settings are built once at startup and passed
//! into the client; nothing here is global.

use std::fmt;

use chrono_tz::Tz;

/// Default origin of the PTV Timetable API.
pub const DEFAULT_BASE_URL: &str = "http://timetableapi.ptv.vic.gov.au";

/// Default timezone for rendering departure times.
pub const DEFAULT_TIMEZONE: &str = "Australia/Melbourne";

/// Environment variable holding the developer ID.
pub const DEV_ID_VAR: &str = "PTV_DEVID";

/// Environment variable holding the developer key.
pub const KEY_VAR: &str = "PTV_KEY";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required credential was not supplied
    #[error("missing credential: set {0}")]
    MissingCredential(&'static str),

    /// Timezone name is not a known IANA zone
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// PTV developer credentials.
///
/// The key is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    dev_id: String,
    key: String,
}

impl Credentials {
    /// Create credentials from a developer ID and key.
    pub fn new(dev_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            key: key.into(),
        }
    }

    /// Build credentials from optional values, rejecting absent or empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptv_status::config::Credentials;
    ///
    /// assert!(Credentials::from_parts(Some("1000".into()), Some("key".into())).is_ok());
    /// assert!(Credentials::from_parts(None, Some("key".into())).is_err());
    /// assert!(Credentials::from_parts(Some("1000".into()), Some("".into())).is_err());
    /// ```
    pub fn from_parts(dev_id: Option<String>, key: Option<String>) -> Result<Self, ConfigError> {
        let dev_id = dev_id
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredential(DEV_ID_VAR))?;
        let key = key
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredential(KEY_VAR))?;
        Ok(Self { dev_id, key })
    }

    /// Read credentials from `PTV_DEVID` and `PTV_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(std::env::var(DEV_ID_VAR).ok(), std::env::var(KEY_VAR).ok())
    }

    pub fn dev_id(&self) -> &str {
        &self.dev_id
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_id", &self.dev_id)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct PtvConfig {
    /// Developer credentials used to sign every request
    pub credentials: Credentials,
    /// API origin (defaults to the production Timetable API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log each signed URL at debug level
    pub log_signed_urls: bool,
}

impl PtvConfig {
    /// Create a new config with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            log_signed_urls: false,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable or disable debug logging of signed URLs.
    pub fn with_signed_url_logging(mut self, enabled: bool) -> Self {
        self.log_signed_urls = enabled;
        self
    }
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
}
