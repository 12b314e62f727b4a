//! Where the registration endpoint lives.

use signup_forms::validation::{UrlValidator, Validator};

use crate::error::{ClientError, Result};

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "SIGNUP_API_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the registration endpoint, relative to the base URL.
pub const SIGNUP_PATH: &str = "/api/signup/";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// A trailing `/` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] unless the URL starts with
    /// `http://` or `https://` followed by a host.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        UrlValidator::new()
            .validate(&base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(base_url.clone()))?;
        Ok(Self { base_url })
    }

    /// Reads the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the variable holds a
    /// non-http(s) value.
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    /// Builds a configuration from an optional raw setting.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::new`].
    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// The base URL, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the registration endpoint.
    pub fn signup_url(&self) -> String {
        format!("{}{SIGNUP_PATH}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(ClientConfig::from_value(None).unwrap(), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_value(Some("  ".to_string())).unwrap(),
            ClientConfig::default()
        );
        assert_eq!(
            ClientConfig::default().signup_url(),
            "http://localhost:8000/api/signup/"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::from_value(Some("https://api.example.com/".to_string())).unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.signup_url(), "https://api.example.com/api/signup/");
    }

    // The only test in this binary that touches the process environment.
    #[test]
    fn test_from_env_reads_base_url() {
        std::env::set_var(BASE_URL_ENV, "https://signup.example.com/");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://signup.example.com");
        assert_eq!(config.signup_url(), "https://signup.example.com/api/signup/");

        std::env::set_var(BASE_URL_ENV, "ftp://signup.example.com");
        assert!(ClientConfig::from_env().is_err());

        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(url) if url == "ftp://example.com"));
        assert!(ClientConfig::new("localhost:8000").is_err());
    }
}
