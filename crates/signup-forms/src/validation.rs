//! Field validators.

use std::sync::LazyLock;

use regex::Regex;

/// Non-whitespace, "@", non-whitespace, ".", non-whitespace. Unanchored.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
    trim: bool,
}

impl RequiredValidator {
    /// Creates a new `RequiredValidator` with default message.
    ///
    /// Whitespace-only values count as empty.
    pub fn new() -> Self {
        Self::with_message("This field is required.")
    }

    /// Creates a new `RequiredValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trim: true,
        }
    }

    /// Only the empty string fails; whitespace is a value.
    #[must_use]
    pub fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let value = if self.trim { value.trim() } else { value };
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator`.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new `MinLengthValidator` with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Structural email check: `local@domain.tld` with no whitespace in the parts.
///
/// This is not RFC 5322 validation. The server has the final word.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new `EmailValidator` with default message.
    pub fn new() -> Self {
        Self::with_message("Enter a valid email address.")
    }

    /// Creates a new `EmailValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for URL values.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new `UrlValidator` with default message.
    pub fn new() -> Self {
        Self::with_message("Enter a valid URL.")
    }

    /// Creates a new `UrlValidator` with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let rest = value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn test_required_validator_untrimmed() {
        let v = RequiredValidator::with_message("Password is required").untrimmed();
        assert!(v.validate("   ").is_ok());
        assert_eq!(v.validate(""), Err("Password is required".to_string()));
    }

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::new(8);
        assert!(v.validate("abcdefgh").is_ok());
        assert!(v.validate("abcdefg").is_err());
        // counted in characters, not bytes
        assert!(v.validate("ééééééé").is_err());
        assert!(v.validate("éééééééé").is_ok());
        // 4 characters but 8 UTF-16 units; a browser's `.length` would
        // accept this, here it is too short
        assert!(v.validate("😀😀😀😀").is_err());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate("a@b.com").is_ok());
        assert!(v.validate("user.name@domain.co.uk").is_ok());
        assert!(v.validate("a@b").is_err());
        assert!(v.validate("invalid").is_err());
        assert!(v.validate("@example.com").is_err());
        assert!(v.validate("a @b.com").is_err());
    }

    #[test]
    fn test_url_validator() {
        let v = UrlValidator::new();
        assert!(v.validate("https://example.com").is_ok());
        assert!(v.validate("http://localhost:8000").is_ok());
        assert!(v.validate("example.com").is_err());
        assert!(v.validate("https://").is_err());
    }
}
