//! Error types for forms.

use std::collections::HashMap;
use thiserror::Error;

use crate::fields::Field;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed; the errors are shown next to their fields.
    #[error("validation errors: {0}")]
    Invalid(ErrorSet),

    /// A submission is already waiting for the server.
    #[error("a submission is already in flight")]
    InFlight,

    /// The name does not belong to any signup field.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Validation messages keyed by field, at most one per field.
///
/// A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: HashMap<Field, String>,
}

impl ErrorSet {
    /// Creates a new empty `ErrorSet`.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Records an error for a field unless it already has one.
    ///
    /// Empty messages are ignored.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        self.errors.entry(field).or_insert(message);
    }

    /// Removes the error for a field, returning whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns whether a field has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns all errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|msg| (field, msg)))
    }
}

impl std::fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Email, "Email is required");
        errors.add(Field::Email, "Email is invalid");
        errors.add(Field::Username, "");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert!(!errors.contains(Field::Username));
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Username, "Username is required");
        errors.add(Field::Password, "Password is required");

        assert!(errors.clear(Field::Username));
        assert!(!errors.clear(Field::Username));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_display_in_form_order() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Password, "Password is required");
        errors.add(Field::Username, "Username is required");

        assert_eq!(
            errors.to_string(),
            "username: Username is required; password: Password is required"
        );
    }
}
