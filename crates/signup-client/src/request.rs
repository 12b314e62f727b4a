//! Registration request body.

use serde::Serialize;
use signup_forms::{Field, FieldSet};

/// JSON body posted to the registration endpoint.
///
/// The password confirmation stays on the client.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupRequest {
    /// Serializes the request as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&FieldSet> for SignupRequest {
    fn from(fields: &FieldSet) -> Self {
        Self {
            username: fields.get(Field::Username).to_string(),
            email: fields.get(Field::Email).to_string(),
            password: fields.get(Field::Password).to_string(),
            first_name: fields.get(Field::FirstName).to_string(),
            last_name: fields.get(Field::LastName).to_string(),
        }
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldSet {
        FieldSet::new()
            .with(Field::Username, "alice")
            .with(Field::Email, "alice@example.com")
            .with(Field::Password, "wonderland")
            .with(Field::ConfirmPassword, "wonderland")
    }

    #[test]
    fn test_body_omits_confirmation() {
        let body: serde_json::Value =
            serde_json::from_str(&SignupRequest::from(&fields()).to_json().unwrap()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "wonderland",
                "first_name": "",
                "last_name": "",
            })
        );
        assert!(body.get("confirmPassword").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", SignupRequest::from(&fields()));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("wonderland"));
    }
}
