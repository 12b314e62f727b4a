//! Signup field definitions and whole-form validation.

use crate::error::ErrorSet;
use crate::fields::{Field, FieldSet};
use crate::validation::{EmailValidator, MinLengthValidator, RequiredValidator, Validator};
use crate::widgets::{TextInput, Widget};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Shown on `confirmPassword` when it differs from `password`.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Definition of a form field.
pub struct FormFieldDef {
    /// Which signup field this defines.
    pub field: Field,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Validators, run in order until the first failure.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(field: Field, label: impl Into<String>, widget: impl Widget + 'static) -> Self {
        Self {
            field,
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            validators: Vec::new(),
        }
    }

    /// Marks the field as required in the rendered form.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Runs the validators against a value, returning the first failure.
    pub fn check(&self, value: &str) -> Result<(), String> {
        self.validators.iter().try_for_each(|v| v.validate(value))
    }
}

/// Returns the signup form's field definitions in render order.
pub fn signup_fields() -> Vec<FormFieldDef> {
    vec![
        FormFieldDef::new(
            Field::FirstName,
            "First Name",
            TextInput::new().placeholder("Enter your first name"),
        ),
        FormFieldDef::new(
            Field::LastName,
            "Last Name",
            TextInput::new().placeholder("Enter your last name"),
        ),
        FormFieldDef::new(
            Field::Username,
            "Username",
            TextInput::new().placeholder("Choose a username"),
        )
        .required()
        .validator(RequiredValidator::with_message("Username is required")),
        FormFieldDef::new(
            Field::Email,
            "Email",
            TextInput::email().placeholder("Enter your email"),
        )
        .required()
        .validator(RequiredValidator::with_message("Email is required"))
        .validator(EmailValidator::with_message("Email is invalid")),
        FormFieldDef::new(
            Field::Password,
            "Password",
            TextInput::password().placeholder("Enter your password"),
        )
        .required()
        .validator(RequiredValidator::with_message("Password is required").untrimmed())
        .validator(MinLengthValidator::with_message(
            MIN_PASSWORD_LENGTH,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        )),
        FormFieldDef::new(
            Field::ConfirmPassword,
            "Confirm Password",
            TextInput::password().placeholder("Confirm your password"),
        )
        .required(),
    ]
}

/// Validates every field and returns the errors found.
///
/// All fields are checked; an empty result means the form may be submitted.
/// The password confirmation is compared even when the password itself fails.
pub fn validate(fields: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for def in signup_fields() {
        if let Err(message) = def.check(fields.get(def.field)) {
            errors.add(def.field, message);
        }
    }

    if fields.get(Field::Password) != fields.get(Field::ConfirmPassword) {
        errors.add(Field::ConfirmPassword, PASSWORD_MISMATCH);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FieldSet {
        FieldSet::new()
            .with(Field::Username, "alice")
            .with(Field::Email, "alice@example.com")
            .with(Field::Password, "wonderland")
            .with(Field::ConfirmPassword, "wonderland")
    }

    #[test]
    fn test_field_defs() {
        let defs = signup_fields();
        let order: Vec<Field> = defs.iter().map(|d| d.field).collect();
        assert_eq!(order, Field::ALL);

        let email = defs.iter().find(|d| d.field == Field::Email).unwrap();
        assert!(email.required);
        assert_eq!(email.widget.input_type(), "email");
        assert_eq!(email.validators.len(), 2);

        let first = defs.iter().find(|d| d.field == Field::FirstName).unwrap();
        assert!(!first.required);
        assert!(first.validators.is_empty());
    }

    #[test]
    fn test_valid_form() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_everything() {
        let errors = validate(&FieldSet::new());
        assert_eq!(errors.get(Field::Username), Some("Username is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        // both empty, so they match
        assert!(!errors.contains(Field::ConfirmPassword));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_username_required() {
        let errors = validate(&valid_fields().with(Field::Username, "   "));
        assert_eq!(errors.get(Field::Username), Some("Username is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_rules() {
        let errors = validate(&valid_fields().with(Field::Email, "a@b"));
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));

        let errors = validate(&valid_fields().with(Field::Email, "a@b.com"));
        assert!(!errors.contains(Field::Email));

        let errors = validate(&valid_fields().with(Field::Email, ""));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_password_length_boundary() {
        let seven = valid_fields()
            .with(Field::Password, "abcdefg")
            .with(Field::ConfirmPassword, "abcdefg");
        assert_eq!(
            validate(&seven).get(Field::Password),
            Some("Password must be at least 8 characters")
        );

        let eight = valid_fields()
            .with(Field::Password, "abcdefgh")
            .with(Field::ConfirmPassword, "abcdefgh");
        assert!(validate(&eight).is_empty());
    }

    #[test]
    fn test_whitespace_password_is_present() {
        let spaces = valid_fields()
            .with(Field::Password, " ")
            .with(Field::ConfirmPassword, " ");
        assert_eq!(
            validate(&spaces).get(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_password_mismatch() {
        let fields = valid_fields()
            .with(Field::Password, "abcdefgh")
            .with(Field::ConfirmPassword, "abcdefg1");
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORD_MISMATCH));
        assert!(!errors.contains(Field::Password));
    }

    #[test]
    fn test_mismatch_checked_independently_of_password() {
        let short_match = valid_fields()
            .with(Field::Password, "abc")
            .with(Field::ConfirmPassword, "abc");
        let errors = validate(&short_match);
        assert!(errors.contains(Field::Password));
        assert!(!errors.contains(Field::ConfirmPassword));

        let short_mismatch = short_match.with(Field::ConfirmPassword, "abd");
        let errors = validate(&short_mismatch);
        assert!(errors.contains(Field::Password));
        assert!(errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn test_validate_is_pure() {
        let fields = valid_fields().with(Field::Email, "nope");
        let first = validate(&fields);
        let second = validate(&fields);
        assert_eq!(first, second);
        assert_eq!(fields.get(Field::Email), "nope");
    }

    #[test]
    fn test_optional_names_never_error() {
        let fields = valid_fields()
            .with(Field::FirstName, "")
            .with(Field::LastName, "   ");
        let errors = validate(&fields);
        assert!(!errors.contains(Field::FirstName));
        assert!(!errors.contains(Field::LastName));
    }
}
