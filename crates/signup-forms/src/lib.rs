//! # signup-forms
//!
//! Field state, validation rules and the submission state machine for an
//! account signup form.
//!
//! This crate provides:
//! - `Field` and `FieldSet`, the six signup inputs and their values
//! - Composable field validators and the whole-form [`validate`] pass
//! - `FormState`, which owns the values, inline errors, submission status
//!   and result banner
//! - HTML rendering of the form
//!
//! It performs no I/O; sending the form is the job of `signup-client`.
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_forms::{Field, FormError, FormState, SubmissionStatus};
//!
//! let mut state = FormState::new();
//! state.on_field_change(Field::Username, "alice");
//! state.on_field_change(Field::Email, "alice@example");
//!
//! // Validation runs on submit and blocks it.
//! let err = state.begin_submit().unwrap_err();
//! assert!(matches!(err, FormError::Invalid(_)));
//! assert_eq!(state.errors().get(Field::Email), Some("Email is invalid"));
//!
//! // Editing a field dismisses only its own error.
//! state.on_field_change(Field::Email, "alice@example.com");
//! assert!(!state.errors().contains(Field::Email));
//! assert!(state.errors().contains(Field::Password));
//!
//! state.on_field_change(Field::Password, "wonderland");
//! state.on_field_change(Field::ConfirmPassword, "wonderland");
//! state.begin_submit().unwrap();
//! assert_eq!(state.status(), SubmissionStatus::Loading);
//!
//! state.succeed("Welcome");
//! assert!(state.fields().is_empty());
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use signup_forms::{validate, Field, FieldSet};
//!
//! let fields = FieldSet::new()
//!     .with(Field::Password, "abcdefgh")
//!     .with(Field::ConfirmPassword, "abcdefg1");
//!
//! let errors = validate(&fields);
//! assert_eq!(errors.get(Field::Username), Some("Username is required"));
//! assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
//! assert!(!errors.contains(Field::Password));
//! ```

mod error;
mod fields;
mod form;
mod render;
mod state;
pub mod validation;
pub mod widgets;

pub use error::{ErrorSet, FormError, Result};
pub use fields::{Field, FieldSet};
pub use form::{signup_fields, validate, FormFieldDef, MIN_PASSWORD_LENGTH, PASSWORD_MISMATCH};
pub use render::{render_field, render_signup_form, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};
pub use state::{FormState, ResultMessage, SubmissionStatus};
