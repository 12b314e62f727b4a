//! Submission status and the form state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ Loading ──succeed──▶ Succeeded
//!  ▲        │                   └───fail────▶ Failed
//!  │     invalid                                 │
//!  └────────┴─────────── next begin_submit ──────┘
//! ```

use tracing::debug;

use crate::error::{ErrorSet, FormError, Result};
use crate::fields::{Field, FieldSet};
use crate::form::validate;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing in flight. The initial state.
    #[default]
    Idle,
    /// A request is waiting for the server; submit is disabled.
    Loading,
    /// The server accepted the registration.
    Succeeded,
    /// The server rejected the registration or could not be reached.
    Failed,
}

/// Top-level banner shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMessage {
    /// Text to display.
    pub text: String,
    /// Whether this reports a success (as opposed to an error).
    pub success: bool,
}

/// Everything the signup view renders from.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FieldSet,
    errors: ErrorSet,
    status: SubmissionStatus,
    message: Option<ResultMessage>,
}

impl FormState {
    /// Creates an idle form with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Errors currently displayed next to fields.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Where the form is in its submit lifecycle.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The banner to show, if any. Never holds an empty text.
    pub fn message(&self) -> Option<&ResultMessage> {
        self.message.as_ref()
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Records an edit and dismisses that field's error, if it had one.
    ///
    /// Other fields keep their errors until the next submit re-validates.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.errors.clear(field) {
            debug!(%field, "cleared field error on edit");
        }
    }

    /// Like [`FormState::on_field_change`], addressed by wire name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a signup field.
    pub fn on_field_change_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// Starts a submit attempt.
    ///
    /// Clears the banner, re-validates every field and, when the form is
    /// valid, moves to [`SubmissionStatus::Loading`].
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InFlight`] without touching any state while a
    /// request is already pending, or [`FormError::Invalid`] with the errors
    /// now displayed when validation fails. The status is `Idle` afterwards.
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.is_loading() {
            debug!("submit ignored while a request is in flight");
            return Err(FormError::InFlight);
        }

        self.message = None;
        self.status = SubmissionStatus::Idle;
        self.errors = validate(&self.fields);

        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "submit blocked by validation");
            return Err(FormError::Invalid(self.errors.clone()));
        }

        self.status = SubmissionStatus::Loading;
        Ok(())
    }

    /// Finishes a pending submit as accepted and empties the form.
    ///
    /// Returns `false` and changes nothing unless a submit was pending.
    pub fn succeed(&mut self, text: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.fields.clear();
        self.finish(SubmissionStatus::Succeeded, text.into(), true);
        true
    }

    /// Finishes a pending submit as failed, keeping the field values.
    ///
    /// Returns `false` and changes nothing unless a submit was pending.
    pub fn fail(&mut self, text: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.finish(SubmissionStatus::Failed, text.into(), false);
        true
    }

    fn finish(&mut self, status: SubmissionStatus, text: String, success: bool) {
        self.message = (!text.is_empty()).then_some(ResultMessage { text, success });
        self.status = status;
    }
}
