//! Drives one signup form through its submit lifecycle.

use signup_forms::{Field, FormState, SubmissionStatus};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::request::SignupRequest;
use crate::response::SignupOutcome;
use crate::transport::SignupTransport;

/// Banner shown when the service accepts without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Registration successful! Please check your email.";

/// Banner shown when the service rejects without an error text.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Banner shown when the service could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check if the backend server is running.";

/// A validated submission waiting for its outcome.
///
/// Produced by [`SubmissionController::prepare`] and consumed by
/// [`SubmissionController::complete`], or [`SubmissionController::abandon`]
/// if no outcome will arrive; until then the form stays `Loading`.
#[derive(Debug)]
#[must_use]
pub struct PendingSubmission {
    generation: u64,
    request: SignupRequest,
}

impl PendingSubmission {
    /// The body to send.
    pub fn request(&self) -> &SignupRequest {
        &self.request
    }
}

/// Owns a form's state and sends it through a [`SignupTransport`].
///
/// The state is handed to the renderer by reference via
/// [`SubmissionController::state`].
pub struct SubmissionController<T> {
    transport: T,
    state: FormState,
    generation: u64,
}

impl<T> std::fmt::Debug for SubmissionController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<T: SignupTransport> SubmissionController<T> {
    /// Creates a controller with a fresh, idle form.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: FormState::new(),
            generation: 0,
        }
    }

    /// The form state, for rendering.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The transport submissions are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// See [`FormState::on_field_change`].
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.on_field_change(field, value);
    }

    /// See [`FormState::on_field_change_by_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a signup field.
    pub fn on_field_change_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.state.on_field_change_by_name(name, value)?;
        Ok(())
    }

    /// Validates the form and, if it passes, moves it to `Loading` and
    /// returns the request to send.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving no request in flight, if the form is
    /// invalid or a submission is already pending.
    pub fn prepare(&mut self) -> Result<PendingSubmission> {
        self.state.begin_submit()?;
        Ok(PendingSubmission {
            generation: self.generation,
            request: SignupRequest::from(self.state.fields()),
        })
    }

    /// Applies the outcome of a pending submission to the form.
    ///
    /// Returns `false` and leaves the form untouched if the submission was
    /// prepared before the last [`SubmissionController::remount`].
    pub fn complete(&mut self, pending: PendingSubmission, outcome: SignupOutcome) -> bool {
        apply_outcome(&mut self.state, self.generation, pending, outcome)
    }

    /// Gives up on a pending submission that will never get an outcome.
    ///
    /// The form fails with [`NETWORK_ERROR_MESSAGE`], as if the service had
    /// been unreachable. Returns `false` if the submission is stale.
    pub fn abandon(&mut self, pending: PendingSubmission) -> bool {
        self.complete(pending, SignupOutcome::unreachable("submission abandoned"))
    }

    /// Runs a full submit: validate, send once, apply the outcome.
    ///
    /// Returns the status the form ended in, `Succeeded` or `Failed`.
    ///
    /// # Errors
    ///
    /// Returns an error without contacting the service if the form is
    /// invalid or a submission is already pending.
    ///
    /// # Cancel safety
    ///
    /// If the returned future is dropped while the request is in flight,
    /// the form leaves `Loading` and fails with [`NETWORK_ERROR_MESSAGE`].
    /// Field values are kept, so the user can submit again.
    pub async fn submit(&mut self) -> Result<SubmissionStatus> {
        let pending = self.prepare()?;
        let Self {
            transport,
            state,
            generation,
        } = &mut *self;

        let mut guard = InFlightGuard { state };
        let outcome = transport.send(pending.request()).await;
        apply_outcome(&mut *guard.state, *generation, pending, outcome);
        drop(guard);

        Ok(self.state.status())
    }

    /// Discards the form and starts over with a fresh, idle one.
    ///
    /// Outcomes of submissions prepared before the remount are ignored.
    pub fn remount(&mut self) {
        self.state = FormState::new();
        self.generation += 1;
    }
}

/// Fails a form still in `Loading` when a submit future is dropped early.
struct InFlightGuard<'a> {
    state: &'a mut FormState,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.state.is_loading() {
            warn!("submit cancelled while the request was in flight");
            self.state.fail(NETWORK_ERROR_MESSAGE);
        }
    }
}

fn apply_outcome(
    state: &mut FormState,
    generation: u64,
    pending: PendingSubmission,
    outcome: SignupOutcome,
) -> bool {
    if pending.generation != generation {
        debug!(
            pending = pending.generation,
            current = generation,
            "dropping outcome for a remounted form"
        );
        return false;
    }

    match outcome {
        SignupOutcome::Accepted { message } => {
            info!(username = %pending.request.username, "registration accepted");
            state.succeed(message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
        }
        SignupOutcome::Rejected { status, error } => {
            info!(status, "registration rejected");
            state.fail(error.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()))
        }
        SignupOutcome::Unreachable { reason } => {
            info!(%reason, "registration service unreachable");
            state.fail(NETWORK_ERROR_MESSAGE)
        }
    }
}
