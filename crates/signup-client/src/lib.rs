//! # signup-client
//!
//! Sends a [`signup_forms`] form to the registration endpoint and reflects
//! the outcome back into the form.
//!
//! This crate provides:
//! - `ClientConfig`, the endpoint location (`SIGNUP_API_URL`, default
//!   `http://localhost:8000`)
//! - `SignupRequest` and `SignupOutcome`, the wire contract
//! - The `SignupTransport` seam and its reqwest-backed `HttpTransport`
//! - `SubmissionController`, which validates, sends once and applies the
//!   outcome
//!
//! ## Quick Start
//!
//! ```ignore
//! use signup_client::{ClientConfig, HttpTransport, SubmissionController};
//! use signup_forms::Field;
//!
//! let config = ClientConfig::from_env()?;
//! let mut form = SubmissionController::new(HttpTransport::new(&config)?);
//!
//! form.on_field_change(Field::Username, "alice");
//! form.on_field_change(Field::Email, "alice@example.com");
//! form.on_field_change(Field::Password, "wonderland");
//! form.on_field_change(Field::ConfirmPassword, "wonderland");
//!
//! let status = form.submit().await?;
//! println!("{status:?}: {:?}", form.state().message());
//! ```
//!
//! ## Outcomes
//!
//! Every attempt that passes validation ends in exactly one of three ways:
//!
//! | Outcome        | Status      | Banner                                   | Fields    |
//! |----------------|-------------|------------------------------------------|-----------|
//! | `Accepted`     | `Succeeded` | server `message` or default success text | emptied   |
//! | `Rejected`     | `Failed`    | server `error` or default failure text   | kept      |
//! | `Unreachable`  | `Failed`    | fixed network error text                 | kept      |
//!
//! ## Event-driven use
//!
//! A renderer that cannot hold `&mut` across the await can split the
//! lifecycle with [`SubmissionController::prepare`] and
//! [`SubmissionController::complete`]:
//!
//! ```ignore
//! let pending = form.prepare()?;          // validated, now Loading
//! let outcome = transport.send(pending.request()).await;
//! form.complete(pending, outcome);        // Succeeded or Failed
//! ```

mod config;
mod controller;
mod error;
mod request;
mod response;
mod transport;

pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, SIGNUP_PATH};
pub use controller::{
    PendingSubmission, SubmissionController, DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
pub use error::{ClientError, Result};
pub use request::SignupRequest;
pub use response::SignupOutcome;
pub use transport::{BoxFuture, HttpTransport, SignupTransport};
