//! Registration outcomes and response bodies.

use serde::Deserialize;

/// Body of a 2xx response.
#[derive(Debug, Default, Deserialize)]
struct AcceptedBody {
    #[serde(default)]
    message: Option<String>,
}

/// Body of a non-2xx response.
#[derive(Debug, Default, Deserialize)]
struct RejectedBody {
    #[serde(default)]
    error: Option<String>,
}

/// How a registration attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The service answered 2xx.
    Accepted {
        /// Server-provided message, if any.
        message: Option<String>,
    },
    /// The service answered but declined the request.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided error text, if any.
        error: Option<String>,
    },
    /// No response was received.
    Unreachable {
        /// Transport error description, for logs only.
        reason: String,
    },
}

impl SignupOutcome {
    /// Classifies a received response by status, reading the optional text
    /// from its body.
    ///
    /// Bodies that are empty, not JSON or lack the field carry no text.
    /// Empty strings count as absent.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        if (200..300).contains(&status) {
            let body: AcceptedBody = serde_json::from_slice(body).unwrap_or_default();
            Self::Accepted {
                message: non_empty(body.message),
            }
        } else {
            let body: RejectedBody = serde_json::from_slice(body).unwrap_or_default();
            Self::Rejected {
                status,
                error: non_empty(body.error),
            }
        }
    }

    /// Creates an outcome for a request that never got a response.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable {
            reason: reason.into(),
        }
    }

    /// Whether the service accepted the registration.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
