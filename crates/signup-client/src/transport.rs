//! Sending a registration to the service.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::SignupRequest;
use crate::response::SignupOutcome;

/// A boxed future for async transport operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Delivers one registration request and reports how it ended.
///
/// Implementations resolve exactly once and never fail: every way the
/// attempt can end is a [`SignupOutcome`].
///
/// # Example
///
/// ```
/// use signup_client::{BoxFuture, SignupOutcome, SignupRequest, SignupTransport};
///
/// struct AlwaysWelcome;
///
/// impl SignupTransport for AlwaysWelcome {
///     fn send<'a>(&'a self, _request: &'a SignupRequest) -> BoxFuture<'a, SignupOutcome> {
///         Box::pin(async move {
///             SignupOutcome::Accepted {
///                 message: Some("Welcome".to_string()),
///             }
///         })
///     }
/// }
/// ```
pub trait SignupTransport: Send + Sync {
    /// Sends the request.
    fn send<'a>(&'a self, request: &'a SignupRequest) -> BoxFuture<'a, SignupOutcome>;
}

/// Posts registrations as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Creates a transport for the endpoint described by `config`.
    ///
    /// No timeout is set; a request waits until the service answers or the
    /// connection fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`](crate::ClientError::Http) if the HTTP
    /// client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a transport using an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            url: config.signup_url(),
        }
    }

    /// The URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SignupTransport for HttpTransport {
    fn send<'a>(&'a self, request: &'a SignupRequest) -> BoxFuture<'a, SignupOutcome> {
        Box::pin(async move {
            debug!(url = %self.url, username = %request.username, "posting signup");

            let response = match self.client.post(&self.url).json(request).send().await {
                Ok(response) => response,
                Err(error) => {
                    warn!(url = %self.url, %error, "signup service unreachable");
                    return SignupOutcome::unreachable(error.to_string());
                }
            };

            let status = response.status().as_u16();
            // A body that fails mid-read still came with a status.
            let body = match response.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(error) => {
                    warn!(status, %error, "failed to read signup response body");
                    Vec::new()
                }
            };

            debug!(status, "signup service responded");
            SignupOutcome::from_response(status, &body)
        })
    }
}
