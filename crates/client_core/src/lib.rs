use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::FieldSnapshot,
    encode::encode,
    error::EncodeError,
    protocol::{ErrorDetail, HealthResponse, PredictRequest, PredictResponse},
};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod config;

pub use config::{load_settings, Settings};

/// Failure modes of one submission attempt.
///
/// `Validation` means no request was sent; the other variants describe what
/// went wrong after dispatch.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] EncodeError),
    #[error("prediction service unreachable: {0}")]
    Transport(String),
    #[error("prediction service error (status {status}): {message}")]
    Server { status: u16, message: String },
    #[error("unexpected prediction response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError>;
}

/// HTTP transport for the prediction service.
pub struct HttpPredictionClient {
    http: Client,
    server_url: String,
}

impl HttpPredictionClient {
    pub fn new(server_url: impl Into<String>, request_timeout: Duration) -> anyhow::Result<Self> {
        let server_url = config::normalize_server_url(&server_url.into())?;
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http, server_url })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(
            settings.server_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Probe the service root, which reports a readiness banner.
    pub async fn check_health(&self) -> Result<HealthResponse, PredictError> {
        let response = self
            .http
            .get(format!("{}/", self.server_url))
            .send()
            .await
            .map_err(transport_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Server {
                status: status.as_u16(),
                message: format!("health probe rejected with status {status}"),
            });
        }
        response
            .json::<HealthResponse>()
            .await
            .map_err(|err| PredictError::MalformedResponse(err.to_string()))
    }

    async fn post_predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        let url = format!("{}/predict", self.server_url);
        debug!(url = %url, "dispatching prediction request");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            // The service attaches {"error": ...} detail to rejections.
            let message = response
                .json::<ErrorDetail>()
                .await
                .map(|detail| detail.error)
                .unwrap_or_else(|_| format!("request rejected with status {status}"));
            return Err(PredictError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PredictResponse>()
            .await
            .map_err(|err| PredictError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl PredictionTransport for HttpPredictionClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        self.post_predict(request).await
    }
}

fn transport_failure(err: reqwest::Error) -> PredictError {
    let cause = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };
    PredictError::Transport(cause)
}

/// Displayable submission state for one form instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<String>,
}

/// Outcome of one `submit` call.
#[derive(Debug)]
pub enum SubmitResult {
    /// A request was already in flight; nothing was dispatched.
    Ignored,
    Predicted(PredictResponse),
    Failed(PredictError),
}

/// Drives the submit cycle for one form instance: encode, dispatch, and fold
/// the outcome back into a displayable state.
///
/// At most one request is in flight at a time; a submit that arrives while
/// loading is ignored without touching the transport or the recorded state.
pub struct PredictionSession<T: PredictionTransport> {
    transport: T,
    state: SubmitState,
}

impl<T: PredictionTransport> PredictionSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SubmitState::default(),
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit(&mut self, snapshot: &FieldSnapshot) -> SubmitResult {
        if self.state.loading {
            warn!("submit ignored: a prediction request is already in flight");
            return SubmitResult::Ignored;
        }

        // Stale feedback never survives into a new attempt.
        self.state.error = None;
        self.state.result = None;

        let features = match encode(snapshot) {
            Ok(features) => features,
            Err(err) => {
                let err = PredictError::Validation(err);
                self.state.error = Some(err.to_string());
                return SubmitResult::Failed(err);
            }
        };

        self.state.loading = true;
        let outcome = self.transport.predict(&PredictRequest { features }).await;
        self.state.loading = false;

        match outcome {
            Ok(response) => {
                info!(result = %response.result, "prediction received");
                self.state.result = Some(response.result.clone());
                SubmitResult::Predicted(response)
            }
            Err(err) => {
                warn!("prediction failed: {err}");
                self.state.error = Some(err.to_string());
                SubmitResult::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests;
