//! UI/backend events and error modeling for the predictor GUI.

use client_core::PredictError;

pub enum UiEvent {
    Info(String),
    HealthOk(String),
    Prediction(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Server,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Predict,
    HealthCheck,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// Category comes from the typed failure, not from message sniffing.
    pub fn from_predict_error(context: UiErrorContext, err: &PredictError) -> Self {
        let category = match err {
            PredictError::Validation(_) => UiErrorCategory::Validation,
            PredictError::Transport(_) => UiErrorCategory::Transport,
            PredictError::Server { .. } | PredictError::MalformedResponse(_) => {
                UiErrorCategory::Server
            }
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Single displayable line for the banner/status region.
    pub fn display_message(&self) -> String {
        match self.category {
            UiErrorCategory::Transport => {
                "Prediction service unreachable; check the server URL/network and try again."
                    .to_string()
            }
            UiErrorCategory::Validation => self.message.clone(),
            UiErrorCategory::Server | UiErrorCategory::Unknown => {
                format!("{} error: {}", err_label(self.category), self.message)
            }
        }
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Server => "Server",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{domain::NumericField, error::EncodeError};

    #[test]
    fn predict_error_variants_map_to_categories() {
        let validation = PredictError::Validation(EncodeError::MissingValue {
            field: NumericField::Age,
        });
        let transport = PredictError::Transport("request timed out".to_string());
        let server = PredictError::Server {
            status: 400,
            message: "bad input".to_string(),
        };
        let malformed = PredictError::MalformedResponse("missing field".to_string());

        let classify = |err: &PredictError| {
            UiError::from_predict_error(UiErrorContext::Predict, err).category()
        };
        assert_eq!(classify(&validation), UiErrorCategory::Validation);
        assert_eq!(classify(&transport), UiErrorCategory::Transport);
        assert_eq!(classify(&server), UiErrorCategory::Server);
        assert_eq!(classify(&malformed), UiErrorCategory::Server);
    }

    #[test]
    fn validation_errors_display_the_field_message_verbatim() {
        let err = UiError::from_predict_error(
            UiErrorContext::Predict,
            &PredictError::Validation(EncodeError::MissingValue {
                field: NumericField::Fare,
            }),
        );
        assert_eq!(err.display_message(), "Fare is required");
    }

    #[test]
    fn transport_errors_display_a_retry_suggestion() {
        let err = UiError::from_predict_error(
            UiErrorContext::Predict,
            &PredictError::Transport("connection failed".to_string()),
        );
        assert!(err.display_message().contains("try again"));
    }
}
