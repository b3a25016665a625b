use serde::{Deserialize, Serialize};

use crate::encode::FeatureVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureVector,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Raw class index (0/1) the service reports alongside the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<i64>,
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_request_serializes_as_flat_features_array() {
        let request = PredictRequest {
            features: FeatureVector([3.0, 1.0, 22.0, 1.0, 0.0, 7.25, 0.0]),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "features": [3.0, 1.0, 22.0, 1.0, 0.0, 7.25, 0.0] })
        );
    }

    #[test]
    fn predict_response_parses_without_prediction_index() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"result": "Survived"}"#).expect("parse");
        assert_eq!(response.result, "Survived");
        assert_eq!(response.prediction, None);
    }

    #[test]
    fn predict_response_missing_result_is_an_error() {
        assert!(serde_json::from_str::<PredictResponse>(r#"{"prediction": 1}"#).is_err());
    }
}
