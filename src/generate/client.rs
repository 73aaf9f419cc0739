use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::state::data::AspectRatio;

/// Why a call to the primary endpoint produced no image.
///
/// Every variant routes to the placeholder fallback; none of these are
/// shown to the user.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("request to image endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image endpoint returned status {0}")]
    Status(StatusCode),
    #[error("response carried no image payload")]
    MissingPayload,
    #[error("image payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// Request body for the predict endpoint
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: &'static str,
}

impl PredictRequest {
    /// Request exactly one sample at the given ratio
    fn single(prompt: &str, ratio: AspectRatio) -> Self {
        PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: ratio.api_code(),
            },
        }
    }
}

/// Success response body from the predict endpoint
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

/// Client for the Imagen predict endpoint
#[derive(Debug, Clone)]
pub struct ImagenClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl ImagenClient {
    pub fn new(config: &Config) -> Self {
        ImagenClient {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// POST the composed prompt and return the base64-encoded PNG payload.
    ///
    /// The payload is decoded once here to validate it; the data URL the
    /// UI consumes keeps the encoded form.
    pub async fn generate(&self, prompt: &str, ratio: AspectRatio) -> Result<String, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::MissingCredential);
        }

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let response = self
            .http
            .post(&url)
            .json(&PredictRequest::single(prompt, ratio))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let payload: PredictResponse = response.json().await?;
        extract_payload(payload)
    }
}

/// Pull the first image payload out of a predict response and check
/// that it actually decodes as base64
fn extract_payload(response: PredictResponse) -> Result<String, GenerateError> {
    let encoded = response
        .predictions
        .into_iter()
        .find_map(|p| p.bytes_base64_encoded)
        .ok_or(GenerateError::MissingPayload)?;
    BASE64.decode(encoded.as_bytes())?;
    Ok(encoded)
}
