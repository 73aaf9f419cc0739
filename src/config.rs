use std::env;

/// Imagen predict endpoint on the Generative Language API
const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/imagen-4.0-generate-001:predict";

/// Process configuration.
///
/// The only external configuration is the API credential taken from the
/// environment. An empty credential is valid: the primary endpoint is
/// then never reached and every generation uses the placeholder fallback.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key appended to the endpoint URL
    pub api_key: String,
    /// Predict endpoint base URL, without the key query parameter
    pub endpoint: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            log::warn!(
                "GEMINI_API_KEY is not set; every generation will use the placeholder fallback"
            );
        }
        Config {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
