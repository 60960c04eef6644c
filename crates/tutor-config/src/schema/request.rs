//! Backend request parameters.

use serde::{Deserialize, Serialize};

/// Parameters sent with every backend call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Reply length cap (valid range: 1-8192).
    pub max_tokens: u32,
    /// Sampling temperature, OpenAI only (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}
