//! Shared HTTP plumbing for the backend adapters.

use std::time::Duration;

use tutor_common::ConfigError;

use crate::AiError;

/// Build the reqwest client a backend adapter holds for the session's lifetime.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::Client(e.to_string()))
}

/// Classify a transport-level failure.
pub(crate) fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Turn a non-success HTTP status into an `AiError`, reading a short body prefix.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::ApiError(format!("HTTP {status}: {}", truncate_body(&text))));
    }
    Ok(response)
}

/// Read a success response body as JSON.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, AiError> {
    response
        .json()
        .await
        .map_err(|e| AiError::ParseError(e.to_string()))
}

fn truncate_body(text: &str) -> String {
    text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_caps_at_200_chars() {
        let long = "é".repeat(500);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn build_client_succeeds_offline() {
        assert!(build_client(Duration::from_secs(30)).is_ok());
    }
}
