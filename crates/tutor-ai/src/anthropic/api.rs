//! AiClient trait implementation for AnthropicClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{http, AiClient, AiError, AiResponse, Turn};

use super::client::{AnthropicClient, ANTHROPIC_VERSION};

#[async_trait]
impl AiClient for AnthropicClient {
    async fn send_turn(
        &self,
        instruction: &str,
        transcript: &[Turn],
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(instruction, transcript);

        debug!(model = %self.config.model, turns = transcript.len(), "Anthropic API request");

        let response = self
            .http
            .post(&self.config.base_url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(http::transport_error)?;

        let response = http::check_status(response).await?;
        let json = http::read_json(response).await?;

        self.parse_response(json)
    }
}
