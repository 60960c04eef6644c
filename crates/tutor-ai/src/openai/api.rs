//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{http, AiClient, AiError, AiResponse, Turn};

use super::client::OpenAiClient;

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_turn(
        &self,
        instruction: &str,
        transcript: &[Turn],
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(instruction, transcript);

        debug!(model = %self.config.model, turns = transcript.len(), "OpenAI API request");

        let response = self
            .http
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
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
