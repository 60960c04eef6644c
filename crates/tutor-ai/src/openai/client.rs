//! OpenAI client struct, request building, and response parsing.

use serde_json::json;
use tutor_common::ConfigError;

use crate::{http, AiError, AiResponse, TokenUsage, Turn};

use super::config::OpenAiConfig;

/// OpenAI API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ConfigError> {
        let http = http::build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Build the JSON request body for the Chat Completions API.
    pub(crate) fn build_request_body(&self, instruction: &str, transcript: &[Turn]) -> serde_json::Value {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(json!({
            "role": "system",
            "content": instruction,
        }));
        for turn in transcript {
            messages.push(json!({
                "role": turn.speaker().role(),
                "content": turn.text(),
            }));
        }

        json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }

    /// Parse a Chat Completions response. The reply is the first choice's content.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let choices = json["choices"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?;

        let first = choices
            .first()
            .ok_or_else(|| AiError::ParseError("empty choices".to_string()))?;

        let content = first["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("first choice has no text content".to_string()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
