//! Anthropic client struct, request building, and response parsing.

use serde_json::json;
use tutor_common::ConfigError;

use crate::{http, AiError, AiResponse, TokenUsage, Turn};

use super::config::AnthropicConfig;

pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
pub struct AnthropicClient {
    pub(crate) config: AnthropicConfig,
    pub(crate) http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Result<Self, ConfigError> {
        let http = http::build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, instruction: &str, transcript: &[Turn]) -> serde_json::Value {
        let messages: Vec<_> = transcript
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.speaker().role(),
                    "content": turn.text(),
                })
            })
            .collect();

        json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": instruction,
            "messages": messages,
        })
    }

    /// Parse a Messages API response. The reply is the first text block.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["content"]
            .as_array()
            .and_then(|blocks| {
                blocks.iter().find_map(|b| {
                    if b["type"] == "text" {
                        b["text"].as_str().map(String::from)
                    } else {
                        None
                    }
                })
            })
            .ok_or_else(|| AiError::ParseError("no text content in response".to_string()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
