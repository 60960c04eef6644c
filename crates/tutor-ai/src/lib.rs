//! Conversation engine for the learning tutor.
//!
//! Provides:
//! - A `Session` that owns the transcript and replays it, together with the
//!   fixed tutoring instruction, on every backend call
//! - Anthropic and OpenAI backend adapters behind the `AiClient` trait
//! - Token usage tracking
//! - Plain-text transcript export
//! - A keyed `SessionStore` for hosts serving several conversations

pub mod anthropic;
pub mod export;
mod http;
pub mod instruction;
pub mod openai;
pub mod session;
pub mod store;
pub mod token_tracker;
pub mod transcript;

use async_trait::async_trait;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use instruction::{OPENING_MESSAGE, TUTOR_INSTRUCTION};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{RequestOptions, Session, SessionConfig, SubmitOutcome};
pub use store::SessionStore;
pub use token_tracker::TokenTracker;
pub use transcript::{Speaker, Turn};

/// A hosted language model that produces the next assistant turn.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send the instruction plus the whole transcript, returning the reply text.
    async fn send_turn(&self, instruction: &str, transcript: &[Turn])
        -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::ApiError("HTTP 401 Unauthorized: bad key".into()).to_string(),
            "API error: HTTP 401 Unauthorized: bad key"
        );
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
    }
}
