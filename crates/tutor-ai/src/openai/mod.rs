//! OpenAI Chat Completions adapter.
//!
//! The fixed instruction is injected as the leading `system` message,
//! followed by the transcript (https://api.openai.com/v1/chat/completions).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
