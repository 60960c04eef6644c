//! Anthropic Messages API adapter.
//!
//! The fixed instruction travels in the top-level `system` field and the
//! transcript in `messages` (https://api.anthropic.com/v1/messages).

mod api;
mod client;
mod config;

pub use client::AnthropicClient;
pub use config::AnthropicConfig;
