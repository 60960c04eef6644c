//! Conversation session management.
//!
//! A `Session` owns the transcript and one backend client. Every submission
//! resends the fixed instruction plus the full transcript; nothing is
//! truncated or summarised.

mod chat;
mod config;
mod manager;
mod outcome;

#[cfg(test)]
mod tests;

pub use config::{RequestOptions, SessionConfig};
pub use manager::Session;
pub use outcome::{SubmitOutcome, ERROR_REPLY_PREFIX};
