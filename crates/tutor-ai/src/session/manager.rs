//! Session struct and transcript management.

use std::path::Path;

use tracing::info;
use tutor_common::ConfigError;

use crate::export;
use crate::token_tracker::TokenTracker;
use crate::{AiClient, Turn};

use super::config::SessionConfig;

/// One tutoring conversation: configuration, backend client, and transcript.
pub struct Session {
    /// Fixed for the session's lifetime.
    pub(super) config: SessionConfig,
    pub(super) client: Box<dyn AiClient>,
    /// Ordered turns, replayed in full on every backend call.
    pub(super) transcript: Vec<Turn>,
    pub(super) tracker: TokenTracker,
}

impl Session {
    /// Validate `config` and build the matching backend client.
    ///
    /// Fails before any network interaction when the credential is missing
    /// or unusable.
    pub fn create(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = config.build_client()?;
        info!(backend = %config.backend, model = %config.effective_model(), "Session created");
        Ok(Self::assemble(config, client))
    }

    /// Like `create`, but with a caller-supplied client (alternate transports, tests).
    pub fn with_client(config: SessionConfig, client: Box<dyn AiClient>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, client))
    }

    fn assemble(config: SessionConfig, client: Box<dyn AiClient>) -> Self {
        Self {
            config,
            client,
            transcript: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Copy of the transcript.
    pub fn history(&self) -> Vec<Turn> {
        self.transcript.clone()
    }

    /// Number of turns in the transcript.
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Clear the transcript. Configuration and usage counters are kept.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Write the transcript as a plain-text log.
    pub fn export(&self, path: &Path) -> std::io::Result<()> {
        export::write_log(path, &self.transcript)?;
        info!(path = %path.display(), turns = self.transcript.len(), "Session exported");
        Ok(())
    }
}
