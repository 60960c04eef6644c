//! Async chat methods for Session.

use tracing::{debug, warn};

use crate::instruction::{OPENING_MESSAGE, TUTOR_INSTRUCTION};
use crate::Turn;

use super::manager::Session;
use super::outcome::SubmitOutcome;

impl Session {
    /// Append a user turn and ask the backend for the next assistant turn.
    ///
    /// On failure no assistant turn is appended and the outcome carries an
    /// apology text plus the structured error.
    pub async fn submit(&mut self, message: impl Into<String>) -> SubmitOutcome {
        self.transcript.push(Turn::user(message));

        match self.client.send_turn(TUTOR_INSTRUCTION, &self.transcript).await {
            Ok(response) => {
                self.tracker.record(self.config.backend.as_str(), &response.usage);
                debug!(
                    turns = self.transcript.len() + 1,
                    output_tokens = response.usage.output_tokens,
                    "Backend reply received"
                );
                self.transcript.push(Turn::assistant(response.content.clone()));
                SubmitOutcome::reply(response.content)
            }
            Err(e) => {
                warn!(backend = %self.config.backend, error = %e, "Backend call failed");
                SubmitOutcome::failed(e)
            }
        }
    }

    /// Send the synthetic opening message so the tutor introduces itself.
    pub async fn open(&mut self) -> SubmitOutcome {
        self.submit(OPENING_MESSAGE).await
    }
}
