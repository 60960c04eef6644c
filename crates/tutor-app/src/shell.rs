//! Presentation shell: owns at most one session and renders its transcript.

use colored::Colorize;
use tutor_ai::{Session, SessionConfig, Speaker, SubmitOutcome, Turn, OPENING_MESSAGE};
use tutor_common::ConfigError;

/// Builds a session from configuration.
pub type SessionFactory = Box<dyn Fn(SessionConfig) -> Result<Session, ConfigError> + Send + Sync>;

/// Chat front-end state.
pub struct Shell {
    session: Option<Session>,
    factory: SessionFactory,
    color: bool,
}

impl Shell {
    pub fn new(color: bool) -> Self {
        Self::with_factory(color, Box::new(Session::create))
    }

    pub fn with_factory(color: bool, factory: SessionFactory) -> Self {
        Self {
            session: None,
            factory,
            color,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Create a session from `config` and elicit the tutor's introduction.
    pub async fn start(&mut self, config: SessionConfig) -> Result<SubmitOutcome, ConfigError> {
        let session = (self.factory)(config)?;
        Ok(self.attach(session).await)
    }

    /// Adopt an already-built session and send the opening message.
    pub async fn attach(&mut self, session: Session) -> SubmitOutcome {
        self.session.insert(session).open().await
    }

    /// Relay one message. `None` without a session or for blank input.
    pub async fn send(&mut self, message: &str) -> Option<SubmitOutcome> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        let session = self.session.as_mut()?;
        Some(session.submit(message).await)
    }

    /// Discard the session entirely so a new one can be started.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Whole transcript as labelled blocks, without the synthetic opening turn.
    pub fn render(&self) -> String {
        let Some(session) = self.session.as_ref() else {
            return String::new();
        };
        let history = session.history();
        let skip = match history.first() {
            Some(first) if is_opening(first) => 1,
            _ => 0,
        };
        history
            .iter()
            .skip(skip)
            .map(|turn| self.render_block(turn.speaker(), turn.text()))
            .collect()
    }

    /// One labelled block followed by a blank line.
    pub fn render_block(&self, speaker: Speaker, text: &str) -> String {
        let label = format!("{}:", speaker.label());
        let label = match (self.color, speaker) {
            (false, _) => label,
            (true, Speaker::User) => label.cyan().bold().to_string(),
            (true, Speaker::Assistant) => label.green().bold().to_string(),
        };
        format!("{label}\n{text}\n\n")
    }
}

fn is_opening(turn: &Turn) -> bool {
    turn.speaker() == Speaker::User && turn.text() == OPENING_MESSAGE
}
