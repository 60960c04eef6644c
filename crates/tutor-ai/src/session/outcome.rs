//! Result of one submission.

use std::fmt;

use crate::AiError;

/// Prefix of the reply text produced when the backend call fails.
pub const ERROR_REPLY_PREFIX: &str = "Sorry, I encountered an error:";

/// What `Session::submit` hands back.
///
/// Backend failures are reported as ordinary reply text so a chat view can
/// render every outcome the same way; `is_error` and `error` expose the
/// structured failure for callers that need to tell the two apart.
#[derive(Debug)]
pub struct SubmitOutcome {
    text: String,
    error: Option<AiError>,
}

impl SubmitOutcome {
    pub(crate) fn reply(text: String) -> Self {
        Self { text, error: None }
    }

    pub(crate) fn failed(error: AiError) -> Self {
        Self {
            text: format!("{ERROR_REPLY_PREFIX} {error}"),
            error: Some(error),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&AiError> {
        self.error.as_ref()
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_formats_error() {
        let outcome = SubmitOutcome::failed(AiError::RateLimited);
        assert_eq!(outcome.text(), "Sorry, I encountered an error: Rate limited");
        assert!(outcome.is_error());
        assert!(matches!(outcome.error(), Some(AiError::RateLimited)));
    }

    #[test]
    fn reply_outcome_has_no_error() {
        let outcome = SubmitOutcome::reply("hi".into());
        assert!(!outcome.is_error());
        assert_eq!(outcome.to_string(), "hi");
        assert_eq!(outcome.into_text(), "hi");
    }
}
