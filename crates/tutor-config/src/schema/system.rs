//! Export, display, and logging settings.

use serde::{Deserialize, Serialize};

/// Transcript export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub path: String,
    /// Ask whether to save the transcript when the chat loop ends.
    pub prompt_on_exit: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: "session_log.txt".into(),
            prompt_on_exit: true,
        }
    }
}

/// Terminal display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Print the whole conversation after every reply, not just the reply.
    pub full_transcript: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            full_transcript: false,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
