use std::path::PathBuf;

use crate::Backend;

/// Configuration problems, raised before any network interaction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("{} API key not found", .0.label())]
    MissingCredential(Backend),

    #[error("{} API key contains characters that cannot be sent in a header", .0.label())]
    InvalidCredential(Backend),

    #[error("unknown backend '{0}' (expected 'anthropic' or 'openai')")]
    UnknownBackend(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
