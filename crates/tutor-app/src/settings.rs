//! Resolve command-line arguments, config file, and environment into a
//! `SessionConfig`.

use std::path::PathBuf;
use std::time::Duration;

use tutor_ai::{RequestOptions, SessionConfig};
use tutor_common::{Backend, ConfigError};
use tutor_config::TutorConfig;

use crate::cli::Args;

/// Build the session configuration. `env` looks up environment variables;
/// an explicit `--api-key` wins over it.
pub fn session_config(
    args: &Args,
    config: &TutorConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SessionConfig, ConfigError> {
    let backend: Backend = match args.provider {
        Some(ref id) => id.parse()?,
        None => config.provider.backend()?,
    };

    let credential = args
        .api_key
        .clone()
        .or_else(|| env(backend.credential_env_var()))
        .unwrap_or_default();

    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.provider.model_for(backend).to_string());

    let options = RequestOptions {
        max_tokens: config.request.max_tokens,
        temperature: config.request.temperature,
        timeout: Duration::from_secs(u64::from(config.request.timeout_secs)),
        base_url: config.provider.base_url_for(backend).map(String::from),
    };

    Ok(SessionConfig::new(backend, credential, model).with_options(options))
}

/// Whether to reprint the whole transcript each round. Either the flag or
/// the config file turns it on.
pub fn full_transcript(args: &Args, config: &TutorConfig) -> bool {
    args.full_transcript || config.display.full_transcript
}

/// Transcript path: `--save` wins over the config file.
pub fn export_path(args: &Args, config: &TutorConfig) -> PathBuf {
    args.save
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.path))
}

/// `tracing` filter directive: `--log-level` wins over the config file.
/// A bare level applies to the tutor crates only.
pub fn log_directive(args: &Args, config: &TutorConfig) -> String {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.as_directive());
    if level.contains('=') {
        level.to_string()
    } else {
        format!("tutor={level}")
    }
}
