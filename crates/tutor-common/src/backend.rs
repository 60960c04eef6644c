//! Language-model backend identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which hosted language-model provider a session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Anthropic Messages API.
    #[default]
    Anthropic,
    /// OpenAI Chat Completions API.
    #[serde(rename = "openai")]
    OpenAi,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Anthropic, Backend::OpenAi];

    /// Identifier used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Anthropic => "anthropic",
            Backend::OpenAi => "openai",
        }
    }

    /// Human-facing provider name.
    pub fn label(self) -> &'static str {
        match self {
            Backend::Anthropic => "Anthropic",
            Backend::OpenAi => "OpenAI",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn credential_env_var(self) -> &'static str {
        match self {
            Backend::Anthropic => "ANTHROPIC_API_KEY",
            Backend::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Backend::Anthropic => "claude-3-5-sonnet-20241022",
            Backend::OpenAi => "gpt-4o",
        }
    }

    /// Where to obtain a key for this provider.
    pub fn console_url(self) -> &'static str {
        match self {
            Backend::Anthropic => "https://console.anthropic.com/",
            Backend::OpenAi => "https://platform.openai.com/",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Backend::Anthropic),
            "openai" => Ok(Backend::OpenAi),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
