//! Backend selection and per-provider model settings.

use serde::{Deserialize, Serialize};
use tutor_common::{Backend, ConfigError};

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Backend identifier as written in the file. Checked by `backend()`.
    pub backend: String,
    pub anthropic_model: String,
    pub openai_model: String,
    /// Override for the Anthropic endpoint (proxies, gateways).
    pub anthropic_base_url: Option<String>,
    /// Override for the OpenAI endpoint (proxies, compatible servers).
    pub openai_base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default().as_str().into(),
            anthropic_model: Backend::Anthropic.default_model().into(),
            openai_model: Backend::OpenAi.default_model().into(),
            anthropic_base_url: None,
            openai_base_url: None,
        }
    }
}

impl ProviderConfig {
    /// Parse the configured backend identifier.
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        self.backend.parse()
    }

    /// Configured model for `backend`.
    pub fn model_for(&self, backend: Backend) -> &str {
        match backend {
            Backend::Anthropic => &self.anthropic_model,
            Backend::OpenAi => &self.openai_model,
        }
    }

    /// Configured endpoint override for `backend`, if any.
    pub fn base_url_for(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Anthropic => self.anthropic_base_url.as_deref(),
            Backend::OpenAi => self.openai_base_url.as_deref(),
        }
    }
}
