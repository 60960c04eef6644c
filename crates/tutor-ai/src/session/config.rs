//! Session configuration and backend client construction.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use tutor_common::{Backend, ConfigError};

use crate::{AiClient, AnthropicClient, AnthropicConfig, OpenAiClient, OpenAiConfig};

/// Tuning knobs forwarded to the backend adapter.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub max_tokens: u32,
    /// Only sent to OpenAI.
    pub temperature: f64,
    pub timeout: Duration,
    /// Endpoint override; `None` uses the provider's public URL.
    pub base_url: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
            timeout: Duration::from_secs(120),
            base_url: None,
        }
    }
}

/// Backend choice, credential, and model for one session's lifetime.
#[derive(Clone)]
pub struct SessionConfig {
    pub backend: Backend,
    pub credential: String,
    /// Empty means the backend's default model.
    pub model: String,
    pub options: RequestOptions,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("backend", &self.backend)
            .field("credential", &"[REDACTED]")
            .field("model", &self.model)
            .field("options", &self.options)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(backend: Backend, credential: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            backend,
            credential: credential.into(),
            model: model.into(),
            options: RequestOptions::default(),
        }
    }

    /// Like `new`, but with the backend given by identifier (`"openai"`, `"anthropic"`).
    pub fn parse(
        backend: &str,
        credential: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(backend.parse()?, credential, model))
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// The model actually requested.
    pub fn effective_model(&self) -> &str {
        if self.model.trim().is_empty() {
            self.backend.default_model()
        } else {
            self.model.trim()
        }
    }

    /// Check the credential without touching the network.
    ///
    /// The credential is later sent exactly as given, so it must already be
    /// a valid header value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credential.trim().is_empty() {
            return Err(ConfigError::MissingCredential(self.backend));
        }
        if HeaderValue::from_str(&self.credential).is_err() {
            return Err(ConfigError::InvalidCredential(self.backend));
        }
        Ok(())
    }

    pub(crate) fn anthropic_config(&self) -> AnthropicConfig {
        let opts = &self.options;
        let mut config = AnthropicConfig::new(self.credential.as_str())
            .with_model(self.effective_model())
            .with_max_tokens(opts.max_tokens)
            .with_timeout(opts.timeout);
        if let Some(ref url) = opts.base_url {
            config = config.with_base_url(url.clone());
        }
        config
    }

    pub(crate) fn openai_config(&self) -> OpenAiConfig {
        let opts = &self.options;
        let mut config = OpenAiConfig::new(self.credential.as_str())
            .with_model(self.effective_model())
            .with_max_tokens(opts.max_tokens)
            .with_temperature(opts.temperature)
            .with_timeout(opts.timeout);
        if let Some(ref url) = opts.base_url {
            config = config.with_base_url(url.clone());
        }
        config
    }

    /// Construct the provider-specific client handle.
    pub(crate) fn build_client(&self) -> Result<Box<dyn AiClient>, ConfigError> {
        let client: Box<dyn AiClient> = match self.backend {
            Backend::Anthropic => Box::new(AnthropicClient::new(self.anthropic_config())?),
            Backend::OpenAi => Box::new(OpenAiClient::new(self.openai_config())?),
        };
        Ok(client)
    }
}
