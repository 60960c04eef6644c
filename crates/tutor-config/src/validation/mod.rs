//! Full configuration validation.
//!
//! Checks numeric ranges and string fields, collecting every problem
//! into a single `ConfigError`. `repair` additionally puts each offending
//! field back to its default so the rest of the file still applies.

mod helpers;


use crate::schema::{ProviderConfig, RequestConfig, TutorConfig};
use tutor_common::ConfigError;

use helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TutorConfig) -> Result<(), ConfigError> {
    match repair(&mut config.clone()) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Reset every invalid field to its default.
///
/// Returns the collected validation error when anything was reset. The
/// backend identifier is left alone; it is checked where the session is
/// configured so an unknown backend aborts startup.
pub fn repair(config: &mut TutorConfig) -> Option<ConfigError> {
    let defaults = TutorConfig::default();
    let mut errors: Vec<String> = Vec::new();

    repair_provider(&mut errors, &mut config.provider, &defaults.provider);
    repair_request(&mut errors, &mut config.request, &defaults.request);
    if !validate_non_empty(&mut errors, "export.path", &config.export.path) {
        config.export.path = defaults.export.path;
    }

    if errors.is_empty() {
        None
    } else {
        Some(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn repair_provider(errors: &mut Vec<String>, provider: &mut ProviderConfig, defaults: &ProviderConfig) {
    if !validate_non_empty(errors, "provider.anthropic_model", &provider.anthropic_model) {
        provider.anthropic_model = defaults.anthropic_model.clone();
    }
    if !validate_non_empty(errors, "provider.openai_model", &provider.openai_model) {
        provider.openai_model = defaults.openai_model.clone();
    }
    if !validate_http_url(errors, "provider.anthropic_base_url", provider.anthropic_base_url.as_deref()) {
        provider.anthropic_base_url = None;
    }
    if !validate_http_url(errors, "provider.openai_base_url", provider.openai_base_url.as_deref()) {
        provider.openai_base_url = None;
    }
}

fn repair_request(errors: &mut Vec<String>, request: &mut RequestConfig, defaults: &RequestConfig) {
    if !validate_range(errors, "request.max_tokens", request.max_tokens, 1, 8192) {
        request.max_tokens = defaults.max_tokens;
    }
    if !validate_range_f64(errors, "request.temperature", request.temperature, 0.0, 2.0) {
        request.temperature = defaults.temperature;
    }
    if !validate_range(errors, "request.timeout_secs", request.timeout_secs, 5, 600) {
        request.timeout_secs = defaults.timeout_secs;
    }
}
