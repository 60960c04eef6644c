//! Default config file content.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Personal Learning Tutor configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# API keys are read from ANTHROPIC_API_KEY / OPENAI_API_KEY or --api-key,
# never from this file.

[provider]
# backend = "anthropic"    # anthropic, openai
# anthropic_model = "claude-3-5-sonnet-20241022"
# openai_model = "gpt-4o"
# anthropic_base_url = "https://api.anthropic.com/v1/messages"
# openai_base_url = "https://api.openai.com/v1/chat/completions"

[request]
# max_tokens = 2000        # 1-8192
# temperature = 0.7        # 0.0-2.0, OpenAI only
# timeout_secs = 120       # 5-600

[export]
# path = "session_log.txt"
# prompt_on_exit = true

[display]
# color = true
# full_transcript = false  # reprint the whole conversation after each reply

[logging]
# level = "WARN"           # TRACE, DEBUG, INFO, WARN, ERROR
"##
}
