use std::path::PathBuf;

use clap::Parser;

/// Personal Learning Tutor — learn any topic fast with a scripted AI tutor.
#[derive(Parser, Debug, Default)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Backend to use (anthropic, openai). Overrides the config file.
    #[arg(short, long)]
    pub provider: Option<String>,

    /// API key. Takes precedence over ANTHROPIC_API_KEY / OPENAI_API_KEY.
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Model identifier. Overrides the config file.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (debug, info, tutor_ai=trace, ...).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Where to save the transcript when asked on exit.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Reprint the whole conversation after every reply.
    #[arg(long)]
    pub full_transcript: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
