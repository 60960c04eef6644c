mod cli;
mod dotenv;
mod repl;
mod settings;
mod shell;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tutor_common::{ConfigError, TutorError};
use tutor_config::TutorConfig;

use crate::repl::LoopOptions;
use crate::shell::Shell;

fn load_config(args: &cli::Args) -> (TutorConfig, Option<ConfigError>) {
    let result = match args.config {
        Some(ref path) => tutor_config::load_config_from(path),
        None => tutor_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (TutorConfig::default(), Some(e)),
    }
}

/// Log to stderr so chat output on stdout stays clean. `RUST_LOG` wins.
fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();
}

fn print_setup_help(err: &ConfigError) {
    eprintln!("\nError: {err}");
    if let ConfigError::MissingCredential(backend) | ConfigError::InvalidCredential(backend) = err {
        eprintln!("\nTo use this tutor:");
        eprintln!("1. Get an API key from {}", backend.console_url());
        eprintln!(
            "2. Create a .env file with: {}=your_key_here (or pass --api-key)",
            backend.credential_env_var()
        );
        eprintln!("3. Run the tutor again\n");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::load(Path::new(".env"));

    let args = cli::parse();
    let (mut config, config_err) = load_config(&args);

    init_logging(&settings::log_directive(&args, &config));
    tracing::info!("Tutor v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(e) = tutor_config::validation::repair(&mut config) {
        tracing::warn!("Invalid config values reset to defaults: {e}");
    }

    let session_config =
        match settings::session_config(&args, &config, |name| std::env::var(name).ok()) {
            Ok(c) => c,
            Err(e) => {
                print_setup_help(&e);
                return ExitCode::FAILURE;
            }
        };
    let export_path = settings::export_path(&args, &config);

    let mut shell = Shell::new(config.display.color && !args.no_color);
    let opts = LoopOptions {
        config: session_config,
        export_path: &export_path,
        prompt_save: config.export.prompt_on_exit,
        full_transcript: settings::full_transcript(&args, &config),
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let result = repl::run(&mut shell, opts, &mut stdin.lock(), &mut stdout).await;
    if let Err(e) = stdout.flush() {
        tracing::warn!("Failed to flush stdout: {e}");
    }

    if let Some(session) = shell.session() {
        let usage = session.tracker();
        tracing::info!(
            calls = usage.call_count(),
            input_tokens = usage.total().input_tokens,
            output_tokens = usage.total().output_tokens,
            "Session finished"
        );
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(TutorError::Config(e)) => {
            print_setup_help(&e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Chat loop failed: {e}");
            eprintln!("\nUnexpected error: {e}");
            ExitCode::FAILURE
        }
    }
}
