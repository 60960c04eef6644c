//! Interactive command-line chat loop.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;
use tutor_ai::{SessionConfig, Speaker, SubmitOutcome};
use tutor_common::TutorError;

use crate::shell::Shell;

pub const FAREWELL: &str = "Great session! Keep practicing, and see you next time!";

const EXIT_TOKENS: [&str; 3] = ["quit", "exit", "bye"];

/// Options for one run of the loop.
pub struct LoopOptions<'a> {
    pub config: SessionConfig,
    pub export_path: &'a Path,
    pub prompt_save: bool,
    /// Re-render the whole transcript after each round instead of only the reply.
    pub full_transcript: bool,
}

/// What the user typed.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Skip,
    Reset,
    History,
    Message(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Skip;
    }
    if EXIT_TOKENS.iter().any(|t| line.eq_ignore_ascii_case(t)) {
        return Command::Exit;
    }
    match line {
        "/reset" => Command::Reset,
        "/history" => Command::History,
        _ => Command::Message(line),
    }
}

/// Run the chat until an exit token or end of input, then offer to save.
///
/// A configuration error while starting the session aborts the loop.
pub async fn run<R: BufRead, W: Write>(
    shell: &mut Shell,
    opts: LoopOptions<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<(), TutorError> {
    write_banner(output, &opts.config)?;

    let greeting = shell.start(opts.config.clone()).await?;
    write!(output, "\n{}", shell.render_block(Speaker::Assistant, greeting.text()))?;

    let mut line = String::new();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_command(&line) {
            Command::Skip => continue,
            Command::Exit => break,
            Command::Reset => {
                shell.reset();
                let greeting = shell.start(opts.config.clone()).await?;
                writeln!(output, "\nSession reset.")?;
                write!(output, "\n{}", shell.render_block(Speaker::Assistant, greeting.text()))?;
            }
            Command::History => {
                write!(output, "\n{}", shell.render())?;
            }
            Command::Message(message) => {
                if let Some(reply) = shell.send(message).await {
                    write_round(shell, &reply, opts.full_transcript, output)?;
                }
            }
        }
    }

    write!(output, "\n{}", shell.render_block(Speaker::Assistant, FAREWELL))?;

    if opts.prompt_save {
        offer_save(shell, opts.export_path, input, output)?;
    }
    Ok(())
}

/// Show the outcome of one round. Failed replies are not part of the
/// transcript, so in full mode they are appended after it.
fn write_round<W: Write>(
    shell: &Shell,
    reply: &SubmitOutcome,
    full_transcript: bool,
    output: &mut W,
) -> std::io::Result<()> {
    let reply_block = shell.render_block(Speaker::Assistant, reply.text());
    if !full_transcript {
        return write!(output, "\n{reply_block}");
    }
    write!(output, "\n{}", shell.render())?;
    if reply.is_error() {
        write!(output, "{reply_block}")?;
    }
    Ok(())
}

fn write_banner<W: Write>(output: &mut W, config: &SessionConfig) -> std::io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(output, "{rule}")?;
    writeln!(
        output,
        "Personal Learning Tutor - Powered by {} ({})",
        config.backend.label(),
        config.effective_model()
    )?;
    writeln!(output, "{rule}")?;
    writeln!(output, "\nType 'quit' or 'exit' to end the session.")?;
    writeln!(output, "'/reset' starts over, '/history' shows the conversation.")
}

fn offer_save<R: BufRead, W: Write>(
    shell: &Shell,
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<(), TutorError> {
    let Some(session) = shell.session() else {
        return Ok(());
    };

    write!(output, "Would you like to save this session? (yes/no): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    if answer != "yes" && answer != "y" {
        return Ok(());
    }

    match session.export(path) {
        Ok(()) => writeln!(output, "Session saved to {}", path.display())?,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Export failed");
            writeln!(output, "Could not save session to {}: {e}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use async_trait::async_trait;
    use tutor_ai::{AiClient, AiError, AiResponse, Session, Turn};
    use tutor_common::Backend;

    use super::*;

    #[test]
    fn parse_command_recognises_exit_tokens() {
        for token in ["quit", "EXIT", " Bye ", "Quit\n"] {
            assert_eq!(parse_command(token), Command::Exit, "{token:?}");
        }
        assert_eq!(parse_command("quitting"), Command::Message("quitting"));
    }

    #[test]
    fn parse_command_skips_blank_lines() {
        assert_eq!(parse_command(""), Command::Skip);
        assert_eq!(parse_command("  \n"), Command::Skip);
    }

    #[test]
    fn parse_command_slash_commands() {
        assert_eq!(parse_command("/reset\n"), Command::Reset);
        assert_eq!(parse_command("/history"), Command::History);
        assert_eq!(parse_command(" hello "), Command::Message("hello"));
    }

    #[tokio::test]
    async fn missing_credential_aborts_before_reading_input() {
        let mut shell = Shell::new(false);
        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();
        let path = Path::new("unused.txt");

        let result = run(
            &mut shell,
            LoopOptions {
                config: SessionConfig::new(Backend::Anthropic, "", ""),
                export_path: path,
                prompt_save: true,
                full_transcript: false,
            },
            &mut input,
            &mut output,
        )
        .await;

        assert!(matches!(result, Err(TutorError::Config(_))));
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn banner_names_provider_and_model() {
        let mut output = Vec::new();
        write_banner(&mut output, &SessionConfig::new(Backend::OpenAi, "k", "")).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Powered by OpenAI (gpt-4o)"));
    }

    async fn run_script(script: &str, path: &Path, prompt_save: bool) -> (Shell, String) {
        run_in(crate::shell::tests::echo_shell(), script, path, prompt_save, false).await
    }

    async fn run_in(
        mut shell: Shell,
        script: &str,
        path: &Path,
        prompt_save: bool,
        full_transcript: bool,
    ) -> (Shell, String) {
        let mut output = Vec::new();
        run(
            &mut shell,
            LoopOptions {
                config: SessionConfig::new(Backend::Anthropic, "key", ""),
                export_path: path,
                prompt_save,
                full_transcript,
            },
            &mut Cursor::new(script),
            &mut output,
        )
        .await
        .unwrap();
        (shell, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn loop_relays_messages_until_exit_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let (shell, output) = run_script("hello\n\n   \nBYE\nnever sent\n", &path, false).await;

        assert!(output.contains("Tutor:\necho: Hello! I'm ready to start learning."));
        assert!(output.contains("Tutor:\necho: hello"));
        assert!(output.contains(FAREWELL));
        assert!(!output.contains("never sent"));
        // opening pair + one exchange; blank lines never reach the session
        assert_eq!(shell.session().unwrap().turn_count(), 4);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn loop_ends_at_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let (shell, output) = run_script("one\ntwo", &dir.path().join("x.txt"), false).await;
        assert!(output.contains("echo: two"));
        assert!(output.ends_with(&format!("{FAREWELL}\n\n")));
        assert_eq!(shell.session().unwrap().turn_count(), 6);
    }

    #[tokio::test]
    async fn reset_starts_a_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let (shell, output) = run_script("first\n/reset\nquit\n", &dir.path().join("x.txt"), false).await;
        assert!(output.contains("Session reset."));
        let history = shell.session().unwrap().history();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|t| t.text() != "first"));
    }

    #[tokio::test]
    async fn history_command_renders_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run_script("hi\n/history\nexit\n", &dir.path().join("x.txt"), false).await;
        assert!(output.contains("You:\nhi\n\nTutor:\necho: hi\n\n"));
    }

    #[tokio::test]
    async fn loop_saves_when_user_agrees() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_log.txt");
        let (_, output) = run_script("hi\nquit\nyes\n", &path, true).await;

        assert!(output.contains("Would you like to save this session? (yes/no): "));
        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.starts_with("Personal Learning Tutor - Session Log\n"));
        assert!(log.contains("You: hi\n\nTutor: echo: hi\n\n"));
    }

    #[tokio::test]
    async fn offer_save_exports_on_yes() {
        let mut shell = Shell::new(false);
        shell.attach(crate::shell::tests::echo_session()).await;
        shell.send("x").await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut output = Vec::new();
        offer_save(&shell, &path, &mut Cursor::new("Y\n"), &mut output).unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.contains("You: x\n\nTutor: echo: x\n\n"));
        assert!(String::from_utf8(output).unwrap().contains("Session saved to"));
    }

    #[tokio::test]
    async fn offer_save_declines_on_no() {
        let mut shell = Shell::new(false);
        shell.attach(crate::shell::tests::echo_session()).await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        offer_save(&shell, &path, &mut Cursor::new("no\n"), &mut Vec::new()).unwrap();

        assert!(!path.exists());
    }

    struct Unreachable;

    #[async_trait]
    impl AiClient for Unreachable {
        async fn send_turn(&self, _: &str, _: &[Turn]) -> Result<AiResponse, AiError> {
            Err(AiError::NetworkError("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn full_transcript_mode_rerenders_every_round() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run_in(
            crate::shell::tests::echo_shell(),
            "one\ntwo\nquit\n",
            &dir.path().join("x.txt"),
            false,
            true,
        )
        .await;

        assert_eq!(output.matches("You:\none\n\n").count(), 2);
        assert!(output.contains("You:\none\n\nTutor:\necho: one\n\nYou:\ntwo\n\nTutor:\necho: two\n\n"));
    }

    #[tokio::test]
    async fn full_transcript_mode_still_shows_failed_reply() {
        let shell = Shell::with_factory(
            false,
            Box::new(|config: SessionConfig| Session::with_client(config, Box::new(Unreachable))),
        );
        let dir = tempfile::tempdir().unwrap();
        let (shell, output) = run_in(shell, "hi\nquit\n", &dir.path().join("x.txt"), false, true).await;

        assert!(output.contains("You:\nhi\n\nTutor:\nSorry, I encountered an error: Network error: connection refused\n\n"));
        // opening message and "hi", neither answered
        assert_eq!(shell.session().unwrap().turn_count(), 2);
    }
}
