//! Session behaviour against stub backends.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tutor_common::{Backend, ConfigError};

use super::*;
use crate::instruction::{OPENING_MESSAGE, TUTOR_INSTRUCTION};
use crate::{AiClient, AiError, AiResponse, Speaker, TokenUsage, Turn};

/// Replies with `echo: <last user text>` and records every request.
#[derive(Default)]
struct EchoClient {
    requests: Arc<Mutex<Vec<(String, Vec<Turn>)>>>,
}

#[async_trait]
impl AiClient for EchoClient {
    async fn send_turn(&self, instruction: &str, transcript: &[Turn]) -> Result<AiResponse, AiError> {
        self.requests
            .lock()
            .unwrap()
            .push((instruction.to_string(), transcript.to_vec()));
        let last = transcript.last().map(Turn::text).unwrap_or_default();
        Ok(AiResponse {
            content: format!("echo: {last}"),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 3,
            },
        })
    }
}

struct FailingClient;

#[async_trait]
impl AiClient for FailingClient {
    async fn send_turn(&self, _: &str, _: &[Turn]) -> Result<AiResponse, AiError> {
        Err(AiError::NetworkError("connection refused".into()))
    }
}

fn config() -> SessionConfig {
    SessionConfig::new(Backend::Anthropic, "test-key", "")
}

fn echo_session() -> (Session, Arc<Mutex<Vec<(String, Vec<Turn>)>>>) {
    let client = EchoClient::default();
    let requests = Arc::clone(&client.requests);
    (Session::with_client(config(), Box::new(client)).unwrap(), requests)
}

#[test]
fn create_with_empty_credential_fails_for_both_backends() {
    for backend in Backend::ALL {
        let result = Session::create(SessionConfig::new(backend, "", "whatever"));
        assert!(matches!(result, Err(ConfigError::MissingCredential(b)) if b == backend));
    }
}

#[test]
fn create_with_unknown_backend_identifier_fails() {
    let result = SessionConfig::parse("palm", "key", "").and_then(Session::create);
    assert!(matches!(result, Err(ConfigError::UnknownBackend(_))));
}

#[test]
fn create_builds_each_backend_without_network() {
    for backend in Backend::ALL {
        let session = Session::create(SessionConfig::new(backend, "key", "")).unwrap();
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.config().backend, backend);
    }
}

#[test]
fn with_client_still_validates_credential() {
    let result = Session::with_client(
        SessionConfig::new(Backend::OpenAi, "", ""),
        Box::new(EchoClient::default()),
    );
    assert!(result.is_err());
}

#[tokio::test]
async fn submit_appends_user_and_assistant_turns() {
    let (mut session, _) = echo_session();

    let outcome = session.submit("hello").await;

    assert!(!outcome.is_error());
    assert!(outcome.text().contains("hello"));
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], Turn::user("hello"));
    assert_eq!(history[1], Turn::assistant("echo: hello"));
}

#[tokio::test]
async fn submit_sends_fixed_instruction_and_full_transcript() {
    let (mut session, requests) = echo_session();

    session.submit("one").await;
    session.submit("two").await;

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|(instruction, _)| instruction == TUTOR_INSTRUCTION));
    assert_eq!(requests[0].1.len(), 1);
    assert_eq!(requests[1].1.len(), 3);
    assert_eq!(requests[1].1[0], Turn::user("one"));
    assert_eq!(requests[1].1[2], Turn::user("two"));
}

#[tokio::test]
async fn failed_submit_appends_only_the_user_turn() {
    let mut session = Session::with_client(config(), Box::new(FailingClient)).unwrap();

    let outcome = session.submit("x").await;

    assert!(outcome.text().starts_with("Sorry, I encountered an error:"));
    assert!(outcome.text().contains("connection refused"));
    assert!(outcome.is_error());
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.last_turn(), Some(&Turn::user("x")));
}

#[tokio::test]
async fn transcript_grows_by_two_per_success_and_one_per_failure() {
    let (mut ok, _) = echo_session();
    let mut failing = Session::with_client(config(), Box::new(FailingClient)).unwrap();

    for i in 0..4 {
        let before = ok.turn_count();
        ok.submit(format!("msg {i}")).await;
        assert_eq!(ok.turn_count(), before + 2);

        let before = failing.turn_count();
        failing.submit(format!("msg {i}")).await;
        assert_eq!(failing.turn_count(), before + 1);
    }
}

#[tokio::test]
async fn open_sends_the_opening_message() {
    let (mut session, _) = echo_session();

    let greeting = session.open().await;

    assert_eq!(greeting.text(), format!("echo: {OPENING_MESSAGE}"));
    let history = session.history();
    assert_eq!(history[0].speaker(), Speaker::User);
    assert_eq!(history[0].text(), OPENING_MESSAGE);
    assert_eq!(history[1].speaker(), Speaker::Assistant);
}

#[tokio::test]
async fn reset_clears_transcript_and_keeps_config() {
    let (mut session, requests) = echo_session();
    session.submit("a").await;
    session.submit("b").await;

    session.reset();

    assert_eq!(session.turn_count(), 0);
    assert_eq!(session.config().backend, Backend::Anthropic);
    assert_eq!(session.config().credential, "test-key");

    session.submit("c").await;
    let requests = requests.lock().unwrap();
    assert_eq!(requests.last().unwrap().1, vec![Turn::user("c")]);
    assert_eq!(session.turn_count(), 2);
}

#[tokio::test]
async fn history_is_a_copy() {
    let (mut session, _) = echo_session();
    session.submit("hello").await;

    let mut copy = session.history();
    copy.clear();

    assert_eq!(session.turn_count(), 2);
}

#[tokio::test]
async fn usage_is_tracked_per_backend() {
    let (mut session, _) = echo_session();
    session.submit("a").await;
    session.submit("b").await;

    let tracker = session.tracker();
    assert_eq!(tracker.call_count(), 2);
    assert_eq!(tracker.total().input_tokens, 20);
    assert_eq!(tracker.for_provider("anthropic").unwrap().output_tokens, 6);

    session.reset();
    assert_eq!(session.tracker().call_count(), 2);
}

#[tokio::test]
async fn failed_calls_are_not_counted_as_usage() {
    let mut session = Session::with_client(config(), Box::new(FailingClient)).unwrap();
    session.submit("x").await;
    assert_eq!(session.tracker().call_count(), 0);
}

#[tokio::test]
async fn export_writes_transcript() {
    let (mut session, _) = echo_session();
    session.submit("x").await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    session.export(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("You: x\n\n"));
    assert!(content.contains("Tutor: echo: x\n\n"));
}
