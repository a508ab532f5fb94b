//! Tests for hint degradation: every outcome becomes display text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tri_tactics::{
    FAILURE_MESSAGE, GameSession, HintProvider, HintRequest, HintService, LlmError,
    MISSING_KEY_MESSAGE,
};

/// Returns a canned answer and counts calls.
struct CannedProvider {
    answer: String,
    calls: AtomicUsize,
}

#[async_trait]
impl HintProvider for CannedProvider {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        assert!(system_prompt.contains("3-player"));
        assert!(user_message.contains("CURRENT BOARD STATE"));
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

/// Always fails.
struct FailingProvider;

#[async_trait]
impl HintProvider for FailingProvider {
    async fn complete(&self, _: &str, _: &str) -> Result<String, LlmError> {
        Err(LlmError::new("connection refused".to_string()))
    }
}

/// Never answers in time.
struct SlowProvider;

#[async_trait]
impl HintProvider for SlowProvider {
    async fn complete(&self, _: &str, _: &str) -> Result<String, LlmError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

fn request() -> HintRequest {
    let mut session = GameSession::new();
    session.place_mark(12).expect("Valid move");
    HintRequest::from_session(&session)
}

#[tokio::test]
async fn test_missing_key_yields_fixed_message() {
    let service = HintService::unconfigured();
    assert!(!service.is_configured());

    let response = service.request_hint(request()).await;
    assert_eq!(response.text, MISSING_KEY_MESSAGE);
    assert_eq!(response.epoch, 1);
}

#[tokio::test]
async fn test_success_returns_trimmed_text() {
    let provider = Arc::new(CannedProvider {
        answer: "  Move: (2, 3). Reason: block O.\n".to_string(),
        calls: AtomicUsize::new(0),
    });
    let service = HintService::with_provider(provider.clone(), Duration::from_secs(5));

    let response = service.request_hint(request()).await;
    assert_eq!(response.text, "Move: (2, 3). Reason: block O.");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_provider_error_yields_failure_message() {
    let service = HintService::with_provider(Arc::new(FailingProvider), Duration::from_secs(5));
    let response = service.request_hint(request()).await;
    assert_eq!(response.text, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_timeout_yields_failure_message() {
    let service = HintService::with_provider(Arc::new(SlowProvider), Duration::from_millis(50));
    let response = service.request_hint(request()).await;
    assert_eq!(response.text, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_response_carries_request_epoch() {
    let mut session = GameSession::new();
    let request = HintRequest::from_session(&session);
    session.place_mark(0).expect("Valid move");

    let response = HintService::unconfigured().request_hint(request).await;
    assert_ne!(response.epoch, session.epoch());
}
