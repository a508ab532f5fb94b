//! Live hint round-trips against real providers.
//!
//! Run with `--features api` and the provider's key in the environment.

use tracing::instrument;
use tri_tactics::{
    FAILURE_MESSAGE, GameSession, HintConfig, HintRequest, HintService, LlmClient, LlmConfig,
    LlmProvider,
};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_gemini_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("API_KEY").expect("API_KEY not set");

    let config = LlmConfig::new(
        LlmProvider::Gemini,
        api_key,
        "gemini-2.5-flash".to_string(),
        50,
    );

    let client = LlmClient::new(config);

    let response = client
        .generate("You are a helpful assistant.", "Say 'Hello, world!' and nothing else.")
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_openai_hint() {
    dotenvy::dotenv().ok();

    let config = HintConfig::for_provider(LlmProvider::OpenAI);
    let service = HintService::from_config(&config);
    assert!(service.is_configured(), "OPENAI_API_KEY not set");

    let mut session = GameSession::new();
    for index in [0, 6, 12, 1, 7] {
        session.place_mark(index).expect("Valid move");
    }

    let response = service
        .request_hint(HintRequest::from_session(&session))
        .await;

    assert_ne!(response.text, FAILURE_MESSAGE);
    eprintln!("Hint: {}", response.text);
}
