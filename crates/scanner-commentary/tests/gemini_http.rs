//! mockito 서버를 사용한 Gemini 클라이언트 HTTP 테스트

use mockito::Matcher;
use scanner_commentary::{CommentaryError, GeminiClient, GeminiConfig, TextGenerator};
use scanner_core::CommentaryConfig;

const PATH: &str = "/v1beta/models/test-model:generateContent";

fn client(base_url: &str, google_search: bool) -> GeminiClient {
    let settings = CommentaryConfig {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        timeout_secs: 5,
        google_search,
    };
    GeminiClient::new(GeminiConfig::new("test-key", &settings)).unwrap()
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{ "parts": [{ "text": "analyze BTC" }] }],
            "tools": [{ "google_search": {} }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"- Sentiment: bullish"}]}}]}"#,
        )
        .create_async()
        .await;

    let text = client(&server.url(), true)
        .generate("analyze BTC")
        .await
        .unwrap();

    assert_eq!(text, "- Sentiment: bullish");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(429)
        .with_body(r#"{"error":{"code":429,"message":"quota"}}"#)
        .create_async()
        .await;

    let err = client(&server.url(), false)
        .generate("prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, CommentaryError::RateLimited));
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = client(&server.url(), false)
        .generate("prompt")
        .await
        .unwrap_err();

    match err {
        CommentaryError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_empty_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let err = client(&server.url(), false)
        .generate("prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, CommentaryError::EmptyResponse));
}

#[tokio::test]
async fn test_network_error_does_not_expose_api_key() {
    let settings = CommentaryConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        model: "test-model".to_string(),
        timeout_secs: 5,
        google_search: false,
    };
    let client = GeminiClient::new(GeminiConfig::new("SUPER-SECRET-KEY", &settings)).unwrap();

    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, CommentaryError::Network(_)));
    assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
    assert!(!format!("{:?}", err).contains("SUPER-SECRET-KEY"));
}
