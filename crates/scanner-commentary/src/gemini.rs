//! Gemini (Generative Language API) 텍스트 생성 클라이언트.

use crate::types::{CommentaryError, CommentaryResult, TextGenerator};
use async_trait::async_trait;
use scanner_core::CommentaryConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

/// API 키를 읽는 환경 변수 이름.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// API 키 요청 헤더.
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini 클라이언트 설정.
#[derive(Debug)]
pub struct GeminiConfig {
    /// API 키 (Debug 출력 시 마스킹)
    pub api_key: SecretString,
    /// API 기본 URL
    pub base_url: String,
    /// 모델 이름
    pub model: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// 구글 검색 도구 사용 여부
    pub google_search: bool,
}

impl GeminiConfig {
    /// API 키와 애플리케이션 설정으로 생성합니다.
    pub fn new(api_key: impl Into<String>, settings: &CommentaryConfig) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            timeout_secs: settings.timeout_secs,
            google_search: settings.google_search,
        }
    }

    /// `GEMINI_API_KEY` 환경 변수와 애플리케이션 설정으로 생성합니다.
    ///
    /// # Errors
    /// 환경 변수가 없거나 비어 있으면 `CommentaryError::MissingApiKey`.
    pub fn from_env(settings: &CommentaryConfig) -> CommentaryResult<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CommentaryError::MissingApiKey(GEMINI_API_KEY_ENV))?;

        Ok(Self::new(api_key, settings))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

// ============================================================================
// API 응답 타입
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// 첫 번째 후보의 텍스트 파트를 이어 붙입니다.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ============================================================================
// 클라이언트
// ============================================================================

/// Gemini 텍스트 생성 클라이언트.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// 새 클라이언트를 생성합니다.
    pub fn new(config: GeminiConfig) -> CommentaryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// 환경 변수의 API 키로 클라이언트를 생성합니다.
    pub fn from_env(settings: &CommentaryConfig) -> CommentaryResult<Self> {
        Self::new(GeminiConfig::from_env(settings)?)
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        if self.config.google_search {
            body["tools"] = serde_json::json!([{ "google_search": {} }]);
        }

        body
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> CommentaryResult<String> {
        debug!(model = %self.config.model, "Requesting market commentary");

        let response = self
            .client
            .post(self.config.endpoint())
            .header(GEMINI_API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if status.as_u16() == 429 {
                warn!("Gemini rate limited");
                return Err(CommentaryError::RateLimited);
            }

            error!(status = status.as_u16(), "Gemini request failed");
            return Err(CommentaryError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.into_text().ok_or(CommentaryError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(google_search: bool) -> GeminiClient {
        let settings = CommentaryConfig {
            google_search,
            ..Default::default()
        };
        GeminiClient::new(GeminiConfig::new("test-key", &settings)).unwrap()
    }

    #[test]
    fn test_request_body_with_search_tool() {
        let body = client(true).request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body["tools"][0].get("google_search").is_some());

        let body = client(false).request_body("hello");
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_endpoint() {
        let config = GeminiConfig::new("k", &CommentaryConfig::default());
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent"
        );
    }

    #[test]
    fn test_api_key_is_masked_in_debug() {
        let config = GeminiConfig::new("super-secret", &CommentaryConfig::default());
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_response_text_extraction() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"- Bullish"},{"text":"\n- Risk"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text().unwrap(), "- Bullish\n- Risk");

        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(empty.into_text().is_none());
    }
}
