//! 코멘터리 생성 타입 정의.

use async_trait::async_trait;
use thiserror::Error;

/// 코멘터리 생성 에러.
#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("Request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Rate limited by the model provider")]
    RateLimited,

    #[error("Model returned no usable content")]
    EmptyResponse,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CommentaryError {
    /// 요청 URL은 메시지에 남기지 않습니다.
    fn from(err: reqwest::Error) -> Self {
        CommentaryError::Network(err.without_url())
    }
}

/// 코멘터리 작업을 위한 Result 타입.
pub type CommentaryResult<T> = Result<T, CommentaryError>;

/// 프롬프트를 받아 자유 텍스트를 생성하는 외부 언어 모델.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 프롬프트에 대한 텍스트를 생성합니다.
    async fn generate(&self, prompt: &str) -> CommentaryResult<String>;

    /// 생성기 이름을 반환합니다.
    fn name(&self) -> &str;
}
