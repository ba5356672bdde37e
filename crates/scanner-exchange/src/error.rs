//! 거래소 에러 타입.

use thiserror::Error;

/// 거래소와 통신하는 중 발생한 에러 (네트워크, HTTP, 파싱).
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 성공이 아닌 HTTP 상태 코드
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 거래소가 반환한 API 에러 코드
    #[error("API error {code}: {message}")]
    ApiError { code: String, message: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 등록되지 않은 거래소
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    /// 알 수 없는 에러
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ExchangeError {
    /// 재시도하면 성공할 수도 있는 에러인지 확인.
    ///
    /// 스캔 루프는 재시도하지 않으며, 로그 분류에만 사용합니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExchangeError::NetworkError(_) | ExchangeError::Timeout(_) => true,
            ExchangeError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            ExchangeError::NetworkError(err.to_string())
        } else {
            ExchangeError::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ParseError(err.to_string())
    }
}
