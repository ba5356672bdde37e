//! 스캐너 핵심 에러 타입.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정 로드/역직렬화 에러
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// 지원하지 않는 타임프레임
    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    /// 지원하지 않는 시장 유형
    #[error("Invalid market type: {0}")]
    InvalidMarketType(String),

    /// 알 수 없는 패턴 이름
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// 잘못된 입력
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidMarketType("margin".into());
        assert_eq!(err.to_string(), "Invalid market type: margin");
    }
}
