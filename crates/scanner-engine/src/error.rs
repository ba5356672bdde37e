//! 스캔 에러 타입.

use scanner_exchange::ExchangeError;
use thiserror::Error;

/// 스캔 전체를 중단시키는 에러.
///
/// 상품별 캔들 조회 실패는 에러가 아니며 해당 상품만 건너뜁니다.
#[derive(Debug, Error)]
pub enum ScanError {
    /// 상품 목록 조회 실패
    #[error("Could not fetch instrument list from {exchange}.")]
    UniverseUnavailable {
        exchange: String,
        #[source]
        source: ExchangeError,
    },

    /// 알 수 없는 패턴 또는 그룹
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// 등록되지 않은 거래소
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    /// 어댑터 생성 실패
    #[error("Exchange adapter error: {0}")]
    Adapter(ExchangeError),
}

/// 스캔 작업을 위한 Result 타입.
pub type ScanResult<T> = Result<T, ScanError>;

impl ScanError {
    /// 요청 자체가 잘못되어 발생한 에러인지 확인합니다.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            ScanError::UnknownPattern(_) | ScanError::UnknownExchange(_)
        )
    }
}

impl From<ExchangeError> for ScanError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::UnknownExchange(name) => ScanError::UnknownExchange(name),
            other => ScanError::Adapter(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_error_message() {
        let err = ScanError::UniverseUnavailable {
            exchange: "OKX".to_string(),
            source: ExchangeError::Timeout("10s".into()),
        };
        assert_eq!(err.to_string(), "Could not fetch instrument list from OKX.");
        assert!(!err.is_invalid_request());
    }

    #[test]
    fn test_unknown_exchange_conversion() {
        let err: ScanError = ExchangeError::UnknownExchange("kraken".into()).into();
        assert!(matches!(err, ScanError::UnknownExchange(ref n) if n == "kraken"));
        assert!(err.is_invalid_request());
    }
}
