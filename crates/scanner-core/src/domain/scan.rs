//! 스캔 요청, 진행률, 결과 타입.

use crate::domain::{PatternKind, Phase};
use crate::types::{MarketType, Timeframe};
use serde::{Deserialize, Serialize};

/// 스캔 한 번의 입력. 스캔이 진행되는 동안 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// 거래소 선택자 (예: `okx`, `binance`)
    pub exchange: String,
    /// 시장 유형
    #[serde(default)]
    pub market: MarketType,
    /// 호가 통화 (예: `USDT`)
    pub quote: String,
    /// 타임프레임
    pub timeframe: Timeframe,
    /// 단일 패턴 이름 또는 패턴 그룹 이름
    pub pattern: String,
    /// 스캔할 상품 수 상한
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ScanRequest {
    /// 새 스캔 요청을 생성합니다.
    pub fn new(
        exchange: impl Into<String>,
        market: MarketType,
        quote: impl Into<String>,
        timeframe: Timeframe,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            market,
            quote: quote.into(),
            timeframe,
            pattern: pattern.into(),
            limit: None,
        }
    }

    /// 상품 수 상한을 설정합니다.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// 스캔 진행률 (처리한 상품 수 / 전체 상품 수).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanProgress {
    pub current: usize,
    pub total: usize,
}

impl ScanProgress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// 0.0 ~ 1.0 사이의 진행 비율. 전체가 0이면 완료로 간주합니다.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// 스캔에서 발견된 패턴 일치 결과. 상품당 최대 하나입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMatch {
    /// 거래소 표시 이름
    pub exchange: String,
    /// 시장 유형
    pub market: MarketType,
    /// 상품 식별자
    #[serde(alias = "pair")]
    pub instrument: String,
    /// 타임프레임
    pub timeframe: Timeframe,
    /// 일치한 패턴
    pub pattern: PatternKind,
    /// 돌파 단계
    pub phase: Phase,
    /// 사람이 읽을 수 있는 설명
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_request_deserialize_defaults() {
        let json = r#"{
            "exchange": "okx",
            "quote": "USDT",
            "timeframe": "1H",
            "pattern": "long_patterns"
        }"#;
        let request: ScanRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.market, MarketType::Spot);
        assert_eq!(request.timeframe, Timeframe::H1);
        assert_eq!(request.limit, None);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(ScanProgress::new(5, 10).fraction(), 0.5);
        assert_eq!(ScanProgress::new(0, 0).fraction(), 1.0);
    }

    #[test]
    fn test_scan_match_accepts_pair_alias() {
        let json = r#"{
            "exchange": "OKX",
            "market": "spot",
            "pair": "BTC-USDT",
            "timeframe": "4H",
            "pattern": "triangle",
            "phase": "breakout_up",
            "description": "Triangle breakout"
        }"#;
        let m: ScanMatch = serde_json::from_str(json).unwrap();
        assert_eq!(m.instrument, "BTC-USDT");
        assert_eq!(m.phase, Phase::BreakoutUp);
    }
}
