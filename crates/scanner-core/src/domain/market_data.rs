//! 시장 데이터 타입.
//!
//! - `Candle` - OHLCV 캔들스틱 한 개
//! - `Instrument` - 스캔 대상 거래 상품

use crate::types::MarketType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OHLCV 캔들스틱 데이터.
///
/// 어댑터는 캔들 목록을 항상 최신순(인덱스 0이 가장 최근)으로 반환합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 캔들 시작 시간
    pub open_time: DateTime<Utc>,
    /// 시가
    pub open: Decimal,
    /// 고가
    pub high: Decimal,
    /// 저가
    pub low: Decimal,
    /// 종가
    pub close: Decimal,
    /// 거래량 (기준 자산 단위)
    pub volume: Decimal,
}

impl Candle {
    /// 새 캔들을 생성합니다.
    pub fn new(
        open_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// 거래소별 식별자로 표현되는 거래 상품 (예: `BTC-USDT`, `BTCUSDT`).
///
/// 스캔마다 새로 조회되며 캐시하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    /// 거래소 고유 식별자
    pub id: String,
    /// 시장 유형
    pub market_type: MarketType,
    /// 호가(quote) 통화
    pub quote: String,
}

impl Instrument {
    /// 새 상품을 생성합니다.
    pub fn new(id: impl Into<String>, market_type: MarketType, quote: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            market_type,
            quote: quote.into().to_uppercase(),
        }
    }
}
