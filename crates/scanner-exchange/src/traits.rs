//! 거래소 어댑터 trait 정의.

use crate::ExchangeError;
use async_trait::async_trait;
use scanner_core::{Candle, Instrument, MarketType, Timeframe};

/// 거래소 작업을 위한 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// 거래소별 REST API를 통일된 형태로 정규화하는 어댑터.
///
/// 모든 호출에는 제한된 타임아웃이 적용되며, 재시도는 하지 않습니다.
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    /// 거래소 표시 이름 (예: "OKX").
    fn name(&self) -> &str;

    /// 호가 통화와 시장 유형으로 필터링된 상품 목록을 조회합니다.
    ///
    /// 호가 통화 비교는 대소문자를 구분하지 않으며, 무기한 선물 시장은
    /// 만기 선물을 제외합니다.
    async fn list_instruments(
        &self,
        quote: &str,
        market: MarketType,
    ) -> ExchangeResult<Vec<Instrument>>;

    /// 최근 캔들 `window_size`개를 최신순(인덱스 0이 가장 최근)으로 조회합니다.
    async fn get_candles(
        &self,
        instrument_id: &str,
        timeframe: Timeframe,
        market: MarketType,
        window_size: usize,
    ) -> ExchangeResult<Vec<Candle>>;
}
