//! Binance 거래소 어댑터.
//!
//! 현물은 `/api/v3`, USDⓈ-M 무기한 선물은 `/fapi/v1` 공개 엔드포인트를 사용합니다.

use super::rest::{parse_decimal, parse_timestamp_ms, RestClient};
use crate::traits::{ExchangeAdapter, ExchangeResult};
use async_trait::async_trait;
use scanner_core::{Candle, ExchangesConfig, Instrument, MarketType, Timeframe};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

// ============================================================================
// 설정
// ============================================================================

/// Binance 어댑터 설정.
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// 현물 REST 기본 URL
    pub spot_base_url: String,
    /// 선물 REST 기본 URL
    pub futures_base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            spot_base_url: "https://api.binance.com".to_string(),
            futures_base_url: "https://fapi.binance.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl BinanceConfig {
    /// 애플리케이션 거래소 설정에서 생성.
    pub fn from_settings(settings: &ExchangesConfig) -> Self {
        Self {
            spot_base_url: settings.binance_spot_base_url.clone(),
            futures_base_url: settings.binance_futures_base_url.clone(),
            timeout_secs: settings.timeout_secs,
        }
    }

    /// 현물/선물 기본 URL을 한 번에 변경합니다 (테스트 서버용).
    pub fn with_base_urls(
        mut self,
        spot_base_url: impl Into<String>,
        futures_base_url: impl Into<String>,
    ) -> Self {
        self.spot_base_url = spot_base_url.into();
        self.futures_base_url = futures_base_url.into();
        self
    }
}

// ============================================================================
// API 응답 타입
// ============================================================================

#[derive(Debug, Deserialize)]
struct BinanceExchangeInfo {
    symbols: Vec<BinanceSymbol>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinanceSymbol {
    symbol: String,
    status: String,
    quote_asset: String,
    /// 선물 전용 (`PERPETUAL`, `CURRENT_QUARTER`, ...)
    #[serde(default)]
    contract_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // 응답 필드 전체 매핑 (일부만 사용)
struct BinanceKline(
    i64,    // 0: Open time
    String, // 1: Open
    String, // 2: High
    String, // 3: Low
    String, // 4: Close
    String, // 5: Volume
    i64,    // 6: Close time
    String, // 7: Quote asset volume
    i64,    // 8: Number of trades
    String, // 9: Taker buy base asset volume
    String, // 10: Taker buy quote asset volume
    String, // 11: Ignore
);

impl BinanceKline {
    fn into_candle(self) -> ExchangeResult<Candle> {
        Ok(Candle {
            open_time: parse_timestamp_ms(self.0)?,
            open: parse_decimal("open", &self.1)?,
            high: parse_decimal("high", &self.2)?,
            low: parse_decimal("low", &self.3)?,
            close: parse_decimal("close", &self.4)?,
            volume: parse_decimal("volume", &self.5)?,
        })
    }
}

// ============================================================================
// Binance 어댑터
// ============================================================================

/// Binance 거래소 어댑터.
#[derive(Debug, Clone)]
pub struct BinanceAdapter {
    spot: RestClient,
    futures: RestClient,
}

impl BinanceAdapter {
    /// 새 Binance 어댑터 생성.
    pub fn new(config: BinanceConfig) -> ExchangeResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let spot = RestClient::new(config.spot_base_url, timeout)?;
        let futures = RestClient::new(config.futures_base_url, timeout)?;

        debug!(
            spot = spot.base_url(),
            futures = futures.base_url(),
            "Binance adapter created"
        );

        Ok(Self { spot, futures })
    }

    /// 시장 유형에 맞는 클라이언트와 API 경로 접두사.
    fn route(&self, market: MarketType) -> (&RestClient, &'static str) {
        match market {
            MarketType::Spot => (&self.spot, "/api/v3"),
            MarketType::PerpetualSwap => (&self.futures, "/fapi/v1"),
        }
    }

    /// 거래 중이고 호가 통화가 일치하며, 선물이면 무기한 계약인 심볼만 남깁니다.
    fn is_eligible(symbol: &BinanceSymbol, quote: &str, market: MarketType) -> bool {
        if symbol.status != "TRADING" || !symbol.quote_asset.eq_ignore_ascii_case(quote) {
            return false;
        }

        match market {
            MarketType::Spot => true,
            MarketType::PerpetualSwap => symbol.contract_type.as_deref() == Some("PERPETUAL"),
        }
    }
}

#[async_trait]
impl ExchangeAdapter for BinanceAdapter {
    fn name(&self) -> &str {
        "Binance"
    }

    async fn list_instruments(
        &self,
        quote: &str,
        market: MarketType,
    ) -> ExchangeResult<Vec<Instrument>> {
        let (client, prefix) = self.route(market);
        let info: BinanceExchangeInfo = client
            .public_get(&format!("{}/exchangeInfo", prefix), &[])
            .await?;

        let instruments: Vec<Instrument> = info
            .symbols
            .into_iter()
            .filter(|s| Self::is_eligible(s, quote, market))
            .map(|s| Instrument::new(s.symbol, market, quote))
            .collect();

        debug!(
            count = instruments.len(),
            quote,
            market = %market,
            "Binance instruments listed"
        );

        Ok(instruments)
    }

    async fn get_candles(
        &self,
        instrument_id: &str,
        timeframe: Timeframe,
        market: MarketType,
        window_size: usize,
    ) -> ExchangeResult<Vec<Candle>> {
        let (client, prefix) = self.route(market);
        let klines: Vec<BinanceKline> = client
            .public_get(
                &format!("{}/klines", prefix),
                &[
                    ("symbol", instrument_id.to_string()),
                    ("interval", timeframe.to_binance_interval().to_string()),
                    ("limit", window_size.to_string()),
                ],
            )
            .await?;

        // 바이낸스는 과거순으로 반환하므로 최신순으로 뒤집는다
        let mut candles = klines
            .into_iter()
            .map(BinanceKline::into_candle)
            .collect::<ExchangeResult<Vec<_>>>()?;
        candles.reverse();

        Ok(candles)
    }
}
