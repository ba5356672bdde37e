//! OKX 거래소 어댑터.
//!
//! 공개 REST API v5를 사용합니다. 인증이 필요 없습니다.

use super::rest::{parse_decimal, parse_timestamp_ms, RestClient};
use crate::traits::{ExchangeAdapter, ExchangeResult};
use crate::ExchangeError;
use async_trait::async_trait;
use scanner_core::{Candle, ExchangesConfig, Instrument, MarketType, Timeframe};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

// ============================================================================
// 설정
// ============================================================================

/// OKX 어댑터 설정.
#[derive(Debug, Clone)]
pub struct OkxConfig {
    /// REST 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for OkxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.okx.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OkxConfig {
    /// 애플리케이션 거래소 설정에서 생성.
    pub fn from_settings(settings: &ExchangesConfig) -> Self {
        Self {
            base_url: settings.okx_base_url.clone(),
            timeout_secs: settings.timeout_secs,
        }
    }

    /// 기본 URL을 변경합니다.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ============================================================================
// API 응답 타입
// ============================================================================

#[derive(Debug, Deserialize)]
struct OkxResponse<T> {
    code: String,
    #[serde(default)]
    msg: String,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OkxInstrument {
    inst_id: String,
}

/// `[ts, o, h, l, c, vol, volCcy, volCcyQuote, confirm]`
type OkxCandleRow = Vec<String>;

impl<T> OkxResponse<T> {
    /// `code != "0"`이면 API 에러로 변환합니다.
    fn into_data(self) -> ExchangeResult<Vec<T>> {
        if self.code == "0" {
            Ok(self.data)
        } else {
            Err(ExchangeError::ApiError {
                code: self.code,
                message: self.msg,
            })
        }
    }
}

// ============================================================================
// OKX 어댑터
// ============================================================================

/// OKX 거래소 어댑터.
#[derive(Debug, Clone)]
pub struct OkxAdapter {
    rest: RestClient,
}

impl OkxAdapter {
    /// 새 OKX 어댑터 생성.
    pub fn new(config: OkxConfig) -> ExchangeResult<Self> {
        let rest = RestClient::new(config.base_url, Duration::from_secs(config.timeout_secs))?;
        debug!(base_url = rest.base_url(), "OKX adapter created");
        Ok(Self { rest })
    }

    fn inst_type(market: MarketType) -> &'static str {
        match market {
            MarketType::Spot => "SPOT",
            MarketType::PerpetualSwap => "SWAP",
        }
    }

    /// 호가 통화 접미사 (`-USDT` 또는 `-USDT-SWAP`).
    fn quote_suffix(quote: &str, market: MarketType) -> String {
        match market {
            MarketType::Spot => format!("-{}", quote.to_uppercase()),
            MarketType::PerpetualSwap => format!("-{}-SWAP", quote.to_uppercase()),
        }
    }

    fn matches_quote(inst_id: &str, suffix: &str) -> bool {
        inst_id.to_uppercase().ends_with(suffix)
    }

    /// 캔들 한 행을 파싱합니다. OHLCV 필드가 모자라거나 숫자가 아니면 에러.
    fn parse_candle(row: &OkxCandleRow) -> ExchangeResult<Candle> {
        if row.len() < 6 {
            return Err(ExchangeError::ParseError(format!(
                "OKX candle row has {} fields",
                row.len()
            )));
        }

        let ts: i64 = row[0]
            .parse()
            .map_err(|_| ExchangeError::ParseError(format!("invalid timestamp: {:?}", row[0])))?;

        Ok(Candle {
            open_time: parse_timestamp_ms(ts)?,
            open: parse_decimal("open", &row[1])?,
            high: parse_decimal("high", &row[2])?,
            low: parse_decimal("low", &row[3])?,
            close: parse_decimal("close", &row[4])?,
            volume: parse_decimal("volume", &row[5])?,
        })
    }
}

#[async_trait]
impl ExchangeAdapter for OkxAdapter {
    fn name(&self) -> &str {
        "OKX"
    }

    async fn list_instruments(
        &self,
        quote: &str,
        market: MarketType,
    ) -> ExchangeResult<Vec<Instrument>> {
        let resp: OkxResponse<OkxInstrument> = self
            .rest
            .public_get(
                "/api/v5/public/instruments",
                &[("instType", Self::inst_type(market).to_string())],
            )
            .await?;

        let suffix = Self::quote_suffix(quote, market);
        let instruments: Vec<Instrument> = resp
            .into_data()?
            .into_iter()
            .filter(|inst| Self::matches_quote(&inst.inst_id, &suffix))
            .map(|inst| Instrument::new(inst.inst_id, market, quote))
            .collect();

        debug!(
            count = instruments.len(),
            quote,
            market = %market,
            "OKX instruments listed"
        );

        Ok(instruments)
    }

    async fn get_candles(
        &self,
        instrument_id: &str,
        timeframe: Timeframe,
        _market: MarketType,
        window_size: usize,
    ) -> ExchangeResult<Vec<Candle>> {
        let resp: OkxResponse<OkxCandleRow> = self
            .rest
            .public_get(
                "/api/v5/market/history-candles",
                &[
                    ("instId", instrument_id.to_string()),
                    ("bar", timeframe.to_okx_bar().to_string()),
                    ("limit", window_size.to_string()),
                ],
            )
            .await?;

        // OKX는 이미 최신순으로 반환한다
        resp.into_data()?.iter().map(Self::parse_candle).collect()
    }
}
