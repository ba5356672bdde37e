//! 차트 패턴 분석기.
//!
//! 모든 분석기는 최신순 캔들 윈도우를 받아 가장 최근 `period`개만 사용합니다.
//! 회귀와 구간 계산은 시간순(인덱스 0이 가장 오래된 캔들)으로 수행합니다.

mod ascending_triangle;
mod double_bottom;
mod fit;
mod registry;
mod triangle;

pub use ascending_triangle::analyze_ascending_triangle;
pub use double_bottom::analyze_double_bottom;
pub use fit::LinearFit;
pub use registry::{Analyzer, PatternGroup, PatternRegistry, LONG_PATTERNS_GROUP};
pub use triangle::analyze_triangle;

use rust_decimal::prelude::ToPrimitive;
use scanner_core::Candle;

/// 분석에 사용하는 기본 캔들 수.
pub const DEFAULT_PERIOD: usize = 60;

/// 이중 바닥: 두 저점의 허용 오차 비율.
pub const LOW_SIMILARITY_TOLERANCE: f64 = 0.03;

/// 이중 바닥: 넥라인이 저점 평균보다 높아야 하는 최소 비율.
pub const MIN_NECKLINE_HEIGHT: f64 = 0.05;

/// 상승 삼각형: 저항선 기울기 허용치 (지지선 기울기 대비).
pub const FLAT_RESISTANCE_RATIO: f64 = 0.25;

/// 시간순으로 정렬된 가격 시계열.
#[derive(Debug, Clone)]
pub(crate) struct Series {
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
}

impl Series {
    /// 최신순 윈도우에서 가장 최근 `period`개 캔들을 시간순으로 추출합니다.
    ///
    /// 캔들 수가 부족하거나 f64로 변환할 수 없는 값이 있으면 `None`.
    pub(crate) fn from_window(window: &[Candle], period: usize) -> Option<Self> {
        if period < 2 || window.len() < period {
            return None;
        }

        let mut highs = Vec::with_capacity(period);
        let mut lows = Vec::with_capacity(period);
        let mut closes = Vec::with_capacity(period);

        for candle in window[..period].iter().rev() {
            highs.push(candle.high.to_f64()?);
            lows.push(candle.low.to_f64()?);
            closes.push(candle.close.to_f64()?);
        }

        Some(Self {
            highs,
            lows,
            closes,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.closes.len()
    }

    /// 가장 최근 종가.
    pub(crate) fn latest_close(&self) -> f64 {
        self.closes[self.closes.len() - 1]
    }

    /// `[start, end)` 구간의 고가 최댓값 - 저가 최솟값.
    pub(crate) fn range(&self, start: usize, end: usize) -> f64 {
        max(&self.highs[start..end]) - min(&self.lows[start..end])
    }
}

pub(crate) fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use scanner_core::Candle;
    use std::str::FromStr;

    fn dec(value: f64) -> Decimal {
        Decimal::from_str(&format!("{:.4}", value)).unwrap()
    }

    /// 시간순 (high, low, close) 목록으로 최신순 윈도우를 만든다.
    pub fn window_from_oldest(bars: &[(f64, f64, f64)]) -> Vec<Candle> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut candles: Vec<Candle> = bars
            .iter()
            .enumerate()
            .map(|(i, &(high, low, close))| {
                Candle::new(
                    start + Duration::hours(i as i64),
                    dec(close),
                    dec(high),
                    dec(low),
                    dec(close),
                    dec(1000.0),
                )
            })
            .collect();
        candles.reverse();
        candles
    }

    /// 고가는 120에서 하락, 저가는 80에서 상승하는 60개 캔들 수렴 구간.
    pub fn converging_bars() -> Vec<(f64, f64, f64)> {
        (0..60)
            .map(|i| {
                let i = i as f64;
                (120.0 - 0.3 * i, 80.0 + 0.3 * i, 100.0)
            })
            .collect()
    }

    /// 가장 최근 캔들의 종가를 바꾼다.
    pub fn with_latest_close(mut bars: Vec<(f64, f64, f64)>, close: f64) -> Vec<(f64, f64, f64)> {
        if let Some(last) = bars.last_mut() {
            last.2 = close;
        }
        bars
    }
}
