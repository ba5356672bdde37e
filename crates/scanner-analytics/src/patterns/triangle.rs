//! 삼각 수렴 (하락 저항선 + 상승 지지선 + 변동성 축소).

use super::{LinearFit, Series};
use scanner_core::{AnalysisResult, Candle, Phase};

/// 삼각 수렴 패턴을 분석합니다.
///
/// 고가/저가 추세선이 수렴하고 최근 절반 구간의 변동폭이 이전 절반보다
/// 작으면 일치로 판정합니다. 단계는 최근 종가를 최신 캔들 위치의
/// 저항선/지지선 값과 비교해 결정합니다.
pub fn analyze_triangle(window: &[Candle], period: usize) -> AnalysisResult {
    let Some(series) = Series::from_window(window, period) else {
        return AnalysisResult::insufficient_data();
    };

    let resistance_fit = LinearFit::fit(&series.highs);
    let support_fit = LinearFit::fit(&series.lows);

    if !(resistance_fit.slope < 0.0 && support_fit.slope > 0.0) {
        return AnalysisResult::no_match("trendlines not converging");
    }

    let n = series.len();
    let half = n / 2;
    let range_older = series.range(0, half);
    let range_recent = series.range(half, n);
    if range_recent >= range_older {
        return AnalysisResult::no_match("volatility not contracting");
    }

    let latest = (n - 1) as f64;
    let resistance = resistance_fit.value_at(latest);
    let support = support_fit.value_at(latest);
    let close = series.latest_close();

    if close > resistance {
        AnalysisResult::matched(
            Phase::BreakoutUp,
            format!("Triangle breakout above resistance {:.4}", resistance),
        )
    } else if close < support {
        AnalysisResult::matched(
            Phase::BreakoutDown,
            format!("Triangle breakdown below support {:.4}", support),
        )
    } else {
        AnalysisResult::matched(
            Phase::Forming,
            format!(
                "Triangle consolidation (resistance: {:.4} / support: {:.4})",
                resistance, support
            ),
        )
    }
}
