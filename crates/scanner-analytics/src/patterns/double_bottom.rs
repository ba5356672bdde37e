//! 이중 바닥 (W 바닥).

use super::{max, min, Series, LOW_SIMILARITY_TOLERANCE, MIN_NECKLINE_HEIGHT};
use scanner_core::{AnalysisResult, Candle, Phase};

/// 이중 바닥 패턴을 분석합니다.
///
/// 윈도우를 시간순 3등분하여
/// - 첫 번째 저점: 가장 최근 구간의 최저가
/// - 넥라인: 가운데 구간의 최고 종가
/// - 두 번째 저점: 가장 오래된 구간의 최저가
///
/// 를 구합니다. 하단 이탈 단계는 없으며 무너진 패턴은 단순 불일치입니다.
pub fn analyze_double_bottom(window: &[Candle], period: usize) -> AnalysisResult {
    let Some(series) = Series::from_window(window, period) else {
        return AnalysisResult::insufficient_data();
    };

    let n = series.len();
    let third = n / 3;
    if third == 0 {
        return AnalysisResult::insufficient_data();
    }

    let recent_start = n - third;
    let middle_start = n - 2 * third;

    let recent_low = min(&series.lows[recent_start..]);
    let neckline = max(&series.closes[middle_start..recent_start]);
    let older_low = min(&series.lows[..middle_start]);

    if recent_low <= 0.0 {
        return AnalysisResult::no_match("non-positive price");
    }

    if (recent_low - older_low).abs() / recent_low >= LOW_SIMILARITY_TOLERANCE {
        return AnalysisResult::no_match("lows not similar");
    }

    let avg_low = (recent_low + older_low) / 2.0;
    if (neckline - avg_low) / avg_low <= MIN_NECKLINE_HEIGHT {
        return AnalysisResult::no_match("neckline not significant");
    }

    let close = series.latest_close();
    if close <= older_low {
        return AnalysisResult::no_match("no rebound");
    }

    if close > neckline {
        AnalysisResult::matched(
            Phase::BreakoutUp,
            format!("Double bottom breakout above neckline {:.4}", neckline),
        )
    } else {
        AnalysisResult::matched(
            Phase::Forming,
            format!("Double bottom (awaiting neckline breakout {:.4})", neckline),
        )
    }
}
