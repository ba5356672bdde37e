//! 상승 삼각형 (수평 저항선 + 상승 지지선).

use super::{mean, LinearFit, Series, FLAT_RESISTANCE_RATIO};
use scanner_core::{AnalysisResult, Candle, Phase};

/// 상승 삼각형 패턴을 분석합니다.
///
/// 지지선 기울기가 양수이고 저항선 기울기의 절대값이 지지선 기울기의
/// `FLAT_RESISTANCE_RATIO`배 미만이면 일치입니다. 저항 수준은 오래된 절반
/// 구간 고가의 평균입니다. 하단 이탈 단계는 없습니다.
pub fn analyze_ascending_triangle(window: &[Candle], period: usize) -> AnalysisResult {
    let Some(series) = Series::from_window(window, period) else {
        return AnalysisResult::insufficient_data();
    };

    let resistance_slope = LinearFit::fit(&series.highs).slope;
    let support_slope = LinearFit::fit(&series.lows).slope;

    if support_slope <= 0.0 {
        return AnalysisResult::no_match("support not rising");
    }
    if resistance_slope.abs() >= support_slope * FLAT_RESISTANCE_RATIO {
        return AnalysisResult::no_match("resistance not flat");
    }

    let resistance = mean(&series.highs[..series.len() / 2]);
    let close = series.latest_close();

    if close > resistance {
        AnalysisResult::matched(
            Phase::BreakoutUp,
            format!("Ascending triangle breakout above {:.4}", resistance),
        )
    } else {
        AnalysisResult::matched(
            Phase::Forming,
            format!("Ascending triangle (awaiting breakout {:.4})", resistance),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::DEFAULT_PERIOD;
    use super::*;
    use scanner_core::INSUFFICIENT_DATA;

    fn flat_top_bars(close: f64) -> Vec<(f64, f64, f64)> {
        let bars = (0..60)
            .map(|i| (110.0, 80.0 + 0.4 * i as f64, 100.0))
            .collect();
        with_latest_close(bars, close)
    }

    fn analyze(bars: &[(f64, f64, f64)]) -> AnalysisResult {
        analyze_ascending_triangle(&window_from_oldest(bars), DEFAULT_PERIOD)
    }

    #[test]
    fn test_flat_top_forming() {
        let result = analyze(&flat_top_bars(105.0));
        assert_eq!(result.phase(), Some(Phase::Forming));
    }

    #[test]
    fn test_flat_top_breakout() {
        let result = analyze(&flat_top_bars(111.0));
        assert_eq!(result.phase(), Some(Phase::BreakoutUp));
    }

    #[test]
    fn test_falling_support_does_not_match() {
        let bars: Vec<_> = (0..60)
            .map(|i| (110.0, 100.0 - 0.2 * i as f64, 100.0))
            .collect();
        assert_eq!(analyze(&bars), AnalysisResult::no_match("support not rising"));
    }

    #[test]
    fn test_steep_resistance_does_not_match() {
        // 저항선 기울기(-0.3)가 지지선 기울기(0.3)의 25%를 넘는다
        assert_eq!(
            analyze(&converging_bars()),
            AnalysisResult::no_match("resistance not flat")
        );
    }

    #[test]
    fn test_below_support_is_still_forming() {
        let result = analyze(&flat_top_bars(50.0));
        assert_eq!(result.phase(), Some(Phase::Forming));
    }

    #[test]
    fn test_insufficient_data() {
        let window = window_from_oldest(&flat_top_bars(105.0)[..10]);
        assert_eq!(
            analyze_ascending_triangle(&window, DEFAULT_PERIOD),
            AnalysisResult::no_match(INSUFFICIENT_DATA)
        );
    }
}
