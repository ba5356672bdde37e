//! 패턴 그룹 평가 통합 테스트

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use scanner_analytics::{PatternRegistry, DEFAULT_PERIOD, LONG_PATTERNS_GROUP};
use scanner_core::{Candle, PatternKind, Phase};

/// 시간순 (high, low, close)를 최신순 캔들 윈도우로 변환
fn window(bars: impl Iterator<Item = (i64, i64, i64)>) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut candles: Vec<Candle> = bars
        .enumerate()
        .map(|(i, (high, low, close))| {
            // 가격은 1/100 단위 정수로 표현
            Candle::new(
                start + Duration::hours(4 * i as i64),
                Decimal::new(close, 2),
                Decimal::new(high, 2),
                Decimal::new(low, 2),
                Decimal::new(close, 2),
                Decimal::new(100, 0),
            )
        })
        .collect();
    candles.reverse();
    candles
}

#[test]
fn test_group_picks_triangle_first() {
    let candles = window((0..60).map(|i| (12000 - 30 * i, 8000 + 30 * i, 10000)));

    let registry = PatternRegistry::global();
    let kinds = registry.resolve(LONG_PATTERNS_GROUP).unwrap();
    let (kind, phase, description) = registry.first_match(&kinds, &candles).unwrap();

    assert_eq!(kind, PatternKind::Triangle);
    assert_eq!(phase, Phase::Forming);
    assert!(description.contains("resistance"));
}

#[test]
fn test_triangle_wins_when_ascending_triangle_also_matches() {
    // 저항선이 거의 평평하게 하락: 삼각 수렴과 상승 삼각형 조건을 모두 만족
    let candles = window((0..60).map(|i| (11000 - 5 * i, 8000 + 40 * i, 10500)));

    let registry = PatternRegistry::global();
    assert!(registry
        .analyze(PatternKind::Triangle, &candles)
        .is_match());
    assert_eq!(
        registry
            .analyze(PatternKind::AscendingTriangle, &candles)
            .phase(),
        Some(Phase::Forming)
    );

    let kinds = registry.resolve(LONG_PATTERNS_GROUP).unwrap();
    let (kind, phase, _) = registry.first_match(&kinds, &candles).unwrap();

    assert_eq!(kind, PatternKind::Triangle);
    assert_eq!(phase, Phase::Forming);
}

#[test]
fn test_group_falls_through_to_ascending_triangle() {
    let candles = window((0..60).map(|i| (11000, 8000 + 40 * i, 10000)));

    let registry = PatternRegistry::global();
    let kinds = registry.resolve(LONG_PATTERNS_GROUP).unwrap();
    let (kind, _, _) = registry.first_match(&kinds, &candles).unwrap();

    assert_eq!(kind, PatternKind::AscendingTriangle);
}

#[test]
fn test_extra_history_is_ignored() {
    // 가장 최근 period개만 사용하므로 더 오래된 캔들은 판정에 영향이 없다
    let mut bars: Vec<(i64, i64, i64)> = (0..40).map(|_| (50000, 100, 20000)).collect();
    bars.extend((0..DEFAULT_PERIOD as i64).map(|i| (12000 - 30 * i, 8000 + 30 * i, 10000)));
    let candles = window(bars.into_iter());

    let result = PatternRegistry::global().analyze(PatternKind::Triangle, &candles);
    assert!(result.is_match());
}
