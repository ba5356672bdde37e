//! 스캔 통계.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 스캔 한 번의 처리 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// 스캔 대상 상품 수 (limit 적용 후)
    pub total: usize,
    /// 캔들 조회 성공 수
    pub fetched: usize,
    /// 캔들 조회 실패로 건너뛴 수
    pub errors: usize,
    /// 패턴 일치 수
    pub matched: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 캔들 조회 성공률 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.fetched as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, exchange: &str) {
        tracing::info!(
            exchange = exchange,
            total = self.total,
            fetched = self.fetched,
            errors = self.errors,
            matched = self.matched,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "Scan complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = ScanStats {
            total: 4,
            fetched: 3,
            errors: 1,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), 75.0);
        assert_eq!(ScanStats::new().success_rate(), 0.0);
    }
}
