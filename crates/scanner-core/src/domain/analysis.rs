//! 패턴 분석 결과 타입.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 데이터가 부족할 때 사용하는 비매칭 사유.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// 지원하는 차트 패턴 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// 삼각 수렴 (저항선 하락 + 지지선 상승)
    Triangle,
    /// 이중 바닥 (W 바닥)
    DoubleBottom,
    /// 상승 삼각형 (수평 저항선 + 상승 지지선)
    AscendingTriangle,
}

impl PatternKind {
    /// 등록된 모든 패턴.
    pub const ALL: [PatternKind; 3] = [
        PatternKind::Triangle,
        PatternKind::DoubleBottom,
        PatternKind::AscendingTriangle,
    ];

    /// 레지스트리 키로 사용하는 이름을 반환합니다.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Triangle => "triangle",
            PatternKind::DoubleBottom => "double_bottom",
            PatternKind::AscendingTriangle => "ascending_triangle",
        }
    }

    /// 사람이 읽기 위한 이름을 반환합니다.
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternKind::Triangle => "Triangle Consolidation",
            PatternKind::DoubleBottom => "Double Bottom",
            PatternKind::AscendingTriangle => "Ascending Triangle",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PatternKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| CoreError::UnknownPattern(s.to_string()))
    }
}

/// 패턴 매칭 시 현재 가격의 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// 패턴 형성 중 (돌파 전)
    Forming,
    /// 상단 돌파
    BreakoutUp,
    /// 하단 이탈
    BreakoutDown,
}

impl Phase {
    /// 돌파(상/하단) 상태인지 확인합니다.
    pub fn is_breakout(&self) -> bool {
        matches!(self, Phase::BreakoutUp | Phase::BreakoutDown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Forming => "forming",
            Phase::BreakoutUp => "breakout_up",
            Phase::BreakoutDown => "breakout_down",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 분석기 하나가 캔들 윈도우에 대해 내린 판정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// 패턴 불일치
    NoMatch { reason: String },
    /// 패턴 일치
    Match { phase: Phase, description: String },
}

impl AnalysisResult {
    /// 불일치 결과를 생성합니다.
    pub fn no_match(reason: impl Into<String>) -> Self {
        AnalysisResult::NoMatch {
            reason: reason.into(),
        }
    }

    /// 데이터 부족 결과를 생성합니다.
    pub fn insufficient_data() -> Self {
        Self::no_match(INSUFFICIENT_DATA)
    }

    /// 일치 결과를 생성합니다.
    pub fn matched(phase: Phase, description: impl Into<String>) -> Self {
        AnalysisResult::Match {
            phase,
            description: description.into(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, AnalysisResult::Match { .. })
    }

    /// 일치한 경우 단계를 반환합니다.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            AnalysisResult::Match { phase, .. } => Some(*phase),
            AnalysisResult::NoMatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_kind_names() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
        }
        assert!("head_and_shoulders".parse::<PatternKind>().is_err());
    }

    #[test]
    fn test_phase_serde() {
        assert_eq!(
            serde_json::to_string(&Phase::BreakoutUp).unwrap(),
            "\"breakout_up\""
        );
        assert!(Phase::BreakoutDown.is_breakout());
        assert!(!Phase::Forming.is_breakout());
    }

    #[test]
    fn test_analysis_result_helpers() {
        let miss = AnalysisResult::insufficient_data();
        assert!(!miss.is_match());
        assert_eq!(miss, AnalysisResult::no_match(INSUFFICIENT_DATA));

        let hit = AnalysisResult::matched(Phase::Forming, "forming");
        assert!(hit.is_match());
        assert_eq!(hit.phase(), Some(Phase::Forming));
    }
}
