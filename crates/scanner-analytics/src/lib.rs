//! 차트 패턴 분석.
//!
//! 캔들 윈도우를 `AnalysisResult`로 매핑하는 순수 함수들과,
//! 패턴 이름/그룹을 분석기로 해석하는 읽기 전용 레지스트리를 제공합니다.

pub mod patterns;

pub use patterns::*;
