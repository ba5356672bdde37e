//! 패턴 이름/그룹 → 분석기 레지스트리.
//!
//! 전역 기본 레지스트리는 최초 사용 시 한 번 구성되고 이후 읽기 전용입니다.

use super::{
    analyze_ascending_triangle, analyze_double_bottom, analyze_triangle, DEFAULT_PERIOD,
};
use once_cell::sync::Lazy;
use scanner_core::{AnalysisResult, Candle, CoreError, CoreResult, PatternKind, Phase};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// 기본 패턴 그룹 이름.
pub const LONG_PATTERNS_GROUP: &str = "long_patterns";

/// 캔들 윈도우를 판정하는 분석기.
pub type Analyzer = Arc<dyn Fn(&[Candle]) -> AnalysisResult + Send + Sync>;

static DEFAULT_REGISTRY: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::with_defaults);

/// 이름이 붙은 패턴 목록. 선언 순서대로 평가됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    pub name: String,
    pub members: Vec<PatternKind>,
}

/// 패턴 분석기와 그룹 정의.
#[derive(Clone, Default)]
pub struct PatternRegistry {
    analyzers: HashMap<PatternKind, Analyzer>,
    groups: Vec<PatternGroup>,
}

impl PatternRegistry {
    /// 빈 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 전역 기본 레지스트리.
    pub fn global() -> &'static PatternRegistry {
        &DEFAULT_REGISTRY
    }

    /// 세 가지 기본 분석기와 `long_patterns` 그룹을 등록합니다.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_analyzer(PatternKind::Triangle, |w| analyze_triangle(w, DEFAULT_PERIOD))
            .with_analyzer(PatternKind::DoubleBottom, |w| {
                analyze_double_bottom(w, DEFAULT_PERIOD)
            })
            .with_analyzer(PatternKind::AscendingTriangle, |w| {
                analyze_ascending_triangle(w, DEFAULT_PERIOD)
            })
            .with_group(
                LONG_PATTERNS_GROUP,
                vec![
                    PatternKind::Triangle,
                    PatternKind::DoubleBottom,
                    PatternKind::AscendingTriangle,
                ],
            )
    }

    /// 분석기를 등록합니다. 같은 패턴이 있으면 대체합니다.
    pub fn with_analyzer<F>(mut self, kind: PatternKind, analyzer: F) -> Self
    where
        F: Fn(&[Candle]) -> AnalysisResult + Send + Sync + 'static,
    {
        self.analyzers.insert(kind, Arc::new(analyzer));
        self
    }

    /// 패턴 그룹을 등록합니다.
    pub fn with_group(mut self, name: impl Into<String>, members: Vec<PatternKind>) -> Self {
        let name = name.into();
        self.groups.retain(|g| g.name != name);
        self.groups.push(PatternGroup { name, members });
        self
    }

    /// 등록된 패턴 (선언 순서).
    pub fn patterns(&self) -> Vec<PatternKind> {
        PatternKind::ALL
            .into_iter()
            .filter(|kind| self.analyzers.contains_key(kind))
            .collect()
    }

    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    /// 선택자(그룹 이름 또는 패턴 이름)를 패턴 목록으로 해석합니다.
    ///
    /// # Errors
    /// 그룹도 등록된 패턴도 아니면 `CoreError::UnknownPattern`.
    pub fn resolve(&self, selector: &str) -> CoreResult<Vec<PatternKind>> {
        let selector = selector.trim();

        if let Some(group) = self.groups.iter().find(|g| g.name == selector) {
            return Ok(group.members.clone());
        }

        match selector.parse::<PatternKind>() {
            Ok(kind) if self.analyzers.contains_key(&kind) => Ok(vec![kind]),
            _ => Err(CoreError::UnknownPattern(selector.to_string())),
        }
    }

    /// 패턴 하나를 분석합니다. 등록되지 않은 패턴은 불일치입니다.
    pub fn analyze(&self, kind: PatternKind, window: &[Candle]) -> AnalysisResult {
        match self.analyzers.get(&kind) {
            Some(analyzer) => analyzer(window),
            None => AnalysisResult::no_match(format!("no analyzer registered for {}", kind)),
        }
    }

    /// 패턴을 순서대로 평가하여 처음 일치한 결과를 반환합니다.
    /// 이후 패턴은 평가하지 않습니다.
    pub fn first_match(
        &self,
        kinds: &[PatternKind],
        window: &[Candle],
    ) -> Option<(PatternKind, Phase, String)> {
        for &kind in kinds {
            match self.analyze(kind, window) {
                AnalysisResult::Match { phase, description } => {
                    return Some((kind, phase, description));
                }
                AnalysisResult::NoMatch { reason } => {
                    trace!(pattern = %kind, reason = %reason, "Pattern not matched");
                }
            }
        }
        None
    }
}

impl fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("patterns", &self.patterns())
            .field("groups", &self.groups)
            .finish()
    }
}
