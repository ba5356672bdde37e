//! 패턴 목록 endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 패턴 정보.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternInfo {
    /// 선택자로 쓰는 이름 (예: "double_bottom")
    pub name: String,
    /// 표시 이름
    pub display_name: String,
}

/// 패턴 그룹 정보.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    pub name: String,
    /// 평가 순서대로의 패턴 이름
    pub members: Vec<String>,
}

/// 패턴 목록 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternsResponse {
    pub patterns: Vec<PatternInfo>,
    pub groups: Vec<GroupInfo>,
    /// 등록된 거래소 키
    pub exchanges: Vec<String>,
}

/// 사용 가능한 패턴, 그룹, 거래소 목록.
/// GET /patterns
pub async fn list_patterns(State(state): State<Arc<AppState>>) -> Json<PatternsResponse> {
    let registry = state.scanner.patterns();

    let patterns = registry
        .patterns()
        .into_iter()
        .map(|kind| PatternInfo {
            name: kind.name().to_string(),
            display_name: kind.display_name().to_string(),
        })
        .collect();

    let groups = registry
        .groups()
        .iter()
        .map(|group| GroupInfo {
            name: group.name.clone(),
            members: group.members.iter().map(|k| k.name().to_string()).collect(),
        })
        .collect();

    let exchanges = state
        .scanner
        .exchanges()
        .names()
        .into_iter()
        .map(String::from)
        .collect();

    Json(PatternsResponse {
        patterns,
        groups,
        exchanges,
    })
}

pub fn patterns_router() -> Router<Arc<AppState>> {
    Router::new().route("/patterns", get(list_patterns))
}
