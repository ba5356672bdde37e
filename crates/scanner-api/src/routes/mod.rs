//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `POST /scan` - 스캔 작업 제출
//! - `GET /status/{task_id}` - 작업 상태 조회
//! - `POST /analysis` - 일치 결과에 대한 코멘터리 작업 제출
//! - `GET /patterns` - 패턴/그룹/거래소 목록
//! - `GET /health` - 헬스 체크

pub mod analysis;
pub mod health;
pub mod patterns;
pub mod scan;

pub use analysis::{analysis_router, start_analysis};
pub use health::{health_check, health_router, HealthResponse};
pub use patterns::{list_patterns, patterns_router, PatternsResponse};
pub use scan::{get_status, scan_router, start_scan, TaskCreatedResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(scan_router())
        .merge(analysis_router())
        .merge(patterns_router())
        .nest("/health", health_router())
}
