//! 스캔 작업 제출과 상태 조회.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use scanner_core::ScanRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::jobs::JobStatus;
use crate::state::AppState;
use crate::tasks::spawn_scan;

/// 작업 제출 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreatedResponse {
    pub task_id: Uuid,
}

/// 스캔 작업 제출.
///
/// 거래소/패턴/타임프레임은 작업 생성 전에 검증합니다.
/// POST /scan
pub async fn start_scan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let Json(request) = payload?;
    state.scanner.validate(&request)?;

    let task_id = state.jobs.create();
    info!(
        task_id = %task_id,
        exchange = %request.exchange,
        market = %request.market,
        quote = %request.quote,
        timeframe = %request.timeframe,
        pattern = %request.pattern,
        "Scan job submitted"
    );
    spawn_scan(state.scanner.clone(), state.jobs.clone(), task_id, request);

    Ok((StatusCode::ACCEPTED, Json(TaskCreatedResponse { task_id })))
}

/// 작업 상태 조회. 스캔/코멘터리 작업 모두 같은 저장소를 사용합니다.
/// GET /status/{task_id}
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<JobStatus>> {
    Uuid::parse_str(&task_id)
        .ok()
        .and_then(|id| state.jobs.get(&id))
        .map(Json)
        .ok_or(ApiError::NotFound(task_id))
}

/// 스캔 라우터 생성.
pub fn scan_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/scan", post(start_scan))
        .route("/status/{task_id}", get(get_status))
}
