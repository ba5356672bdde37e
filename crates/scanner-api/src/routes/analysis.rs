//! 코멘터리 작업 제출.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use scanner_commentary::CommentaryService;
use scanner_core::ScanMatch;
use std::sync::Arc;
use tracing::info;

use super::scan::TaskCreatedResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::tasks::spawn_commentary;

/// 돌파 단계 일치 결과에 대한 코멘터리 작업을 제출합니다.
///
/// API 키가 설정되지 않았으면 503, 돌파 단계가 아니면 400.
/// POST /analysis
pub async fn start_analysis(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScanMatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let service = state.commentary.clone().ok_or_else(|| {
        ApiError::ServiceUnavailable("Commentary is not configured".to_string())
    })?;

    let Json(signal) = payload?;
    if !CommentaryService::is_eligible(&signal) {
        return Err(ApiError::BadRequest(format!(
            "Commentary is only available for breakout signals (got {})",
            signal.phase
        )));
    }

    let task_id = state.jobs.create();
    info!(task_id = %task_id, instrument = %signal.instrument, "Commentary job submitted");
    spawn_commentary(service, state.jobs.clone(), task_id, signal);

    Ok((StatusCode::ACCEPTED, Json(TaskCreatedResponse { task_id })))
}

/// 코멘터리 라우터 생성.
pub fn analysis_router() -> Router<Arc<AppState>> {
    Router::new().route("/analysis", post(start_analysis))
}
