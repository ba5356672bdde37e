//! 패턴 스캐너 HTTP 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (스캔 작업 제출/조회, 코멘터리 요청, 패턴 목록)
//! - 메모리 기반 백그라운드 작업 저장소
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`jobs`]: 작업 상태 저장소
//! - [`tasks`]: 백그라운드 스캔/코멘터리 작업
//! - [`routes`]: REST API 엔드포인트

pub mod error;
pub mod jobs;
pub mod routes;
pub mod state;
pub mod tasks;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use jobs::{JobState, JobStatus, JobStore, DEFAULT_JOB_TTL};
pub use routes::create_api_router;
pub use state::AppState;
