//! 모든 핸들러에서 공유되는 애플리케이션 상태.

use crate::jobs::JobStore;
use chrono::{DateTime, Utc};
use scanner_commentary::CommentaryService;
use scanner_engine::Scanner;
use std::sync::Arc;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 스캔 진입점 (거래소/패턴 레지스트리 + 스캔 설정)
    pub scanner: Arc<Scanner>,

    /// 작업 상태 저장소
    pub jobs: JobStore,

    /// 시장 코멘터리 서비스 (API 키가 없으면 None)
    pub commentary: Option<Arc<CommentaryService>>,

    /// API 버전
    pub version: String,

    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner: Arc::new(scanner),
            jobs: JobStore::new(),
            commentary: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// 작업 저장소 교체 (보존 기간 설정용).
    pub fn with_jobs(mut self, jobs: JobStore) -> Self {
        self.jobs = jobs;
        self
    }

    /// 코멘터리 서비스 설정.
    pub fn with_commentary(mut self, service: CommentaryService) -> Self {
        self.commentary = Some(Arc::new(service));
        self
    }

    pub fn has_commentary(&self) -> bool {
        self.commentary.is_some()
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
