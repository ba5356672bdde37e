//! 백그라운드 작업 상태 저장소.
//!
//! 프로세스 메모리에만 보관하며 재시작하면 사라집니다. 완료된 작업은
//! 보존 기간이 지나면 새 작업을 등록할 때 정리됩니다.

use scanner_core::ScanProgress;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// 완료된 작업의 기본 보존 기간 (1일).
pub const DEFAULT_JOB_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// 작업 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Pending,
    Progress,
    Success,
    Failure,
}

impl JobState {
    pub fn is_finished(&self) -> bool {
        matches!(self, JobState::Success | JobState::Failure)
    }
}

/// 폴링 응답으로 그대로 직렬화되는 작업 상태.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    pub state: JobState,
    pub current: usize,
    pub total: usize,
    /// 사람이 읽을 수 있는 상태 문자열. 실패 시 에러 메시지.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl JobStatus {
    fn pending() -> Self {
        Self {
            state: JobState::Pending,
            current: 0,
            total: 1,
            status: "Pending...".to_string(),
            result: None,
        }
    }
}

#[derive(Debug)]
struct JobEntry {
    status: JobStatus,
    /// 성공/실패로 끝난 시각
    finished_at: Option<Instant>,
}

impl JobEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.finished_at
            .is_some_and(|finished| now.duration_since(finished) >= ttl)
    }
}

/// 작업 ID → 상태. 복제해도 같은 저장소를 공유합니다.
///
/// 스캔 훅이 동기 콜백이므로 `std::sync::RwLock`을 사용합니다.
#[derive(Debug, Clone)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, JobEntry>>>,
    ttl: Duration,
}

impl Default for JobStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_JOB_TTL)
    }
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 완료된 작업의 보존 기간을 지정해 생성합니다.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// 대기 상태의 새 작업을 등록하고 ID를 반환합니다.
    ///
    /// 보존 기간이 지난 완료 작업을 먼저 제거합니다.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut jobs = self.jobs.write().unwrap_or_else(PoisonError::into_inner);

        let before = jobs.len();
        jobs.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let evicted = before - jobs.len();
        if evicted > 0 {
            debug!(evicted, "Expired jobs removed");
        }

        jobs.insert(
            id,
            JobEntry {
                status: JobStatus::pending(),
                finished_at: None,
            },
        );
        id
    }

    /// 작업 상태를 조회합니다. 보존 기간이 지난 작업은 없는 것으로 취급합니다.
    pub fn get(&self, id: &Uuid) -> Option<JobStatus> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .filter(|entry| !entry.is_expired(Instant::now(), self.ttl))
            .map(|entry| entry.status.clone())
    }

    pub fn len(&self) -> usize {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(&self, id: &Uuid, f: impl FnOnce(&mut JobStatus)) {
        if let Some(entry) = self
            .jobs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(id)
        {
            f(&mut entry.status);
            if entry.status.state.is_finished() && entry.finished_at.is_none() {
                entry.finished_at = Some(Instant::now());
            }
        }
    }

    /// 스캔 대상 수가 정해졌을 때 호출합니다.
    pub fn start(&self, id: &Uuid, total: usize) {
        self.update(id, |job| {
            job.state = JobState::Progress;
            job.current = 0;
            job.total = total;
            job.status = "Initializing...".to_string();
        });
    }

    pub fn progress(&self, id: &Uuid, progress: ScanProgress) {
        self.update(id, |job| {
            job.state = JobState::Progress;
            job.current = progress.current;
            job.total = progress.total;
            job.status = format!("Scanning {}/{}", progress.current, progress.total);
        });
    }

    pub fn succeed(&self, id: &Uuid, status: impl Into<String>, result: Value) {
        self.update(id, |job| {
            job.state = JobState::Success;
            job.current = job.total;
            job.status = status.into();
            job.result = Some(result);
        });
    }

    pub fn fail(&self, id: &Uuid, message: impl Into<String>) {
        self.update(id, |job| {
            job.state = JobState::Failure;
            job.status = message.into();
            job.result = None;
        });
    }
}
