//! 백그라운드 작업.
//!
//! 각 작업은 tokio 태스크로 실행되며 결과를 `JobStore`에 기록합니다.

use crate::jobs::JobStore;
use scanner_commentary::CommentaryService;
use scanner_core::{ScanMatch, ScanRequest};
use scanner_engine::{ScanHooks, Scanner};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

/// 스캔 작업을 시작합니다.
///
/// 스캔마다 레지스트리에서 새 어댑터를 만들며, 진행률 훅이 작업 상태를 갱신합니다.
pub fn spawn_scan(
    scanner: Arc<Scanner>,
    jobs: JobStore,
    id: Uuid,
    request: ScanRequest,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let hooks = ScanHooks::new()
            .on_universe_size(|total| jobs.start(&id, total))
            .on_progress(|progress| jobs.progress(&id, progress));

        match scanner.scan(&request, &hooks).await {
            Ok(report) => match serde_json::to_value(&report.matches) {
                Ok(result) => {
                    info!(task_id = %id, matched = report.matches.len(), "Scan job finished");
                    jobs.succeed(&id, "Scan Complete!", result);
                }
                Err(e) => jobs.fail(&id, e.to_string()),
            },
            Err(e) => {
                warn!(task_id = %id, error = %e, "Scan job failed");
                jobs.fail(&id, e.to_string());
            }
        }
    })
}

/// 코멘터리 작업을 시작합니다. 결과는 자유 텍스트입니다.
pub fn spawn_commentary(
    service: Arc<CommentaryService>,
    jobs: JobStore,
    id: Uuid,
    signal: ScanMatch,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        jobs.start(&id, 1);

        match service.commentary(&signal).await {
            Ok(text) => {
                info!(task_id = %id, instrument = %signal.instrument, "Commentary job finished");
                jobs.succeed(&id, "Analysis Complete!", serde_json::Value::String(text));
            }
            Err(e) => {
                warn!(task_id = %id, error = %e, "Commentary job failed");
                jobs.fail(&id, format!("Commentary failed: {}", e));
            }
        }
    })
}
