//! 스캔 오케스트레이터.
//!
//! 어댑터로 상품 목록을 가져와 상품마다 캔들 윈도우를 조회하고,
//! 선택된 패턴을 순서대로 평가해 일치 결과를 모읍니다.
//! 상품은 한 번에 하나씩 순차 처리하며 상품 사이에 고정 대기 시간을 둡니다.

pub mod error;
pub mod hooks;
pub mod scanner;
pub mod stats;

pub use error::{ScanError, ScanResult};
pub use hooks::ScanHooks;
pub use scanner::{run_scan, ScanReport, Scanner};
pub use stats::ScanStats;
