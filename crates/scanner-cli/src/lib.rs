//! 패턴 스캐너 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 거래소 상품 전체에 대한 패턴 스캔 (진행률 표시)
//! - 스캔 대상 상품 목록 조회
//! - 사용 가능한 패턴/그룹 목록

pub mod commands;

pub use commands::*;
