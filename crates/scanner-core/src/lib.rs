//! # Scanner Core
//!
//! 차트 패턴 스캐너의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 스캐너 전반에서 사용되는 기본 타입을 제공합니다:
//! - 캔들 및 상품(instrument) 정의
//! - 시장 유형과 타임프레임
//! - 패턴 분석 결과 및 스캔 요청/결과 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
