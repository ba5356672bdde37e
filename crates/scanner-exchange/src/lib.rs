//! 거래소 REST 어댑터.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `ExchangeAdapter` trait: 상품 목록/캔들 조회를 위한 통합 인터페이스
//! - OKX, Binance 어댑터 (공개 REST API, 인증 불필요)
//! - 이름 기반 어댑터 레지스트리

pub mod connector;
pub mod error;
pub mod registry;
pub mod traits;

pub use connector::{BinanceAdapter, BinanceConfig, OkxAdapter, OkxConfig};
pub use error::*;
pub use registry::{AdapterFactory, ExchangeRegistry};
pub use traits::*;
