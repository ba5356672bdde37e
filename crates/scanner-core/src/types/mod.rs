//! 스캐너 전반에서 사용되는 공통 타입.

mod market;
mod timeframe;

pub use market::*;
pub use timeframe::*;
