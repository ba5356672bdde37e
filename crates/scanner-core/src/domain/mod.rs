//! 스캐너 도메인 모델.

mod analysis;
mod market_data;
mod scan;

pub use analysis::*;
pub use market_data::*;
pub use scan::*;
