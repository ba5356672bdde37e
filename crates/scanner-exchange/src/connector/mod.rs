//! 거래소별 REST 커넥터.

pub mod binance;
pub mod okx;
mod rest;

pub use binance::{BinanceAdapter, BinanceConfig};
pub use okx::{OkxAdapter, OkxConfig};
