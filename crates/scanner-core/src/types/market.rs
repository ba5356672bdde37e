//! 시장 유형 정의.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 스캔 대상 시장 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketType {
    /// 현물
    #[default]
    #[serde(rename = "spot")]
    Spot,
    /// 무기한 선물 (만기 선물 제외)
    #[serde(rename = "swap", alias = "perpetual", alias = "perpetual-swap")]
    PerpetualSwap,
}

impl MarketType {
    /// 짧은 식별 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Spot => "spot",
            MarketType::PerpetualSwap => "swap",
        }
    }

    /// 무기한 선물 시장인지 확인합니다.
    pub fn is_swap(&self) -> bool {
        matches!(self, MarketType::PerpetualSwap)
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spot" => Ok(MarketType::Spot),
            "swap" | "perpetual" | "perpetual-swap" | "perp" => Ok(MarketType::PerpetualSwap),
            _ => Err(CoreError::InvalidMarketType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_type_parse() {
        assert_eq!("spot".parse::<MarketType>().unwrap(), MarketType::Spot);
        assert_eq!("SWAP".parse::<MarketType>().unwrap(), MarketType::PerpetualSwap);
        assert_eq!(
            "perpetual-swap".parse::<MarketType>().unwrap(),
            MarketType::PerpetualSwap
        );
        assert!("margin".parse::<MarketType>().is_err());
    }

    #[test]
    fn test_market_type_serde() {
        assert_eq!(serde_json::to_string(&MarketType::PerpetualSwap).unwrap(), "\"swap\"");
        let parsed: MarketType = serde_json::from_str("\"perpetual\"").unwrap();
        assert!(parsed.is_swap());
    }
}
