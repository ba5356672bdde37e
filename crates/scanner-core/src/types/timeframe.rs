//! 스캔에 사용되는 캔들 타임프레임 정의.
//!
//! 표준 표기(`5m`, `15m`, `30m`, `1H`, `4H`, `1D`)를 사용하며,
//! 각 거래소 어댑터가 자신의 표기로 변환합니다.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 캔들스틱 타임프레임.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// 5분봉
    #[serde(rename = "5m")]
    M5,
    /// 15분봉
    #[serde(rename = "15m")]
    M15,
    /// 30분봉
    #[serde(rename = "30m")]
    M30,
    /// 1시간봉
    #[serde(rename = "1H", alias = "1h")]
    H1,
    /// 4시간봉
    #[serde(rename = "4H", alias = "4h")]
    H4,
    /// 일봉
    #[serde(rename = "1D", alias = "1d")]
    D1,
}

impl Timeframe {
    /// 지원하는 모든 타임프레임.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
    ];

    /// 표준 표기 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::M30 => "30m",
            Timeframe::H1 => "1H",
            Timeframe::H4 => "4H",
            Timeframe::D1 => "1D",
        }
    }

    /// OKX `bar` 파라미터로 변환합니다. OKX는 표준 표기를 그대로 사용합니다.
    pub fn to_okx_bar(&self) -> &'static str {
        self.as_str()
    }

    /// 바이낸스 간격 문자열로 변환합니다. 시간/일 단위는 소문자입니다.
    pub fn to_binance_interval(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::M30 => "30m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 분 단위는 대소문자를 구분한다 ("1M"은 월봉 표기와 혼동됨)
        match s.trim() {
            "5m" => Ok(Timeframe::M5),
            "15m" => Ok(Timeframe::M15),
            "30m" => Ok(Timeframe::M30),
            "1H" | "1h" => Ok(Timeframe::H1),
            "4H" | "4h" => Ok(Timeframe::H4),
            "1D" | "1d" => Ok(Timeframe::D1),
            other => Err(CoreError::InvalidTimeframe(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("1H".parse::<Timeframe>().unwrap(), Timeframe::H1);
        assert_eq!("1h".parse::<Timeframe>().unwrap(), Timeframe::H1);
        assert_eq!("4h".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("1D".parse::<Timeframe>().unwrap(), Timeframe::D1);
        assert_eq!("15m".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert!("1M".parse::<Timeframe>().is_err());
        assert!("2h".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_exchange_notation() {
        assert_eq!(Timeframe::H1.to_okx_bar(), "1H");
        assert_eq!(Timeframe::H1.to_binance_interval(), "1h");
        assert_eq!(Timeframe::D1.to_binance_interval(), "1d");
        assert_eq!(Timeframe::M30.to_binance_interval(), "30m");
    }

    #[test]
    fn test_timeframe_serde() {
        let json = serde_json::to_string(&Timeframe::H4).unwrap();
        assert_eq!(json, "\"4H\"");

        let parsed: Timeframe = serde_json::from_str("\"4h\"").unwrap();
        assert_eq!(parsed, Timeframe::H4);
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for tf in Timeframe::ALL {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
        }
    }
}
