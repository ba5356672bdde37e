//! 스캔 일치 결과 → 분석 요청 프롬프트.

use scanner_core::ScanMatch;

/// 시장 분석가 역할의 프롬프트를 작성합니다.
///
/// 시장 심리, 관련 뉴스, 즉각적인 위험 세 가지를 요점 형식으로 요청합니다.
pub fn build_prompt(signal: &ScanMatch) -> String {
    format!(
        "You are a professional cryptocurrency market analyst. A trading signal was just \
         detected on the {timeframe} chart.\n\
         - **Exchange**: {exchange} ({market} market)\n\
         - **Pair**: {pair}\n\
         - **Signal**: {description}\n\
         Using the latest market news and data (via Google Search), provide a concise \
         analysis covering:\n\
         1. **Current market sentiment**: is the prevailing view on this asset bullish, \
         bearish or neutral?\n\
         2. **Related news**: is there recent news that supports or contradicts this \
         technical signal?\n\
         3. **Potential risks**: what immediate risks should be considered before trading \
         on this signal?\n\
         Reply with bullet-point highlights.",
        timeframe = signal.timeframe,
        exchange = signal.exchange,
        market = signal.market,
        pair = signal.instrument,
        description = signal.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanner_core::{MarketType, PatternKind, Phase, Timeframe};

    #[test]
    fn test_prompt_contains_signal_fields() {
        let signal = ScanMatch {
            exchange: "OKX".to_string(),
            market: MarketType::PerpetualSwap,
            instrument: "ETH-USDT-SWAP".to_string(),
            timeframe: Timeframe::H4,
            pattern: PatternKind::Triangle,
            phase: Phase::BreakoutUp,
            description: "Triangle breakout above resistance 3550.1200".to_string(),
        };

        let prompt = build_prompt(&signal);

        assert!(prompt.contains("4H chart"));
        assert!(prompt.contains("OKX (swap market)"));
        assert!(prompt.contains("ETH-USDT-SWAP"));
        assert!(prompt.contains("3550.1200"));
        assert!(prompt.contains("Potential risks"));
    }
}
