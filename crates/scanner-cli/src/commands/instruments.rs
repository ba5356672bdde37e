//! 스캔 대상 상품 목록 조회.

use anyhow::{anyhow, Result};
use scanner_core::{AppConfig, MarketType};
use scanner_exchange::ExchangeRegistry;
use tracing::info;

/// 거래소의 필터링된 상품 목록을 출력합니다.
pub async fn list_instruments(
    config: &AppConfig,
    exchange: &str,
    market: MarketType,
    quote: &str,
    limit: Option<usize>,
) -> Result<()> {
    let adapter = ExchangeRegistry::with_defaults(&config.exchanges).create(exchange)?;

    let mut instruments = adapter
        .list_instruments(quote, market)
        .await
        .map_err(|e| anyhow!("Could not fetch instrument list from {}: {}", adapter.name(), e))?;

    let available = instruments.len();
    if let Some(limit) = limit {
        instruments.truncate(limit);
    }
    info!(exchange = adapter.name(), available, "Instruments fetched");

    println!(
        "\n📋 {} {} instruments quoted in {} ({} shown)",
        adapter.name(),
        market,
        quote.to_uppercase(),
        instruments.len()
    );
    for instrument in &instruments {
        println!("  {}", instrument.id);
    }

    Ok(())
}
