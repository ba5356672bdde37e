//! 스캔 루프.

use crate::error::{ScanError, ScanResult};
use crate::hooks::ScanHooks;
use crate::stats::ScanStats;
use scanner_analytics::PatternRegistry;
use scanner_core::{PatternKind, ScanConfig, ScanMatch, ScanProgress, ScanRequest};
use scanner_exchange::{ExchangeAdapter, ExchangeRegistry};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, warn, Instrument};

/// 스캔 결과: 상품 나열 순서대로의 일치 목록과 통계.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub matches: Vec<ScanMatch>,
    pub stats: ScanStats,
}

/// 어댑터 하나로 스캔을 한 번 실행합니다.
///
/// 1. 패턴 선택자를 해석합니다 (네트워크 호출 전).
/// 2. 상품 목록을 조회합니다. 실패하면 `ScanError::UniverseUnavailable`,
///    비어 있으면 콜백 호출 없이 빈 결과를 반환합니다.
/// 3. `limit`만큼 앞에서부터 자르고 상품 수를 알립니다. `Some(0)`은 제한 없음으로 취급합니다.
/// 4. 상품마다 캔들을 조회해 패턴을 순서대로 평가하고(첫 일치에서 중단),
///    진행률을 알린 뒤 고정 대기 시간만큼 쉽니다. 캔들 조회 실패는 건너뜁니다.
pub async fn run_scan(
    adapter: &dyn ExchangeAdapter,
    patterns: &PatternRegistry,
    request: &ScanRequest,
    config: &ScanConfig,
    hooks: &ScanHooks<'_>,
) -> ScanResult<ScanReport> {
    let span = scanner_core::scan_span!("scan", adapter.name());
    scan_universe(adapter, patterns, request, config, hooks)
        .instrument(span)
        .await
}

async fn scan_universe(
    adapter: &dyn ExchangeAdapter,
    patterns: &PatternRegistry,
    request: &ScanRequest,
    config: &ScanConfig,
    hooks: &ScanHooks<'_>,
) -> ScanResult<ScanReport> {
    let start = Instant::now();
    let kinds = resolve_patterns(patterns, &request.pattern)?;

    info!(
        market = %request.market,
        quote = %request.quote,
        timeframe = %request.timeframe,
        pattern = %request.pattern,
        limit = ?request.limit,
        "Scan started"
    );

    let mut universe = adapter
        .list_instruments(&request.quote, request.market)
        .await
        .map_err(|source| {
            error!(error = %source, "Instrument list unavailable");
            ScanError::UniverseUnavailable {
                exchange: adapter.name().to_string(),
                source,
            }
        })?;

    if universe.is_empty() {
        warn!("No instruments to scan");
        return Ok(ScanReport {
            matches: Vec::new(),
            stats: ScanStats {
                elapsed: start.elapsed(),
                ..Default::default()
            },
        });
    }

    if let Some(limit) = request.limit.filter(|&limit| limit > 0) {
        universe.truncate(limit);
    }

    let total = universe.len();
    hooks.universe_size(total);

    let mut stats = ScanStats {
        total,
        ..Default::default()
    };
    let mut matches = Vec::new();

    for (idx, instrument) in universe.iter().enumerate() {
        debug!(
            instrument = %instrument.id,
            progress = format!("{}/{}", idx + 1, total),
            "Scanning"
        );

        match adapter
            .get_candles(
                &instrument.id,
                request.timeframe,
                request.market,
                config.window_size,
            )
            .await
        {
            Ok(candles) => {
                stats.fetched += 1;
                if let Some((pattern, phase, description)) = patterns.first_match(&kinds, &candles)
                {
                    stats.matched += 1;
                    info!(
                        instrument = %instrument.id,
                        pattern = %pattern,
                        phase = %phase,
                        "Pattern matched"
                    );
                    matches.push(ScanMatch {
                        exchange: adapter.name().to_string(),
                        market: request.market,
                        instrument: instrument.id.clone(),
                        timeframe: request.timeframe,
                        pattern,
                        phase,
                        description,
                    });
                }
            }
            Err(e) => {
                stats.errors += 1;
                warn!(
                    instrument = %instrument.id,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Candle fetch failed, skipping"
                );
            }
        }

        hooks.progress(ScanProgress::new(idx + 1, total));

        // 고정 간격 요청 제한
        tokio::time::sleep(config.request_delay()).await;
    }

    stats.elapsed = start.elapsed();
    stats.log_summary(adapter.name());

    Ok(ScanReport { matches, stats })
}

fn resolve_patterns(patterns: &PatternRegistry, selector: &str) -> ScanResult<Vec<PatternKind>> {
    patterns
        .resolve(selector)
        .map_err(|_| ScanError::UnknownPattern(selector.to_string()))
}

/// 거래소 레지스트리, 패턴 레지스트리, 스캔 설정을 묶은 진입점.
///
/// 스캔마다 레지스트리에서 새 어댑터를 만들어 사용합니다.
#[derive(Debug, Clone)]
pub struct Scanner {
    exchanges: ExchangeRegistry,
    patterns: PatternRegistry,
    config: ScanConfig,
}

impl Scanner {
    /// 기본 패턴 레지스트리로 스캐너를 생성합니다.
    pub fn new(exchanges: ExchangeRegistry, config: ScanConfig) -> Self {
        Self {
            exchanges,
            patterns: PatternRegistry::global().clone(),
            config,
        }
    }

    /// 패턴 레지스트리를 교체합니다.
    pub fn with_patterns(mut self, patterns: PatternRegistry) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn exchanges(&self) -> &ExchangeRegistry {
        &self.exchanges
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// 네트워크 호출 없이 요청의 거래소/패턴을 검증합니다.
    pub fn validate(&self, request: &ScanRequest) -> ScanResult<Vec<PatternKind>> {
        if !self.exchanges.contains(&request.exchange) {
            return Err(ScanError::UnknownExchange(request.exchange.clone()));
        }
        resolve_patterns(&self.patterns, &request.pattern)
    }

    /// 요청한 거래소의 새 어댑터로 스캔을 실행합니다.
    pub async fn scan(&self, request: &ScanRequest, hooks: &ScanHooks<'_>) -> ScanResult<ScanReport> {
        self.validate(request)?;
        let adapter = self.exchanges.create(&request.exchange)?;
        run_scan(adapter.as_ref(), &self.patterns, request, &self.config, hooks).await
    }
}
