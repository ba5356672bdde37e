//! 패턴 스캔 명령.

use super::OutputFormat;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use scanner_commentary::CommentaryService;
use scanner_core::{AppConfig, ScanMatch, ScanRequest};
use scanner_engine::{ScanHooks, Scanner};
use scanner_exchange::ExchangeRegistry;
use tracing::{info, warn};

/// 스캔 명령 설정.
#[derive(Debug)]
pub struct ScanCommandConfig {
    pub request: ScanRequest,
    pub format: OutputFormat,
    /// 돌파 단계 일치 결과에 코멘터리 요청
    pub commentary: bool,
}

/// 스캔을 실행하고 결과를 출력합니다.
///
/// 상품 목록을 가져오지 못하면 에러를 반환합니다.
pub async fn run_scan_command(config: &AppConfig, cmd: ScanCommandConfig) -> Result<()> {
    let scanner = Scanner::new(
        ExchangeRegistry::with_defaults(&config.exchanges),
        config.scan.clone(),
    );
    scanner.validate(&cmd.request)?;

    // 코멘터리는 스캔 전에 설정을 확인
    let commentary = if cmd.commentary {
        Some(
            CommentaryService::from_env(&config.commentary)
                .context("Commentary requested but not available")?,
        )
    } else {
        None
    };

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let hooks = ScanHooks::new()
        .on_universe_size(|total| pb.set_length(total as u64))
        .on_progress(|progress| pb.set_position(progress.current as u64));

    let result = scanner.scan(&cmd.request, &hooks).await;
    pb.finish_and_clear();
    let report = result?;

    info!(
        matched = report.matches.len(),
        scanned = report.stats.total,
        "Scan finished"
    );

    match cmd.format {
        OutputFormat::Table => println!("{}", format_matches(&report.matches)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.matches)?),
    }

    if let Some(service) = commentary {
        for signal in report
            .matches
            .iter()
            .filter(|m| CommentaryService::is_eligible(m))
        {
            println!("\n🤖 {} ({})", signal.instrument, signal.phase);
            match service.commentary(signal).await {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    warn!(instrument = %signal.instrument, error = %e, "Commentary failed");
                    println!("⚠️  Commentary failed: {}", e);
                }
            }
        }
    }

    Ok(())
}

/// 일치 결과를 사람이 읽기 쉬운 형식으로 변환합니다.
pub fn format_matches(matches: &[ScanMatch]) -> String {
    if matches.is_empty() {
        return "🔍 No matches found.".to_string();
    }

    let mut output = format!("📈 {} match(es)\n", matches.len());
    for m in matches {
        output.push_str(&format!(
            "✅ {} [{}] {}\n",
            m.instrument, m.phase, m.description
        ));
    }
    output.pop();
    output
}
