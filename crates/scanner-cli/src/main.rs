//! 차트 패턴 스캐너 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # OKX 현물 USDT 마켓에서 4시간봉 삼각형 패턴 스캔
//! scanner scan USDT --exchange okx --timeframe 4H --pattern triangle
//!
//! # 바이낸스 무기한 선물 상위 50개 상품에서 패턴 그룹 스캔 + 코멘터리
//! scanner scan USDT -e binance -m swap -p long_patterns --limit 50 --commentary
//!
//! # 스캔 대상 상품 목록 보기
//! scanner instruments USDT -e binance -m spot
//!
//! # 사용 가능한 패턴 목록 보기
//! scanner patterns
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use scanner_analytics::PatternRegistry;
use scanner_cli::commands::instruments::list_instruments;
use scanner_cli::commands::patterns::format_patterns;
use scanner_cli::commands::scan::{run_scan_command, ScanCommandConfig};
use scanner_cli::commands::OutputFormat;
use scanner_core::{init_logging, AppConfig, LogConfig, LogFormat, MarketType, ScanRequest, Timeframe};

#[derive(Parser)]
#[command(name = "scanner")]
#[command(about = "Crypto chart-pattern scanner - OKX/Binance 패턴 스캐너", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (기본: config/scanner.toml, 없으면 기본값)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 상세 로그 출력
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 상품 전체에 대해 차트 패턴 스캔
    Scan {
        /// 호가 통화 (예: USDT)
        quote: String,

        /// 거래소 (okx, binance)
        #[arg(short, long, default_value = "okx")]
        exchange: String,

        /// 시장 유형 (spot, swap)
        #[arg(short, long, default_value = "spot")]
        market: MarketType,

        /// 타임프레임 (5m, 15m, 30m, 1H, 4H, 1D)
        #[arg(short, long, default_value = "1H")]
        timeframe: Timeframe,

        /// 패턴 이름 또는 그룹 (triangle, double_bottom, ascending_triangle, long_patterns)
        #[arg(short, long, default_value = "triangle")]
        pattern: String,

        /// 스캔할 상품 수 상한 (목록 앞에서부터)
        #[arg(short, long)]
        limit: Option<usize>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 돌파 신호에 대한 AI 코멘터리 요청 (GEMINI_API_KEY 필요)
        #[arg(long, default_value = "false")]
        commentary: bool,
    },

    /// 스캔 대상 상품 목록 보기
    Instruments {
        /// 호가 통화 (예: USDT)
        quote: String,

        /// 거래소 (okx, binance)
        #[arg(short, long, default_value = "okx")]
        exchange: String,

        /// 시장 유형 (spot, swap)
        #[arg(short, long, default_value = "spot")]
        market: MarketType,

        /// 출력할 상품 수 상한
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 사용 가능한 패턴과 그룹 목록
    Patterns,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 진행률 표시줄과 겹치지 않도록 기본은 경고 이상만 출력
    let level = if cli.verbose { "debug" } else { "warn" };
    init_logging(
        LogConfig::new(level)
            .with_format(LogFormat::Compact)
            .with_file(cli.verbose),
    )
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::load(cli.config.as_deref())?;

    let outcome = match cli.command {
        Commands::Scan {
            quote,
            exchange,
            market,
            timeframe,
            pattern,
            limit,
            format,
            commentary,
        } => {
            let mut request = ScanRequest::new(exchange, market, quote, timeframe, pattern);
            request.limit = limit;

            let cmd = ScanCommandConfig {
                request,
                format: OutputFormat::parse(&format)?,
                commentary,
            };
            run_scan_command(&config, cmd).await
        }

        Commands::Instruments {
            quote,
            exchange,
            market,
            limit,
        } => list_instruments(&config, &exchange, market, &quote, limit).await,

        Commands::Patterns => {
            println!("{}", format_patterns(PatternRegistry::global()));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("Command failed: {:#}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
