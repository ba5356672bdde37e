//! 패턴 스캐너 API 서버 진입점.
//!
//! 서버를 초기화하고 시작합니다:
//! - 설정 로드 (기본값 → config/scanner.toml → SCANNER__ 환경 변수)
//! - 로깅 초기화
//! - 거래소/패턴 레지스트리와 스캐너 생성
//! - 코멘터리 서비스 (GEMINI_API_KEY가 있을 때만)
//! - HTTP 서버 시작 (graceful shutdown 지원)

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use scanner_api::{create_api_router, AppState, JobStore};
use scanner_commentary::CommentaryService;
use scanner_core::{init_logging, AppConfig};
use scanner_engine::Scanner;
use scanner_exchange::ExchangeRegistry;

/// CORS 레이어 생성.
///
/// `CORS_ORIGINS`(쉼표 구분)가 설정되어 있으면 해당 origin만 허용하고,
/// 없으면 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (없어도 무시)
    dotenvy::dotenv().ok();

    let config = AppConfig::load_default()?;
    init_logging(config.logging.to_log_config())?;

    info!("Starting pattern scanner API server...");

    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "Invalid socket address. Check SCANNER__SERVER__HOST and SCANNER__SERVER__PORT."
        );
        e
    })?;

    let exchanges = ExchangeRegistry::with_defaults(&config.exchanges);
    info!(exchanges = ?exchanges.names(), "Exchange adapters registered");

    let mut state = AppState::new(Scanner::new(exchanges, config.scan.clone()))
        .with_jobs(JobStore::with_ttl(config.server.job_ttl()));

    match CommentaryService::from_env(&config.commentary) {
        Ok(service) => {
            info!(
                generator = service.generator_name(),
                model = %config.commentary.model,
                "Commentary service enabled"
            );
            state = state.with_commentary(service);
        }
        Err(e) => warn!(error = %e, "Commentary service disabled"),
    }

    let app = create_router(Arc::new(state));

    info!(%addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Ctrl+C 또는 SIGTERM 대기.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
