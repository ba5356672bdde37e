//! 설정 관리.
//!
//! 기본값 → (선택) TOML 파일 → `SCANNER__` 접두사 환경 변수 순으로 병합합니다.
//! 예: `SCANNER__SCAN__REQUEST_DELAY_MS=250`

use crate::error::{CoreError, CoreResult};
use crate::logging::{LogConfig, LogFormat};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/scanner.toml";

/// 환경 변수 접두사.
pub const ENV_PREFIX: &str = "SCANNER";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 스캔 루프 설정
    pub scan: ScanConfig,
    /// 거래소 REST 설정
    pub exchanges: ExchangesConfig,
    /// 시장 코멘터리(LLM) 설정
    pub commentary: CommentaryConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 완료된 작업 보존 기간 (초)
    pub job_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            job_ttl_secs: 24 * 60 * 60,
        }
    }
}

impl ServerConfig {
    pub fn job_ttl(&self) -> Duration {
        Duration::from_secs(self.job_ttl_secs)
    }

    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `CoreError::InvalidInput`을 반환합니다.
    pub fn socket_addr(&self) -> CoreResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CoreError::InvalidInput(format!("{}:{} ({})", self.host, self.port, e)))
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 로깅 초기화용 `LogConfig`로 변환합니다. 알 수 없는 형식은 pretty로 처리합니다.
    pub fn to_log_config(&self) -> LogConfig {
        let format = self.format.parse().unwrap_or(LogFormat::Pretty);
        LogConfig::new(self.level.clone()).with_format(format)
    }
}

/// 스캔 루프 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 상품 사이 고정 대기 시간 (밀리초)
    pub request_delay_ms: u64,
    /// 상품당 요청할 캔들 수
    pub window_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 100,
            window_size: 60,
        }
    }
}

impl ScanConfig {
    /// 요청 간 대기 시간.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// 거래소 REST 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExchangesConfig {
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// OKX REST 기본 URL
    pub okx_base_url: String,
    /// 바이낸스 현물 REST 기본 URL
    pub binance_spot_base_url: String,
    /// 바이낸스 USDⓈ-M 선물 REST 기본 URL
    pub binance_futures_base_url: String,
}

impl Default for ExchangesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            okx_base_url: "https://www.okx.com".to_string(),
            binance_spot_base_url: "https://api.binance.com".to_string(),
            binance_futures_base_url: "https://fapi.binance.com".to_string(),
        }
    }
}

/// 시장 코멘터리(LLM) 설정.
///
/// API 키는 설정 파일에 두지 않고 `GEMINI_API_KEY` 환경 변수에서만 읽습니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommentaryConfig {
    /// Generative Language API 기본 URL
    pub base_url: String,
    /// 모델 이름
    pub model: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// 구글 검색 도구 사용 여부
    pub google_search: bool,
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash-preview-05-20".to_string(),
            timeout_secs: 30,
            google_search: true,
        }
    }
}

impl AppConfig {
    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일 경로가 주어지면 반드시 존재해야 합니다.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_PATH).required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 기본 경로(`config/scanner.toml`, 없으면 무시)에서 설정을 로드합니다.
    pub fn load_default() -> CoreResult<Self> {
        Self::load(None)
    }
}
