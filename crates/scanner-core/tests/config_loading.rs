//! 설정 파일 로드 통합 테스트

use scanner_core::{AppConfig, MarketType, ScanRequest, Timeframe};
use std::path::PathBuf;
use std::time::Duration;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_overrides_from_file() {
    let path = write_temp_config(
        "scanner-config-overrides",
        r#"
[scan]
request_delay_ms = 250

[exchanges]
okx_base_url = "http://localhost:9000"

[logging]
format = "compact"
"#,
    );

    let config = AppConfig::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.scan.request_delay(), Duration::from_millis(250));
    // 파일에 없는 값은 기본값 유지
    assert_eq!(config.scan.window_size, 60);
    assert_eq!(config.exchanges.okx_base_url, "http://localhost:9000");
    assert_eq!(
        config.exchanges.binance_spot_base_url,
        "https://api.binance.com"
    );
    assert_eq!(config.logging.format, "compact");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let path = std::env::temp_dir().join("scanner-config-does-not-exist.toml");
    assert!(AppConfig::load(Some(&path)).is_err());
}

#[test]
fn test_scan_request_from_json_payload() {
    let request: ScanRequest = serde_json::from_str(
        r#"{"exchange":"binance","market":"swap","quote":"usdt","timeframe":"1d","pattern":"double_bottom","limit":20}"#,
    )
    .unwrap();

    assert_eq!(request.market, MarketType::PerpetualSwap);
    assert_eq!(request.timeframe, Timeframe::D1);
    assert_eq!(request.limit, Some(20));
}
