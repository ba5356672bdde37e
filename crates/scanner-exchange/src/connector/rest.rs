//! 공개 REST 엔드포인트 호출 공통 로직.

use crate::traits::ExchangeResult;
use crate::ExchangeError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// 거래소 에러 응답 본문. OKX는 문자열 코드, 바이낸스는 정수 코드를 사용한다.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    code: serde_json::Value,
    msg: String,
}

/// 기본 URL 하나에 묶인 HTTP 클라이언트.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// 타임아웃이 적용된 클라이언트를 생성합니다.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ExchangeError::NetworkError`를 반환합니다.
    pub(crate) fn new(base_url: impl Into<String>, timeout: Duration) -> ExchangeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExchangeError::NetworkError(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 파라미터에서 쿼리 문자열 생성.
    fn build_query(params: &[(&str, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// 공개 API GET 요청.
    pub(crate) async fn public_get<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> ExchangeResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let query = Self::build_query(params);

        let full_url = if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        };

        debug!("GET {}", full_url);

        let response = self.client.get(&full_url).send().await?;

        Self::handle_response(response).await
    }

    /// API 응답 처리.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> ExchangeResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| {
                warn!(error = %e, "Failed to parse exchange response");
                ExchangeError::ParseError(e.to_string())
            })
        } else if let Ok(error) = serde_json::from_str::<ErrorPayload>(&body) {
            Err(ExchangeError::ApiError {
                code: code_to_string(&error.code),
                message: error.msg,
            })
        } else {
            Err(ExchangeError::HttpStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// JSON 코드 값을 문자열로 변환 (`"51001"` 또는 `-1121`).
pub(crate) fn code_to_string(code: &serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 문자열 필드를 Decimal로 엄격하게 파싱합니다.
pub(crate) fn parse_decimal(field: &str, value: &str) -> ExchangeResult<Decimal> {
    value
        .trim()
        .parse()
        .map_err(|_| ExchangeError::ParseError(format!("invalid {} value: {:?}", field, value)))
}

/// 밀리초 타임스탬프를 UTC 시간으로 변환합니다.
pub(crate) fn parse_timestamp_ms(ms: i64) -> ExchangeResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| ExchangeError::ParseError(format!("timestamp out of range: {}", ms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_query() {
        let query = RestClient::build_query(&[
            ("instId", "BTC-USDT".to_string()),
            ("limit", "60".to_string()),
        ]);
        assert_eq!(query, "instId=BTC-USDT&limit=60");
        assert_eq!(RestClient::build_query(&[]), "");
    }

    #[test]
    fn test_parse_decimal_is_strict() {
        assert_eq!(parse_decimal("close", "42000.5").unwrap(), dec!(42000.5));
        assert!(matches!(
            parse_decimal("close", "abc"),
            Err(ExchangeError::ParseError(_))
        ));
        assert!(parse_decimal("close", "").is_err());
    }

    #[test]
    fn test_code_to_string() {
        assert_eq!(code_to_string(&serde_json::json!("51001")), "51001");
        assert_eq!(code_to_string(&serde_json::json!(-1121)), "-1121");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RestClient::new("http://localhost:1234/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}
