//! 이름 기반 거래소 어댑터 레지스트리.
//!
//! 초기화 시 한 번 구성되며 이후에는 읽기 전용입니다. 스캔마다
//! 팩토리로 새 어댑터 인스턴스를 만들어 스캔 간 상태를 공유하지 않습니다.

use crate::connector::{BinanceAdapter, BinanceConfig, OkxAdapter, OkxConfig};
use crate::traits::{ExchangeAdapter, ExchangeResult};
use crate::ExchangeError;
use scanner_core::ExchangesConfig;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// 어댑터 인스턴스를 생성하는 팩토리.
pub type AdapterFactory =
    Arc<dyn Fn() -> ExchangeResult<Box<dyn ExchangeAdapter>> + Send + Sync>;

/// 거래소 이름(소문자) → 어댑터 팩토리.
#[derive(Clone, Default)]
pub struct ExchangeRegistry {
    factories: BTreeMap<String, AdapterFactory>,
}

impl ExchangeRegistry {
    /// 빈 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// `okx`, `binance`가 등록된 레지스트리를 생성합니다.
    pub fn with_defaults(settings: &ExchangesConfig) -> Self {
        let okx = OkxConfig::from_settings(settings);
        let binance = BinanceConfig::from_settings(settings);

        Self::new()
            .register("okx", move || {
                Ok(Box::new(OkxAdapter::new(okx.clone())?) as Box<dyn ExchangeAdapter>)
            })
            .register("binance", move || {
                Ok(Box::new(BinanceAdapter::new(binance.clone())?) as Box<dyn ExchangeAdapter>)
            })
    }

    /// 팩토리를 등록합니다. 같은 이름이 있으면 대체합니다.
    pub fn register<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn() -> ExchangeResult<Box<dyn ExchangeAdapter>> + Send + Sync + 'static,
    {
        self.factories
            .insert(name.to_lowercase(), Arc::new(factory));
        self
    }

    /// 등록 여부를 확인합니다 (대소문자 무시).
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// 등록된 거래소 이름 목록 (정렬됨).
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// 새 어댑터 인스턴스를 생성합니다.
    ///
    /// # Errors
    /// 등록되지 않은 이름이면 `ExchangeError::UnknownExchange`.
    pub fn create(&self, name: &str) -> ExchangeResult<Box<dyn ExchangeAdapter>> {
        let factory = self
            .factories
            .get(&name.to_lowercase())
            .ok_or_else(|| ExchangeError::UnknownExchange(name.to_string()))?;
        factory()
    }
}

impl fmt::Debug for ExchangeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeRegistry")
            .field("exchanges", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = ExchangeRegistry::with_defaults(&ExchangesConfig::default());

        assert_eq!(registry.names(), vec!["binance", "okx"]);
        assert!(registry.contains("OKX"));

        let okx = registry.create("Okx").unwrap();
        assert_eq!(okx.name(), "OKX");
        let binance = registry.create("binance").unwrap();
        assert_eq!(binance.name(), "Binance");
    }

    #[test]
    fn test_unknown_exchange() {
        let registry = ExchangeRegistry::with_defaults(&ExchangesConfig::default());
        assert!(matches!(
            registry.create("kraken"),
            Err(ExchangeError::UnknownExchange(name)) if name == "kraken"
        ));
    }
}
