// Файл: client/config.rs
// Настройки HTTP-клиента: константы по умолчанию и переопределение из окружения.

use super::error::CoreError;
use log::warn;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";
pub const APP_USER_AGENT: &str = "DefectScan-Core/0.1";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

pub const ORIGIN_ENV: &str = "DEFECTSCAN_ORIGIN";
pub const TIMEOUT_ENV: &str = "DEFECTSCAN_TIMEOUT_SEC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin бэкенда; пути запросов дописываются к нему как есть.
    pub origin: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Собирает конфиг из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origin) = lookup(ORIGIN_ENV).filter(|o| !o.trim().is_empty()) {
            config.origin = origin.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    TIMEOUT_ENV, raw, DEFAULT_TIMEOUT_SEC
                ),
            }
        }

        config
    }

    /// Origin как URL без пути (`scheme://host[:port]`).
    pub fn origin_url(&self) -> Result<Url, CoreError> {
        let parsed = Url::parse(&self.origin)?;
        let origin = parsed.origin();
        if !origin.is_tuple() {
            return Err(CoreError::InvalidOrigin(self.origin.clone()));
        }
        Ok(Url::parse(&origin.ascii_serialization())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SEC));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ORIGIN_ENV, " https://defects.example.com "),
            (TIMEOUT_ENV, "5"),
        ]));
        assert_eq!(config.origin, "https://defects.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SEC));

        let config = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SEC));
    }

    #[test]
    fn test_origin_url_drops_path() {
        let config = ClientConfig::with_origin("https://defects.example.com:8443/app/index.html");
        let url = config.origin_url().unwrap();
        assert_eq!(url.as_str(), "https://defects.example.com:8443/");
    }

    #[test]
    fn test_opaque_origin_is_rejected() {
        let config = ClientConfig::with_origin("file:///tmp/index.html");
        assert!(matches!(config.origin_url(), Err(CoreError::InvalidOrigin(_))));
    }

    #[test]
    fn test_unparsable_origin() {
        let config = ClientConfig::with_origin("not a url");
        assert!(matches!(config.origin_url(), Err(CoreError::UrlParse(_))));
    }
}
