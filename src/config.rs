//! Service configuration from environment variables.
//!
//! `.env` is loaded by `main` before this runs.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::pricing::calculators::DEFAULT_PRICE_INCREMENT;
use crate::pricing::{PricingError, PricingPolicy};

pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid pricing policy: {0}")]
    Pricing(#[from] PricingError),
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub policy: PricingPolicy,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = match var("HOST") {
            Some(value) => parse(&value, "HOST", "IP address")?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match var("PORT") {
            Some(value) => parse(&value, "PORT", "port number")?,
            None => DEFAULT_PORT,
        };

        let policy = match var("JUDO_PROFIT_MARGIN") {
            Some(value) => {
                let margin: Decimal = parse(&value, "JUDO_PROFIT_MARGIN", "decimal")?;
                PricingPolicy::new(margin, DEFAULT_PRICE_INCREMENT)?
            }
            None => PricingPolicy::default(),
        };

        Ok(Self { host, port, policy })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(
    value: &str,
    name: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.policy, PricingPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("JUDO_PROFIT_MARGIN", "0.25"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.policy.profit_margin(), dec!(0.25));
        assert_eq!(config.policy.price_increment(), 10);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("PORT", " "), ("JUDO_PROFIT_MARGIN", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.policy, PricingPolicy::default());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_margin() {
        let err = config_from(&[("JUDO_PROFIT_MARGIN", "abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "JUDO_PROFIT_MARGIN", .. }));

        let err = config_from(&[("JUDO_PROFIT_MARGIN", "1.2")]).unwrap_err();
        assert!(matches!(err, ConfigError::Pricing(PricingError::InvalidProfitMargin { .. })));
    }
}
