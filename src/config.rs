//! Runtime configuration
//!
//! Everything comes from environment variables (optionally via `.env`).
//! Pricing constants can be overridden with a JSON file named by
//! `PRICING_CONFIG_PATH`; fields missing from the file keep their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::pricing::{validate_config, PricingConfig, PricingConfigError};

/// Business contact channels shown on the quote page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    /// E.164 number used for `tel:` links
    pub phone: String,
    /// Number used for `sms:` links
    pub sms: String,
    pub email: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "+15038934795".to_string(),
            sms: "+15038934795".to_string(),
            email: "golden.hour.cleaning.company@gmail.com".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub quote_cache_ttl: Duration,
    pub contact: ContactInfo,
    pub pricing: PricingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("static"),
            quote_cache_ttl: Duration::from_secs(10 * 60),
            contact: ContactInfo::default(),
            pricing: PricingConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse pricing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] PricingConfigError),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let quote_cache_ttl = match var("QUOTE_CACHE_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    key: "QUOTE_CACHE_TTL_SECS",
                    value: raw,
                })?,
            None => defaults.quote_cache_ttl,
        };

        let pricing = match var("PRICING_CONFIG_PATH") {
            Some(path) => load_pricing_config(Path::new(&path))?,
            None => defaults.pricing,
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            quote_cache_ttl,
            contact: ContactInfo {
                phone: var("CONTACT_PHONE").unwrap_or(defaults.contact.phone),
                sms: var("CONTACT_SMS").unwrap_or(defaults.contact.sms),
                email: var("CONTACT_EMAIL").unwrap_or(defaults.contact.email),
            },
            pricing,
        })
    }
}

/// Load and validate a pricing override file
pub fn load_pricing_config(path: &Path) -> Result<PricingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pricing_config(&content)
}

pub fn parse_pricing_config(content: &str) -> Result<PricingConfig, ConfigError> {
    let config: PricingConfig = serde_json::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}
