use crate::error::{BijouError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_WIDTH: usize = 80;
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_PRICE_PRECISION: usize = 2;
const MAX_PRICE_PRECISION: usize = 10;

/// Keys accepted by `bijou config`, in display order.
pub const CONFIG_KEYS: &[&str] = &["escape-html", "preview-width", "currency", "price-precision"];

/// Configuration for bijou, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BijouConfig {
    /// Escape text, styles and URLs when rendering descriptions to HTML
    #[serde(default)]
    pub escape_html: bool,

    /// Display width used for plain-text previews
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Number of decimals printed for prices
    #[serde(default = "default_price_precision")]
    pub price_precision: usize,
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_price_precision() -> usize {
    DEFAULT_PRICE_PRECISION
}

impl Default for BijouConfig {
    fn default() -> Self {
        Self {
            escape_html: false,
            preview_width: DEFAULT_PREVIEW_WIDTH,
            currency: DEFAULT_CURRENCY.to_string(),
            price_precision: DEFAULT_PRICE_PRECISION,
        }
    }
}

impl BijouConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BijouError::Io)?;
        let mut config: BijouConfig =
            serde_json::from_str(&content).map_err(BijouError::Serialization)?;
        if config.price_precision > MAX_PRICE_PRECISION {
            tracing::warn!(
                price_precision = config.price_precision,
                "price precision out of range, clamping to {}",
                MAX_PRICE_PRECISION
            );
            config.price_precision = MAX_PRICE_PRECISION;
        }
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BijouError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BijouError::Serialization)?;
        fs::write(&config_path, content).map_err(BijouError::Io)?;
        tracing::debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Returns the current value of a key as it is shown on the command line.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "escape-html" => Ok(self.escape_html.to_string()),
            "preview-width" => Ok(self.preview_width.to_string()),
            "currency" => Ok(self.currency.clone()),
            "price-precision" => Ok(self.price_precision.to_string()),
            other => Err(BijouError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Parses `value` for `key` and stores it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || BijouError::Config(format!("Invalid value for {}: {}", key, value));
        match key {
            "escape-html" => self.escape_html = parse_bool(value).ok_or_else(invalid)?,
            "preview-width" => {
                let width: usize = value.trim().parse().map_err(|_| invalid())?;
                if width == 0 {
                    return Err(invalid());
                }
                self.preview_width = width;
            }
            "currency" => self.currency = value.to_string(),
            "price-precision" => {
                let precision: usize = value.trim().parse().map_err(|_| invalid())?;
                if precision > MAX_PRICE_PRECISION {
                    return Err(invalid());
                }
                self.price_precision = precision;
            }
            other => return Err(BijouError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Formats a price with the configured currency symbol and precision.
    pub fn format_price(&self, amount: f64) -> String {
        format!(
            "{}{:.prec$}",
            self.currency,
            amount,
            prec = self.price_precision.min(MAX_PRICE_PRECISION)
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
