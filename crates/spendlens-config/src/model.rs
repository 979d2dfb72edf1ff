use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest number of decimals shown for amounts.
pub const MAX_CURRENCY_PRECISION: u8 = 6;

/// Stores user-configurable display preferences and the data location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// `indian` (12,34,567) or `standard` (1,234,567).
    #[serde(default = "Config::default_digit_grouping")]
    pub digit_grouping: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    /// `chrono` pattern used for dates in tables.
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the expense store. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            digit_grouping: Self::default_digit_grouping(),
            currency_precision: Self::default_currency_precision(),
            date_format: Self::default_date_format(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_digit_grouping() -> String {
        "indian".into()
    }

    pub fn default_currency_precision() -> u8 {
        2
    }

    pub fn default_date_format() -> String {
        "%-m/%-d/%Y".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Directory holding the expense and budget entries.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("spendlens")
    }
}
