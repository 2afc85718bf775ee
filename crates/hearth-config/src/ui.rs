//! Terminal presentation configuration.

use serde::{Deserialize, Serialize};

fn default_date_format() -> String {
    // chrono strftime, e.g. "Oct 1, 2025".
    "%b %-d, %Y".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// chrono format string used for every rendered date.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Symbol prefixed to budget amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
