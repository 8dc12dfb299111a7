//! Form presentation configuration parsing from environment variables.

use std::env;

/// UI environment configuration
#[derive(Debug, Clone)]
pub struct UiEnvConfig {
    pub currency_symbol: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            window_width: 760.0,
            window_height: 900.0,
        }
    }
}

impl UiEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            window_width: env::var("UI_WINDOW_WIDTH")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|w| *w > 0.0)
                .unwrap_or(defaults.window_width),
            window_height: env::var("UI_WINDOW_HEIGHT")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|h| *h > 0.0)
                .unwrap_or(defaults.window_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_defaults() {
        let config = UiEnvConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.window_width, 760.0);
        assert_eq!(config.window_height, 900.0);
    }
}
