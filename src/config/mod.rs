//! Configuration module for the car price app.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Model and UI.

mod model_config;
mod ui_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use ui_config::UiEnvConfig;

use crate::application::pricing_service::InputPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Model (from ModelEnvConfig)
    pub model_path: PathBuf,
    pub validate_input: bool,

    // UI (from UiEnvConfig)
    pub currency_symbol: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::compose(ModelEnvConfig::default(), UiEnvConfig::default())
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let model = ModelEnvConfig::from_env().context("Failed to load model config")?;
        let ui = UiEnvConfig::from_env();
        Ok(Self::compose(model, ui))
    }

    fn compose(model: ModelEnvConfig, ui: UiEnvConfig) -> Self {
        Self {
            model_path: model.path,
            validate_input: model.validate_input,

            currency_symbol: ui.currency_symbol,
            window_width: ui.window_width,
            window_height: ui.window_height,
        }
    }

    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy::from_flag(self.validate_input)
    }

    /// Replace the artifact path (command-line override)
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.input_policy(), InputPolicy::Validate);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_model_path_override() {
        let config = Config::default().with_model_path("models/forest.json");
        assert_eq!(config.model_path, PathBuf::from("models/forest.json"));
    }
}
