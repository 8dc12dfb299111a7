//! Model artifact configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "car_price_prediction_model.json";

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub path: PathBuf,
    pub validate_input: bool,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            validate_input: true,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let validate_input = env::var("VALIDATE_INPUT")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("Failed to parse VALIDATE_INPUT (expected true or false)")?;

        Ok(Self {
            path,
            validate_input,
        })
    }
}
