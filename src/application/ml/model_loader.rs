//! Startup-time model loading.

use super::predictor::PricePredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::ModelError;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Serialization format of a model artifact, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// serde_json artifact (smartcore forest or linear coefficients)
    Json,
    /// ONNX graph executed by ONNX Runtime
    Onnx,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("onnx") => ArtifactFormat::Onnx,
            _ => ArtifactFormat::Json,
        }
    }
}

/// Load the predictor once for the lifetime of the process.
///
/// Every error is fatal for the caller: there is no fallback model.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn PricePredictor>, ModelError> {
    let path = path.as_ref();
    let started = Instant::now();
    let format = ArtifactFormat::from_path(path);

    info!(path = %path.display(), format = ?format, "Loading price model");

    let result: Result<Arc<dyn PricePredictor>, ModelError> = match format {
        ArtifactFormat::Json => read_artifact(path)
            .and_then(|bytes| SmartCorePredictor::from_json(&bytes, path))
            .map(|p| Arc::new(p) as Arc<dyn PricePredictor>),
        ArtifactFormat::Onnx => load_onnx(path),
    };

    match &result {
        Ok(predictor) => info!(
            path = %path.display(),
            model = predictor.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Price model loaded"
        ),
        Err(e) => error!(path = %path.display(), error = %e, "Failed to load price model"),
    }

    result
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, ModelError> {
    std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ModelError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ModelError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(feature = "onnx")]
fn load_onnx(path: &Path) -> Result<Arc<dyn PricePredictor>, ModelError> {
    let predictor = super::onnx_predictor::OnnxPredictor::load(path)?;
    Ok(Arc::new(predictor))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(path: &Path) -> Result<Arc<dyn PricePredictor>, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Err(ModelError::corrupt(
        path,
        "ONNX artifacts require building with the `onnx` feature",
    ))
}
