use super::predictor::PricePredictor;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::feature_registry::{FEATURE_COUNT, FeatureVector};
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Regressor exported to ONNX (e.g. via skl2onnx), taking `float32[1, 6]`.
///
/// `Session::run` needs exclusive access, so the session sits behind a mutex.
pub struct OnnxPredictor {
    session: Mutex<Session>,
}

impl OnnxPredictor {
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        if !model_path.exists() {
            return Err(ModelError::NotFound {
                path: model_path.to_path_buf(),
            });
        }

        let session = Session::builder()
            .and_then(|builder| builder.commit_from_file(model_path))
            .map_err(|e| ModelError::corrupt(model_path, format!("ONNX load failed: {}", e)))?;

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl PricePredictor for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::inference(format!("Mutex lock failed: {}", e)))?;

        let shape = vec![1, FEATURE_COUNT];
        let input_value = ort::value::Value::from_array((shape.as_slice(), features.to_f32()))
            .map_err(|e| PredictionError::inference(format!("Input value creation failed: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| PredictionError::inference(e.to_string()))?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or_else(|| PredictionError::inference("No output found"))?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::inference(e.to_string()))?;

        data.1
            .iter()
            .next()
            .map(|&price| f64::from(price))
            .ok_or_else(|| PredictionError::inference("Empty output"))
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_onnx_model_is_not_found() {
        let result = OnnxPredictor::load(Path::new("non_existent.onnx"));
        assert!(matches!(result, Err(ModelError::NotFound { .. })));
    }
}
