use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;

/// Interface for loaded regression models.
///
/// Implementations are immutable after load and shared across callers
/// behind an `Arc`.
pub trait PricePredictor: Send + Sync {
    /// Predict the sale price for a single row
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
