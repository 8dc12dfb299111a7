use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};

/// Number of model inputs
pub const FEATURE_COUNT: usize = 6;

/// Ordered list of feature names.
/// This order MUST match the order the regression model was trained with.
/// The model has no schema of its own, so any change here is a breaking
/// change for every existing artifact.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "year",
    "km_driven",
    "fuel",
    "seller_type",
    "transmission",
    "owner",
];

/// Fixed-order numeric encoding of one car, fed to the model as a single row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Accept a raw row from an untyped caller. Any length other than
    /// `FEATURE_COUNT` is a shape error, not a user error.
    pub fn from_slice(values: &[f64]) -> Result<Self, PredictionError> {
        let row: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
            PredictionError::inference(format!(
                "expected {} features, got {}",
                FEATURE_COUNT,
                values.len()
            ))
        })?;
        Ok(Self(row))
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// f32 copy for runtimes that take single-precision tensors
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|&v| v as f32).collect()
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl std::fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.named().map(|(name, v)| format!("{}={}", name, v)).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// True when `names` lists exactly the registry features, in order
pub fn matches_registry<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == FEATURE_COUNT
        && names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(a, b)| a.as_ref() == *b)
}
