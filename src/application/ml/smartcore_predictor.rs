use super::predictor::PricePredictor;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::feature_registry::{self, FEATURE_COUNT, FeatureVector};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::path::Path;
use tracing::debug;

pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// On-disk JSON artifact.
///
/// `feature_names` is optional; artifacts exported without it are trusted to
/// follow the registry order.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub model: RegressionModel,
}

impl ModelArtifact {
    pub fn new(model: RegressionModel) -> Self {
        Self {
            feature_names: Some(
                feature_registry::FEATURE_NAMES
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            ),
            model,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum RegressionModel {
    RandomForest(ForestRegressor),
    Linear(LinearModel),
}

/// `intercept + sum(coefficients[i] * x[i])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn check(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "linear model has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("linear model has non-finite parameters".to_string());
        }
        Ok(())
    }

    fn evaluate(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.values().iter())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}

/// Predictor backed by a serde-deserialized model (smartcore forest or
/// exported linear coefficients).
pub struct SmartCorePredictor {
    model: RegressionModel,
}

impl SmartCorePredictor {
    /// Deserialize and validate an artifact. `path` is only used for errors.
    pub fn from_json(bytes: &[u8], path: &Path) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)
            .map_err(|e| ModelError::corrupt(path, format!("not a model artifact: {}", e)))?;
        Self::from_artifact(artifact, path)
    }

    pub fn from_artifact(artifact: ModelArtifact, path: &Path) -> Result<Self, ModelError> {
        if let Some(names) = &artifact.feature_names {
            if !feature_registry::matches_registry(names) {
                return Err(ModelError::corrupt(
                    path,
                    format!(
                        "feature schema {:?} does not match {:?}",
                        names,
                        feature_registry::FEATURE_NAMES
                    ),
                ));
            }
        }

        match &artifact.model {
            RegressionModel::Linear(linear) => linear
                .check()
                .map_err(|reason| ModelError::corrupt(path, reason))?,
            // Trees that split on a column past the registry only fail once evaluated
            RegressionModel::RandomForest(forest) => {
                let zero_row = FeatureVector::new([0.0; FEATURE_COUNT]);
                Self::predict_forest(forest, &zero_row).map_err(|e| {
                    ModelError::corrupt(path, format!("trial prediction failed: {}", e))
                })?;
            }
        }

        Ok(Self {
            model: artifact.model,
        })
    }

    fn predict_forest(
        forest: &ForestRegressor,
        features: &FeatureVector,
    ) -> Result<f64, PredictionError> {
        let row = vec![features.values().to_vec()];
        let input_matrix = DenseMatrix::from_2d_vec(&row)
            .map_err(|e| PredictionError::inference(format!("Matrix creation failed: {}", e)))?;

        let predictions = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            forest.predict(&input_matrix)
        }))
        .map_err(|_| {
            PredictionError::inference("forest panicked; trained on a different feature count?")
        })?
        .map_err(|e| PredictionError::inference(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::inference("No prediction returned"))
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let price = match &self.model {
            RegressionModel::RandomForest(forest) => Self::predict_forest(forest, features)?,
            RegressionModel::Linear(linear) => linear.evaluate(features),
        };
        debug!(model = self.name(), price, "Model evaluated");
        Ok(price)
    }

    fn name(&self) -> &str {
        match self.model {
            RegressionModel::RandomForest(_) => "SmartCore Random Forest",
            RegressionModel::Linear(_) => "Linear Regression",
        }
    }
}
