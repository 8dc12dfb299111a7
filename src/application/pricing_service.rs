//! Prediction service: the single entry point from the form to the model.

use crate::application::ml::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;
use crate::domain::pricing::PriceQuote;
use crate::domain::vehicle::CarAttributes;
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether `estimate` checks attribute ranges before calling the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    #[default]
    Validate,
    Trust,
}

impl InputPolicy {
    pub fn from_flag(validate: bool) -> Self {
        if validate {
            InputPolicy::Validate
        } else {
            InputPolicy::Trust
        }
    }
}

/// Stateless wrapper around the process-wide predictor.
///
/// Cloning is cheap; every clone shares the same loaded model.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn PricePredictor>,
    policy: InputPolicy,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            predictor,
            policy: InputPolicy::default(),
        }
    }

    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    /// Run the model on one row. Ranges are not checked here.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let price = self.predictor.predict(features)?;
        if !price.is_finite() {
            return Err(PredictionError::inference(format!(
                "{} returned a non-finite price ({}) for {}",
                self.predictor.name(),
                price,
                features
            )));
        }
        debug!(features = %features, price, "Price predicted");
        Ok(price)
    }

    /// Raw-row entry point; rejects anything but a 6-element row
    pub fn predict_slice(&self, values: &[f64]) -> Result<f64, PredictionError> {
        let features = FeatureVector::from_slice(values)?;
        self.predict(&features)
    }

    /// Validate (per policy), encode and price one car
    pub fn estimate(&self, car: &CarAttributes) -> Result<PriceQuote, PredictionError> {
        if self.policy == InputPolicy::Validate {
            if let Err(e) = car.validate() {
                warn!(error = %e, "Rejected car attributes");
                return Err(e.into());
            }
        }

        let features = car.to_feature_vector();
        let price = self.predict(&features)?;

        Ok(PriceQuote {
            price,
            features,
            model: self.predictor.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{Fuel, Owner, SellerType, Transmission};

    /// f(v) = v[0]
    struct FirstFeature;

    impl PricePredictor for FirstFeature {
        fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
            Ok(features.values()[0])
        }

        fn name(&self) -> &str {
            "first-feature"
        }
    }

    struct Broken;

    impl PricePredictor for Broken {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictionError> {
            Ok(f64::NAN)
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(FirstFeature))
    }

    #[test]
    fn test_predict_passes_row_through() {
        let price = service()
            .predict(&FeatureVector::new([2020.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(price, 2020.0);
    }

    #[test]
    fn test_predict_slice_checks_shape() {
        let svc = service();
        assert_eq!(
            svc.predict_slice(&[1999.0, 50_000.0, 1.0, 2.0, 1.0, 3.0]).unwrap(),
            1999.0
        );

        let err = svc.predict_slice(&[1999.0, 50_000.0]).unwrap_err();
        assert!(matches!(err, PredictionError::Inference { .. }));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_non_finite_output_is_inference_error() {
        let svc = PredictionService::new(Arc::new(Broken));
        let err = svc
            .predict(&FeatureVector::new([2020.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_estimate_validates_by_default() {
        let car = CarAttributes {
            year: 1850,
            ..CarAttributes::default()
        };

        let err = service().estimate(&car).unwrap_err();
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_trust_policy_skips_validation() {
        let car = CarAttributes {
            year: 1850,
            ..CarAttributes::default()
        };

        let svc = service().with_input_policy(InputPolicy::Trust);
        assert_eq!(svc.input_policy(), InputPolicy::Trust);
        let quote = svc.estimate(&car).unwrap();
        assert_eq!(quote.price, 1850.0);
    }

    #[test]
    fn test_estimate_builds_quote() {
        let car = CarAttributes {
            year: 2012,
            km_driven: 70_000,
            fuel: Fuel::Cng,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Manual,
            owner: Owner::Third,
        };

        let quote = service().estimate(&car).unwrap();
        assert_eq!(quote.price, 2012.0);
        assert_eq!(quote.model, "first-feature");
        assert_eq!(quote.features.values(), &[2012.0, 70_000.0, 2.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(InputPolicy::from_flag(true), InputPolicy::Validate);
        assert_eq!(InputPolicy::from_flag(false), InputPolicy::Trust);
    }
}
