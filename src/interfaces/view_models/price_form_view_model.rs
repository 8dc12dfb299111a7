use crate::application::feedback::{FeedbackDesk, FeedbackReceipt};
use crate::application::pricing_service::PredictionService;
use crate::domain::pricing::PriceQuote;
use crate::domain::vehicle::{CarAttributes, Fuel, Owner, SellerType, Transmission, YEAR_MIN};
use tracing::error;

/// State behind the price form, independent of the widget toolkit
pub struct PriceFormViewModel {
    pub year: u16,
    pub km_driven: u64,
    pub fuel: Fuel,
    pub seller_type: SellerType,
    pub transmission: Transmission,
    pub owner: Owner,
    pub feedback_text: String,

    currency_symbol: String,
    last_quote: Option<PriceQuote>,
    last_error: Option<String>,
    last_receipt: Option<FeedbackReceipt>,
}

impl PriceFormViewModel {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        let defaults = CarAttributes::default();
        Self {
            year: YEAR_MIN,
            km_driven: defaults.km_driven,
            fuel: defaults.fuel,
            seller_type: defaults.seller_type,
            transmission: defaults.transmission,
            owner: defaults.owner,
            feedback_text: String::new(),
            currency_symbol: currency_symbol.into(),
            last_quote: None,
            last_error: None,
            last_receipt: None,
        }
    }

    pub fn attributes(&self) -> CarAttributes {
        CarAttributes {
            year: self.year,
            km_driven: self.km_driven,
            fuel: self.fuel,
            seller_type: self.seller_type,
            transmission: self.transmission,
            owner: self.owner,
        }
    }

    /// Price the current inputs. A failure replaces the previous quote so a
    /// stale price is never shown next to new inputs.
    pub fn request_prediction(&mut self, service: &PredictionService) {
        match service.estimate(&self.attributes()) {
            Ok(quote) => {
                self.last_quote = Some(quote);
                self.last_error = None;
            }
            Err(e) => {
                if !e.is_user_facing() {
                    error!(error = %e, "Prediction failed");
                }
                self.last_quote = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// "The Predicted Price: ..." line; the price part stays empty until the
    /// first successful prediction.
    pub fn price_banner(&self) -> String {
        let price = self
            .last_quote
            .as_ref()
            .map(|quote| quote.display(&self.currency_symbol))
            .unwrap_or_default();
        format!("The Predicted Price: {}", price)
    }

    pub fn last_quote(&self) -> Option<&PriceQuote> {
        self.last_quote.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn submit_feedback(&mut self, desk: &FeedbackDesk) {
        let receipt = desk.submit(&self.feedback_text);
        self.feedback_text.clear();
        self.last_receipt = Some(receipt);
    }

    pub fn feedback_notice(&self) -> Option<&'static str> {
        self.last_receipt.as_ref().map(|receipt| receipt.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::predictor::PricePredictor;
    use crate::domain::errors::PredictionError;
    use crate::domain::ml::feature_registry::FeatureVector;
    use std::sync::Arc;

    struct YearTimesHundred;

    impl PricePredictor for YearTimesHundred {
        fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
            Ok(features.values()[0] * 100.0)
        }

        fn name(&self) -> &str {
            "year-x100"
        }
    }

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(YearTimesHundred))
    }

    #[test]
    fn test_defaults_match_first_options() {
        let form = PriceFormViewModel::new("$");
        let car = form.attributes();
        assert_eq!(car.year, 1900);
        assert_eq!(car.km_driven, 0);
        assert_eq!(car.fuel, Fuel::Diesel);
        assert_eq!(car.owner, Owner::First);
    }

    #[test]
    fn test_banner_is_empty_before_prediction() {
        let form = PriceFormViewModel::new("$");
        assert_eq!(form.price_banner(), "The Predicted Price: ");
        assert!(form.last_quote().is_none());
    }

    #[test]
    fn test_prediction_fills_banner() {
        let mut form = PriceFormViewModel::new("$");
        form.year = 2015;
        form.request_prediction(&service());

        assert_eq!(form.price_banner(), "The Predicted Price: 201500.00$");
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_rejected_input_clears_previous_quote() {
        let mut form = PriceFormViewModel::new("$");
        form.year = 2015;
        form.request_prediction(&service());
        assert!(form.last_quote().is_some());

        form.year = 1800;
        form.request_prediction(&service());
        assert!(form.last_quote().is_none());
        assert!(form.last_error().unwrap().contains("year"));
        assert_eq!(form.price_banner(), "The Predicted Price: ");
    }

    #[test]
    fn test_feedback_acknowledged_and_cleared() {
        let desk = FeedbackDesk::new();
        let mut form = PriceFormViewModel::new("$");
        form.feedback_text = "Nice".to_string();

        form.submit_feedback(&desk);

        assert_eq!(form.feedback_notice(), Some("Thank you for your feedback!"));
        assert!(form.feedback_text.is_empty());
        assert_eq!(desk.acknowledged(), 1);
    }
}
