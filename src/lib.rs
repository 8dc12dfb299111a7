//! Used-car price estimation: model loading, feature encoding and the
//! prediction service behind the price form.

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;

pub use application::ml::{PricePredictor, load};
pub use application::pricing_service::{InputPolicy, PredictionService};
pub use domain::ml::FeatureVector;
pub use domain::vehicle::CarAttributes;

#[cfg(test)]
mod config_tests;
