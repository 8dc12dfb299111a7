use super::categories::{Categorical, Fuel, Owner, SellerType, Transmission};
use crate::domain::errors::InputError;
use crate::domain::ml::feature_registry::FeatureVector;
use serde::{Deserialize, Serialize};

/// Oldest model year the form accepts
pub const YEAR_MIN: u16 = 1900;
/// Newest model year the form accepts
pub const YEAR_MAX: u16 = 2024;

/// One used car as described by the price form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarAttributes {
    pub year: u16,
    pub km_driven: u64,
    pub fuel: Fuel,
    pub seller_type: SellerType,
    pub transmission: Transmission,
    pub owner: Owner,
}

impl Default for CarAttributes {
    fn default() -> Self {
        Self {
            year: YEAR_MIN,
            km_driven: 0,
            fuel: Fuel::default(),
            seller_type: SellerType::default(),
            transmission: Transmission::default(),
            owner: Owner::default(),
        }
    }
}

impl CarAttributes {
    /// Check the numeric fields against the ranges the model was trained on.
    /// Categorical fields are valid by construction.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(InputError::OutOfRange {
                field: "year",
                value: i64::from(self.year),
                min: i64::from(YEAR_MIN),
                max: i64::from(YEAR_MAX),
            });
        }
        Ok(())
    }

    /// Encode in registry order: year, km_driven, fuel, seller_type,
    /// transmission, owner.
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector::new([
            f64::from(self.year),
            self.km_driven as f64,
            f64::from(self.fuel.code()),
            f64::from(self.seller_type.code()),
            f64::from(self.transmission.code()),
            f64::from(self.owner.code()),
        ])
    }

    /// Build from form labels, as submitted by a UI or the command line
    pub fn from_labels(
        year: u16,
        km_driven: u64,
        fuel: &str,
        seller_type: &str,
        transmission: &str,
        owner: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            year,
            km_driven,
            fuel: Fuel::from_label(fuel)?,
            seller_type: SellerType::from_label(seller_type)?,
            transmission: Transmission::from_label(transmission)?,
            owner: Owner::from_label(owner)?,
        })
    }
}
