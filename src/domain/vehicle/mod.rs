//! Used-car attributes collected by the price form.

pub mod categories;
pub mod car;

pub use car::{CarAttributes, YEAR_MAX, YEAR_MIN};
pub use categories::{Categorical, Fuel, Owner, SellerType, Transmission};
