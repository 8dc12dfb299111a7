// Domain-specific error types
pub mod errors;

// Feature layout shared with the trained model
pub mod ml;

// Estimates and their presentation
pub mod pricing;

// Car attributes and category codes
pub mod vehicle;
