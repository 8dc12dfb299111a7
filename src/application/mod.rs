// Free-text feedback acknowledgement
pub mod feedback;

// Model loading and inference backends
pub mod ml;

// Form-to-model prediction service
pub mod pricing_service;
