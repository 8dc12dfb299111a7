pub mod model_loader;
#[cfg(feature = "onnx")]
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_loader::{ArtifactFormat, load};
pub use predictor::PricePredictor;
pub use smartcore_predictor::{LinearModel, ModelArtifact, RegressionModel, SmartCorePredictor};
