use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a model artifact into a predictor.
///
/// All of them are fatal at startup: the application never runs without a
/// loaded model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Model artifact at {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Model artifact at {} could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ModelError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Path of the artifact the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ModelError::NotFound { path }
            | ModelError::Corrupt { path, .. }
            | ModelError::Unreadable { path, .. } => path,
        }
    }
}

/// Out-of-domain or unrecognised form values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown {field} label: '{label}'")]
    UnknownLabel { field: &'static str, label: String },

    #[error("Unknown {field} code: {code}")]
    UnknownCode { field: &'static str, code: i64 },

    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Errors raised per prediction request.
///
/// These never invalidate the predictor; the caller reports them and keeps
/// serving.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    pub fn inference(reason: impl Into<String>) -> Self {
        PredictionError::Inference {
            reason: reason.into(),
        }
    }

    /// True for errors the user can fix by changing the form
    pub fn is_user_facing(&self) -> bool {
        matches!(self, PredictionError::InvalidInput(_))
    }
}
