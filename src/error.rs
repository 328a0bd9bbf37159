use thiserror::Error;

/// Command-line argument errors that end the run before any file is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("invalid arg: {0}")]
    InvalidDegree(String),

    #[error("degree must be 90 unit. invalid: {0}")]
    NotRightAngle(String),
}
