use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Unknown noise category: {0}")]
    UnknownCategory(String),

    #[error("Unknown denoising method: {0}")]
    UnknownMethod(String),

    #[error("Missing {0} parameter")]
    MissingParam(&'static str),

    #[error("Invalid view config JSON: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;
