use pcd_model::PhaseError;
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

/// Startup failures. Request-level failures never reach this type.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid PCD_MODEL: {0}")]
    InvalidModel(String),

    #[error("Model constants: {0}")]
    Constants(#[from] PhaseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
