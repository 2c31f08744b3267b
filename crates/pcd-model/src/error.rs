//! Phase-volume calculation errors.

use thiserror::Error;

/// Result type for phase-volume operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Why a supplied pressure was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPressure {
    /// Text did not parse as a real number.
    #[error("Invalid pressure value")]
    Unparseable,

    /// NaN or infinite.
    #[error("Invalid pressure value")]
    NonFinite,

    #[error("Pressure cannot be negative")]
    Negative,
}

/// Errors that can occur while computing phase volumes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseError {
    /// No pressure was supplied.
    #[error("Missing pressure parameter")]
    MissingParameter,

    /// Pressure was supplied but is not usable.
    #[error("{0}")]
    InvalidValue(#[from] InvalidPressure),

    /// Pressure is not one of the tabulated points.
    #[error("Pressure value not found")]
    NotFound { pressure: String },

    /// Model constants violate the interpolation contract.
    #[error("Invalid model constants: {what}")]
    Constants { what: String },

    /// Constants file could not be read or decoded.
    #[error("Constants file error: {message}")]
    ConstantsFile { message: String },
}

impl PhaseError {
    /// True for errors caused by the caller's input rather than configuration.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter | Self::InvalidValue(_) | Self::NotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_matches_response_messages() {
        assert_eq!(
            PhaseError::MissingParameter.to_string(),
            "Missing pressure parameter"
        );
        assert_eq!(
            PhaseError::from(InvalidPressure::Unparseable).to_string(),
            "Invalid pressure value"
        );
        assert_eq!(
            PhaseError::from(InvalidPressure::NonFinite).to_string(),
            "Invalid pressure value"
        );
        assert_eq!(
            PhaseError::from(InvalidPressure::Negative).to_string(),
            "Pressure cannot be negative"
        );
        let err = PhaseError::NotFound {
            pressure: "4".into(),
        };
        assert_eq!(err.to_string(), "Pressure value not found");
    }

    #[test]
    fn client_errors_are_flagged() {
        assert!(PhaseError::MissingParameter.is_client_error());
        assert!(PhaseError::from(InvalidPressure::Negative).is_client_error());
        assert!(
            !PhaseError::ConstantsFile {
                message: "missing".into()
            }
            .is_client_error()
        );
    }
}
