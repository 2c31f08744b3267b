//! Pressure input parsing and validation.
//!
//! This is the parsing boundary between raw transport text (a query parameter,
//! a CLI argument) and the numeric model. Everything downstream works on a
//! validated, finite, non-negative [`Real`].

use crate::error::{InvalidPressure, PhaseError, PhaseResult};
use pcd_core::{Real, ensure_finite};

/// Parse a raw pressure value.
///
/// `None` and blank text both count as a missing parameter. Surrounding
/// whitespace is ignored.
pub fn parse_pressure(raw: Option<&str>) -> PhaseResult<Real> {
    let trimmed = match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(PhaseError::MissingParameter),
    };

    let value: Real = trimmed
        .parse()
        .map_err(|_| InvalidPressure::Unparseable)?;

    validate_pressure(value)
}

/// Check that a numeric pressure lies in the model's domain `[0, ∞)`.
pub fn validate_pressure(value: Real) -> PhaseResult<Real> {
    let value = ensure_finite(value, "pressure").map_err(|_| InvalidPressure::NonFinite)?;
    if value < 0.0 {
        return Err(InvalidPressure::Negative.into());
    }
    // -0.0 passes the sign check; hand back +0.0
    Ok(if value == 0.0 { 0.0 } else { value })
}
