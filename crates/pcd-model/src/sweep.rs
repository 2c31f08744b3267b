//! Pressure sweeps for tracing the phase-change diagram.
//!
//! A sweep stores the user-specified bounds and generates intermediate
//! pressures; the calculator turns each pressure into a [`DiagramPoint`].

use crate::error::PhaseError;
use crate::pressure::{parse_pressure, validate_pressure};
use crate::volumes::PhaseVolumes;
use pcd_core::Real;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Start value error: {0}")]
    Start(PhaseError),

    #[error("End value error: {0}")]
    End(PhaseError),

    #[error("Sweep must have at least 2 points (got {0})")]
    TooFewPoints(usize),

    #[error("Start and end values must be different")]
    IdenticalBounds,
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Validated sweep definition; build it with [`PressureSweep::new`] or
/// [`PressureSweep::from_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSweep {
    /// Start pressure [bar]
    start: Real,
    /// End pressure [bar]
    end: Real,
    num_points: usize,
    spacing: SweepSpacing,
}

/// One row of the phase-change diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagramPoint {
    pub pressure: Real,
    #[serde(flatten)]
    pub volumes: PhaseVolumes,
}

impl DiagramPoint {
    pub fn new(pressure: Real, volumes: PhaseVolumes) -> Self {
        Self { pressure, volumes }
    }
}

impl PressureSweep {
    pub fn new(
        start: Real,
        end: Real,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> Result<Self, SweepError> {
        let start = validate_pressure(start).map_err(SweepError::Start)?;
        let end = validate_pressure(end).map_err(SweepError::End)?;

        if num_points < 2 {
            return Err(SweepError::TooFewPoints(num_points));
        }
        if (start - end).abs() < 1e-12 {
            return Err(SweepError::IdenticalBounds);
        }

        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    /// Create a sweep from raw text bounds.
    pub fn from_text(
        start_raw: &str,
        end_raw: &str,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> Result<Self, SweepError> {
        let start = parse_pressure(Some(start_raw)).map_err(SweepError::Start)?;
        let end = parse_pressure(Some(end_raw)).map_err(SweepError::End)?;
        Self::new(start, end, num_points, spacing)
    }

    pub fn start(&self) -> Real {
        self.start
    }

    pub fn end(&self) -> Real {
        self.end
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn spacing(&self) -> SweepSpacing {
        self.spacing
    }

    /// `(min, max)` of the two bounds.
    pub fn bounds(&self) -> (Real, Real) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        if self.num_points < 2 {
            return vec![self.start; self.num_points];
        }
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<Real> {
        let delta = (self.end - self.start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<Real> {
        // ln(0) is undefined; zero-pressure bounds fall back to linear
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| (log_start + i as Real * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for PressureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pressure sweep from {} to {} bar ({} points, {})",
            self.start, self.end, self.num_points, self.spacing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidPressure;

    #[test]
    fn linear_sweep_generation() {
        let sweep = PressureSweep::new(0.0, 10.0, 5, SweepSpacing::Linear).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 0.0).abs() < 1e-12);
        assert!((points[2] - 5.0).abs() < 1e-12);
        assert_eq!(points[4], 10.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = PressureSweep::new(0.1, 10.0, 3, SweepSpacing::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 0.1);
        assert_eq!(points[2], 10.0);
        // Log scale midpoint: sqrt(0.1 * 10) = 1
        assert!((points[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_from_zero_falls_back_to_linear() {
        let sweep = PressureSweep::new(0.0, 4.0, 3, SweepSpacing::Logarithmic).unwrap();
        assert_eq!(sweep.generate_points(), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn descending_sweep_keeps_direction() {
        let sweep = PressureSweep::new(10.0, 0.0, 3, SweepSpacing::Linear).unwrap();
        assert_eq!(sweep.generate_points(), vec![10.0, 5.0, 0.0]);
        assert_eq!(sweep.bounds(), (0.0, 10.0));
    }

    #[test]
    fn sweep_from_text() {
        let sweep = PressureSweep::from_text("0", "10.0", 5, SweepSpacing::Linear).unwrap();
        assert_eq!(sweep.start(), 0.0);
        assert_eq!(sweep.end(), 10.0);
        assert_eq!(sweep.num_points(), 5);
        assert_eq!(sweep.spacing(), SweepSpacing::Linear);
        assert_eq!(
            sweep.to_string(),
            "Pressure sweep from 0 to 10 bar (5 points, Linear)"
        );
    }

    #[test]
    fn reject_invalid_definitions() {
        assert_eq!(
            PressureSweep::new(0.0, 10.0, 1, SweepSpacing::Linear),
            Err(SweepError::TooFewPoints(1))
        );
        assert_eq!(
            PressureSweep::new(3.0, 3.0, 5, SweepSpacing::Linear),
            Err(SweepError::IdenticalBounds)
        );
        assert_eq!(
            PressureSweep::new(-1.0, 3.0, 5, SweepSpacing::Linear),
            Err(SweepError::Start(PhaseError::InvalidValue(
                InvalidPressure::Negative
            )))
        );
        assert!(matches!(
            PressureSweep::from_text("0", "abc", 5, SweepSpacing::Linear),
            Err(SweepError::End(_))
        ));
    }

    #[test]
    fn degenerate_point_counts_do_not_panic() {
        for spacing in [SweepSpacing::Linear, SweepSpacing::Logarithmic] {
            let empty = PressureSweep {
                start: 1.0,
                end: 5.0,
                num_points: 0,
                spacing,
            };
            assert!(empty.generate_points().is_empty());

            let single = PressureSweep {
                num_points: 1,
                ..empty
            };
            assert_eq!(single.generate_points(), vec![1.0]);
        }
    }

    #[test]
    fn diagram_point_serializes_flat() {
        let row = DiagramPoint::new(5.0, PhaseVolumes::new(0.0019, 0.324));
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pressure": 5.0,
                "specific_volume_liquid": 0.0019,
                "specific_volume_vapor": 0.324
            })
        );
    }
}
