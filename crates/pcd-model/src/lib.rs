//! pcd-model: phase-volume calculator for the simplified phase-change diagram.
//!
//! Provides:
//! - Model constants (reference volumes, critical point, decay coefficients)
//! - Pressure parsing and validation
//! - Closed-form exponential interpolation, clamped at the critical pressure
//! - Exact ten-point lookup table
//! - `PhaseCalculator`, the single entry point used by the server and CLI
//! - Pressure sweeps for tracing the full diagram
//!
//! # Example
//!
//! ```
//! use pcd_model::{PhaseCalculator, PhaseVolumes};
//!
//! let calc = PhaseCalculator::default();
//! let volumes = calc.evaluate(Some("15")).unwrap();
//! assert_eq!(volumes, PhaseVolumes::new(0.0035, 0.0035));
//! ```

pub mod calculator;
pub mod constants;
pub mod error;
pub mod interpolation;
pub mod pressure;
pub mod sweep;
pub mod table;
pub mod volumes;

// Re-exports for ergonomics
pub use calculator::{CalculatorKind, PhaseCalculator};
pub use constants::{ConstantsFile, ModelConstants};
pub use error::{InvalidPressure, PhaseError, PhaseResult};
pub use interpolation::{ExponentialModel, OUTPUT_DECIMALS, compute_phase_volumes};
pub use pressure::{parse_pressure, validate_pressure};
pub use sweep::{DiagramPoint, PressureSweep, SweepError, SweepSpacing};
pub use table::{PhaseTable, TableEntry};
pub use volumes::PhaseVolumes;
