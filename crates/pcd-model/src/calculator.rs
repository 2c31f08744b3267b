use crate::error::{PhaseError, PhaseResult};
use crate::interpolation::ExponentialModel;
use crate::pressure::parse_pressure;
use crate::sweep::{DiagramPoint, PressureSweep};
use crate::table::PhaseTable;
use crate::volumes::PhaseVolumes;
use crate::ModelConstants;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorKind {
    #[default]
    Interpolated,
    Table,
}

impl CalculatorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Interpolated => "interpolated",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interpolated" | "exponential" => Ok(Self::Interpolated),
            "table" => Ok(Self::Table),
            other => Err(format!(
                "unknown calculator '{other}' (expected 'interpolated' or 'table')"
            )),
        }
    }
}

/// The phase-volume calculator shared by every transport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseCalculator {
    Interpolated(ExponentialModel),
    Table(PhaseTable),
}

impl Default for PhaseCalculator {
    fn default() -> Self {
        Self::Interpolated(ExponentialModel::reference())
    }
}

impl PhaseCalculator {
    /// Build a calculator of `kind`; `constants` only affects the interpolated kind.
    pub fn new(kind: CalculatorKind, constants: ModelConstants) -> Self {
        match kind {
            CalculatorKind::Interpolated => Self::Interpolated(ExponentialModel::new(constants)),
            CalculatorKind::Table => Self::Table(PhaseTable::new()),
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        match self {
            Self::Interpolated(_) => CalculatorKind::Interpolated,
            Self::Table(_) => CalculatorKind::Table,
        }
    }

    /// Evaluate raw pressure text, as received from a query string or argument.
    pub fn evaluate(&self, raw: Option<&str>) -> PhaseResult<PhaseVolumes> {
        match self {
            Self::Interpolated(model) => {
                let pressure = parse_pressure(raw)?;
                model.compute_phase_volumes(pressure)
            }
            Self::Table(table) => match raw {
                Some(text) => table.lookup(text),
                None => Err(PhaseError::MissingParameter),
            },
        }
    }

    /// Phase-change diagram rows across `sweep`.
    ///
    /// The interpolated kind evaluates every sweep point (unrounded). The
    /// table kind returns the tabulated points inside the sweep range.
    pub fn diagram(&self, sweep: &PressureSweep) -> PhaseResult<Vec<DiagramPoint>> {
        match self {
            Self::Interpolated(model) => sweep
                .generate_points()
                .into_iter()
                .map(|p| Ok(DiagramPoint::new(p, model.volumes_at(p)?)))
                .collect(),
            Self::Table(table) => {
                let (lo, hi) = sweep.bounds();
                Ok(table
                    .entries_between(lo, hi)
                    .map(|e| DiagramPoint::new(e.pressure, e.volumes))
                    .collect())
            }
        }
    }
}
