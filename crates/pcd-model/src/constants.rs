//! Model constants for the exponential phase-volume curve.
//!
//! The curve is pinned by three reference points: the liquid and vapor
//! specific volumes at zero pressure (`vf0`, `vg0`) and the common critical
//! volume `vc` reached at the critical pressure `pc`. Decay coefficients are
//! derived once when the set is built:
//!
//! ```text
//! b_f = (ln(vc) - ln(vf0)) / pc
//! b_g = (ln(vc) - ln(vg0)) / pc
//! ```

use crate::error::{PhaseError, PhaseResult};
use pcd_core::{Pressure, Real, SpecificVolume, bar, m3_per_kg};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// Reference liquid specific volume at zero pressure [m³/kg].
pub const VF0: Real = 0.00105;
/// Critical specific volume [m³/kg].
pub const VC: Real = 0.0035;
/// Reference vapor specific volume at zero pressure [m³/kg].
pub const VG0: Real = 30.0;
/// Critical pressure [bar].
pub const PC: Real = 10.0;

static REFERENCE: LazyLock<ModelConstants> =
    LazyLock::new(|| ModelConstants::derive(VF0, VC, VG0, PC));

/// On-disk form of a constant set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsFile {
    pub vf0: Real,
    pub vc: Real,
    pub vg0: Real,
    pub pc: Real,
}

impl Default for ConstantsFile {
    fn default() -> Self {
        Self {
            vf0: VF0,
            vc: VC,
            vg0: VG0,
            pc: PC,
        }
    }
}

/// Validated, immutable constant set with derived decay coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConstants {
    vf0: Real,
    vc: Real,
    vg0: Real,
    pc: Real,
    b_f: Real,
    b_g: Real,
}

impl ModelConstants {
    /// Build a constant set, enforcing `0 < vf0 < vc < vg0` and `pc > 0`.
    pub fn new(vf0: Real, vc: Real, vg0: Real, pc: Real) -> PhaseResult<Self> {
        for (name, value) in [("vf0", vf0), ("vc", vc), ("vg0", vg0), ("pc", pc)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhaseError::Constants {
                    what: format!("{name} must be finite and positive (got {value})"),
                });
            }
        }
        if vf0 >= vc {
            return Err(PhaseError::Constants {
                what: format!("vc ({vc}) must exceed vf0 ({vf0})"),
            });
        }
        if vc >= vg0 {
            return Err(PhaseError::Constants {
                what: format!("vg0 ({vg0}) must exceed vc ({vc})"),
            });
        }
        Ok(Self::derive(vf0, vc, vg0, pc))
    }

    /// The process-wide reference set.
    pub fn reference() -> Self {
        *REFERENCE
    }

    pub fn from_file(file: ConstantsFile) -> PhaseResult<Self> {
        Self::new(file.vf0, file.vc, file.vg0, file.pc)
    }

    pub fn from_yaml_str(content: &str) -> PhaseResult<Self> {
        let file: ConstantsFile =
            serde_yaml::from_str(content).map_err(|e| PhaseError::ConstantsFile {
                message: e.to_string(),
            })?;
        Self::from_file(file)
    }

    pub fn load_yaml(path: &Path) -> PhaseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PhaseError::ConstantsFile {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_file(&self) -> ConstantsFile {
        ConstantsFile {
            vf0: self.vf0,
            vc: self.vc,
            vg0: self.vg0,
            pc: self.pc,
        }
    }

    fn derive(vf0: Real, vc: Real, vg0: Real, pc: Real) -> Self {
        let ln_vc = vc.ln();
        Self {
            vf0,
            vc,
            vg0,
            pc,
            b_f: (ln_vc - vf0.ln()) / pc,
            b_g: (ln_vc - vg0.ln()) / pc,
        }
    }

    pub fn vf0(&self) -> Real {
        self.vf0
    }

    pub fn vc(&self) -> Real {
        self.vc
    }

    pub fn vg0(&self) -> Real {
        self.vg0
    }

    /// Critical pressure [bar].
    pub fn pc(&self) -> Real {
        self.pc
    }

    /// Liquid decay coefficient [1/bar], positive.
    pub fn b_f(&self) -> Real {
        self.b_f
    }

    /// Vapor decay coefficient [1/bar], negative.
    pub fn b_g(&self) -> Real {
        self.b_g
    }

    pub fn critical_pressure(&self) -> Pressure {
        bar(self.pc)
    }

    pub fn critical_volume(&self) -> SpecificVolume {
        m3_per_kg(self.vc)
    }
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcd_core::{Tolerances, nearly_equal, to_bar};

    #[test]
    fn reference_coefficients() {
        let c = ModelConstants::reference();
        let tol = Tolerances::default();
        assert!(nearly_equal(c.b_f(), (VC.ln() - VF0.ln()) / PC, tol));
        assert!(nearly_equal(c.b_g(), (VC.ln() - VG0.ln()) / PC, tol));
        assert!(c.b_f() > 0.0);
        assert!(c.b_g() < 0.0);
        assert!((c.b_f() - 0.120_397_280_432_593_7).abs() < 1e-12);
        assert!((c.b_g() + 0.905_618_969_214_892_5).abs() < 1e-12);
    }

    #[test]
    fn reference_matches_validated_build() {
        let built = ModelConstants::new(VF0, VC, VG0, PC).unwrap();
        assert_eq!(built, ModelConstants::reference());
        assert_eq!(ModelConstants::default(), built);
    }

    #[test]
    fn rejects_non_positive_constants() {
        assert!(ModelConstants::new(0.0, VC, VG0, PC).is_err());
        assert!(ModelConstants::new(VF0, VC, VG0, -1.0).is_err());
        assert!(ModelConstants::new(VF0, Real::NAN, VG0, PC).is_err());
        assert!(ModelConstants::new(VF0, VC, Real::INFINITY, PC).is_err());
    }

    #[test]
    fn rejects_unordered_volumes() {
        let err = ModelConstants::new(0.004, VC, VG0, PC).unwrap_err();
        assert!(err.to_string().contains("must exceed vf0"));

        let err = ModelConstants::new(VF0, VC, 0.001, PC).unwrap_err();
        assert!(err.to_string().contains("must exceed vc"));
    }

    #[test]
    fn yaml_roundtrip_of_reference() {
        let yaml = serde_yaml::to_string(&ModelConstants::reference().to_file()).unwrap();
        let parsed = ModelConstants::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, ModelConstants::reference());
    }

    #[test]
    fn yaml_with_custom_values() {
        let yaml = "vf0: 0.001\nvc: 0.003\nvg0: 20.0\npc: 22.0\n";
        let c = ModelConstants::from_yaml_str(yaml).unwrap();
        assert_eq!(c.pc(), 22.0);
        assert!((to_bar(c.critical_pressure()) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn yaml_errors_are_reported() {
        let err = ModelConstants::from_yaml_str("vf0: 0.001\nvc: 0.003\n").unwrap_err();
        assert!(matches!(err, PhaseError::ConstantsFile { .. }));

        let err = ModelConstants::from_yaml_str("vf0: 0.001\nvc: 0.003\nvg0: 20\npc: 1\nextra: 2\n")
            .unwrap_err();
        assert!(matches!(err, PhaseError::ConstantsFile { .. }));

        let err = ModelConstants::from_yaml_str("vf0: 1.0\nvc: 0.003\nvg0: 20\npc: 1\n").unwrap_err();
        assert!(matches!(err, PhaseError::Constants { .. }));
    }

    #[test]
    fn missing_file_is_constants_file_error() {
        let err = ModelConstants::load_yaml(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, PhaseError::ConstantsFile { .. }));
    }
}
