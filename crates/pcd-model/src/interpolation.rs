//! Closed-form exponential phase-volume model.
//!
//! Liquid and vapor specific volumes follow
//!
//! ```text
//! v_f(p) = vf0 * exp(b_f * p_eff)
//! v_g(p) = vg0 * exp(b_g * p_eff)
//! p_eff  = min(p, pc)
//! ```
//!
//! so both curves start at their zero-pressure references (bit for bit) and
//! meet at the critical volume. Above the critical pressure the phases are
//! merged and the pair stays at `(vc, vc)`, which keeps the curve continuous
//! across `pc`.

use crate::constants::ModelConstants;
use crate::error::PhaseResult;
use crate::pressure::validate_pressure;
use crate::volumes::PhaseVolumes;
use pcd_core::Real;

/// Decimal places kept in reported volumes.
pub const OUTPUT_DECIMALS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExponentialModel {
    constants: ModelConstants,
}

impl ExponentialModel {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    pub fn reference() -> Self {
        Self::new(ModelConstants::reference())
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Pressure actually fed to the curve: clamped to the critical pressure.
    pub fn effective_pressure(&self, pressure: Real) -> Real {
        pressure.min(self.constants.pc())
    }

    /// Unrounded volumes at `pressure`.
    pub fn volumes_at(&self, pressure: Real) -> PhaseResult<PhaseVolumes> {
        let p = validate_pressure(pressure)?;
        let p_eff = self.effective_pressure(p);
        let c = &self.constants;
        Ok(PhaseVolumes::new(
            c.vf0() * (c.b_f() * p_eff).exp(),
            c.vg0() * (c.b_g() * p_eff).exp(),
        ))
    }

    /// Volumes at `pressure`, rounded to [`OUTPUT_DECIMALS`] places.
    pub fn compute_phase_volumes(&self, pressure: Real) -> PhaseResult<PhaseVolumes> {
        Ok(self.volumes_at(pressure)?.rounded(OUTPUT_DECIMALS))
    }
}

/// Rounded phase volumes from the reference constant set.
pub fn compute_phase_volumes(pressure: Real) -> PhaseResult<PhaseVolumes> {
    ExponentialModel::reference().compute_phase_volumes(pressure)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::constants::PC;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn liquid_rises_and_vapor_falls(a in 0.0_f64..10.0, gap in 1e-3_f64..5.0) {
            let b = a + gap;
            prop_assume!(b <= PC);
            let model = ExponentialModel::reference();
            let lo = model.volumes_at(a).unwrap();
            let hi = model.volumes_at(b).unwrap();
            prop_assert!(lo.specific_volume_liquid < hi.specific_volume_liquid);
            prop_assert!(lo.specific_volume_vapor > hi.specific_volume_vapor);
        }

        #[test]
        fn liquid_never_exceeds_vapor(p in 0.0_f64..9.9) {
            let v = ExponentialModel::reference().volumes_at(p).unwrap();
            prop_assert!(v.specific_volume_liquid <= v.specific_volume_vapor);
        }

        #[test]
        fn supercritical_matches_critical(p in PC..1.0e6) {
            prop_assert_eq!(
                compute_phase_volumes(p).unwrap(),
                compute_phase_volumes(PC).unwrap()
            );
        }

        #[test]
        fn rounded_output_is_monotone(a in 0.0_f64..20.0, b in 0.0_f64..20.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = compute_phase_volumes(lo).unwrap();
            let hi = compute_phase_volumes(hi).unwrap();
            prop_assert!(lo.specific_volume_liquid <= hi.specific_volume_liquid);
            prop_assert!(lo.specific_volume_vapor >= hi.specific_volume_vapor);
        }
    }
}
