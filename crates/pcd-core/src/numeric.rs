use crate::{PcdError, PcdResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> PcdResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PcdError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal places, halves away from zero.
pub fn round_to_decimals(v: Real, decimals: u32) -> Real {
    let scale = 10_f64.powi(decimals as i32);
    (v * scale).round() / scale
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_stays_within_half_a_step(v in 0.0_f64..1.0e3) {
            let rounded = round_to_decimals(v, 4);
            prop_assert!((rounded - v).abs() <= 0.5e-4 + 1e-12);
        }

        #[test]
        fn rounding_preserves_order(a in 0.0_f64..100.0, b in 0.0_f64..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(round_to_decimals(lo, 4) <= round_to_decimals(hi, 4));
        }
    }
}
