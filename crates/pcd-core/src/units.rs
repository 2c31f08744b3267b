// pcd-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, SpecificVolume as UomSpecificVolume};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type SpecificVolume = UomSpecificVolume;

/// Model pressures are expressed in bar.
#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn m3_per_kg(v: f64) -> SpecificVolume {
    use uom::si::specific_volume::cubic_meter_per_kilogram;
    SpecificVolume::new::<cubic_meter_per_kilogram>(v)
}

#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn to_m3_per_kg(v: SpecificVolume) -> f64 {
    use uom::si::specific_volume::cubic_meter_per_kilogram;
    v.get::<cubic_meter_per_kilogram>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = bar(1.0);
        let _v = m3_per_kg(0.0035);
    }

    #[test]
    fn bar_is_one_hundred_kilopascal() {
        let p = bar(10.0);
        assert!((p.value - 1.0e6).abs() < 1e-6);
        assert!((to_bar(p) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn specific_volume_roundtrips_in_si() {
        assert!((to_m3_per_kg(m3_per_kg(30.0)) - 30.0).abs() < 1e-12);
    }
}
