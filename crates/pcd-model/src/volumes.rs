//! Liquid/vapor specific-volume pair.

use pcd_core::{Real, round_to_decimals};
use serde::{Deserialize, Serialize};

/// Specific volumes of the saturated liquid and vapor phases [m³/kg].
///
/// Field names are the wire names of the HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseVolumes {
    pub specific_volume_liquid: Real,
    pub specific_volume_vapor: Real,
}

impl PhaseVolumes {
    pub fn new(liquid: Real, vapor: Real) -> Self {
        Self {
            specific_volume_liquid: liquid,
            specific_volume_vapor: vapor,
        }
    }

    /// Both volumes rounded to `decimals` places.
    pub fn rounded(self, decimals: u32) -> Self {
        Self::new(
            round_to_decimals(self.specific_volume_liquid, decimals),
            round_to_decimals(self.specific_volume_vapor, decimals),
        )
    }
}
