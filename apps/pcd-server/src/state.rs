//! Shared application state

use crate::config::ServerConfig;
use crate::error::ServerResult;
use pcd_model::{ModelConstants, PhaseCalculator};

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Immutable calculator, read by every request
    pub calculator: PhaseCalculator,
}

impl AppState {
    pub fn new(calculator: PhaseCalculator) -> Self {
        Self { calculator }
    }

    /// Build the calculator described by `config`, loading constants if a file is set.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let constants = match &config.constants_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading model constants");
                ModelConstants::load_yaml(path)?
            }
            None => ModelConstants::reference(),
        };

        tracing::info!(
            model = %config.model,
            vf0 = constants.vf0(),
            vc = constants.vc(),
            vg0 = constants.vg0(),
            pc = constants.pc(),
            "phase calculator ready"
        );

        Ok(Self::new(PhaseCalculator::new(config.model, constants)))
    }
}
