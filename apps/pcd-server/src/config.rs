//! Server configuration read from the environment.

use crate::error::ServerError;
use pcd_model::CalculatorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Listening port.
pub const ENV_PORT: &str = "PORT";
/// Bind address.
pub const ENV_HOST: &str = "PCD_HOST";
/// Calculator kind: `interpolated` or `table`.
pub const ENV_MODEL: &str = "PCD_MODEL";
/// Optional YAML file with model constants.
pub const ENV_CONSTANTS: &str = "PCD_CONSTANTS";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub model: CalculatorKind,
    pub constants_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            model: CalculatorKind::default(),
            constants_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_PORT) {
            match raw.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PORT,
                    "ignoring unparseable PORT"
                ),
            }
        }

        if let Some(raw) = get(ENV_HOST) {
            config.host = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidHost(raw.clone()))?;
        }

        if let Some(raw) = get(ENV_MODEL) {
            config.model = raw.parse().map_err(ServerError::InvalidModel)?;
        }

        config.constants_path = get(ENV_CONSTANTS).map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
