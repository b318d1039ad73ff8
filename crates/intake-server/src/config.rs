use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use intake_validate::ValidationLimits;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding one log file per submission kind.
    pub data_dir: PathBuf,
    /// Log file extension, without the dot.
    pub log_extension: String,
    /// `fsync` every appended entry.
    pub sync_writes: bool,
    /// Largest request body read from a client.
    pub max_body_bytes: usize,
    pub limits: ValidationLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8787)),
            data_dir: PathBuf::from("data"),
            log_extension: "jsonl".into(),
            sync_writes: false,
            max_body_bytes: 64 * 1024,
            limits: ValidationLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> ServerResult<Self> {
        toml::from_str(source).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}
