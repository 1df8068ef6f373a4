//! Peer configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use atcc_contract::Chaincode;

use crate::{LogFormat, PeerError};

/// Configuration for a local peer.
///
/// Can be loaded from a TOML file via [`PeerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    /// Directory holding the LMDB world state.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// LMDB memory map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    /// Contract name reported in errors and metadata.
    #[serde(default = "default_chaincode_name")]
    pub chaincode_name: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./atcc_data")
}

fn default_map_size() -> usize {
    atcc_store_lmdb::LmdbWorldState::DEFAULT_MAP_SIZE
}

fn default_chaincode_name() -> String {
    Chaincode::DEFAULT_NAME.to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PeerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, PeerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PeerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PeerError> {
        toml::from_str(s).map_err(|e| PeerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, PeerError> {
        toml::to_string_pretty(self).map_err(|e| PeerError::Config(e.to_string()))
    }

    pub fn log_format(&self) -> Result<LogFormat, PeerError> {
        self.log_format.parse()
    }
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            map_size: default_map_size(),
            chaincode_name: default_chaincode_name(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
