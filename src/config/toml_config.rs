use crate::domain::model::Pairing;
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ```toml
/// [[pairings]]
/// species = "tree"
/// mechanism = "leaf"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingConfig {
    #[serde(default)]
    pub pairings: Vec<Pairing>,
}

impl PairingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BridgeError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            pairings: Pairing::defaults(),
        }
    }
}

impl Validate for PairingConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_pairings("pairings", &self.pairings)
    }
}
