//! Configuration for the VDXF context.
//!
//! Loaded once at startup, from JSON or defaults, and immutable afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vdxf_core::{Identifier, RootChain, DEFAULT_ROOT_CHAIN_NAME};

use crate::error::{Result, VdxfError};

/// Root chain settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootChainConfig {
    /// Root chain name.
    #[serde(default = "default_root_name")]
    pub name: String,
    /// Precomputed root chain identifier (hex). Derived from `name` when omitted.
    #[serde(default)]
    pub id: Option<String>,
}

impl Default for RootChainConfig {
    fn default() -> Self {
        Self {
            name: default_root_name(),
            id: None,
        }
    }
}

impl RootChainConfig {
    /// Build the root chain context.
    pub fn build(&self) -> Result<RootChain> {
        match &self.id {
            Some(hex) => {
                let id = Identifier::from_hex(hex).map_err(|e| {
                    VdxfError::Config(format!("root chain id {hex:?}: {e}"))
                })?;
                if id.is_null() {
                    return Err(VdxfError::Config("root chain id must not be null".into()));
                }
                Ok(RootChain::new(self.name.clone(), id))
            }
            None => RootChain::derive(self.name.clone())
                .map_err(|e| VdxfError::Config(format!("root chain name {:?}: {e}", self.name))),
        }
    }
}

/// Configuration for a [`crate::Vdxf`] context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VdxfConfig {
    /// Root chain that names resolve under.
    #[serde(default)]
    pub root_chain: RootChainConfig,
    /// Also reject control characters in names.
    #[serde(default)]
    pub display_filter: bool,
}

impl VdxfConfig {
    /// Parse from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

fn default_root_name() -> String {
    DEFAULT_ROOT_CHAIN_NAME.to_string()
}
