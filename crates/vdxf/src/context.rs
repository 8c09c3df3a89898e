//! The VDXF context: one configured root chain, every naming operation.
//!
//! A `Vdxf` is immutable once built and can be shared freely across threads.

use tracing::{debug, warn};

use vdxf_core::{
    clean_name, get_data_key, get_id_with_parent, parse_sub_names, CleanName, Identifier,
    NameError, ParsedName, RootChain,
};

use crate::config::{RootChainConfig, VdxfConfig};
use crate::error::{Result, VdxfError};

/// Identifier derivation bound to a configured root chain.
#[derive(Debug, Clone)]
pub struct Vdxf {
    root: RootChain,
    config: VdxfConfig,
}

impl Vdxf {
    /// Build a context from configuration.
    pub fn new(config: VdxfConfig) -> Result<Self> {
        let root = config.root_chain.build()?;
        debug!(root = %root.name(), root_id = %root.id(), "vdxf context ready");
        Ok(Self { root, config })
    }

    /// Build a context around an existing root chain.
    pub fn with_root(root: RootChain) -> Self {
        let config = VdxfConfig {
            root_chain: RootChainConfig {
                name: root.name().to_string(),
                id: Some(root.id().to_hex()),
            },
            display_filter: false,
        };
        Self { root, config }
    }

    /// The root chain names resolve under.
    pub fn root_chain(&self) -> &RootChain {
        &self.root
    }

    /// The configuration this context was built from.
    pub fn config(&self) -> &VdxfConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Canonicalization
    // ─────────────────────────────────────────────────────────────────────────

    /// Split `name` into sub-names and chain context.
    pub fn parse(&self, name: &str, add_root_suffix: bool) -> Result<ParsedName> {
        parse_sub_names(name, &self.root, self.config.display_filter, add_root_suffix)
            .map_err(|e| self.rejected(name, e))
    }

    /// Leaf name of `name` and the identifier of its immediate parent.
    pub fn clean_name(&self, name: &str, parent: Identifier) -> Result<CleanName> {
        clean_name(name, parent, &self.root, self.config.display_filter)
            .map_err(|e| self.rejected(name, e))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derivation
    // ─────────────────────────────────────────────────────────────────────────

    /// Identifier of `name`, ancestry taken from the name alone.
    pub fn get_id(&self, name: &str) -> Result<Identifier> {
        self.get_id_with_parent(name, Identifier::NULL)
            .map(|(id, _)| id)
    }

    /// Identifier of `name` under `parent`, with the leaf's folded parent.
    pub fn get_id_with_parent(
        &self,
        name: &str,
        parent: Identifier,
    ) -> Result<(Identifier, Identifier)> {
        self.check_display(name)?;
        let (id, parent) =
            get_id_with_parent(name, parent, &self.root).map_err(|e| self.rejected(name, e))?;
        debug!(name = %name, id = %id, parent = %parent, "derived identifier");
        Ok((id, parent))
    }

    /// Data key for `key_name` in `namespace`; a null namespace means the root chain.
    pub fn get_data_key(&self, key_name: &str, namespace: Identifier) -> Result<Identifier> {
        self.check_display(key_name)?;
        let key =
            get_data_key(key_name, namespace, &self.root).map_err(|e| self.rejected(key_name, e))?;
        debug!(key_name = %key_name, namespace = %namespace, key = %key, "derived data key");
        Ok(key)
    }

    /// Core derivation never filters control characters; apply the configured filter first.
    fn check_display(&self, name: &str) -> Result<()> {
        if self.config.display_filter {
            parse_sub_names(name, &self.root, true, false).map_err(|e| self.rejected(name, e))?;
        }
        Ok(())
    }

    fn rejected(&self, name: &str, source: NameError) -> VdxfError {
        warn!(name = %name, error = %source, "rejected name");
        VdxfError::name(name, source)
    }
}

impl Default for Vdxf {
    fn default() -> Self {
        Self::with_root(RootChain::default())
    }
}
