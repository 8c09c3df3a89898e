//! Root chain context.
//!
//! Names resolve under a root chain. Its name and identifier are fixed for the
//! life of a process and passed explicitly to every operation that needs them.

use serde::{Deserialize, Serialize};

use crate::error::NameError;
use crate::identifier::{get_id, hash_sub_name};
use crate::types::Identifier;

/// Name of the default root chain.
pub const DEFAULT_ROOT_CHAIN_NAME: &str = "VRSC";

/// The root chain a name resolves under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootChain {
    name: String,
    id: Identifier,
}

impl RootChain {
    /// Create from a name and a precomputed identifier.
    pub fn new(name: impl Into<String>, id: Identifier) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Create from a name, deriving its identifier as a top-level name.
    pub fn derive(name: impl Into<String>) -> Result<Self, NameError> {
        let mut chain = Self::new(name, Identifier::NULL);
        chain.id = get_id(&chain.name, &chain)?;
        Ok(chain)
    }

    /// The root chain name, as configured.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root chain identifier.
    pub fn id(&self) -> Identifier {
        self.id
    }

    /// ASCII-lowercased root chain name, the form used in comparisons.
    pub(crate) fn lower_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// True if `component` names this root chain, ignoring ASCII case.
    pub fn is_root_name(&self, component: &str) -> bool {
        component.eq_ignore_ascii_case(&self.name)
    }
}

impl Default for RootChain {
    fn default() -> Self {
        let name = DEFAULT_ROOT_CHAIN_NAME.to_string();
        let id = hash_sub_name(name.as_bytes(), &Identifier::NULL);
        Self { name, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_derived() {
        let derived = RootChain::derive(DEFAULT_ROOT_CHAIN_NAME).unwrap();
        assert_eq!(RootChain::default(), derived);
        assert!(!derived.id().is_null());
    }

    #[test]
    fn test_derive_is_case_insensitive() {
        let upper = RootChain::derive("VRSCTEST").unwrap();
        let lower = RootChain::derive("vrsctest").unwrap();
        assert_eq!(upper.id(), lower.id());
        assert_eq!(upper.name(), "VRSCTEST");
    }

    #[test]
    fn test_derive_rejects_invalid_name() {
        assert!(RootChain::derive("bad/chain").is_err());
    }

    #[test]
    fn test_is_root_name() {
        let root = RootChain::default();
        assert!(root.is_root_name("vrsc"));
        assert!(root.is_root_name("VrSc"));
        assert!(!root.is_root_name("vrsctest"));
    }
}
