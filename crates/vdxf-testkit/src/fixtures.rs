//! Test fixtures and helpers.
//!
//! Common root chain setups for integration tests.

use vdxf_core::{get_data_key, get_id, get_id_with_parent, Identifier, NameError, RootChain};

/// A test fixture bound to one root chain.
pub struct TestFixture {
    pub root: RootChain,
}

impl TestFixture {
    /// Fixture on the default `VRSC` root chain.
    pub fn new() -> Self {
        Self {
            root: RootChain::default(),
        }
    }

    /// Fixture on a root chain derived from `name`.
    pub fn with_root_name(name: &str) -> Result<Self, NameError> {
        Ok(Self {
            root: RootChain::derive(name)?,
        })
    }

    /// Identifier of `name`.
    pub fn id(&self, name: &str) -> Identifier {
        get_id(name, &self.root).unwrap_or_else(|e| panic!("fixture name {name:?}: {e}"))
    }

    /// Identifier of `name` under `parent`.
    pub fn id_under(&self, name: &str, parent: Identifier) -> Identifier {
        get_id_with_parent(name, parent, &self.root)
            .map(|(id, _)| id)
            .unwrap_or_else(|e| panic!("fixture name {name:?}: {e}"))
    }

    /// Data key of `key_name` in `namespace`.
    pub fn data_key(&self, key_name: &str, namespace: Identifier) -> Identifier {
        get_data_key(key_name, namespace, &self.root)
            .unwrap_or_else(|e| panic!("fixture key {key_name:?}: {e}"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixtures on several distinct root chains.
pub fn multi_chain_fixtures(names: &[&str]) -> Vec<TestFixture> {
    names
        .iter()
        .filter_map(|name| TestFixture::with_root_name(name).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids() {
        let fixture = TestFixture::new();
        let parent = fixture.id("parent");
        assert_eq!(fixture.id_under("leaf", parent), fixture.id("leaf.parent"));
    }

    #[test]
    fn test_root_chain_changes_data_keys_not_ids() {
        let chains = multi_chain_fixtures(&["VRSC", "VRSCTEST"]);
        assert_eq!(chains.len(), 2);

        // Identity derivation does not depend on the root chain...
        assert_eq!(chains[0].id("alice.bob"), chains[1].id("alice.bob"));

        // ...but the default data key namespace does.
        assert_ne!(
            chains[0].data_key("balance", Identifier::NULL),
            chains[1].data_key("balance", Identifier::NULL)
        );
    }

    #[test]
    fn test_root_name_affects_scoped_ids() {
        let chains = multi_chain_fixtures(&["VRSC", "VRSCTEST"]);
        let parent = Identifier::from_bytes([0x42; 20]);

        // Under a parent, only the configured root chain suffix is dropped.
        assert_eq!(
            chains[0].id_under("alice.vrsc", parent),
            chains[0].id_under("alice", parent)
        );
        assert_ne!(
            chains[1].id_under("alice.vrsc", parent),
            chains[1].id_under("alice", parent)
        );
    }
}
