//! Namespaced data keys.
//!
//! A data key for `key_name` lives one hop below its namespace, under the
//! reserved separator `::`. Because of that hop a data key never coincides
//! with the plain identifier of the same text under the same namespace.

use crate::chain::RootChain;
use crate::error::NameError;
use crate::identifier::{get_id_with_parent, hash_sub_name};
use crate::types::Identifier;

/// Reserved separator token between a namespace and its data keys.
pub const DATA_KEY_SEPARATOR: &str = "::";

/// Identifier of the separator hop under `namespace`.
///
/// `:` is a rejected name character, so the separator never canonicalizes and
/// its cleaned leaf is empty. The hop is the hash of that empty leaf under the
/// namespace, which no valid name can reach.
pub fn separator_parent(namespace: &Identifier) -> Identifier {
    hash_sub_name(b"", namespace)
}

/// Derive the data key for `key_name` inside `namespace`.
///
/// A null namespace means the root chain.
pub fn get_data_key(
    key_name: &str,
    namespace: Identifier,
    root: &RootChain,
) -> Result<Identifier, NameError> {
    let namespace = if namespace.is_null() {
        root.id()
    } else {
        namespace
    };
    let parent = separator_parent(&namespace);
    get_id_with_parent(key_name, parent, root).map(|(id, _)| id)
}
