//! Hierarchical identifier derivation.
//!
//! A dotted name is folded into a single [`Identifier`] one sub-name at a
//! time, outermost ancestor first:
//!
//! ```text
//! d      = Hash256(lowercase(sub_name))
//! d      = Hash256(parent || d)          if parent is not null
//! parent = Hash160(d)
//! ```
//!
//! The order is load-bearing: two implementations only agree on identifiers
//! if they fold ancestors in exactly this order.

use crate::chain::RootChain;
use crate::crypto::{hash160, hash256, hash256_pair};
use crate::error::NameError;
use crate::name::{parse_sub_names, ParsedName};
use crate::types::Identifier;

/// A leaf name and the identifier of its immediate parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanName {
    /// The leaf sub-name, original case preserved.
    pub name: String,
    /// Identifier of the leaf's immediate parent.
    pub parent: Identifier,
}

/// Hash one sub-name under `parent`.
///
/// The sub-name ends at its first NUL byte.
pub(crate) fn hash_sub_name(sub_name: &[u8], parent: &Identifier) -> Identifier {
    let end = sub_name.iter().position(|&b| b == 0).unwrap_or(sub_name.len());
    hash_bytes(&sub_name[..end], parent)
}

fn hash_bytes(sub_name: &[u8], parent: &Identifier) -> Identifier {
    let mut digest = hash256(&sub_name.to_ascii_lowercase());
    if !parent.is_null() {
        digest = hash256_pair(parent, &digest);
    }
    hash160(digest.as_bytes())
}

/// Fold the ancestors of `parsed` into `parent`, outermost first.
///
/// An ancestor hashed with no parent keeps any NUL bytes; every other hop
/// ends its sub-name at the first NUL.
fn fold_ancestors(parsed: &ParsedName, parent: Identifier, root: &RootChain) -> Identifier {
    let mut sub_names = parsed.raw_components();
    if !parent.is_null()
        && sub_names.len() > 1
        && parsed
            .components()
            .last()
            .is_some_and(|last| root.is_root_name(last))
    {
        sub_names = &sub_names[..sub_names.len() - 1];
    }

    let mut parent = parent;
    for i in (1..sub_names.len()).rev() {
        parent = if parent.is_null() {
            hash_bytes(&sub_names[i], &parent)
        } else {
            hash_sub_name(&sub_names[i], &parent)
        };
    }
    parent
}

/// Canonicalize `name` and fold its ancestors into `parent`.
///
/// When `parent` is already set and the outermost ancestor is the root chain,
/// that ancestor is skipped: the parent context already covers it.
///
/// On error the caller's parent is unchanged; only a successful result
/// carries the folded parent.
pub fn clean_name(
    name: &str,
    parent: Identifier,
    root: &RootChain,
    display_filter: bool,
) -> Result<CleanName, NameError> {
    let parsed = parse_sub_names(name, root, display_filter, false)?;
    let parent = fold_ancestors(&parsed, parent, root);
    Ok(CleanName {
        name: parsed.leaf().to_string(),
        parent,
    })
}

/// Identifier of `name`, with ancestry taken only from the name itself.
pub fn get_id(name: &str, root: &RootChain) -> Result<Identifier, NameError> {
    get_id_with_parent(name, Identifier::NULL, root).map(|(id, _)| id)
}

/// Identifier of `name` scoped under `parent`.
///
/// Returns the identifier and the folded parent of its leaf. A null `parent`
/// behaves like [`get_id`].
pub fn get_id_with_parent(
    name: &str,
    parent: Identifier,
    root: &RootChain,
) -> Result<(Identifier, Identifier), NameError> {
    let parsed = parse_sub_names(name, root, false, false)?;
    let parent = fold_ancestors(&parsed, parent, root);
    let id = hash_sub_name(&parsed.raw_components()[0], &parent);
    Ok((id, parent))
}
