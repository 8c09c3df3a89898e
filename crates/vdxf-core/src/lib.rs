//! # VDXF Core
//!
//! Pure primitives for VDXF naming: canonicalizing dotted, chain-qualified
//! names and deriving 160-bit identifiers and namespaced data keys from them.
//!
//! This crate contains no I/O, no storage, no networking. Every operation is a
//! deterministic function of its inputs and an explicit [`RootChain`].
//!
//! ## Key Types
//!
//! - [`Identifier`] - 160-bit identifier, `Hash160` of a chained `Hash256`
//! - [`ParsedName`] - Sub-name components and chain context of a raw name
//! - [`RootChain`] - The root chain name and identifier names resolve under
//! - [`NameError`] - Why a name was rejected
//!
//! ## Derivation
//!
//! ```rust
//! use vdxf_core::{get_data_key, get_id, Identifier, RootChain};
//!
//! let root = RootChain::default();
//! let id = get_id("Leaf.Parent", &root).unwrap();
//! assert_eq!(id, get_id("leaf.parent", &root).unwrap());
//!
//! let key = get_data_key("balance", Identifier::NULL, &root).unwrap();
//! assert_ne!(key, id);
//! ```

pub mod chain;
pub mod crypto;
pub mod data_key;
pub mod error;
pub mod identifier;
pub mod name;
pub mod types;
pub mod value;

pub use chain::{RootChain, DEFAULT_ROOT_CHAIN_NAME};
pub use crypto::{hash160, hash256, hash256_pair, Uint256};
pub use data_key::{get_data_key, separator_parent, DATA_KEY_SEPARATOR};
pub use error::NameError;
pub use identifier::{clean_name, get_id, get_id_with_parent, CleanName};
pub use name::{
    parse_sub_names, trim_leading, trim_spaces, trim_trailing, ParsedName, MAX_SUBNAME_LENGTH,
};
pub use types::Identifier;
