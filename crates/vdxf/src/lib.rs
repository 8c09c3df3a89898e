//! # VDXF
//!
//! Deterministic naming for the Verus Data Exchange Format: human-readable,
//! dotted, chain-qualified names become fixed 160-bit identifiers, and data
//! keys are derived inside namespaces.
//!
//! ## Overview
//!
//! - **Canonicalization**: `leaf.parent@chain` is validated and split into
//!   sub-names and a chain context
//! - **Identifiers**: sub-names are folded outermost first through
//!   `Hash256` and `Hash160` into one [`Identifier`]
//! - **Data keys**: a key name is scoped one reserved hop below a namespace
//!
//! ## Usage
//!
//! ```rust
//! use vdxf::{Identifier, Vdxf, VdxfConfig};
//!
//! let vdxf = Vdxf::new(VdxfConfig::default()).unwrap();
//!
//! let id = vdxf.get_id("Alice.VRSC").unwrap();
//! assert_eq!(id, vdxf.get_id("alice.vrsc").unwrap());
//!
//! let key = vdxf.get_data_key("profile", id).unwrap();
//! assert_ne!(key, id);
//! ```
//!
//! ## Re-exports
//!
//! - `vdxf::core` - Pure primitives (canonicalizer, derivation, hashing)

pub mod config;
pub mod context;
pub mod error;

pub use vdxf_core as core;

pub use config::{RootChainConfig, VdxfConfig};
pub use context::Vdxf;
pub use error::{Result, VdxfError};

pub use vdxf_core::{
    CleanName, Identifier, NameError, ParsedName, RootChain, DATA_KEY_SEPARATOR,
    MAX_SUBNAME_LENGTH,
};
