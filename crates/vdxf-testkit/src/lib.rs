//! # VDXF Testkit
//!
//! Testing utilities for VDXF naming.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known names with expected identifiers for cross-implementation verification
//! - **Generators**: Proptest strategies for valid and invalid names
//! - **Fixtures**: Helpers bound to a root chain
//!
//! ## Golden Vectors
//!
//! ```rust
//! use vdxf_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{name}: {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use vdxf_testkit::generators::dotted_name;
//!
//! proptest! {
//!     #[test]
//!     fn id_is_deterministic(name in dotted_name()) {
//!         let root = vdxf_core::RootChain::default();
//!         prop_assert_eq!(
//!             vdxf_core::get_id(&name, &root).unwrap(),
//!             vdxf_core::get_id(&name, &root).unwrap()
//!         );
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use vdxf_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let parent = fixture.id("parent");
//! assert_eq!(fixture.id_under("leaf", parent), fixture.id("leaf.parent"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_chain_fixtures, TestFixture};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, VectorKind};
