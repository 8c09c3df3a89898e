//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact identifiers every implementation must produce
//! under the default `VRSC` root chain.

use serde::{Deserialize, Serialize};
use vdxf_core::{get_data_key, get_id_with_parent, Identifier, RootChain};

/// What a vector derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorKind {
    /// `get_id_with_parent(name, parent)`
    Identity,
    /// `get_data_key(name, parent)`, `parent` being the namespace
    DataKey,
}

/// A golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// What is derived.
    pub kind: VectorKind,
    /// Input name.
    pub input: String,
    /// Parent or namespace identifier (hex); all zeros for none.
    pub parent: String,
    /// Expected identifier (hex).
    pub expected: String,
}

impl GoldenVector {
    fn new(name: &str, kind: VectorKind, input: &str, parent: &str, expected: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            input: input.to_string(),
            parent: parent.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Derive this vector's identifier under `root`.
    pub fn derive(&self, root: &RootChain) -> Option<Identifier> {
        let parent = Identifier::from_hex(&self.parent).ok()?;
        match self.kind {
            VectorKind::Identity => get_id_with_parent(&self.input, parent, root)
                .ok()
                .map(|(id, _)| id),
            VectorKind::DataKey => get_data_key(&self.input, parent, root).ok(),
        }
    }
}

const NULL: &str = "0000000000000000000000000000000000000000";
const FORTY_TWO: &str = "4242424242424242424242424242424242424242";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    use VectorKind::*;
    vec![
        // i5w5MuNik5NtLcYmNzcvaoixooEebB6MGV on the VRSC network.
        GoldenVector::new("root chain", Identity, "VRSC", NULL, "1af5b8015c64d39ab44c60ead8317f9f5a9b6c4c"),
        GoldenVector::new("single name", Identity, "alice", NULL, "3198a29dbdb32fd87b2a08731cfd7c8fe59c74fa"),
        GoldenVector::new("explicit chain ignored", Identity, "alice@vrsctest", NULL, "3198a29dbdb32fd87b2a08731cfd7c8fe59c74fa"),
        GoldenVector::new("name under root", Identity, "alice.vrsc", NULL, "15e74556fb9a0f452f3e13f0742103bb5dc67c23"),
        GoldenVector::new("three levels", Identity, "leaf.sub.root", NULL, "0d2f963f35f38b6abc7f4c61c463745865124489"),
        GoldenVector::new("internal space", Identity, "a b.c", NULL, "738bd26161f857dc75e9cda4219c4a2daf2e1d51"),
        GoldenVector::new("system key", Identity, "system.currency.export", NULL, "8aabc489478cc3821b9c34bab7d564f672a36024"),
        GoldenVector::new("system key with chain", Identity, "currency.export.system@vrsc", NULL, "0cf0a88710984536cc9e71f5e7ae2b84335bfa7e"),
        GoldenVector::new("scoped leaf", Identity, "leaf", FORTY_TWO, "7895fd81519e5f5e28b54f8e07ba6050e2b581fd"),
        GoldenVector::new("scoped leaf drops root", Identity, "leaf.VRSC", FORTY_TWO, "7895fd81519e5f5e28b54f8e07ba6050e2b581fd"),
        GoldenVector::new("scoped mixed case", Identity, "Alice.Bob.VRSC", FORTY_TWO, "1f72f00a932defa9af65849bcead3842763605e5"),
        GoldenVector::new("truncated inside multibyte char", Identity, "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaé", NULL, "992ca5c8465935a3107d60df7e7fa73cbc556f08"),
        GoldenVector::new("leaf ends at nul", Identity, "a\0b", NULL, "5e8fe3076e8276241e84657ba2cdfcaa9eb18dc1"),
        GoldenVector::new("unparented ancestor keeps nul", Identity, "leaf.a\0b", NULL, "3776b6507dbda682597e334b53dcdfba349cdde2"),
        GoldenVector::new("data key in root", DataKey, "balance", NULL, "4245eaec91505dddecc23bcc486cbb7efe3bfd2e"),
        GoldenVector::new("dotted data key in root", DataKey, "a.b", NULL, "9d6c79e08c28f7e7b421b2d528c3a76cef057b88"),
        GoldenVector::new("data key in namespace", DataKey, "balance", "0156575fba11c0f35d10e9c8309a0d37a0657070", "c4967dd09e4b9c3808638554bad1b5a57ff17325"),
        GoldenVector::new("data key in identity", DataKey, "profile", "15e74556fb9a0f452f3e13f0742103bb5dc67c23", "4b5d408c998919a31e52c27b4faf037ef70b5a95"),
    ]
}

/// Check every vector against the default root chain.
///
/// Returns `(name, matches, derived hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let root = RootChain::default();
    all_vectors()
        .iter()
        .map(|v| {
            let hex = v.derive(&root).map(|id| id.to_hex()).unwrap_or_default();
            (v.name.clone(), hex == v.expected, hex)
        })
        .collect()
}
