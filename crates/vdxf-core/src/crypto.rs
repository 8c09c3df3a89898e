//! Hash primitives for identifier derivation.
//!
//! Two stages, matching the deployed scheme bit for bit:
//!
//! - `Hash256(x) = SHA256(SHA256(x))`
//! - `Hash160(x) = RIPEMD160(SHA256(x))`

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::types::Identifier;

/// A 32-byte double-SHA256 digest.
///
/// Only exists inside a single derivation; never persisted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uint256(pub [u8; 32]);

impl Uint256 {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Uint256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Double SHA-256 of `data`.
pub fn hash256(data: &[u8]) -> Uint256 {
    let first = Sha256::digest(data);
    Uint256(Sha256::digest(first).into())
}

/// Double SHA-256 of `parent || digest`, chaining a parent identifier into a digest.
pub fn hash256_pair(parent: &Identifier, digest: &Uint256) -> Uint256 {
    let mut hasher = Sha256::new();
    hasher.update(parent.as_bytes());
    hasher.update(digest.as_bytes());
    let first = hasher.finalize();
    Uint256(Sha256::digest(first).into())
}

/// RIPEMD-160 of SHA-256 of `data`.
pub fn hash160(data: &[u8]) -> Identifier {
    let sha = Sha256::digest(data);
    Identifier(Ripemd160::digest(sha).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash256_empty() {
        // Well-known double-SHA256 of the empty string.
        assert_eq!(
            hash256(b"").to_hex(),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_hash160_empty() {
        // Well-known RIPEMD160(SHA256("")).
        assert_eq!(
            hash160(b"").to_hex(),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_hash256_pair_matches_concatenation() {
        let parent = Identifier::from_bytes([0x11; 20]);
        let digest = hash256(b"child");

        let mut joined = Vec::new();
        joined.extend_from_slice(parent.as_bytes());
        joined.extend_from_slice(digest.as_bytes());

        assert_eq!(hash256_pair(&parent, &digest), hash256(&joined));
    }

    #[test]
    fn test_hash256_deterministic() {
        assert_eq!(hash256(b"vrsc"), hash256(b"vrsc"));
        assert_ne!(hash256(b"vrsc"), hash256(b"VRSC"));
    }
}
