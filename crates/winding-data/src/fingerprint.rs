//! Content fingerprint of a dataset source.
//!
//! Two loads of byte-identical sources yield the same fingerprint, which
//! lets callers tell whether a reload changed anything.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a dataset source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of the given bytes.
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Fingerprint(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for display.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        let fp = Fingerprint::compute(b"hello world");
        assert_eq!(
            fp.as_str(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(fp.short(), "b94d27b9934d");
    }

    #[test]
    fn deterministic_and_sensitive() {
        assert_eq!(Fingerprint::compute(b"abc"), Fingerprint::compute(b"abc"));
        assert_ne!(Fingerprint::compute(b"abc"), Fingerprint::compute(b"abd"));
    }
}
