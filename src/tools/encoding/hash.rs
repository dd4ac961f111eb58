//! SHA-2 hash generator.

use serde::Serialize;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::tools::{ToolError, ToolResult};

named_options! {
    /// Digest algorithm.
    pub enum HashAlgorithm {
        /// SHA-256
        Sha256 => "sha256",
        /// SHA-384
        Sha384 => "sha384",
        /// SHA-512
        Sha512 => "sha512",
    }
}

/// A computed digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashDigest {
    /// Algorithm used
    pub algorithm: HashAlgorithm,
    /// Hex-encoded digest
    pub hex: String,
}

fn hex_of<D: Digest>(text: &str) -> String {
    let mut hasher = D::new();
    hasher.update(text.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Hashes the UTF-8 bytes of `text`, hex-encoded.
///
/// ```
/// use utilkit::tools::encoding::hash::{digest, HashAlgorithm};
///
/// let hex = digest("abc", HashAlgorithm::Sha256, false).unwrap();
/// assert!(hex.starts_with("ba7816bf"));
/// ```
pub fn digest(text: &str, algorithm: HashAlgorithm, uppercase: bool) -> ToolResult<String> {
    if text.is_empty() {
        return Err(ToolError::EmptyInput { field: "Text" });
    }

    let hex = match algorithm {
        HashAlgorithm::Sha256 => hex_of::<Sha256>(text),
        HashAlgorithm::Sha384 => hex_of::<Sha384>(text),
        HashAlgorithm::Sha512 => hex_of::<Sha512>(text),
    };
    Ok(if uppercase { hex.to_uppercase() } else { hex })
}

/// Every algorithm's digest of `text`.
pub fn digest_all(text: &str, uppercase: bool) -> ToolResult<Vec<HashDigest>> {
    HashAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            Ok(HashDigest {
                algorithm,
                hex: digest(text, algorithm, uppercase)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            digest("abc", HashAlgorithm::Sha256, false).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest("abc", HashAlgorithm::Sha384, false).unwrap(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(digest("abc", HashAlgorithm::Sha512, false).unwrap().len(), 128);
    }

    #[test]
    fn test_uppercase() {
        let hex = digest("abc", HashAlgorithm::Sha256, true).unwrap();
        assert!(hex.starts_with("BA7816BF"));
    }

    #[test]
    fn test_digest_all() {
        let all = digest_all("abc", false).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].algorithm, HashAlgorithm::Sha384);
        assert_eq!(all[1].hex.len(), 96);
    }

    #[test]
    fn test_whitespace_is_hashed() {
        assert!(digest(" ", HashAlgorithm::Sha256, false).is_ok());
        assert!(digest("", HashAlgorithm::Sha256, false).is_err());
    }
}
