use crate::shared::BomError;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Hash algorithms recognised by CycloneDX, with their wire names
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
pub enum HashAlgorithm {
    #[strum(serialize = "MD5")]
    Md5,
    #[strum(serialize = "SHA-1")]
    Sha1,
    #[strum(serialize = "SHA-256")]
    Sha256,
    #[strum(serialize = "SHA-384")]
    Sha384,
    #[strum(serialize = "SHA-512")]
    Sha512,
    #[strum(serialize = "SHA3-256")]
    Sha3_256,
    #[strum(serialize = "SHA3-384")]
    Sha3_384,
    #[strum(serialize = "SHA3-512")]
    Sha3_512,
    #[strum(serialize = "BLAKE2b-256")]
    Blake2b256,
    #[strum(serialize = "BLAKE2b-384")]
    Blake2b384,
    #[strum(serialize = "BLAKE2b-512")]
    Blake2b512,
    #[strum(serialize = "BLAKE3")]
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses the wire name used in documents (`alg` attribute / field)
    pub fn from_wire(name: &str) -> Result<Self, BomError> {
        HashAlgorithm::from_str(name).map_err(|_| BomError::UnknownHashAlgorithm(name.to_string()))
    }

    /// Parses the lowercase prefix of a composite hash such as `sha256` or `blake2b_512`
    fn from_composite_prefix(prefix: &str) -> Option<Self> {
        let normalized = prefix.to_ascii_lowercase().replace('_', "-");
        let algorithm = match normalized.as_str() {
            "md5" => HashAlgorithm::Md5,
            "sha1" | "sha-1" => HashAlgorithm::Sha1,
            "sha256" | "sha-256" => HashAlgorithm::Sha256,
            "sha384" | "sha-384" => HashAlgorithm::Sha384,
            "sha512" | "sha-512" => HashAlgorithm::Sha512,
            "sha3-256" => HashAlgorithm::Sha3_256,
            "sha3-384" => HashAlgorithm::Sha3_384,
            "sha3-512" => HashAlgorithm::Sha3_512,
            "blake2b-256" => HashAlgorithm::Blake2b256,
            "blake2b-384" => HashAlgorithm::Blake2b384,
            "blake2b-512" => HashAlgorithm::Blake2b512,
            "blake3" => HashAlgorithm::Blake3,
            _ => return None,
        };
        Some(algorithm)
    }
}

/// A digest of some artifact: algorithm plus hex-encoded value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashType {
    pub alg: HashAlgorithm,
    pub content: String,
}

impl HashType {
    pub fn new(alg: HashAlgorithm, content: impl Into<String>) -> Self {
        Self {
            alg,
            content: content.into(),
        }
    }

    /// Parses the `algo:hexvalue` form used by lockfiles, e.g.
    /// `sha256:806c8a0ef2e68a1b2a6ba4d9e48cb5ad8fd49a4b0c4d0b3d7cbaa3d7a1d3a0d4`
    pub fn from_composite_str(composite: &str) -> Result<Self, BomError> {
        let invalid = |reason: &str| BomError::InvalidHashString {
            value: composite.to_string(),
            reason: reason.to_string(),
        };

        let (prefix, digest) = composite
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' separator"))?;

        let alg = HashAlgorithm::from_composite_prefix(prefix.trim())
            .ok_or_else(|| BomError::UnknownHashAlgorithm(prefix.to_string()))?;

        let digest = digest.trim();
        if digest.is_empty() {
            return Err(invalid("empty digest"));
        }
        if !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("digest is not hexadecimal"));
        }

        Ok(Self::new(alg, digest.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_composite_str_sha256() {
        let hash = HashType::from_composite_str(
            "sha256:806143ae5bfb6a3c6e736a764057db0e6a0e05e338b5630894a5f779cabb4f9b",
        )
        .unwrap();
        assert_eq!(hash.alg, HashAlgorithm::Sha256);
        assert_eq!(
            hash.content,
            "806143ae5bfb6a3c6e736a764057db0e6a0e05e338b5630894a5f779cabb4f9b"
        );
    }

    #[test]
    fn test_from_composite_str_variants() {
        assert_eq!(
            HashType::from_composite_str("md5:d41d8cd98f00b204e9800998ecf8427e")
                .unwrap()
                .alg,
            HashAlgorithm::Md5
        );
        assert_eq!(
            HashType::from_composite_str("SHA1:da39a3ee").unwrap().alg,
            HashAlgorithm::Sha1
        );
        assert_eq!(
            HashType::from_composite_str("sha3_512:abcd").unwrap().alg,
            HashAlgorithm::Sha3_512
        );
        assert_eq!(
            HashType::from_composite_str("blake2b-384:abcd")
                .unwrap()
                .alg,
            HashAlgorithm::Blake2b384
        );
        assert_eq!(
            HashType::from_composite_str("blake3:abcd").unwrap().alg,
            HashAlgorithm::Blake3
        );
    }

    #[test]
    fn test_from_composite_str_missing_separator() {
        let result = HashType::from_composite_str("sha256");
        assert!(matches!(result, Err(BomError::InvalidHashString { .. })));
    }

    #[test]
    fn test_from_composite_str_unknown_algorithm() {
        let result = HashType::from_composite_str("crc32:abcd");
        assert!(matches!(
            result,
            Err(BomError::UnknownHashAlgorithm(a)) if a == "crc32"
        ));
    }

    #[test]
    fn test_from_composite_str_bad_digest() {
        assert!(matches!(
            HashType::from_composite_str("sha256:"),
            Err(BomError::InvalidHashString { .. })
        ));
        assert!(matches!(
            HashType::from_composite_str("sha256:xyz"),
            Err(BomError::InvalidHashString { .. })
        ));
    }

    #[test]
    fn test_wire_names_round_trip() {
        for alg in HashAlgorithm::iter() {
            assert_eq!(HashAlgorithm::from_wire(alg.as_str()).unwrap(), alg);
        }
        assert_eq!(HashAlgorithm::Sha3_256.as_str(), "SHA3-256");
        assert_eq!(HashAlgorithm::Blake2b512.to_string(), "BLAKE2b-512");
    }

    #[test]
    fn test_from_wire_unknown() {
        assert!(matches!(
            HashAlgorithm::from_wire("SHA-999"),
            Err(BomError::UnknownHashAlgorithm(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_composite_sha256_keeps_digest(digest in "[0-9a-f]{1,64}") {
            let hash = HashType::from_composite_str(&format!("sha256:{}", digest)).unwrap();
            prop_assert_eq!(hash.alg, HashAlgorithm::Sha256);
            prop_assert_eq!(hash.content, digest);
        }

        #[test]
        fn prop_composite_without_separator_fails(s in "[a-z0-9]{0,20}") {
            prop_assert!(HashType::from_composite_str(&s).is_err());
        }
    }
}
