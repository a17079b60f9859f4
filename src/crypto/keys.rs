//! secp256k1 public keys carried as network constants
//!
//! Keys are stored in their SEC1 encoding exactly as they appear in scripts
//! and on the wire. Parsing checks that the bytes name a point on the curve.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Key errors
#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("Invalid hex in public key: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid public key")]
    InvalidPublicKey,
}

/// SEC1-encoded secp256k1 public key (33 or 65 bytes)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Create from SEC1 bytes, rejecting anything that is not a curve point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        k256::PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(PublicKey(bytes.to_vec()))
    }

    /// Create from hex (either case)
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Whether this is the 65-byte uncompressed form
    pub fn is_uncompressed(&self) -> bool {
        self.0.len() == 65
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        PublicKey::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_KEY: &str = "0442976F7200975E487B03E4C879DECCDB801A029F0551ED897BB0707ADB58EB6FE5CFF64EC9F60A70E0729DCBE5B6969D4EB584F69997D9AFDC1E6CB3A9BCAB4D";

    #[test]
    fn test_parse_uncompressed_key() {
        let key = PublicKey::from_hex(GENESIS_KEY).unwrap();
        assert!(key.is_uncompressed());
        assert_eq!(key.as_bytes()[0], 0x04);
        assert_eq!(key.to_hex(), GENESIS_KEY.to_lowercase());
    }

    #[test]
    fn test_off_curve_point_rejected() {
        let mut bytes = hex::decode(GENESIS_KEY).unwrap();
        bytes[64] ^= 0x01;
        assert_eq!(PublicKey::from_bytes(&bytes), Err(KeyError::InvalidPublicKey));
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert!(matches!(
            PublicKey::from_hex("04zz"),
            Err(KeyError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hex_error_carries_position() {
        assert_eq!(
            PublicKey::from_hex("04zz"),
            Err(KeyError::InvalidHex(hex::FromHexError::InvalidHexCharacter {
                c: 'z',
                index: 2
            }))
        );
        assert_eq!(
            PublicKey::from_hex("042"),
            Err(KeyError::InvalidHex(hex::FromHexError::OddLength))
        );
    }
}
