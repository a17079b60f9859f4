//! Proof-of-work targets
//!
//! Targets are 256-bit unsigned numbers held as big-endian bytes, so the
//! derived ordering is numeric ordering. The compact `bits` form packs an
//! exponent byte and a 23-bit mantissa with a sign bit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::crypto::Hash;

/// Proof-of-work errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PowError {
    #[error("Compact target {0:#010x} is negative")]
    Negative(u32),
    #[error("Compact target {0:#010x} overflows 256 bits")]
    Overflow(u32),
    #[error("Compact target {0:#010x} is zero")]
    Zero(u32),
    #[error("Target {target} is above the proof-of-work limit {limit}")]
    AboveLimit { target: Target, limit: Target },
    #[error("Hash {hash} does not meet target {target}")]
    HashAboveTarget { hash: Hash, target: Target },
}

/// 256-bit target, big-endian
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(pub [u8; 32]);

impl Target {
    /// All-ones value shifted right by `shift` bits
    pub fn from_shift(shift: u32) -> Self {
        let mut bytes = [0xffu8; 32];
        let shift = shift.min(256) as usize;
        let whole = shift / 8;
        for b in bytes.iter_mut().take(whole) {
            *b = 0;
        }
        if whole < 32 {
            bytes[whole] = 0xff >> (shift % 8);
        }
        Target(bytes)
    }

    /// Decode compact bits, rejecting negative, overflowing and zero targets
    pub fn from_compact(bits: u32) -> Result<Self, PowError> {
        let size = (bits >> 24) as i32;
        let mut word = bits & 0x007f_ffff;

        if word != 0 && bits & 0x0080_0000 != 0 {
            return Err(PowError::Negative(bits));
        }
        if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
            return Err(PowError::Overflow(bits));
        }

        let mut target = [0u8; 32];
        if size <= 3 {
            word >>= 8 * (3 - size);
            target[29..32].copy_from_slice(&word.to_be_bytes()[1..4]);
        } else {
            // Least significant mantissa byte lands at index 34 - size
            for i in 0..3 {
                let pos = 34 - size - i;
                if (0..32).contains(&pos) {
                    target[pos as usize] = (word >> (8 * i)) as u8;
                }
            }
        }

        let target = Target(target);
        if target.is_zero() {
            return Err(PowError::Zero(bits));
        }
        Ok(target)
    }

    /// Encode to compact bits
    pub fn to_compact(&self) -> u32 {
        let Some(first) = self.0.iter().position(|b| *b != 0) else {
            return 0;
        };

        let mut size = (32 - first) as u32;
        let byte_at = |i: usize| self.0.get(i).copied().unwrap_or(0) as u32;
        let mut mantissa = (byte_at(first) << 16) | (byte_at(first + 1) << 8) | byte_at(first + 2);

        if mantissa & 0x0080_0000 != 0 {
            mantissa >>= 8;
            size += 1;
        }
        (size << 24) | mantissa
    }

    /// Interpret a block hash as a number
    pub fn from_hash(hash: &Hash) -> Self {
        Target(hash.to_be_bytes())
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({})", self.to_hex())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(text).map_err(serde::de::Error::custom)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("target must be 32 bytes"))?;
        Ok(Target(arr))
    }
}

/// Check that `hash` satisfies `bits` and that `bits` is within `pow_limit`
pub fn check_proof_of_work(hash: &Hash, bits: u32, pow_limit: &Target) -> Result<(), PowError> {
    let target = Target::from_compact(bits)?;

    if target > *pow_limit {
        return Err(PowError::AboveLimit {
            target,
            limit: *pow_limit,
        });
    }

    if Target::from_hash(hash) > target {
        return Err(PowError::HashAboveTarget { hash: *hash, target });
    }

    Ok(())
}
