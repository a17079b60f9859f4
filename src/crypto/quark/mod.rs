//! Quark proof-of-work hash
//!
//! Nine chained 512-bit hashes over six algorithms. Three of the stages pick
//! between two algorithms based on bit 3 of the first byte of the running
//! digest. The block hash is the first 256 bits of the final digest.

mod blake;
mod bmw;

pub use blake::blake512;
pub use bmw::bmw512;

use groestl::Groestl512;
use jh::Jh512;
use sha3::{Digest, Keccak512};
use skein::{consts::U64, Skein512};

use super::Hash;

const BRANCH_MASK: u8 = 0x08;

fn digest512<D: Digest>(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

/// Keccak-512 with the original (pre-FIPS) padding
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    digest512::<Keccak512>(data)
}

pub fn groestl512(data: &[u8]) -> [u8; 64] {
    digest512::<Groestl512>(data)
}

pub fn jh512(data: &[u8]) -> [u8; 64] {
    digest512::<Jh512>(data)
}

/// Skein-512 with a 512-bit output
pub fn skein512(data: &[u8]) -> [u8; 64] {
    digest512::<Skein512<U64>>(data)
}

#[inline]
fn branch(digest: &[u8; 64]) -> bool {
    digest[0] & BRANCH_MASK != 0
}

/// Quark digest of `data`, truncated to 256 bits
pub fn hash_quark(data: &[u8]) -> Hash {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = if branch(&h) { groestl512(&h) } else { skein512(&h) };
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = if branch(&h) { blake512(&h) } else { bmw512(&h) };
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = if branch(&h) { keccak512(&h) } else { jh512(&h) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    Hash(out)
}
