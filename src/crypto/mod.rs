//! Cryptography module - SHA-256d hashing, Merkle roots, Quark, public keys

mod hash;
mod keys;
mod merkle;
pub mod quark;

pub use hash::*;
pub use keys::*;
pub use merkle::*;
pub use quark::hash_quark;
