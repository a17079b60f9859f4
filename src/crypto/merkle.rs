//! Merkle tree root over transaction ids
//!
//! Pairs are combined with SHA-256d; an odd level duplicates its last node.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// A single hash is its own root.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let Some(first) = hashes.first() else {
        return Hash::zero();
    };

    if hashes.len() == 1 {
        return *first;
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        current_level = current_level
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    current_level[0]
}
