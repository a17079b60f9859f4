//! Block structure
//!
//! Defines the block header and block. The header hash is the Quark digest of
//! the 80-byte header serialization.

use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::crypto::{compute_merkle_root, hash_quark, Hash};

/// Serialized header length
pub const HEADER_SIZE: usize = 80;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(self.prev_hash.as_bytes());
        bytes[36..68].copy_from_slice(self.merkle_root.as_bytes());
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        hash_quark(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the transaction ids
    pub fn build_merkle_root(&self) -> Hash {
        let txids: Vec<Hash> = self.transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_genesis_header() -> BlockHeader {
        BlockHeader::new(
            1,
            Hash::zero(),
            Hash::from_hex("2af901602794727aad2d46f89dca5b1097fe2ea66c2d4b926b8d6d90620a5732")
                .unwrap(),
            1555920000,
            0x1e0ffff0,
            237311,
        )
    }

    #[test]
    fn test_block_header_serialization() {
        let bytes = main_genesis_header().to_bytes();
        assert_eq!(bytes.len(), 80);
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[72..76], &[0xf0, 0xff, 0x0f, 0x1e]);
        assert_eq!(&bytes[76..80], &237311u32.to_le_bytes());
    }

    #[test]
    fn test_header_hash_is_quark() {
        assert_eq!(
            main_genesis_header().hash().to_hex(),
            "0000003acbcf97f39cdb4964f3d71262e6726f9f30355ff9c4443bcfa55e03b6"
        );
    }

    #[test]
    fn test_genesis_block_detection() {
        let block = Block::new(main_genesis_header(), vec![]);
        assert!(block.is_genesis());
        assert_eq!(block.build_merkle_root(), Hash::zero());

        let mut child = block.clone();
        child.header.prev_hash = block.hash();
        assert!(!child.is_genesis());
    }
}
