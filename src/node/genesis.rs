//! Genesis block construction for XgamingUP networks
//!
//! Every network's genesis block is a single unspendable coinbase paying a
//! fixed key. The recipe is literal, and the resulting hash and merkle root
//! are checked against hard-coded values before a profile is accepted.

use serde::Serialize;
use thiserror::Error;

use crate::consensus::{
    check_proof_of_work, Block, BlockHeader, PowError, Script, Target, Transaction, TxOut,
    OP_CHECKSIG,
};
use crate::crypto::{Hash, PublicKey};

/// Text embedded in every genesis coinbase
pub const GENESIS_TIMESTAMP: &str = "The Bitcoin protocol does not care";

/// Key paid by the genesis output (uncompressed SEC1)
pub const GENESIS_OUTPUT_KEY: &str = "0442976F7200975E487B03E4C879DECCDB801A029F0551ED897BB0707ADB58EB6FE5CFF64EC9F60A70E0729DCBE5B6969D4EB584F69997D9AFDC1E6CB3A9BCAB4D";

/// Merkle root shared by all networks
pub const GENESIS_MERKLE_ROOT: &str =
    "2af901602794727aad2d46f89dca5b1097fe2ea66c2d4b926b8d6d90620a5732";

/// First push of the coinbase script
const COINBASE_MARKER: i64 = 486604799;

/// Second push of the coinbase script
const COINBASE_EXTRA_NONCE: i64 = 4;

/// Genesis verification errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("Genesis hash mismatch: expected {expected}, computed {actual}")]
    HashMismatch { expected: Hash, actual: Hash },
    #[error("Genesis merkle root mismatch: expected {expected}, computed {actual}")]
    MerkleRootMismatch { expected: Hash, actual: Hash },
    #[error("Genesis block fails proof of work: {0}")]
    ProofOfWork(#[from] PowError),
}

/// Literal inputs that fully determine a genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisSpec {
    pub timestamp: String,
    pub output_script: Script,
    pub output_value: i64,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisSpec {
    /// Spec paying `key` with zero value and version 1
    pub fn new(key: &PublicKey, time: u32, bits: u32, nonce: u32) -> Self {
        Self {
            timestamp: GENESIS_TIMESTAMP.to_string(),
            output_script: pay_to_pubkey(key),
            output_value: 0,
            version: 1,
            time,
            bits,
            nonce,
        }
    }

    /// The coinbase signature script
    pub fn coinbase_script(&self) -> Script {
        Script::new()
            .push_int(COINBASE_MARKER)
            .push_num(COINBASE_EXTRA_NONCE)
            .push_slice(self.timestamp.as_bytes())
    }
}

/// `<key> OP_CHECKSIG`
pub fn pay_to_pubkey(key: &PublicKey) -> Script {
    Script::new()
        .push_slice(key.as_bytes())
        .push_opcode(OP_CHECKSIG)
}

/// Build the genesis block and its hash
///
/// Pure and deterministic: the same spec always yields the same block.
pub fn build_genesis(spec: &GenesisSpec) -> (Block, Hash) {
    let coinbase = Transaction::coinbase(
        spec.coinbase_script(),
        vec![TxOut {
            value: spec.output_value,
            script_pubkey: spec.output_script.clone(),
        }],
    );

    let mut block = Block::new(
        BlockHeader::new(spec.version, Hash::zero(), Hash::zero(), spec.time, spec.bits, spec.nonce),
        vec![coinbase],
    );
    block.header.merkle_root = block.build_merkle_root();

    let hash = block.hash();
    (block, hash)
}

/// Compare a built genesis block against its expected constants
pub fn verify_genesis(
    block: &Block,
    expected_hash: &Hash,
    expected_merkle_root: &Hash,
) -> Result<(), GenesisError> {
    let actual = block.header.merkle_root;
    if actual != *expected_merkle_root {
        return Err(GenesisError::MerkleRootMismatch {
            expected: *expected_merkle_root,
            actual,
        });
    }

    let actual = block.hash();
    if actual != *expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: *expected_hash,
            actual,
        });
    }

    Ok(())
}

/// Check that the genesis block meets its own target within `pow_limit`
pub fn verify_genesis_work(block: &Block, pow_limit: &Target) -> Result<(), GenesisError> {
    check_proof_of_work(&block.hash(), block.header.bits, pow_limit)?;
    Ok(())
}
