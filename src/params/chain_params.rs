//! Per-network chain parameters
//!
//! A `ChainParams` value carries every constant a node needs before it can
//! validate a block: wire magic, consensus thresholds, address prefixes, the
//! genesis block, bootstrap seeds and checkpoints.

use serde::Serialize;
use std::sync::Arc;

use super::{CheckpointTable, Network, ParamsError};
use crate::consensus::{Block, Target};
use crate::crypto::{Hash, PublicKey};
use crate::node::{build_genesis, verify_genesis, verify_genesis_work, GenesisSpec};
use crate::p2p::{DnsSeed, SeedAddress};

/// Kinds of base58 version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    pub ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}

/// Consensus thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    /// Easiest allowed proof-of-work target
    pub pow_limit: Target,
    pub subsidy_halving_interval: u32,
    pub max_reorganization_depth: u32,
    /// Upgrade majority needed to enforce new block rules
    pub enforce_block_upgrade_majority: u32,
    /// Upgrade majority needed to reject outdated blocks
    pub reject_block_outdated_majority: u32,
    /// Window of recent blocks counted for the two majorities
    pub to_check_block_upgrade_majority: u32,
    /// Seconds
    pub target_timespan: u32,
    /// Seconds
    pub target_spacing: u32,
    /// Confirmations before a coinbase or stake can be spent
    pub maturity: u32,
    pub max_money_out: i64,
    pub min_stake_input: i64,
    pub last_pow_block: u32,
    pub modifier_update_block: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Masternode, budget and spork constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasternodeParams {
    pub spork_key: PublicKey,
    pub pool_dummy_address: String,
    pub pool_max_transactions: u32,
    pub masternode_count_drift: u32,
    /// Unix time
    pub start_masternode_payments: u64,
    pub budget_fee_confirmations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    pub network: Network,
    pub name: &'static str,
    pub message_start: [u8; 4],
    pub alert_key: PublicKey,
    pub default_port: u16,
    pub miner_threads: u32,
    pub consensus: ConsensusParams,
    pub base58_prefixes: Base58Prefixes,
    pub genesis_spec: GenesisSpec,
    pub genesis: Block,
    /// Expected genesis hash, checked by `validate`
    pub genesis_hash: Hash,
    /// Expected genesis merkle root, checked by `validate`
    pub genesis_merkle_root: Hash,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub flags: ChainFlags,
    pub masternode: MasternodeParams,
    pub checkpoints: Arc<CheckpointTable>,
}

impl ChainParams {
    /// Replace the genesis recipe and the values it must reproduce
    pub fn set_genesis(&mut self, spec: GenesisSpec, expected_hash: Hash, expected_merkle_root: Hash) {
        let (block, _) = build_genesis(&spec);
        self.genesis_spec = spec;
        self.genesis = block;
        self.genesis_hash = expected_hash;
        self.genesis_merkle_root = expected_merkle_root;
    }

    /// Check every construction-time invariant
    pub fn validate(&self) -> Result<(), ParamsError> {
        let network = self.network;

        verify_genesis(&self.genesis, &self.genesis_hash, &self.genesis_merkle_root)
            .and_then(|()| verify_genesis_work(&self.genesis, &self.consensus.pow_limit))
            .map_err(|source| ParamsError::Genesis { network, source })?;

        self.checkpoints
            .verify_genesis(&self.genesis_hash)
            .map_err(|source| ParamsError::Checkpoints { network, source })?;

        if self.consensus.target_spacing == 0 {
            return Err(ParamsError::ZeroTargetSpacing { network });
        }

        Ok(())
    }

    /// Blocks per difficulty retarget
    pub fn interval(&self) -> u32 {
        self.consensus.target_timespan / self.consensus.target_spacing
    }

    pub fn is_stake_modifier_v2(&self, height: u32) -> bool {
        height >= self.consensus.modifier_update_block
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    pub fn is_unit_test(&self) -> bool {
        self.network == Network::UnitTest
    }
}
