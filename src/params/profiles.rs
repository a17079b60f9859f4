//! Network profiles
//!
//! Main sets every field. Test starts from Main and overrides a subset,
//! RegTest starts from Test, and UnitTest starts from Main. Each builder
//! finishes by rebuilding its genesis block and validating the result.

use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use super::{
    Base58Prefixes, ChainFlags, ChainParams, CheckpointTable, ConsensusParams, MasternodeParams,
    Network, ParamsError,
};
use crate::constants::COIN;
use crate::consensus::Target;
use crate::crypto::{Hash, PublicKey};
use crate::node::{build_genesis, GenesisSpec, GENESIS_MERKLE_ROOT, GENESIS_OUTPUT_KEY};
use crate::p2p::{convert_seed6, Clock, DnsSeed, MAIN_SEEDS, TEST_SEEDS};

pub const MAIN_MESSAGE_START: [u8; 4] = [0xb1, 0x3a, 0x2b, 0xc4];
pub const TEST_MESSAGE_START: [u8; 4] = [0x1c, 0x2a, 0xb4, 0x02];
pub const REGTEST_MESSAGE_START: [u8; 4] = [0xa2, 0x02, 0xc1, 0xd3];

const MAIN_GENESIS_HASH: &str = "0000003acbcf97f39cdb4964f3d71262e6726f9f30355ff9c4443bcfa55e03b6";
const TEST_GENESIS_HASH: &str = "00000fc68d1d787940bf0039ade6c31b90f6ae80eb2eb2ff3ddb4f11678ecace";
const REGTEST_GENESIS_HASH: &str = "00000c56b6c1ce252cdbca2946eb499023de10e05894224e1f4ccd045d3e4d14";

const MAIN_ALERT_KEY: &str = "041F97DAE0C2570B67DCD62FCB20F422500C4DE2AAA0C5965D25BC144CEED5C403CFB18261514FD517DA098D3BC7E3638914F7B896A6ADF0839C886D375697136E";
const TEST_ALERT_KEY: &str = "04FA13D2BBBC1DD6AA0FBA147ADFFA94F389B98A5ABD8A554BE1556FDF6FF457C6A77241B95F6E4B6206971805E97968A6F90936A869406D09D09F77BD4265AB6B";
const MAIN_SPORK_KEY: &str = "04F1C02AC30661551FDD3A2A065B54E3CB2B33762ACBFD03866FE2FF18E5778FDFF1F0518CD309A2DCF8C7FF1BC9426A1F0D9550FE6FC041DBD63A68E7077211E3";
const TEST_SPORK_KEY: &str = "04A26A326715D2CF607AB32A6340D1F54D9EBCD4E2CB05286881987C93ADCF7CFA2582BF164CEB9B0051D627845CAB6562DCF64520EF31CB1214154B8B677CA05A";

/// Masternode payments begin this long after genesis
const MASTERNODE_PAYMENTS_DELAY: u64 = 4 * 60 * 60;

const MAIN_DNS_SEEDS: [(&str, &str); 10] = [
    ("xgamingup.online", "dnsseed.xgamingup.online"),
    ("seed1.xgamingup.online", "seed1.xgamingup.online"),
    ("seed2.xgamingup.online", "seed2.xgamingup.online"),
    ("seed3.xgamingup.online", "seed3.xgamingup.online"),
    ("seed4.xgamingup.online", "seed4.xgamingup.online"),
    ("seed5.xgamingup.online", "seed5.xgamingup.online"),
    ("seed6.xgamingup.online", "seed6.xgamingup.online"),
    ("seed7.xgamingup.online", "seed7.xgamingup.online"),
    ("seed8.xgamingup.online", "seed8.xgamingup.online"),
    ("seed9.xgamingup.online", "seed9.xgamingup.online"),
];

fn parse_key(network: Network, field: &'static str, hex: &str) -> Result<PublicKey, ParamsError> {
    PublicKey::from_hex(hex).map_err(|source| ParamsError::InvalidKey {
        network,
        field,
        source,
    })
}

fn parse_hash(network: Network, literal: &'static str) -> Result<Hash, ParamsError> {
    Hash::from_hex(literal).map_err(|_| ParamsError::InvalidHashLiteral { network, literal })
}

fn checkpoints<const N: usize>(
    network: Network,
    entries: [(u32, &str); N],
    last_checkpoint_time: u64,
    transactions_at_last_checkpoint: u64,
    transactions_per_day: f64,
) -> Result<Arc<CheckpointTable>, ParamsError> {
    CheckpointTable::from_literals(
        entries,
        last_checkpoint_time,
        transactions_at_last_checkpoint,
        transactions_per_day,
    )
    .map(Arc::new)
    .map_err(|source| ParamsError::Checkpoints { network, source })
}

fn ensure_distinct_magic(params: &ChainParams, others: &[(Network, [u8; 4])]) -> Result<(), ParamsError> {
    match others.iter().find(|(_, magic)| *magic == params.message_start) {
        Some((other, _)) => Err(ParamsError::DuplicateMagic(params.network, *other)),
        None => Ok(()),
    }
}

fn finish(params: ChainParams) -> Result<ChainParams, ParamsError> {
    params.validate()?;
    debug!(
        network = %params.network,
        genesis = %params.genesis_hash,
        port = params.default_port,
        "built chain parameters"
    );
    Ok(params)
}

/// Production network
pub fn main_params<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> Result<ChainParams, ParamsError> {
    let network = Network::Main;

    let genesis_key = parse_key(network, "genesis output key", GENESIS_OUTPUT_KEY)?;
    let genesis_spec = GenesisSpec::new(&genesis_key, 1555920000, 0x1e0ffff0, 237311);
    let (genesis, _) = build_genesis(&genesis_spec);

    let params = ChainParams {
        network,
        name: network.name(),
        message_start: MAIN_MESSAGE_START,
        alert_key: parse_key(network, "alert key", MAIN_ALERT_KEY)?,
        default_port: 17140,
        miner_threads: 0,
        consensus: ConsensusParams {
            pow_limit: Target::from_shift(16),
            subsidy_halving_interval: 1_050_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            target_timespan: 60,
            target_spacing: 60,
            maturity: 155,
            max_money_out: 20_000_000 * COIN,
            min_stake_input: 10 * COIN,
            last_pow_block: 500,
            modifier_update_block: 1,
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![75],
            script_address: vec![4],
            secret_key: vec![38],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x77],
        },
        genesis,
        genesis_hash: parse_hash(network, MAIN_GENESIS_HASH)?,
        genesis_merkle_root: parse_hash(network, GENESIS_MERKLE_ROOT)?,
        dns_seeds: MAIN_DNS_SEEDS
            .iter()
            .map(|(name, host)| DnsSeed::new(name, host))
            .collect(),
        fixed_seeds: convert_seed6(MAIN_SEEDS, clock, rng),
        flags: ChainFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        masternode: MasternodeParams {
            spork_key: parse_key(network, "spork key", MAIN_SPORK_KEY)?,
            pool_dummy_address: "XSnKjocNbo5FniBjoripCtZ85pP8sEGg4h".to_string(),
            pool_max_transactions: 3,
            masternode_count_drift: 20,
            start_masternode_payments: genesis_spec.time as u64 + MASTERNODE_PAYMENTS_DELAY,
            budget_fee_confirmations: 6,
        },
        genesis_spec,
        checkpoints: checkpoints(
            network,
            [
                (0, MAIN_GENESIS_HASH),
                (54200, "79bcdaf228f1718536b8263c747aebd9d753570d10e11a7bd1f27e35f9281565"),
            ],
            1559206604,
            110783,
            2000.0,
        )?,
    };

    finish(params)
}

fn test_from<R: Rng + ?Sized>(
    main: ChainParams,
    clock: &Clock,
    rng: &mut R,
) -> Result<ChainParams, ParamsError> {
    let network = Network::Test;
    let main_magic = main.message_start;
    let genesis_spec = GenesisSpec {
        time: 1555920001,
        nonce: 1139226,
        ..main.genesis_spec.clone()
    };

    let mut params = ChainParams {
        network,
        name: network.name(),
        message_start: TEST_MESSAGE_START,
        alert_key: parse_key(network, "alert key", TEST_ALERT_KEY)?,
        default_port: 18140,
        miner_threads: 1,
        consensus: ConsensusParams {
            enforce_block_upgrade_majority: 51,
            reject_block_outdated_majority: 75,
            to_check_block_upgrade_majority: 100,
            target_timespan: 60,
            target_spacing: 60,
            last_pow_block: 2000,
            maturity: 55,
            modifier_update_block: 1,
            max_money_out: 20_000_000 * COIN,
            min_stake_input: 10 * COIN,
            ..main.consensus
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![83],
            script_address: vec![18],
            secret_key: vec![83],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        },
        dns_seeds: Vec::new(),
        fixed_seeds: convert_seed6(TEST_SEEDS, clock, rng),
        flags: ChainFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            ..main.flags
        },
        masternode: MasternodeParams {
            spork_key: parse_key(network, "spork key", TEST_SPORK_KEY)?,
            pool_dummy_address: "xSnKjocNbo5FniBjoripCtZ85pP8sEGg4h".to_string(),
            pool_max_transactions: 2,
            masternode_count_drift: 3,
            start_masternode_payments: genesis_spec.time as u64 + MASTERNODE_PAYMENTS_DELAY,
            budget_fee_confirmations: 3,
        },
        checkpoints: checkpoints(network, [(0, TEST_GENESIS_HASH)], 1538474401, 0, 250.0)?,
        ..main
    };

    let merkle_root = params.genesis_merkle_root;
    params.set_genesis(genesis_spec, parse_hash(network, TEST_GENESIS_HASH)?, merkle_root);
    ensure_distinct_magic(&params, &[(Network::Main, main_magic)])?;

    finish(params)
}

fn regtest_from(test: ChainParams) -> Result<ChainParams, ParamsError> {
    let network = Network::RegTest;
    let test_magic = test.message_start;
    let genesis_spec = GenesisSpec {
        time: 1555920002,
        bits: 0x1e0ffff0,
        nonce: 228719,
        ..test.genesis_spec.clone()
    };

    let mut params = ChainParams {
        network,
        name: network.name(),
        message_start: REGTEST_MESSAGE_START,
        default_port: 19110,
        miner_threads: 1,
        consensus: ConsensusParams {
            pow_limit: Target::from_shift(1),
            subsidy_halving_interval: 1500,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            target_timespan: 24 * 60 * 60,
            target_spacing: 60,
            min_stake_input: 10 * COIN,
            ..test.consensus
        },
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        flags: ChainFlags {
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..test.flags
        },
        checkpoints: checkpoints(network, [(0, REGTEST_GENESIS_HASH)], 1538474402, 0, 100.0)?,
        ..test
    };

    let merkle_root = params.genesis_merkle_root;
    params.set_genesis(genesis_spec, parse_hash(network, REGTEST_GENESIS_HASH)?, merkle_root);
    ensure_distinct_magic(
        &params,
        &[(Network::Main, MAIN_MESSAGE_START), (Network::Test, test_magic)],
    )?;

    finish(params)
}

fn unittest_from(main: ChainParams) -> Result<ChainParams, ParamsError> {
    let network = Network::UnitTest;

    let params = ChainParams {
        network,
        name: network.name(),
        default_port: 20110,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        flags: ChainFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..main.flags
        },
        ..main
    };

    finish(params)
}

/// Public test network
pub fn test_params<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> Result<ChainParams, ParamsError> {
    let main = main_params(clock, rng)?;
    test_from(main, clock, rng)
}

/// Isolated local network with trivial difficulty
pub fn regtest_params<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> Result<ChainParams, ParamsError> {
    let test = test_params(clock, rng)?;
    regtest_from(test)
}

/// In-process profile for automated tests; shares Main's checkpoints
pub fn unittest_params<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> Result<ChainParams, ParamsError> {
    let main = main_params(clock, rng)?;
    unittest_from(main)
}

/// Build the profile for `network`
pub fn build_params<R: Rng + ?Sized>(
    network: Network,
    clock: &Clock,
    rng: &mut R,
) -> Result<ChainParams, ParamsError> {
    match network {
        Network::Main => main_params(clock, rng),
        Network::Test => test_params(clock, rng),
        Network::RegTest => regtest_params(clock, rng),
        Network::UnitTest => unittest_params(clock, rng),
    }
}
