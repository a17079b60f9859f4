//! Property-based and adversarial tests for XgamingUP chain parameters
//!
//! These tests verify invariants hold under random inputs and tampering.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use xga_core::consensus::{script_num_bytes, BlockHeader, Target};
use xga_core::crypto::{compute_merkle_root, sha256d, Hash};
use xga_core::p2p::{convert_seed6, Clock, SeedSpec6, ONE_WEEK};
use xga_core::params::{build_params, CheckpointTable, Network};

fn seed_table(ports: &[u16]) -> Vec<SeedSpec6> {
    ports
        .iter()
        .enumerate()
        .map(|(i, port)| {
            let mut addr = [0u8; 16];
            addr[10] = 0xff;
            addr[11] = 0xff;
            addr[12..].copy_from_slice(&(i as u32).to_be_bytes());
            SeedSpec6 { addr, port: *port }
        })
        .collect()
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Converted seeds keep length and order, and are one to two weeks old
    #[test]
    fn prop_seed_last_seen_window(
        now in (2 * ONE_WEEK)..4_000_000_000u64,
        ports in proptest::collection::vec(any::<u16>(), 0..64),
        rng_seed in any::<u64>()
    ) {
        let seeds = seed_table(&ports);
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let out = convert_seed6(&seeds, &Clock::Fixed(now), &mut rng);

        prop_assert_eq!(out.len(), seeds.len());
        for (seed, addr) in seeds.iter().zip(&out) {
            prop_assert_eq!(addr.addr.ip, seed.addr);
            prop_assert_eq!(addr.addr.port, seed.port);
            prop_assert!(addr.last_seen >= now - 2 * ONE_WEEK);
            prop_assert!(addr.last_seen <= now - ONE_WEEK);
        }
    }

    /// A single leaf is its own merkle root
    #[test]
    fn prop_single_leaf_merkle_root(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let leaf = sha256d(&data);
        prop_assert_eq!(compute_merkle_root(&[leaf]), leaf);
    }

    /// Merkle root depends on leaf order
    #[test]
    fn prop_merkle_root_order_sensitive(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        prop_assume!(a != b);
        let (a, b) = (Hash::from_bytes(a), Hash::from_bytes(b));
        prop_assert_ne!(compute_merkle_root(&[a, b]), compute_merkle_root(&[b, a]));
    }

    /// Decoded compact targets survive re-encoding
    #[test]
    fn prop_compact_target_stable(bits in any::<u32>()) {
        if let Ok(target) = Target::from_compact(bits) {
            let again = Target::from_compact(target.to_compact());
            prop_assert_eq!(again, Ok(target));
        }
    }

    /// Script numbers never carry a redundant trailing byte
    #[test]
    fn prop_script_num_minimal(value in any::<i64>()) {
        let bytes = script_num_bytes(value);
        if let Some((last, rest)) = bytes.split_last() {
            prop_assert!(*last & 0x7f != 0 || rest.last().map_or(false, |b| b & 0x80 != 0));
        } else {
            prop_assert_eq!(value, 0);
        }
    }

    /// Blocks away from any checkpoint always pass the checkpoint check
    #[test]
    fn prop_unchecked_heights_pass(height in 1u32..54200u32, hash in any::<[u8; 32]>()) {
        let table = CheckpointTable::from_literals(
            [
                (0, "0000003acbcf97f39cdb4964f3d71262e6726f9f30355ff9c4443bcfa55e03b6"),
                (54200, "79bcdaf228f1718536b8263c747aebd9d753570d10e11a7bd1f27e35f9281565"),
            ],
            1559206604,
            110783,
            2000.0,
        ).unwrap();
        prop_assert!(table.check_block(height, &Hash::from_bytes(hash)));
    }

    /// Verification progress stays within [0, 1]
    #[test]
    fn prop_progress_is_fraction(
        chain_tx in 0u64..10_000_000u64,
        tip_time in 0u64..4_000_000_000u64,
        now in 0u64..4_000_000_000u64,
        sigchecks in any::<bool>()
    ) {
        let table = CheckpointTable::from_literals(
            [(0, "00000fc68d1d787940bf0039ade6c31b90f6ae80eb2eb2ff3ddb4f11678ecace")],
            1538474401,
            0,
            250.0,
        ).unwrap();
        let p = table.guess_verification_progress(chain_tx, tip_time, now, sigchecks);
        prop_assert!((0.0..=1.0).contains(&p));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Block hash is deterministic
    #[test]
    fn prop_block_hash_deterministic(
        version in 1i32..10i32,
        time in any::<u32>(),
        bits in any::<u32>(),
        nonce in any::<u32>()
    ) {
        let header1 = BlockHeader::new(version, Hash::zero(), Hash::zero(), time, bits, nonce);
        let header2 = header1.clone();

        prop_assert_eq!(header1.hash(), header2.hash());
    }

    /// Different nonces produce different hashes
    #[test]
    fn prop_different_nonce_different_hash(
        nonce1 in any::<u32>(),
        nonce2 in any::<u32>()
    ) {
        prop_assume!(nonce1 != nonce2);

        let header1 = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1555920000, 0x1e0ffff0, nonce1);
        let header2 = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1555920000, 0x1e0ffff0, nonce2);

        prop_assert_ne!(header1.hash(), header2.hash());
    }
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

fn build(network: Network) -> xga_core::params::ChainParams {
    let mut rng = StdRng::seed_from_u64(99);
    build_params(network, &Clock::Fixed(1_700_000_000), &mut rng).unwrap()
}

#[test]
fn test_genesis_determinism() {
    for network in Network::ALL {
        let a = build(network);
        let b = build(network);
        assert_eq!(a.genesis.hash(), b.genesis.hash());
        assert_eq!(a.genesis.header.merkle_root, b.genesis.header.merkle_root);
    }
}

#[test]
fn test_public_network_magic_distinct() {
    let main = build(Network::Main);
    let test = build(Network::Test);
    let regtest = build(Network::RegTest);
    assert_ne!(main.message_start, test.message_start);
    assert_ne!(main.message_start, regtest.message_start);
    assert_ne!(test.message_start, regtest.message_start);
}

#[test]
fn test_genesis_mined_under_own_limit() {
    for network in Network::ALL {
        let p = build(network);
        let target = Target::from_compact(p.genesis.header.bits).unwrap();
        assert!(target <= p.consensus.pow_limit);
        assert!(Target::from_hash(&p.genesis_hash) <= target);
    }
}

#[test]
fn test_nonce_tamper_breaks_genesis() {
    let p = build(Network::Main);
    let mut header = p.genesis.header.clone();
    header.nonce = header.nonce.wrapping_add(1);
    assert_ne!(header.hash(), p.genesis_hash);
}

#[test]
fn test_profile_serializes_to_json() {
    let p = build(Network::RegTest);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["network"], "regtest");
    assert_eq!(json["default_port"], 19110);
    assert_eq!(
        json["genesis_hash"],
        "00000c56b6c1ce252cdbca2946eb499023de10e05894224e1f4ccd045d3e4d14"
    );
    assert_eq!(json["checkpoints"]["entries"][0]["height"], 0);
}
