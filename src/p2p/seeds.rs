//! Seed Node Configuration
//!
//! DNS seed descriptors and compiled-in fixed seed tables used for initial
//! peer discovery, plus conversion of the raw tables into peer addresses.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Clock, NetAddress, SeedAddress, NODE_NETWORK};

/// Seconds in one week
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// Raw fixed-seed record: 16-byte address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// DNS seed: display name and host queried for peer addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Mainnet fixed seeds
pub const MAIN_SEEDS: &[SeedSpec6] = &[];

/// Testnet fixed seeds
pub const TEST_SEEDS: &[SeedSpec6] = &[];

/// Convert raw seed records into peer addresses
///
/// Each address is stamped as last seen between one and two weeks before
/// `clock.now()`. Output order matches input order.
pub fn convert_seed6<R: Rng + ?Sized>(
    seeds: &[SeedSpec6],
    clock: &Clock,
    rng: &mut R,
) -> Vec<SeedAddress> {
    let now = clock.now();
    let addresses: Vec<SeedAddress> = seeds
        .iter()
        .map(|seed| SeedAddress {
            addr: NetAddress::new(seed.addr, seed.port),
            services: NODE_NETWORK,
            last_seen: now
                .saturating_sub(rng.gen_range(0..ONE_WEEK))
                .saturating_sub(ONE_WEEK),
        })
        .collect();

    debug!(count = addresses.len(), "converted fixed seeds");
    addresses
}
