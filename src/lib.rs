//! XgamingUP Chain Parameters Core Library
//!
//! Per-network constants for an XgamingUP node: wire magic, consensus
//! thresholds, address prefixes, checkpoints, bootstrap seeds, and a
//! deterministically built genesis block whose hash is checked at startup.
//!
//! XGA is the short form used in tickers and protocol identifiers.

pub mod config;
pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod params;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Chain name (short form for tickers)
    pub const CHAIN_NAME: &str = "XGA";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "XgamingUP";
}
