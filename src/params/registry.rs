//! Process-wide parameter registry
//!
//! All four profiles are built and validated together, once, before the
//! first one is handed out, and live for the rest of the process. Exactly
//! one network is active at a time; reading the active profile before
//! selecting one is fatal. Only the UnitTest profile can be
//! modified, and only while it is the active network.

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

use super::{build_params, fatal, ChainParams, Network, ParamsError};
use crate::config::ChainOptions;
use crate::p2p::Clock;

struct Profiles {
    main: Arc<ChainParams>,
    test: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    unittest: RwLock<Arc<ChainParams>>,
}

impl Profiles {
    fn build<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> Result<Self, ParamsError> {
        Ok(Self {
            main: Arc::new(build_params(Network::Main, clock, rng)?),
            test: Arc::new(build_params(Network::Test, clock, rng)?),
            regtest: Arc::new(build_params(Network::RegTest, clock, rng)?),
            unittest: RwLock::new(Arc::new(build_params(Network::UnitTest, clock, rng)?)),
        })
    }
}

static PROFILES: OnceCell<Profiles> = OnceCell::new();

static ACTIVE: Lazy<RwLock<Option<Network>>> = Lazy::new(|| RwLock::new(None));

fn profiles() -> &'static Profiles {
    PROFILES.get_or_init(|| {
        Profiles::build(&Clock::System, &mut rand::thread_rng()).unwrap_or_else(|err| fatal(err))
    })
}

/// Build and validate every profile with the system clock
///
/// Runs at most once per process; selection calls it implicitly.
///
/// # Panics
/// If any profile violates a construction invariant.
pub fn init_params() {
    profiles();
}

/// Build every profile with the given time and random sources
///
/// Returns false if the profiles were already built, in which case the
/// existing ones are kept.
///
/// # Panics
/// If any profile violates a construction invariant.
pub fn init_params_with<R: Rng + ?Sized>(clock: &Clock, rng: &mut R) -> bool {
    let mut built = false;
    PROFILES.get_or_init(|| {
        built = true;
        Profiles::build(clock, rng).unwrap_or_else(|err| fatal(err))
    });
    built
}

/// Make `network` the active network
pub fn select_params(network: Network) {
    init_params();
    let selected = params_for(network);
    *ACTIVE.write() = Some(network);
    info!(
        network = %network,
        port = selected.default_port,
        genesis = %selected.genesis_hash,
        "selected chain parameters"
    );
}

/// Select the network named by command-line options
pub fn select_params_from_options(options: &ChainOptions) -> Result<Network, ParamsError> {
    let network = options.network()?;
    select_params(network);
    Ok(network)
}

pub fn active_network() -> Option<Network> {
    *ACTIVE.read()
}

/// The active profile
///
/// # Panics
/// If no network has been selected.
pub fn params() -> Arc<ChainParams> {
    match active_network() {
        Some(network) => params_for(network),
        None => fatal(ParamsError::NoActiveNetwork),
    }
}

/// Profile for `network`, regardless of which one is active
pub fn params_for(network: Network) -> Arc<ChainParams> {
    let profiles = profiles();
    match network {
        Network::Main => Arc::clone(&profiles.main),
        Network::Test => Arc::clone(&profiles.test),
        Network::RegTest => Arc::clone(&profiles.regtest),
        Network::UnitTest => Arc::clone(&profiles.unittest.read()),
    }
}

fn ensure_unittest_active() {
    match active_network() {
        Some(Network::UnitTest) => {}
        Some(active) => fatal(ParamsError::NotModifiable { active }),
        None => fatal(ParamsError::NoActiveNetwork),
    }
}

/// Setters for the UnitTest profile
///
/// # Panics
/// If UnitTest is not the active network.
pub fn modifiable_params() -> ModifiableParams {
    ensure_unittest_active();
    ModifiableParams { _private: () }
}

/// Handle for adjusting UnitTest consensus thresholds and flags
///
/// Updates are copy-on-write: snapshots returned by `params()` before a
/// change keep their old values.
pub struct ModifiableParams {
    _private: (),
}

impl ModifiableParams {
    fn update(&self, apply: impl FnOnce(&mut ChainParams)) {
        ensure_unittest_active();
        let mut current = profiles().unittest.write();
        apply(Arc::make_mut(&mut current));
    }

    pub fn set_subsidy_halving_interval(&self, interval: u32) {
        self.update(|p| p.consensus.subsidy_halving_interval = interval);
    }

    pub fn set_enforce_block_upgrade_majority(&self, majority: u32) {
        self.update(|p| p.consensus.enforce_block_upgrade_majority = majority);
    }

    pub fn set_reject_block_outdated_majority(&self, majority: u32) {
        self.update(|p| p.consensus.reject_block_outdated_majority = majority);
    }

    pub fn set_to_check_block_upgrade_majority(&self, window: u32) {
        self.update(|p| p.consensus.to_check_block_upgrade_majority = window);
    }

    pub fn set_default_consistency_checks(&self, enabled: bool) {
        self.update(|p| p.flags.default_consistency_checks = enabled);
    }

    pub fn set_allow_min_difficulty_blocks(&self, allowed: bool) {
        self.update(|p| p.flags.allow_min_difficulty_blocks = allowed);
    }

    pub fn set_skip_proof_of_work_check(&self, skip: bool) {
        self.update(|p| p.flags.skip_proof_of_work_check = skip);
    }
}
