//! Checkpoint tables
//!
//! Known-good (height, hash) pairs per network plus the statistics used to
//! estimate sync progress. Tables are built from fixed-size arrays, so the
//! number of entries is part of the literal's type.

use serde::Serialize;
use thiserror::Error;

use crate::crypto::Hash;

/// Work units per transaction verified with signature checks
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("table is empty")]
    Empty,
    #[error("invalid hash literal at height {height}: {literal}")]
    InvalidHash { height: u32, literal: String },
    #[error("height {height} does not follow {previous}")]
    NotIncreasing { previous: u32, height: u32 },
    #[error("height 0 is {actual}, genesis is {expected}")]
    GenesisMismatch { expected: Hash, actual: Hash },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    entries: Vec<Checkpoint>,
    /// Unix time of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Total transactions up to and including the last checkpoint
    pub transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointTable {
    /// Parse a literal table; heights must be strictly increasing
    pub fn from_literals<const N: usize>(
        entries: [(u32, &str); N],
        last_checkpoint_time: u64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        if N == 0 {
            return Err(CheckpointError::Empty);
        }

        let mut parsed: Vec<Checkpoint> = Vec::with_capacity(N);
        for (height, literal) in entries {
            let hash = Hash::from_hex(literal).map_err(|_| CheckpointError::InvalidHash {
                height,
                literal: literal.to_string(),
            })?;
            if let Some(last) = parsed.last() {
                if height <= last.height {
                    return Err(CheckpointError::NotIncreasing {
                        previous: last.height,
                        height,
                    });
                }
            }
            parsed.push(Checkpoint { height, hash });
        }

        Ok(Self {
            entries: parsed,
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        })
    }

    /// Check that the height-0 entry, if any, is the genesis hash
    pub fn verify_genesis(&self, genesis_hash: &Hash) -> Result<(), CheckpointError> {
        match self.lookup(0) {
            Some(actual) if actual != *genesis_hash => Err(CheckpointError::GenesisMismatch {
                expected: *genesis_hash,
                actual,
            }),
            _ => Ok(()),
        }
    }

    pub fn lookup(&self, height: u32) -> Option<Hash> {
        self.entries
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|i| self.entries[i].hash)
    }

    /// False only when a checkpoint exists at `height` with a different hash
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        self.lookup(height).map_or(true, |expected| expected == *hash)
    }

    pub fn last_checkpoint(&self) -> &Checkpoint {
        // Construction rejects empty tables
        &self.entries[self.entries.len() - 1]
    }

    /// Height of the last checkpoint
    pub fn total_blocks_estimate(&self) -> u32 {
        self.last_checkpoint().height
    }

    pub fn entries(&self) -> &[Checkpoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Estimate the fraction of total verification work done
    ///
    /// Transactions before the last checkpoint cost one unit each; later ones
    /// cost more when signatures are checked. Work still ahead is
    /// extrapolated from the table's transactions-per-day rate.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        tip_time: u64,
        now: u64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let days_since = |t: u64| now.saturating_sub(t) as f64 / SECONDS_PER_DAY;
        let checkpoint_tx = self.transactions_at_last_checkpoint;

        let (work_before, work_after) = if chain_tx <= checkpoint_tx {
            let cheap_before = chain_tx as f64;
            let cheap_after = (checkpoint_tx - chain_tx) as f64;
            let expensive_after =
                days_since(self.last_checkpoint_time) * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx as f64;
            let expensive_before = (chain_tx - checkpoint_tx) as f64;
            let expensive_after = days_since(tip_time) * self.transactions_per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "0000003acbcf97f39cdb4964f3d71262e6726f9f30355ff9c4443bcfa55e03b6";
    const LATER: &str = "79bcdaf228f1718536b8263c747aebd9d753570d10e11a7bd1f27e35f9281565";

    fn table() -> CheckpointTable {
        CheckpointTable::from_literals([(0, GENESIS), (54200, LATER)], 1559206604, 110783, 2000.0)
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let t = table();
        assert_eq!(t.len(), 2);
        assert_eq!(t.lookup(0), Some(Hash::from_hex(GENESIS).unwrap()));
        assert_eq!(t.lookup(54200), Some(Hash::from_hex(LATER).unwrap()));
        assert_eq!(t.lookup(1), None);
        assert_eq!(t.total_blocks_estimate(), 54200);
        assert_eq!(t.last_checkpoint().height, 54200);
    }

    #[test]
    fn test_check_block() {
        let t = table();
        let genesis = Hash::from_hex(GENESIS).unwrap();
        assert!(t.check_block(0, &genesis));
        assert!(!t.check_block(54200, &genesis));
        assert!(t.check_block(12345, &genesis));
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(
            CheckpointTable::from_literals([], 0, 0, 0.0),
            Err(CheckpointError::Empty)
        );
        assert_eq!(
            CheckpointTable::from_literals([(5, GENESIS), (5, LATER)], 0, 0, 0.0),
            Err(CheckpointError::NotIncreasing {
                previous: 5,
                height: 5
            })
        );
        assert!(matches!(
            CheckpointTable::from_literals([(0, "nothex")], 0, 0, 0.0),
            Err(CheckpointError::InvalidHash { height: 0, .. })
        ));
    }

    #[test]
    fn test_verify_genesis() {
        let t = table();
        assert!(t.verify_genesis(&Hash::from_hex(GENESIS).unwrap()).is_ok());
        assert!(matches!(
            t.verify_genesis(&Hash::zero()),
            Err(CheckpointError::GenesisMismatch { .. })
        ));

        let no_genesis = CheckpointTable::from_literals([(10, LATER)], 0, 0, 0.0).unwrap();
        assert!(no_genesis.verify_genesis(&Hash::zero()).is_ok());
    }

    #[test]
    fn test_progress_before_checkpoint() {
        let t = table();
        // At the checkpoint time, only cheap work remains
        let p = t.guess_verification_progress(55391, 0, 1559206604, true);
        assert!((p - 55391.0 / 110783.0).abs() < 1e-9);

        assert_eq!(t.guess_verification_progress(0, 0, 1559206604, true), 0.0);
    }

    #[test]
    fn test_progress_after_checkpoint() {
        let t = table();
        let now = 1559206604 + 86_400;
        // Synced to the present: nothing left to do
        assert_eq!(t.guess_verification_progress(120_000, now, now, true), 1.0);

        // One day behind: 2000 expensive tx still ahead
        let p = t.guess_verification_progress(120_000, now - 86_400, now, false);
        let expected = 120_000.0 / (120_000.0 + 2000.0);
        assert!((p - expected).abs() < 1e-9);

        let with_sigs = t.guess_verification_progress(120_000, now - 86_400, now, true);
        assert!(with_sigs < p);
        assert!((0.0..=1.0).contains(&with_sigs));
    }
}
