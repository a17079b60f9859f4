//! Chain parameter errors

use thiserror::Error;
use tracing::error;

use super::{CheckpointError, Network};
use crate::crypto::KeyError;
use crate::node::GenesisError;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Conflicting network selection: {0}")]
    ConflictingNetworkFlags(String),

    #[error("No network selected")]
    NoActiveNetwork,

    #[error("Parameters are only modifiable on unittest, active network is {active}")]
    NotModifiable { active: Network },

    #[error("{network}: {source}")]
    Genesis {
        network: Network,
        #[source]
        source: GenesisError,
    },

    #[error("{network} checkpoints: {source}")]
    Checkpoints {
        network: Network,
        #[source]
        source: CheckpointError,
    },

    #[error("{network}: invalid {field}: {source}")]
    InvalidKey {
        network: Network,
        field: &'static str,
        #[source]
        source: KeyError,
    },

    #[error("{network}: invalid hash literal {literal}")]
    InvalidHashLiteral {
        network: Network,
        literal: &'static str,
    },

    #[error("{network}: target spacing must be non-zero")]
    ZeroTargetSpacing { network: Network },

    #[error("Networks {0} and {1} share message start bytes")]
    DuplicateMagic(Network, Network),
}

/// Abort on a broken startup invariant
pub(crate) fn fatal(err: ParamsError) -> ! {
    error!(error = %err, "chain parameter invariant violated");
    panic!("{err}");
}
