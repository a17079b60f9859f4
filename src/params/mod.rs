//! Chain parameters - Network ids, profiles, checkpoints, and the active-network registry

mod chain_params;
mod checkpoints;
mod error;
mod network;
mod profiles;
mod registry;

pub use chain_params::*;
pub use checkpoints::*;
pub use error::*;
pub use network::*;
pub use profiles::*;
pub use registry::*;
