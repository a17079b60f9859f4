//! P2P bootstrap module - Peer addresses, seed tables, and time source

mod address;
mod clock;
mod seeds;

pub use address::*;
pub use clock::*;
pub use seeds::*;
