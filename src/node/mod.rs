//! Node bootstrap - Genesis block construction

mod genesis;

pub use genesis::*;
