//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParamsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
    RegTest,
    UnitTest,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Test,
        Network::RegTest,
        Network::UnitTest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::RegTest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    /// Resolve the legacy `--testnet` / `--regtest` switches
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Network, ParamsError> {
        match (testnet, regtest) {
            (true, true) => Err(ParamsError::ConflictingNetworkFlags(
                "--testnet and --regtest".to_string(),
            )),
            (true, false) => Ok(Network::Test),
            (false, true) => Ok(Network::RegTest),
            (false, false) => Ok(Network::Main),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::RegTest),
            "unittest" => Ok(Network::UnitTest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
