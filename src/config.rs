//! Command-line configuration and logging setup

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use crate::params::{Network, ParamsError};

/// Network selection options
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainOptions {
    /// Network to use (main, test, regtest, unittest)
    #[arg(long, value_name = "NETWORK", env = "XGA_NETWORK")]
    pub network: Option<Network>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,
}

impl ChainOptions {
    /// Resolve the selected network
    ///
    /// `--network` wins when given, but must not contradict a legacy switch.
    pub fn network(&self) -> Result<Network, ParamsError> {
        let from_flags = Network::from_flags(self.testnet, self.regtest)?;
        match self.network {
            None => Ok(from_flags),
            Some(named) if !self.testnet && !self.regtest => Ok(named),
            Some(named) if named == from_flags => Ok(named),
            Some(named) => Err(ParamsError::ConflictingNetworkFlags(format!(
                "--network {named} with --{}",
                if self.testnet { "testnet" } else { "regtest" }
            ))),
        }
    }
}

/// Command-line interface for `xga-params`
#[derive(Parser, Debug, Clone)]
#[command(
    name = "xga-params",
    version,
    about = "Show the chain parameters of an XgamingUP network"
)]
pub struct Cli {
    #[command(flatten)]
    pub chain: ChainOptions,

    /// Print the selected profile as JSON
    #[arg(long)]
    pub json: bool,
}

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`. Logs go to stderr so JSON output
/// on stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(network: Option<Network>, testnet: bool, regtest: bool) -> ChainOptions {
        ChainOptions {
            network,
            testnet,
            regtest,
        }
    }

    #[test]
    fn test_default_is_main() {
        assert_eq!(ChainOptions::default().network().unwrap(), Network::Main);
    }

    #[test]
    fn test_network_name_wins_alone() {
        let opts = options(Some(Network::UnitTest), false, false);
        assert_eq!(opts.network().unwrap(), Network::UnitTest);
    }

    #[test]
    fn test_agreeing_switch_accepted() {
        let opts = options(Some(Network::Test), true, false);
        assert_eq!(opts.network().unwrap(), Network::Test);
    }

    #[test]
    fn test_conflicts_rejected() {
        for opts in [
            options(None, true, true),
            options(Some(Network::Main), true, false),
            options(Some(Network::Test), false, true),
        ] {
            assert!(matches!(
                opts.network(),
                Err(ParamsError::ConflictingNetworkFlags(_))
            ));
        }
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["xga-params", "--regtest", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.chain.network().unwrap(), Network::RegTest);

        let cli = Cli::try_parse_from(["xga-params", "--network", "test"]).unwrap();
        assert_eq!(cli.chain.network, Some(Network::Test));

        assert!(Cli::try_parse_from(["xga-params", "--network", "bogus"]).is_err());
    }
}
