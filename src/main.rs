//! XgamingUP chain parameter inspector
//!
//! Builds and verifies every network's parameters, selects one, and prints it.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use xga_core::config::{init_logging, Cli};
use xga_core::params::{init_params, params, select_params_from_options, Base58Type};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    init_params();

    let network = select_params_from_options(&cli.chain).context("invalid network options")?;
    let p = params();

    info!(
        network = %network,
        magic = %hex::encode(p.message_start),
        port = p.default_port,
        genesis = %p.genesis_hash,
        "chain parameters ready"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&*p).context("serializing chain parameters")?;
        println!("{json}");
        return Ok(());
    }

    println!("Network:         {}", p.name);
    println!("Message start:   {}", hex::encode(p.message_start));
    println!("Default port:    {}", p.default_port);
    println!();
    println!("Genesis Block Information:");
    println!("  Hash:          {}", p.genesis_hash);
    println!("  Merkle Root:   {}", p.genesis.header.merkle_root);
    println!("  Timestamp:     {}", p.genesis.header.time);
    println!("  Bits:          0x{:08x}", p.genesis.header.bits);
    println!("  Nonce:         {}", p.genesis.header.nonce);
    println!();
    println!("Consensus:");
    println!("  PoW limit:     0x{:08x}", p.consensus.pow_limit.to_compact());
    println!("  Spacing:       {}s", p.consensus.target_spacing);
    println!("  Maturity:      {}", p.consensus.maturity);
    println!("  Last PoW:      {}", p.consensus.last_pow_block);
    println!(
        "  Pubkey prefix: {}",
        hex::encode(p.base58_prefix(Base58Type::PubkeyAddress))
    );
    println!();
    println!(
        "Checkpoints:     {} (last at height {})",
        p.checkpoints().len(),
        p.checkpoints().total_blocks_estimate()
    );
    println!("DNS seeds:       {}", p.dns_seeds.len());
    println!("Fixed seeds:     {}", p.fixed_seeds.len());

    Ok(())
}
