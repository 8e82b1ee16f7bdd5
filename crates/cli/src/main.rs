//! # ensdns
//!
//! Serves DNS records stored in an ENS-style registry, and uploads zone
//! files into it.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Parser, Subcommand};
use ensdns_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ensdns")]
#[command(version)]
#[command(about = "DNS server backed by an on-chain name registry")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// JSON-RPC endpoint of the chain node
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Domain suffix of nameservers that carry a registry address
    #[arg(long, global = true)]
    nsdomain: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer DNS queries over UDP and TCP
    Serve {
        /// Address to listen on, e.g. ":53" or "127.0.0.1:5353"
        #[arg(long)]
        address: Option<String>,

        /// Maximum number of cached registry mappings and zones
        #[arg(long)]
        cachesize: Option<usize>,
    },

    /// Publish a zone file to the registry named by its SOA record
    Upload {
        /// RFC 1035 master file
        zonefile: PathBuf,

        /// Sending account: an address or an index into the node's accounts
        #[arg(long, default_value = "0")]
        account: String,

        /// Password to unlock the sending account on the node
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (listen_address, cache_size) = match &cli.command {
        Command::Serve { address, cachesize } => (address.clone(), *cachesize),
        Command::Upload { .. } => (None, None),
    };

    let overrides = CliOverrides {
        listen_address,
        cache_size,
        ns_domain: cli.nsdomain.clone(),
        rpc_url: cli.rpc_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting ensdns");

    match cli.command {
        Command::Serve { .. } => commands::serve(config).await,
        Command::Upload {
            zonefile,
            account,
            password,
        } => commands::upload(config, &zonefile, &account, password.as_deref()).await,
    }
}
