//! ATCC command-line peer — runs voter-registry transactions against a
//! local LMDB world state.

use anyhow::Context;
use atcc_peer::{Peer, PeerConfig, TxOutcome};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atcc", about = "Voter-registry chaincode on a local peer")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "ATCC_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the world state.
    #[arg(long, env = "ATCC_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ATCC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ATCC_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Seed the ledger with the initial records.
    Init,
    /// Register a new voter record.
    Create {
        id: String,
        candidate: String,
        cpr: String,
        name: String,
        political_party: String,
    },
    /// Check whether a record exists.
    Exists { id: String },
    /// Print one record.
    Read { id: String },
    /// Print every record.
    List,
    /// Submit any chaincode function; writes are committed.
    Invoke {
        function: String,
        args: Vec<String>,
    },
    /// Evaluate any chaincode function; writes are discarded.
    Query {
        function: String,
        args: Vec<String>,
    },
    /// Print the chaincode's transaction metadata.
    Metadata,
}

fn load_config(cli: &Cli) -> anyhow::Result<PeerConfig> {
    let mut config = match &cli.config {
        Some(path) => PeerConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PeerConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    Ok(config)
}

fn print_payload(outcome: TxOutcome) -> anyhow::Result<()> {
    let tx_id = outcome.tx_id.clone();
    let payload = outcome.into_payload()?;
    tracing::info!(%tx_id, "transaction succeeded");
    if payload.is_empty() {
        return Ok(());
    }
    match serde_json::from_slice::<serde_json::Value>(&payload) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", String::from_utf8_lossy(&payload)),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    atcc_peer::init_logging(config.log_format()?, &config.log_level)?;

    let peer = Peer::open(&config)
        .with_context(|| format!("opening world state at {}", config.data_dir.display()))?;

    let outcome = match cli.command {
        Command::Init => peer.submit("InitLedger", &[])?,
        Command::Create {
            id,
            candidate,
            cpr,
            name,
            political_party,
        } => peer.submit("CreateRecord", &[id, candidate, cpr, name, political_party])?,
        Command::Exists { id } => peer.evaluate("RecordExists", &[id]),
        Command::Read { id } => peer.evaluate("ReadRecord", &[id]),
        Command::List => peer.evaluate("ListAllRecords", &[]),
        Command::Invoke { function, args } => peer.submit(&function, &args)?,
        Command::Query { function, args } => peer.evaluate(&function, &args),
        Command::Metadata => peer.evaluate("org.hyperledger.fabric:GetMetadata", &[]),
    };

    print_payload(outcome)
}
