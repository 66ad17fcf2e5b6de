use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

use eventsig::config::{self, Config};
use eventsig::modules::{describe, events, explore, signatures, topic, Report};
use eventsig::{AbiPackage, ContractAbi, EventRegistry, PackageLoader};

#[derive(Debug, Parser)]
#[command(
    name = "eventsig",
    version,
    about = "Print contract ABI events and compute their topic hashes"
)]
struct Args {
    /// ABI package: a JSON file of named exports, or a directory of ABI files
    /// [env: EVENTSIG_PACKAGE]
    #[arg(long, global = true)]
    package: Option<PathBuf>,

    /// Config file (defaults to $XDG_CONFIG_HOME/eventsig/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List package exports and report where a contract is exported
    Explore {
        /// Contract to look for
        #[arg(long)]
        contract: Option<String>,
    },
    /// Print every event with its fields, then the raw event structures
    Events {
        /// Contracts to report on (repeatable)
        #[arg(long = "contract")]
        contracts: Vec<String>,
    },
    /// Print ABIs, event signatures, topic hashes and Rust constants
    Signatures {
        /// Contracts to report on (repeatable)
        #[arg(long = "contract")]
        contracts: Vec<String>,

        /// Do not dump the full ABIs
        #[arg(long)]
        skip_abi: bool,
    },
    /// Print the structure and input fields of one event
    Describe {
        /// Event name
        event: Option<String>,

        /// Contract declaring the event
        #[arg(long)]
        contract: Option<String>,
    },
    /// Find the event whose topic0 matches a hash
    Topic {
        /// 32-byte topic hash (0x-prefixed or bare hex)
        hash: String,

        /// Contracts to search (repeatable, defaults to every contract in the package)
        #[arg(long = "contract")]
        contracts: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => config::load_explicit(path),
        None => config::load(),
    };
    let package_path = config
        .resolve_package(args.package.clone(), config::package_from_env())
        .context("no ABI package given (use --package, EVENTSIG_PACKAGE or the config file)")?;
    debug!(package = %package_path.display(), "using ABI package");

    let report = match args.command {
        Command::Explore { contract } => {
            let contract = config.resolve_contract(contract);
            explore::run(&package_path, &contract)
        }
        Command::Events { contracts } => {
            let package = load_package(&package_path)?;
            let contracts = select_contracts(&package, &config, contracts)?;
            events::render(&contracts)
        }
        Command::Signatures {
            contracts,
            skip_abi,
        } => {
            let package = load_package(&package_path)?;
            let contracts = select_contracts(&package, &config, contracts)?;
            signatures::render(&contracts, !skip_abi)
        }
        Command::Describe { event, contract } => {
            let package = load_package(&package_path)?;
            let contract = config.resolve_contract(contract);
            let event = config.resolve_event(event);
            let contract = package.contract(&contract)?;
            describe::render(&contract, &event)
        }
        Command::Topic { hash, contracts } => {
            let package = load_package(&package_path)?;
            let names = if contracts.is_empty() {
                package.contract_names()
            } else {
                contracts
            };
            let contracts = names
                .iter()
                .map(|name| package.contract(name))
                .collect::<Result<Vec<_>, _>>()?;
            let registry = EventRegistry::from_contracts(&contracts);
            debug!(events = registry.len(), "built event registry");
            topic::render(&registry, &hash)?
        }
    };

    print_report(&report)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_package(path: &std::path::Path) -> Result<AbiPackage> {
    let (package, stats) = PackageLoader::load(path)
        .with_context(|| format!("load ABI package {}", path.display()))?;
    for err in &stats.errors {
        warn!(%err, "package file skipped");
    }
    Ok(package)
}

fn select_contracts(
    package: &AbiPackage,
    config: &Config,
    requested: Vec<String>,
) -> Result<Vec<ContractAbi>> {
    let names = config.resolve_contracts(requested);
    names
        .iter()
        .map(|name| {
            package
                .contract(name)
                .with_context(|| format!("read contract {name}"))
        })
        .collect()
}

fn print_report(report: &Report) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_str().as_bytes())
        .context("write report")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
