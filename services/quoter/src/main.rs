//! Swap Quoter
//!
//! Prices swaps offline against pool reserve snapshots from configuration.
//! Quotes are exact: the same reserves always give the same digits.
//!
//! Architecture:
//! config (assets, pools) → Route (direct or two-hop) → AmmPool quote → stdout

mod route;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

use amm::Pair;
use config::{load_config, AssetRegistry};
use route::Route;
use types::{Asset, AssetAmount, Network};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "quoter")]
#[command(about = "Exact swap quotes for slip-based liquidity pools")]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/quoter.toml")]
    config: PathBuf,

    /// Environment override (loads environments/<name>.toml beside the config)
    #[arg(short, long)]
    environment: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote a swap
    Swap {
        /// Symbol of the asset sent
        #[arg(long)]
        from: String,

        /// Symbol of the asset received
        #[arg(long)]
        to: String,

        /// Amount sent, or with --reverse the amount to receive
        #[arg(long)]
        amount: String,

        /// Price the input needed to receive exactly --amount
        #[arg(long)]
        reverse: bool,

        /// Network to resolve symbols on
        #[arg(long)]
        network: Option<Network>,
    },

    /// List configured pools with their spot prices
    Pools,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging before config so load warnings are seen;
    // RUST_LOG, when set, wins over the configured level
    let from_env = std::env::var("RUST_LOG").is_ok();
    let initial = if from_env {
        EnvFilter::from_default_env()
    } else {
        log_filter("info")?
    };
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&args.config, args.environment.as_deref())
        .with_context(|| format!("Failed to load {:?}", args.config))?;

    if !from_env {
        filter_handle
            .reload(log_filter(&config.quoter.log_level)?)
            .context("Failed to apply configured log level")?;
    }

    let registry = config.registry()?;
    let pairs = config.pairs(&registry)?;
    info!(
        assets = registry.len(),
        pools = pairs.len(),
        "Loaded pool snapshots"
    );

    match args.command {
        Command::Swap {
            from,
            to,
            amount,
            reverse,
            network,
        } => {
            let network = network.or(config.quoter.default_network);
            let from = resolve_asset(&registry, &from, network)?;
            let to = resolve_asset(&registry, &to, network)?;
            swap(&pairs, from, to, &amount, reverse)
        }
        Command::Pools => {
            print_pools(&pairs);
            Ok(())
        }
    }
}

/// Filter applying `level` to every workspace crate
fn log_filter(level: &str) -> Result<EnvFilter> {
    let directives = ["quoter", "amm", "config", "types"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::try_new(&directives).with_context(|| format!("Invalid log level '{level}'"))
}

fn resolve_asset<'a>(
    registry: &'a AssetRegistry,
    symbol: &str,
    network: Option<Network>,
) -> Result<&'a Asset> {
    match network {
        Some(network) => registry
            .get(network, symbol)
            .with_context(|| format!("Unknown asset '{symbol}' on {network}")),
        None => registry.find(symbol),
    }
}

fn swap(pairs: &[Pair], from: &Asset, to: &Asset, amount: &str, reverse: bool) -> Result<()> {
    let route = Route::resolve(pairs, from, to)?;
    debug!(route = %route, reverse, "Quoting");
    println!("route:          {route}");

    if reverse {
        let desired = AssetAmount::parse(to.clone(), amount)
            .with_context(|| format!("Invalid amount '{amount}'"))?;
        let required = route.pool().calc_reverse_swap_result(&desired)?;
        println!("receive:        {desired}");
        println!("send:           {required}");
        return Ok(());
    }

    let input = AssetAmount::parse(from.clone(), amount)
        .with_context(|| format!("Invalid amount '{amount}'"))?;

    match &route {
        Route::Direct(pair) => {
            let quote = pair.quote(&input)?;
            println!("send:           {}", quote.input);
            println!("receive:        {}", quote.output);
            println!("liquidity fee:  {}", quote.liquidity_fee);
            println!("trade slip:     {}", quote.trade_slip.round_dp(6));
        }
        Route::Composite(_) => {
            let output = route.pool().calc_swap_result(&input)?;
            println!("send:           {input}");
            println!("receive:        {output}");
        }
    }

    Ok(())
}

fn print_pools(pairs: &[Pair]) {
    if pairs.is_empty() {
        println!("no pools configured");
        return;
    }

    for pair in pairs {
        println!("{pair}");
        for asset in pair.assets() {
            // Empty reserves have no spot price
            if let (Ok(price), Ok(other)) = (pair.price_of(asset), pair.other_asset(asset)) {
                println!(
                    "    1 {} = {} {}",
                    asset.ticker(),
                    price.round_dp(u32::from(other.decimals())),
                    other.ticker()
                );
            }
        }
    }
}
