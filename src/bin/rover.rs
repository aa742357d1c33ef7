//! Command-line front end: solves one request against a fleet file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rover_routing::config::Fleet;
use rover_routing::local_search::Deadline;
use rover_routing::solver::{Dispatcher, SolveOptions};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Fleet configuration file (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Traffic condition: "normal" or "traffic"; anything else means normal
    #[arg(short, long, default_value = "normal")]
    mode: String,

    /// Run local search after construction
    #[arg(long)]
    improve: bool,

    /// Local search budget in milliseconds (unbounded when omitted)
    #[arg(long, requires = "improve")]
    time_limit_ms: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let fleet = Fleet::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let dispatcher = Dispatcher::new(Arc::new(fleet));

    let options = SolveOptions {
        improve: cli.improve,
        deadline: cli
            .time_limit_ms
            .map(|ms| Deadline::after(Duration::from_millis(ms)))
            .unwrap_or_default(),
    };
    let report = dispatcher
        .dispatch_with(&cli.mode, &options)
        .context("solving routes")?;

    info!(
        mode = %cli.mode,
        routes = report.index_routes.len(),
        "routes ready"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
