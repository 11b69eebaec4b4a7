//! Loopback transport: reads one JSON [`Inbound`] per line from stdin and
//! writes one JSON [`Envelope`] per line to stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use duelsweep_core::{CellCount, Coord};
use duelsweep_protocol::{Envelope, Inbound};
use duelsweep_server::{ConfigOverrides, ServerConfig, SessionManager};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board edge length
    #[arg(long)]
    size: Option<Coord>,

    /// Number of mines per board
    #[arg(long)]
    mines: Option<CellCount>,

    /// Send the full mine layout to clients
    #[arg(long)]
    reveal_layout: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            size: self.size,
            mines: self.mines,
            reveal_layout: self.reveal_layout,
            seed: self.seed,
        }
    }

    fn load_config(&self) -> anyhow::Result<ServerConfig> {
        let config = match &self.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                ServerConfig::from_toml_str(&source)
                    .with_context(|| format!("Invalid configuration in {}", path.display()))?
            }
            None => ServerConfig::default(),
        };

        config
            .with_overrides(&self.overrides())
            .context("Invalid board options")
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG refines the level picked with -v/-q
    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = args.load_config()?;
    log::debug!("config: {config:?}");
    let mut manager = SessionManager::from_config(&config).context("Could not start sessions")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let inbound: Inbound = match serde_json::from_str(&line) {
            Ok(inbound) => inbound,
            Err(err) => {
                log::warn!("Skipping malformed message: {err}");
                continue;
            }
        };
        log::trace!("inbound: {inbound:?}");

        for envelope in manager.handle(inbound) {
            write_envelope(&mut stdout, &envelope)?;
        }
        stdout.flush().context("Could not flush stdout")?;
    }

    log::info!("Input closed, {} sessions dropped", manager.registry().len());
    Ok(())
}

fn write_envelope(out: &mut impl Write, envelope: &Envelope) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, envelope).context("Could not encode message")?;
    out.write_all(b"\n").context("Could not write stdout")?;
    Ok(())
}
