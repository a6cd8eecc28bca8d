use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use christophers_kitchen::app::AppState;
use christophers_kitchen::config::AppConfig;
use christophers_kitchen::shell::Shell;
use christophers_kitchen::store::{MenuStore, SeedSet};

#[derive(Parser)]
#[command(name = "kitchen")]
#[command(about = "Build and price the menu for Christopher's Kitchen")]
struct Cli {
    /// Read configuration from this file instead of the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dishes to start with
    #[arg(long, value_enum)]
    seed: Option<SeedSet>,

    /// Delete and clear without asking first
    #[arg(long)]
    no_confirm: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize tracing on stderr so stdout stays clean for the session
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "christophers_kitchen=debug"
    } else {
        "christophers_kitchen=info"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.no_confirm {
        config.confirm_destructive = false;
    }

    tracing::info!(seed = config.seed.as_str(), "starting Christopher's Kitchen");

    let state = AppState::new(MenuStore::with_seed(config.seed));
    let mut shell = Shell::new(state, config);

    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout().lock())?;

    Ok(())
}
