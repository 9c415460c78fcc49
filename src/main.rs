//! # Route-ranker CLI
//!
//! Command-line interface for the route-ranker library.
//! Reads `routes.txt` from the working directory, asks how many extra busses
//! are available and lists the routes that should get them.

use std::io;

use clap::Parser;
use log::{debug, error};
use route_ranker::{
    rank_file, report_selection, select_routes, QuantityPrompt, RankerConfig, Result,
    PROMPT_MESSAGE,
};

/// Command-line interface for route-ranker
#[derive(Parser, Debug)]
#[command(name = "route-ranker")]
#[command(about = "Ranks bus routes by rider satisfaction to place extra busses")]
#[command(long_about = "Ranks the routes in routes.txt by need and recommends where extra busses go:
  route-ranker                     # Rank routes.txt and prompt for the number of busses
  route-ranker --verbose           # Same, with debug logging on stderr

Each line of routes.txt holds a route number and a happy ratio, e.g. '123, 5.4'.
Routes with a happy ratio below 1 are ranked last.")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if let Err(e) = run(&RankerConfig::default()) {
        error!("❌ Error: {e}");
        if let Some(message) = e.diagnostic() {
            println!("{message}");
        }
        std::process::exit(1);
    }
}

fn run(config: &RankerConfig) -> Result<()> {
    debug!("Reading routes from {}", config.data_file.display());
    let ranked = rank_file(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = QuantityPrompt::new(stdin.lock(), stdout.lock(), ranked.len());
    let extra_busses = prompt.ask(PROMPT_MESSAGE)?;
    let (_, mut out) = prompt.into_inner();

    let selected = select_routes(&ranked, extra_busses);
    debug!("Selected {} of {} routes", selected.len(), ranked.len());
    report_selection(&mut out, &selected)?;

    Ok(())
}
