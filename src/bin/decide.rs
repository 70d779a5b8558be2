//! Offline decision runner
//!
//! Reads one arena update (file or stdin) and prints the action the bot
//! would send back, or the full decision trace as JSON.

use std::fs;
use std::io::{self, Read};

use arena_brawler::arena::ArenaUpdate;
use arena_brawler::core::config::{EngineConfig, ServerConfig};
use arena_brawler::core::error::Result;
use arena_brawler::decision::DecisionEngine;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Decide one turn from a saved arena update
#[derive(Parser, Debug)]
#[command(name = "decide")]
#[command(about = "Print the action the bot would take for an arena update")]
struct Args {
    /// Arena update JSON file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Act as this player instead of the update's own `_links.self.href`
    #[arg(long)]
    me: Option<String>,

    /// Seed for the random fallback (reproducible output)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config; only the `[engine]` section is used
    #[arg(long)]
    config: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Skip snapshot validation
    #[arg(long)]
    no_validate: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_brawler=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let body = if args.input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&args.input)?
    };

    let engine_config = match &args.config {
        Some(path) => ServerConfig::load(path)?.engine,
        None => EngineConfig::default(),
    };
    let engine = DecisionEngine::new(engine_config);

    let update = ArenaUpdate::from_json(&body)?;
    let snapshot = update.snapshot()?;
    let me = args.me.as_deref().unwrap_or_else(|| update.self_href());

    if !args.no_validate {
        snapshot.validate_within(me, engine.config().max_cells)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let decision = engine.evaluate(&snapshot, me, &mut rng);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&decision)?),
        _ => println!("{}", decision.action),
    }

    Ok(())
}
