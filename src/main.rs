use anyhow::Result;
use clap::Parser;
use rochambeau_core::config::AppConfig;
use rochambeau_core::{init_logging, Neighborhood};
use rochambeau_lib::app::{App, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of competing breeds
    #[arg(short, long)]
    breeds: Option<usize>,

    /// Side length of the square arena
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Neighborhood interactions pick partners from (von-neumann, moore)
    #[arg(long)]
    neighborhood: Option<Neighborhood>,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(breeds) = self.breeds {
            config.arena.num_breeds = breeds;
        }
        if let Some(size) = self.size {
            config.arena.arena_size = size;
        }
        if let Some(seed) = self.seed {
            config.arena.seed = Some(seed);
        }
        if let Some(neighborhood) = self.neighborhood {
            config.arena.neighborhood = neighborhood;
        }
        if let Some(limit) = self.max_generations {
            config.driver.max_generations = Some(limit);
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = App::load_config(&args.config);
    args.apply(&mut config);
    init_logging(&config.log_level);

    let app = App::new(config)?;
    let report = app.run().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    let code = app.shutdown().exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
