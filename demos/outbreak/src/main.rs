//! outbreak: runs one epidemic on the rust_epi engine and prints the curve.
//!
//! ```text
//! cargo run -p outbreak                          # built-in defaults
//! cargo run -p outbreak -- scenario.json         # override any EpidemicConfig field
//! cargo run -p outbreak -- --seed 7 --ticks 2000
//! RUST_LOG=epi_sim=debug cargo run -p outbreak
//! ```
//!
//! The JSON file may be partial; missing fields keep their defaults.  Flags
//! win over the file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use epi_core::{EpidemicConfig, Tick};
use epi_sim::{SimBuilder, SimObserver, Statistics};

#[cfg(test)]
mod tests;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "outbreak")]
#[command(about = "Run one epidemic and print the daily curve")]
struct Args {
    /// JSON file with EpidemicConfig fields; omitted fields keep defaults
    config: Option<PathBuf>,

    /// RNG seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate, overriding the config
    #[arg(long)]
    ticks: Option<u64>,
}

impl Args {
    fn apply(&self, config: &mut EpidemicConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.total_ticks = ticks;
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one line per simulated day.
struct DailyCurve {
    day_length: u64,
}

impl SimObserver for DailyCurve {
    fn on_day_end(&mut self, day: u64, stats: &Statistics) {
        let tick = ((day + 1) * self.day_length) as usize;
        let d = day as usize;
        println!(
            "{:>4} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
            day,
            stats.infected()[tick],
            stats.healthy()[tick],
            stats.recovered()[tick],
            stats.dead()[tick],
            stats.daily_new_infections()[d],
            stats.daily_new_deaths()[d],
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &Statistics) {
        let (peak_tick, peak) = stats.peak_infected();
        let latest = stats.latest();
        println!();
        println!("Finished at {final_tick}");
        println!("  peak infected : {peak} (day {})", peak_tick as u64 / self.day_length);
        println!("  susceptible   : {}", latest.susceptible());
        println!("  infected      : {}", latest.infected());
        println!("  recovered     : {}", latest.recovered());
        println!("  dead          : {}", latest.dead());
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<EpidemicConfig> {
    let Some(path) = path else {
        return Ok(EpidemicConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    info!(
        population = config.population,
        regions = config.region_count,
        days = config.total_ticks / config.day_length.max(1),
        seed = config.seed,
        "starting outbreak"
    );

    let day_length = config.day_length;
    let mut sim = SimBuilder::new(config)
        .build()
        .context("building simulation")?;

    println!(
        "{:>4} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "day", "infected", "healthy", "recovered", "dead", "new_inf", "new_dead"
    );

    let mut curve = DailyCurve { day_length };
    let t0 = Instant::now();
    sim.run(&mut curve);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    Ok(())
}
