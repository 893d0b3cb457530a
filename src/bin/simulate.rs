//! Loot simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS] <MODE>
//!
//! Examples:
//!   cargo run --bin simulate -- combat goblin -n 1000
//!   cargo run --bin simulate -- --luck 20 --depth 30 combat ancient_dragon
//!   cargo run --bin simulate -- gather mining --skill 20
//!   cargo run --bin simulate -- --seed 42 craft forging iron_sword --skill 15

use clap::{Parser, Subcommand};
use eternal_realms::simulator::{run_simulation, SimConfig, SimMode};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo loot and craft-quality simulator")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Number of simulation runs
    #[arg(short = 'n', long, global = true, default_value_t = 100)]
    runs: u32,

    /// Events (kills, gathers, crafts) per run
    #[arg(short, long, global = true, default_value_t = 100)]
    events: u32,

    /// Random seed for reproducibility
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Player luck stat
    #[arg(long, global = true)]
    luck: Option<f64>,

    /// Dungeon depth
    #[arg(long, global = true, default_value_t = 1)]
    depth: u32,

    /// Mining level (feeds the drop-chance modifier)
    #[arg(long, global = true, default_value_t = 1)]
    mining: u32,

    /// Print per-run results
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Save a JSON report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Defeat a monster repeatedly
    Combat {
        #[arg(default_value = "goblin")]
        monster: String,
    },
    /// Complete a gathering activity repeatedly
    Gather {
        #[arg(default_value = "mining")]
        profession: String,

        /// Profession level, held fixed for the whole run
        #[arg(long, default_value_t = 1)]
        skill: u32,
    },
    /// Craft a recipe repeatedly with ingredients supplied
    Craft {
        profession: String,
        recipe: String,

        /// Profession level, held fixed for the whole run
        #[arg(long, default_value_t = 1)]
        skill: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eternal_realms=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (mode, skill_level) = match cli.mode {
        Mode::Combat { monster } => (
            SimMode::Combat {
                monster_id: monster,
            },
            1,
        ),
        Mode::Gather { profession, skill } => (
            SimMode::Gather {
                profession_id: profession,
            },
            skill,
        ),
        Mode::Craft {
            profession,
            recipe,
            skill,
        } => (
            SimMode::Craft {
                profession_id: profession,
                recipe_id: recipe,
            },
            skill,
        ),
    };

    let config = SimConfig {
        num_runs: cli.runs,
        events_per_run: cli.events,
        seed: cli.seed,
        mode,
        luck: cli.luck,
        dungeon_depth: cli.depth,
        mining_level: cli.mining,
        skill_level,
        verbosity: if cli.verbose { 2 } else { 1 },
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ETERNAL REALMS LOOT SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Mode:           {}", config.mode.label());
    println!("  Runs:           {}", config.num_runs);
    println!("  Events/Run:     {}", config.events_per_run);
    if let Some(luck) = config.luck {
        println!("  Luck:           {}", luck);
    }
    println!("  Depth:          {}", config.dungeon_depth);
    println!("  Mining Level:   {}", config.mining_level);
    if !matches!(config.mode, SimMode::Combat { .. }) {
        println!("  Skill Level:    {}", config.skill_level);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if cli.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("error: failed to write {filename}: {e}");
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}
