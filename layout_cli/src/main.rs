use std::path::PathBuf;

use card_layout::{
    solve_battle, solve_dual_with, solve_zone, solve_zone_first_fit, visualize_zone, ContainerSize,
    DualStrategy, ZoneLayout,
};
use clap::{Parser, Subcommand, ValueEnum};
use layout_cli::{run_sweep, LayoutFile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,

    /// Path to a JSON file with zone settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out a single zone
    Zone {
        #[command(flatten)]
        space: SpaceArgs,

        /// Number of cards, overrides the config file
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Take the first row count that fits instead of the best scoring one
        #[arg(long, default_value_t = false)]
        first_fit: bool,
    },
    /// Lay out two zones sharing the container height
    Dual {
        #[command(flatten)]
        space: SpaceArgs,

        /// Number of cards in the top zone, overrides the config file
        #[arg(long)]
        top: Option<u32>,

        /// Number of cards in the bottom zone, overrides the config file
        #[arg(long)]
        bottom: Option<u32>,

        #[arg(long, value_enum, default_value_t = Strategy::Exhaustive)]
        strategy: Strategy,
    },
    /// Lay out the six zones of the battle board
    Battle {
        #[command(flatten)]
        space: SpaceArgs,
    },
    /// Check the layout properties on random container sizes and card counts
    Sweep {
        /// How many random containers to try
        #[arg(short, long, default_value_t = 1000)]
        runs: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct SpaceArgs {
    /// Container width in pixels
    #[arg(long)]
    width: f64,

    /// Container height in pixels
    #[arg(long)]
    height: f64,

    /// Draw the cards instead of printing JSON, one character per this many pixels
    #[arg(long)]
    draw: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Exhaustive,
    SplitSweep,
}

impl From<Strategy> for DualStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Exhaustive => DualStrategy::Exhaustive,
            Strategy::SplitSweep => DualStrategy::SplitSweep,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_zone(name: &str, layout: &ZoneLayout, count: u32, scale: u32) {
    println!(
        "{} ({} cards, {}x{} px, {} x {}):",
        name, count, layout.width, layout.height, layout.rows, layout.columns
    );
    println!("{}\n", visualize_zone(layout, count, scale));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let file = LayoutFile::load_or_default(args.config.as_deref())?;
    let tuning = &file.tuning;

    match args.command {
        Command::Zone {
            space,
            count,
            first_fit,
        } => {
            let size = space.container_size()?;
            let zone = file.zone.with_count(count.unwrap_or(file.zone.count));
            let layout = if first_fit {
                solve_zone_first_fit(&zone, size)
            } else {
                solve_zone(&zone, size, tuning)
            };
            match space.draw {
                Some(scale) => print_zone("zone", &layout, zone.count, scale),
                None => print_json(&layout)?,
            }
        }
        Command::Dual {
            space,
            top,
            bottom,
            strategy,
        } => {
            let size = space.container_size()?;
            let mut dual = file.dual;
            dual.top.count = top.unwrap_or(dual.top.count);
            dual.bottom.count = bottom.unwrap_or(dual.bottom.count);
            let layout = solve_dual_with(&dual, size, tuning, strategy.into());
            match space.draw {
                Some(scale) => {
                    print_zone("top", &layout.top, dual.top.count, scale);
                    print_zone("bottom", &layout.bottom, dual.bottom.count, scale);
                }
                None => print_json(&layout)?,
            }
        }
        Command::Battle { space } => {
            let size = space.container_size()?;
            let layout = solve_battle(&file.battle, size, tuning);
            info!(row_height = layout.row_height);
            match space.draw {
                Some(scale) => {
                    let counts = file.battle.counts;
                    let zone_counts = [
                        counts.opponent_hand,
                        counts.opponent_lands,
                        counts.opponent_nonlands,
                        counts.player_nonlands,
                        counts.player_lands,
                        counts.player_hand,
                    ];
                    for ((name, zone), count) in layout.zones().iter().zip(zone_counts) {
                        print_zone(name, zone, count, scale);
                    }
                }
                None => print_json(&layout)?,
            }
        }
        Command::Sweep { runs, seed } => {
            // Get a random seed
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            let report = run_sweep(&mut rng, runs, &file);
            eprintln!(
                "Checked {} layouts in {} runs:\n- {} aspect ratio violations\n- {} fit violations\n- {} width floor violations\n- {} idempotence violations",
                report.layouts_checked,
                report.runs,
                report.aspect_violations,
                report.fit_violations,
                report.width_floor_violations,
                report.idempotence_violations
            );
            if report.violations() > 0 {
                anyhow::bail!("{} layouts violated a property (seed {})", report.violations(), seed);
            }
        }
    }
    Ok(())
}

impl SpaceArgs {
    fn container_size(&self) -> anyhow::Result<ContainerSize> {
        if !self.width.is_finite() || !self.height.is_finite() {
            anyhow::bail!("Container size must be finite, got {}x{}", self.width, self.height);
        }
        Ok(ContainerSize::new(self.width, self.height))
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
