//! Journey: plan and animate the cheapest route through every dungeon.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use journey_lib::{JourneyConfig, OutputMode, read_layout};

/// Find the cheapest route from the start through every dungeon to the
/// destination.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding world.txt and the dungeon maps
    dir: Option<PathBuf>,

    /// Milliseconds between animation steps
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,

    /// Print a text summary instead of animating
    #[arg(long)]
    no_animate: bool,

    /// Print the itinerary as JSON
    #[arg(long, conflicts_with = "no_animate")]
    json: bool,

    /// JSON file naming the map files and marker symbols
    #[arg(long)]
    layout: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<JourneyConfig, Box<dyn std::error::Error>> {
        let mut config = JourneyConfig::default();
        if let Some(dir) = self.dir {
            config.dir = dir;
        }
        if let Some(path) = self.layout {
            config.layout = read_layout(&path)?;
        }
        config.delay = Duration::from_millis(self.delay_ms);
        config.output = if self.json {
            OutputMode::Json
        } else if self.no_animate {
            OutputMode::Text
        } else {
            OutputMode::Animate
        };
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = Args::parse().into_config()?;
    log::info!("loading maps from {}", config.dir.display());
    journey_lib::run(&config)
}
