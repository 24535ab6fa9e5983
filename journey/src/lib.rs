//! Journey: find the cheapest route from the start through every dungeon to
//! the destination, then animate it in the terminal.

pub mod palette;
pub mod render;
pub mod summary;

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use gateroute_maps::{Scenario, ScenarioLayout};

/// How the chosen itinerary is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Draw the maps and walk the route step by step.
    #[default]
    Animate,
    /// Print order, legs and total cost.
    Text,
    /// Print the itinerary as JSON.
    Json,
}

/// Run settings for the journey binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyConfig {
    /// Directory holding the map files.
    pub dir: PathBuf,
    pub layout: ScenarioLayout,
    /// Pause between animation steps.
    pub delay: Duration,
    pub output: OutputMode,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/maps")),
            layout: ScenarioLayout::default(),
            delay: Duration::from_millis(50),
            output: OutputMode::default(),
        }
    }
}

/// Read a scenario layout from a JSON file. Missing fields keep their
/// default values.
pub fn read_layout(path: &Path) -> Result<ScenarioLayout, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read layout {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&text)?)
}

/// Load the scenario, solve it and present the result.
pub fn run(config: &JourneyConfig) -> Result<(), Box<dyn Error>> {
    let scenario = Scenario::load(&config.dir, &config.layout)?;
    for (grid, ch) in scenario.unlisted_symbols() {
        log::warn!("{grid}: symbol {ch:?} has no cost and is impassable");
    }
    let itinerary = scenario.solve()?;

    match config.output {
        OutputMode::Animate => {
            let finished = {
                let mut term = render::Terminal::open()?;
                let finished =
                    render::animate(term.out(), &scenario, &itinerary, config.delay)?;
                if finished {
                    term.wait_key()?;
                }
                finished
            };
            if finished {
                println!("final cost: {}", itinerary.total_cost());
            }
        }
        OutputMode::Text => {
            summary::write_summary(&mut io::stdout().lock(), &scenario, &itinerary)?;
        }
        OutputMode::Json => {
            let mut out = io::stdout().lock();
            summary::write_json(&mut out, &itinerary)?;
            out.flush()?;
        }
    }
    Ok(())
}
