//! Demo command running the built-in scenarios on the sample network.

use std::fmt::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use metroroute_lib::{
    find_fastest_route, find_fewest_transfers_route, route_minutes, sample_network,
    station_names, Minutes, Network, Station, SAMPLE_QUERIES,
};

use crate::output::{json_line, OutputFormat};

/// Both answers for one sample query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoScenario {
    pub label: String,
    pub start: String,
    pub goal: String,
    pub fewest_transfers: DemoRoute,
    pub fastest: DemoRoute,
}

/// Station names of one route and its travel time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoRoute {
    pub stations: Vec<String>,
    pub minutes: Minutes,
}

impl DemoRoute {
    fn from_stations(stations: &[&Station], minutes: Minutes) -> Self {
        Self {
            stations: stations.iter().map(|station| station.name.clone()).collect(),
            minutes,
        }
    }

    fn joined(&self) -> String {
        self.stations.join(" -> ")
    }
}

/// Answer every sample query with both algorithms.
pub fn run_scenarios(network: &Network) -> Result<Vec<DemoScenario>> {
    SAMPLE_QUERIES
        .iter()
        .map(|&(label, start, goal)| {
            let missing = || anyhow!("sample query {label} has no route");

            let fewest = find_fewest_transfers_route(network, start, goal).ok_or_else(missing)?;
            let fewest_minutes = route_minutes(&fewest).ok_or_else(missing)?;
            let fastest = find_fastest_route(network, start, goal).ok_or_else(missing)?;
            tracing::debug!(
                label,
                fewest = %station_names(&fewest),
                fastest = %station_names(&fastest.stations),
                "sample query answered"
            );

            Ok(DemoScenario {
                label: label.to_string(),
                start: start.to_string(),
                goal: goal.to_string(),
                fewest_transfers: DemoRoute::from_stations(&fewest, fewest_minutes),
                fastest: DemoRoute::from_stations(&fastest.stations, fastest.minutes),
            })
        })
        .collect()
}

/// Render the scenarios in the requested format.
pub fn render_scenarios(scenarios: &[DemoScenario], format: OutputFormat) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Text => {
            for (number, scenario) in scenarios.iter().enumerate() {
                let _ = writeln!(buffer, "{}. {}", number + 1, scenario.label);
                let _ = writeln!(
                    buffer,
                    "   Fewest transfers ({} min): {}",
                    scenario.fewest_transfers.minutes,
                    scenario.fewest_transfers.joined()
                );
                let _ = writeln!(
                    buffer,
                    "   Fastest ({} min): {}",
                    scenario.fastest.minutes,
                    scenario.fastest.joined()
                );
            }
        }
        OutputFormat::Rich => {
            for scenario in scenarios {
                let _ = writeln!(
                    buffer,
                    "**{}** (`{}` → `{}`)",
                    scenario.label, scenario.start, scenario.goal
                );
                let _ = writeln!(
                    buffer,
                    "* _Fewest transfers_, {} min: {}",
                    scenario.fewest_transfers.minutes,
                    scenario.fewest_transfers.joined()
                );
                let _ = writeln!(
                    buffer,
                    "* _Fastest_, {} min: {}",
                    scenario.fastest.minutes,
                    scenario.fastest.joined()
                );
            }
        }
        OutputFormat::Json => buffer = json_line(scenarios)?,
    }
    Ok(buffer)
}

/// Handle the demo subcommand. Always uses the sample network.
pub fn handle_demo_command(format: OutputFormat) -> Result<()> {
    let network = sample_network();
    let scenarios = run_scenarios(&network)?;
    print!("{}", render_scenarios(&scenarios, format)?);
    Ok(())
}
