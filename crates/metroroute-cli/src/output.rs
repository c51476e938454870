//! Output formatting for the CLI.
//!
//! Every renderer returns the finished text so the command handlers decide
//! where it goes.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use metroroute_lib::dataset::StationRecord;
use metroroute_lib::{Network, RouteRenderMode, RouteSummary, Station};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one station per line.
    #[default]
    Text,
    /// Markdown-flavoured text grouped by line.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// One metro line and the ids of its stations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineListing<'a> {
    pub name: &'a str,
    pub stations: Vec<&'a str>,
}

impl OutputFormat {
    /// Render a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        Ok(match self {
            OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
            OutputFormat::Rich => summary.render(RouteRenderMode::RichText),
            OutputFormat::Json => json_line(summary)?,
        })
    }

    /// Render a list of stations.
    pub fn render_stations(self, stations: &[&Station]) -> Result<String> {
        let mut buffer = String::new();
        match self {
            OutputFormat::Text => {
                for station in stations {
                    let _ = writeln!(
                        buffer,
                        "{:<4} {} ({})",
                        station.id, station.name, station.line
                    );
                }
            }
            OutputFormat::Rich => {
                for station in stations {
                    let _ = writeln!(
                        buffer,
                        "* **{}** (`{}`) _{}_",
                        station.name, station.id, station.line
                    );
                }
            }
            OutputFormat::Json => {
                let records: Vec<StationRecord> = stations
                    .iter()
                    .map(|station| StationRecord {
                        id: station.id.clone(),
                        name: station.name.clone(),
                        line: station.line.clone(),
                    })
                    .collect();
                buffer = json_line(&records)?;
            }
        }
        Ok(buffer)
    }

    /// Render every line of the network with its stations.
    pub fn render_lines(self, network: &Network) -> Result<String> {
        let listings = line_listings(network);
        let mut buffer = String::new();
        match self {
            OutputFormat::Text => {
                for listing in &listings {
                    let _ = writeln!(
                        buffer,
                        "{} ({} stations): {}",
                        listing.name,
                        listing.stations.len(),
                        listing.stations.join(", ")
                    );
                }
            }
            OutputFormat::Rich => {
                for listing in &listings {
                    let _ = writeln!(buffer, "* _{}_", listing.name);
                    for id in &listing.stations {
                        let _ = writeln!(buffer, "  * `{id}`");
                    }
                }
            }
            OutputFormat::Json => buffer = json_line(&listings)?,
        }
        Ok(buffer)
    }
}

fn line_listings(network: &Network) -> Vec<LineListing<'_>> {
    network
        .lines()
        .into_iter()
        .map(|name| LineListing {
            name,
            stations: network.line(name).map(|station| station.id.as_str()).collect(),
        })
        .collect()
}

/// Pretty JSON terminated by a newline.
pub fn json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metroroute_lib::{plan_route, sample_network, RouteRequest};

    fn two_station_network() -> Network {
        let mut network = Network::new();
        network.add_station("R1", "Harbour", "Red");
        network.add_station("R2", "Market", "Red");
        network.add_station("G1", "Park", "Green");
        network.add_connection("R1", "R2", 3);
        network.add_connection("R2", "G1", 2);
        network
    }

    #[test]
    fn text_station_listing_has_one_row_per_station() {
        let network = two_station_network();
        let stations: Vec<&Station> = network.stations().collect();
        let text = OutputFormat::Text.render_stations(&stations).unwrap();
        assert_eq!(
            text,
            "R1   Harbour (Red)\nR2   Market (Red)\nG1   Park (Green)\n"
        );
    }

    #[test]
    fn json_station_listing_uses_document_records() {
        let network = two_station_network();
        let stations: Vec<&Station> = network.line("Green").collect();
        let json = OutputFormat::Json.render_stations(&stations).unwrap();
        let records: Vec<StationRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "G1");
    }

    #[test]
    fn text_lines_are_sorted_by_name() {
        let network = two_station_network();
        let text = OutputFormat::Text.render_lines(&network).unwrap();
        assert_eq!(
            text,
            "Green (1 stations): G1\nRed (2 stations): R1, R2\n"
        );
    }

    #[test]
    fn json_route_carries_algorithm_and_minutes() {
        let network = sample_network();
        let plan = plan_route(&network, &RouteRequest::fastest("K2", "K4")).unwrap();
        let summary = RouteSummary::from_plan(&network, &plan).unwrap();

        let json = OutputFormat::Json.render_route(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "fastest");
        assert_eq!(value["minutes"], 16);
        assert_eq!(value["steps"].as_array().map(Vec::len), Some(3));
    }
}
