//! Listing commands for stations and lines.

use anyhow::{bail, Result};

use metroroute_lib::{Network, Station};

use crate::output::OutputFormat;

/// Handle the stations subcommand, optionally restricted to one line.
pub fn handle_stations_command(
    network: &Network,
    format: OutputFormat,
    line: Option<&str>,
) -> Result<()> {
    let stations: Vec<&Station> = match line {
        Some(name) => {
            let stations: Vec<&Station> = network.line(name).collect();
            if stations.is_empty() {
                bail!(
                    "Unknown line '{}'. Available lines: {}.",
                    name,
                    network.lines().join(", ")
                );
            }
            stations
        }
        None => network.stations().collect(),
    };

    print!("{}", format.render_stations(&stations)?);
    Ok(())
}

/// Handle the lines subcommand.
pub fn handle_lines_command(network: &Network, format: OutputFormat) -> Result<()> {
    print!("{}", format.render_lines(network)?);
    Ok(())
}
