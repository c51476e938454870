//! Route command handler for computing paths between stations.

use anyhow::{Context, Result};
use clap::ValueEnum;

use metroroute_lib::{
    plan_route, Error as RouteError, Heuristic, Network, RouteAlgorithm, RouteRequest,
    RouteSummary,
};

use crate::output::OutputFormat;

/// Routing question selectable with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Minimize total travel time.
    #[default]
    Fastest,
    /// Minimize the number of connections.
    FewestTransfers,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Fastest => RouteAlgorithm::Fastest,
            AlgorithmArg::FewestTransfers => RouteAlgorithm::FewestTransfers,
        }
    }
}

/// Estimate used by the fastest-route search, selectable with `--heuristic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeuristicArg {
    /// No estimate; always finds the quickest route.
    #[default]
    Zero,
    /// Digit distance between station identifiers.
    IdentifierDigit,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::Zero => Heuristic::Zero,
            HeuristicArg::IdentifierDigit => Heuristic::IdentifierDigit,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting station id.
    pub from: String,
    /// Destination station id.
    pub to: String,
    pub algorithm: AlgorithmArg,
    pub heuristic: HeuristicArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm.into(),
            heuristic: self.heuristic.into(),
        }
    }
}

/// Handle the route subcommand and print the rendered route.
pub fn handle_route_command(
    network: &Network,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let plan = match plan_route(network, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::from_plan(network, &plan)
        .context("failed to build route summary for display")?;
    print!("{}", format.render_route(&summary)?);
    Ok(())
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownStation { id, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&id, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_station_message(id: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{}'.", id);
    match suggestions {
        [] => {}
        [suggestion] => message.push_str(&format!(" Did you mean '{suggestion}'?")),
        _ => {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. The stations are on disconnected parts of the network.",
        start, goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_message_lists_suggestions() {
        assert_eq!(
            format_unknown_station_message("K9", &[]),
            "Unknown station 'K9'."
        );
        assert_eq!(
            format_unknown_station_message("K9", &["K1".to_string()]),
            "Unknown station 'K9'. Did you mean 'K1'?"
        );
        assert_eq!(
            format_unknown_station_message("K9", &["K1".to_string(), "K2".to_string()]),
            "Unknown station 'K9'. Did you mean one of: 'K1', 'K2'?"
        );
    }

    #[test]
    fn args_map_to_request() {
        let args = RouteCommandArgs {
            from: "K1".to_string(),
            to: "T4".to_string(),
            algorithm: AlgorithmArg::FewestTransfers,
            heuristic: HeuristicArg::IdentifierDigit,
        };
        let request = args.to_request();
        assert_eq!(request.start, "K1");
        assert_eq!(request.goal, "T4");
        assert_eq!(request.algorithm, RouteAlgorithm::FewestTransfers);
        assert_eq!(request.heuristic, Heuristic::IdentifierDigit);
    }

    #[test]
    fn route_not_found_message_names_both_stations() {
        let message = format_route_not_found_message("K1", "A1");
        assert!(message.starts_with("No route found between K1 and A1."));
    }
}
