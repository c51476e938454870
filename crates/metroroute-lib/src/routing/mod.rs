//! Route planning for metro networks.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing questions (fastest, fewest transfers)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Unlike the raw search functions in [`crate::path`], [`plan_route`] tells
//! an unknown station apart from a missing route.
//!
//! # Example
//!
//! ```
//! use metroroute_lib::{plan_route, sample_network, RouteRequest};
//!
//! let network = sample_network();
//! let plan = plan_route(&network, &RouteRequest::fastest("K1", "K4")).unwrap();
//! assert_eq!(plan.minutes, 20);
//! ```

mod planner;

pub use planner::{
    select_planner, FastestPlanner, FewestTransfersPlanner, PlannedPath, RoutePlanner,
};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::network::{Minutes, Network, StationIndex};

/// Number of suggestions offered for a mistyped station identifier.
pub(crate) const SUGGESTION_LIMIT: usize = 3;

/// Supported routing questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Lowest total travel time (A* search).
    #[default]
    Fastest,
    /// Fewest connections travelled, ignoring time (breadth-first search).
    FewestTransfers,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Fastest => "fastest",
            RouteAlgorithm::FewestTransfers => "fewest-transfers",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    /// Only consulted by [`RouteAlgorithm::Fastest`].
    pub heuristic: Heuristic,
}

impl RouteRequest {
    /// Request the fastest route using the zero heuristic.
    pub fn fastest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Fastest,
            heuristic: Heuristic::default(),
        }
    }

    /// Request the route with the fewest connections.
    pub fn fewest_transfers(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::FewestTransfers,
            heuristic: Heuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    /// Station identifiers from start to goal, both included.
    pub steps: Vec<String>,
    /// Total travel time of `steps`.
    pub minutes: Minutes,
}

impl RoutePlan {
    /// Number of connections travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a station identifier, suggesting close matches when it is unknown.
fn resolve_station(network: &Network, id: &str) -> Result<StationIndex> {
    network.index_of(id).ok_or_else(|| Error::UnknownStation {
        id: id.to_string(),
        suggestions: network.fuzzy_station_matches(id, SUGGESTION_LIMIT),
    })
}

/// Compute a route for the request.
///
/// Fails with [`Error::UnknownStation`] when either identifier is not part of
/// the network and with [`Error::RouteNotFound`] when both exist but are not
/// connected.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_station(network, &request.start)?;
    let goal = resolve_station(network, &request.goal)?;

    let planner = select_planner(request);
    let found = planner
        .find_path(network, start, goal)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        algorithm = %planner.algorithm(),
        start = %request.start,
        goal = %request.goal,
        hops = found.stations.len().saturating_sub(1),
        minutes = found.minutes,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps: found
            .stations
            .iter()
            .map(|index| network.station_at(*index).id.clone())
            .collect(),
        minutes: found.minutes,
    })
}
