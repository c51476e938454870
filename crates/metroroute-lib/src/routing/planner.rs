//! Route planning strategies.
//!
//! Each routing question is answered by its own `RoutePlanner`, so
//! `plan_route` only resolves stations and reports errors.

use crate::heuristic::Heuristic;
use crate::network::{Minutes, Network, StationIndex};
use crate::path::{fastest_path, fewest_hops_path, route_minutes};

use super::{RouteAlgorithm, RouteRequest};

/// Path found by a planner, as station indices plus its travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPath {
    pub stations: Vec<StationIndex>,
    pub minutes: Minutes,
}

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The routing question this planner answers.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given network.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        network: &Network,
        start: StationIndex,
        goal: StationIndex,
    ) -> Option<PlannedPath>;
}

/// A* planner minimizing total travel time.
#[derive(Debug, Clone, Default)]
pub struct FastestPlanner {
    heuristic: Heuristic,
}

impl FastestPlanner {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl RoutePlanner for FastestPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Fastest
    }

    fn find_path(
        &self,
        network: &Network,
        start: StationIndex,
        goal: StationIndex,
    ) -> Option<PlannedPath> {
        fastest_path(network, start, goal, self.heuristic)
            .map(|(stations, minutes)| PlannedPath { stations, minutes })
    }
}

/// Breadth-first planner minimizing the number of connections.
///
/// The reported minutes are those of the chosen path, which need not be the
/// quickest one.
#[derive(Debug, Clone, Default)]
pub struct FewestTransfersPlanner;

impl RoutePlanner for FewestTransfersPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::FewestTransfers
    }

    fn find_path(
        &self,
        network: &Network,
        start: StationIndex,
        goal: StationIndex,
    ) -> Option<PlannedPath> {
        let stations = fewest_hops_path(network, start, goal)?;
        let resolved: Vec<_> = stations
            .iter()
            .map(|index| network.station_at(*index))
            .collect();
        // Consecutive BFS stations are always linked.
        let minutes = route_minutes(&resolved)?;
        Some(PlannedPath { stations, minutes })
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Fastest => Box::new(FastestPlanner::new(request.heuristic)),
        RouteAlgorithm::FewestTransfers => Box::new(FewestTransfersPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Network {
        let mut network = Network::new();
        network.add_station("A1", "Alpha", "Red");
        network.add_station("A2", "Beta", "Red");
        network.add_station("A3", "Gamma", "Red");
        network.add_connection("A1", "A2", 3);
        network.add_connection("A2", "A3", 5);
        network.add_connection("A1", "A3", 20);
        network
    }

    #[test]
    fn fastest_planner_returns_correct_algorithm() {
        let planner = FastestPlanner::default();
        assert_eq!(planner.algorithm(), RouteAlgorithm::Fastest);
        assert_eq!(planner.heuristic(), Heuristic::Zero);
    }

    #[test]
    fn fewest_transfers_planner_returns_correct_algorithm() {
        assert_eq!(
            FewestTransfersPlanner.algorithm(),
            RouteAlgorithm::FewestTransfers
        );
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let planner = select_planner(&RouteRequest::fewest_transfers("A", "B"));
        assert_eq!(planner.algorithm(), RouteAlgorithm::FewestTransfers);

        let planner = select_planner(&RouteRequest::fastest("A", "B"));
        assert_eq!(planner.algorithm(), RouteAlgorithm::Fastest);
    }

    #[test]
    fn planners_answer_different_questions() {
        let network = line();
        let start = network.index_of("A1").unwrap();
        let goal = network.index_of("A3").unwrap();

        let fastest = FastestPlanner::default()
            .find_path(&network, start, goal)
            .unwrap();
        assert_eq!(fastest.stations.len(), 3);
        assert_eq!(fastest.minutes, 8);

        let fewest = FewestTransfersPlanner
            .find_path(&network, start, goal)
            .unwrap();
        assert_eq!(fewest.stations, vec![start, goal]);
        assert_eq!(fewest.minutes, 20);
    }
}
