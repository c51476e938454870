use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::heuristic::Heuristic;
use crate::network::{Minutes, Network, Station, StationIndex};

/// Route returned by the fastest-route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastestRoute<'a> {
    /// Stations from start to goal, both included.
    pub stations: Vec<&'a Station>,
    /// Sum of the connection times along `stations`.
    pub minutes: Minutes,
}

/// Find the route with the lowest total travel time using the default
/// (zero) heuristic.
///
/// Returns `None` when either identifier is unknown or the stations are not
/// connected.
pub fn find_fastest_route<'a>(
    network: &'a Network,
    start: &str,
    goal: &str,
) -> Option<FastestRoute<'a>> {
    find_fastest_route_with(network, start, goal, Heuristic::default())
}

/// Find the route with the lowest total travel time, ordering exploration with
/// `heuristic`.
pub fn find_fastest_route_with<'a>(
    network: &'a Network,
    start: &str,
    goal: &str,
    heuristic: Heuristic,
) -> Option<FastestRoute<'a>> {
    let start_index = network.index_of(start)?;
    let goal_index = network.index_of(goal)?;

    let Some((path, minutes)) = fastest_path(network, start_index, goal_index, heuristic) else {
        debug!(start, goal, "no fastest route");
        return None;
    };

    Some(FastestRoute {
        stations: resolve(network, &path),
        minutes,
    })
}

/// Find the route with the fewest connections, ignoring travel time.
///
/// Returns `None` when either identifier is unknown or the stations are not
/// connected.
pub fn find_fewest_transfers_route<'a>(
    network: &'a Network,
    start: &str,
    goal: &str,
) -> Option<Vec<&'a Station>> {
    let start_index = network.index_of(start)?;
    let goal_index = network.index_of(goal)?;

    let Some(path) = fewest_hops_path(network, start_index, goal_index) else {
        debug!(start, goal, "no fewest-transfers route");
        return None;
    };

    Some(resolve(network, &path))
}

/// Run A* between two station indices.
///
/// Frontier entries are ordered by estimated total, then accumulated minutes,
/// then station id, then the station ids of the path taken, compared
/// lexicographically. A station is expanded again only when it is reached
/// with strictly fewer minutes than before. The first time the goal leaves
/// the queue its path is returned. Paths whose total would not fit in
/// [`Minutes`] are dropped.
///
/// # Panics
///
/// Panics when `start` or `goal` was not produced by `network`.
pub(crate) fn fastest_path(
    network: &Network,
    start: StationIndex,
    goal: StationIndex,
    heuristic: Heuristic,
) -> Option<(Vec<StationIndex>, Minutes)> {
    let goal_station = network.station_at(goal);
    let start_station = network.station_at(start);

    let mut finalized: HashMap<StationIndex, Minutes> = HashMap::new();
    let mut queue = BinaryHeap::new();
    queue.push(FrontierEntry {
        estimate: u64::from(heuristic.estimate(start_station, goal_station)),
        cost: 0,
        node: Rc::new(SearchNode {
            id: &start_station.id,
            station: start,
            parent: None,
        }),
    });

    while let Some(entry) = queue.pop() {
        let station = entry.node.station;
        if station == goal {
            let path = entry.node.stations();
            debug!(
                goal = %goal_station.id,
                minutes = entry.cost,
                stops = path.len(),
                expanded = finalized.len(),
                "fastest route found"
            );
            return Some((path, entry.cost));
        }

        if finalized
            .get(&station)
            .is_some_and(|&best| best <= entry.cost)
        {
            continue;
        }
        finalized.insert(station, entry.cost);
        trace!(station = entry.node.id, cost = entry.cost, "expanding");

        for link in network.links(station) {
            let Some(cost) = entry.cost.checked_add(link.minutes) else {
                trace!(station = entry.node.id, "dropping path whose minutes overflow");
                continue;
            };
            let next = network.station_at(link.target);
            queue.push(FrontierEntry {
                estimate: u64::from(cost) + u64::from(heuristic.estimate(next, goal_station)),
                cost,
                node: Rc::new(SearchNode {
                    id: &next.id,
                    station: link.target,
                    parent: Some(Rc::clone(&entry.node)),
                }),
            });
        }
    }

    None
}

/// Run breadth-first search between two station indices.
///
/// Stations are marked as seen when queued, so each one is queued at most once.
///
/// # Panics
///
/// Panics when `start` or `goal` was not produced by `network`.
pub(crate) fn fewest_hops_path(
    network: &Network,
    start: StationIndex,
    goal: StationIndex,
) -> Option<Vec<StationIndex>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: HashMap<StationIndex, Option<StationIndex>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for link in network.links(current) {
            let next = link.target;
            if parents.contains_key(&next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                let path = reconstruct_path(&parents, start, goal);
                debug!(
                    hops = path.len() - 1,
                    visited = parents.len(),
                    "fewest-transfers route found"
                );
                return Some(path);
            }
            queue.push_back(next);
        }
    }

    None
}

/// Total minutes along consecutive stations, using the cheapest link between
/// each pair. `None` when two consecutive stations are not directly linked or
/// the total does not fit in [`Minutes`].
pub fn route_minutes(stations: &[&Station]) -> Option<Minutes> {
    stations.windows(2).try_fold(0 as Minutes, |total, pair| {
        total.checked_add(pair[0].minutes_to(pair[1])?)
    })
}

/// Number of times a route moves between stations of different lines.
pub fn line_changes(stations: &[&Station]) -> usize {
    stations
        .windows(2)
        .filter(|pair| pair[0].line != pair[1].line)
        .count()
}

fn resolve<'a>(network: &'a Network, path: &[StationIndex]) -> Vec<&'a Station> {
    path.iter().map(|index| network.station_at(*index)).collect()
}

fn reconstruct_path(
    parents: &HashMap<StationIndex, Option<StationIndex>>,
    start: StationIndex,
    goal: StationIndex,
) -> Vec<StationIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

/// Node of the A* search tree; paths share their prefixes through `parent`.
#[derive(Debug)]
struct SearchNode<'a> {
    id: &'a str,
    station: StationIndex,
    parent: Option<Rc<SearchNode<'a>>>,
}

impl<'a> SearchNode<'a> {
    fn ancestry(&self) -> impl Iterator<Item = &SearchNode<'a>> {
        std::iter::successors(Some(self), |&node| node.parent.as_deref())
    }

    /// Stations from the root to this node.
    fn stations(&self) -> Vec<StationIndex> {
        let mut path: Vec<StationIndex> = self.ancestry().map(|node| node.station).collect();
        path.reverse();
        path
    }

    /// Station ids from the root to this node.
    fn ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = self.ancestry().map(|node| node.id).collect();
        ids.reverse();
        ids
    }
}

#[derive(Debug)]
struct FrontierEntry<'a> {
    /// Accumulated minutes plus the heuristic, widened so it cannot overflow.
    estimate: u64,
    cost: Minutes,
    node: Rc<SearchNode<'a>>,
}

impl FrontierEntry<'_> {
    fn cmp_path(&self, other: &Self) -> Ordering {
        if Rc::ptr_eq(&self.node, &other.node) {
            return Ordering::Equal;
        }
        self.node.ids().cmp(&other.node.ids())
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.node.id.cmp(self.node.id))
            .then_with(|| other.cmp_path(self))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}
