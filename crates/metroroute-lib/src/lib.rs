//! Metro network route finding.
//!
//! This crate models a multi-line transit network as an undirected graph with
//! travel times in minutes and answers two questions between two stations:
//! the fastest route and the route with the fewest connections. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod heuristic;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod sample;

pub use dataset::{
    default_network_path, load_network, parse_network, resolve_network_path, NetworkDocument,
    NETWORK_ENV_VAR,
};
pub use error::{Error, Result};
pub use heuristic::Heuristic;
pub use network::{Link, Minutes, Network, Station, StationIndex};
pub use output::{station_names, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    find_fastest_route, find_fastest_route_with, find_fewest_transfers_route, line_changes,
    route_minutes, FastestRoute,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use sample::{sample_network, SAMPLE_QUERIES};
