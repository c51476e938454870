//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use metroroute_lib::{Minutes, Network, Station};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the two-line network document fixture.
#[allow(dead_code)]
pub fn two_lines_path() -> PathBuf {
    fixtures_dir().join("two_lines.json")
}

/// Station identifiers of a route, in order.
#[allow(dead_code)]
pub fn ids(stations: &[&Station]) -> Vec<String> {
    stations.iter().map(|station| station.id.clone()).collect()
}

/// Build a single line whose consecutive stations are joined with `minutes`.
///
/// `ids` must be one longer than `minutes`.
#[allow(dead_code)]
pub fn line_network(line: &str, ids: &[&str], minutes: &[Minutes]) -> Network {
    assert_eq!(ids.len(), minutes.len() + 1, "one time per connection");
    let mut network = Network::new();
    extend_line(&mut network, line, ids, minutes);
    network
}

/// Add another line to an existing network.
#[allow(dead_code)]
pub fn extend_line(network: &mut Network, line: &str, ids: &[&str], minutes: &[Minutes]) {
    for id in ids {
        network.add_station(*id, format!("{id} station"), line);
    }
    for (pair, time) in ids.windows(2).zip(minutes) {
        network.add_connection(pair[0], pair[1], *time);
    }
}

/// Snapshot of every station's links, for before/after comparisons.
#[allow(dead_code)]
pub fn adjacency_snapshot(network: &Network) -> Vec<(String, Vec<(String, Minutes)>)> {
    network
        .stations()
        .map(|station| {
            let links = station
                .links()
                .iter()
                .map(|link| (network.station_at(link.target).id.clone(), link.minutes))
                .collect();
            (station.id.clone(), links)
        })
        .collect()
}
