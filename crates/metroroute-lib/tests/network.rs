mod common;

use common::{adjacency_snapshot, line_network};
use metroroute_lib::{Error, Network};

#[test]
fn connection_between_unknown_ids_changes_nothing() {
    let mut network = line_network("Red", &["R1", "R2", "R3"], &[3, 4]);
    let before = adjacency_snapshot(&network);

    network.add_connection("X1", "X2", 5);
    network.add_connection("R1", "X2", 5);
    network.add_connection("X1", "R3", 5);

    assert_eq!(network.len(), 3);
    assert_eq!(network.connection_count(), 2);
    assert_eq!(adjacency_snapshot(&network), before);
}

#[test]
fn strict_connection_leaves_network_untouched_on_error() {
    let mut network = line_network("Red", &["R1", "R2"], &[3]);
    let before = adjacency_snapshot(&network);

    let err = network
        .try_add_connection("X1", "R2", 5)
        .expect_err("unknown start");
    assert_eq!(err.to_string(), "connection references unknown station X1");

    let err = network
        .try_add_connection("R1", "X2", 5)
        .expect_err("unknown goal");
    assert!(matches!(err, Error::UnknownConnectionEndpoint { ref id } if id == "X2"));

    assert_eq!(adjacency_snapshot(&network), before);
}

#[test]
fn duplicate_station_id_keeps_existing_adjacency() {
    let mut network = line_network("Red", &["R1", "R2", "R3"], &[3, 4]);
    let before = adjacency_snapshot(&network);

    network.add_station("R2", "Replacement", "Blue");

    assert_eq!(adjacency_snapshot(&network), before);
    let r2 = network.station("R2").expect("station exists");
    assert_eq!(r2.name, "R2 station");
    assert_eq!(r2.line, "Red");
    assert_eq!(network.line("Blue").count(), 0);
}

#[test]
fn each_connection_adds_one_link_per_endpoint() {
    let mut network = line_network("Red", &["R1", "R2"], &[3]);
    network.add_connection("R1", "R2", 3);

    let r1 = network.station("R1").unwrap();
    let r2 = network.station("R2").unwrap();
    assert_eq!(r1.links().len(), 2);
    assert_eq!(r2.links().len(), 2);
    assert_eq!(network.connection_count(), 2);
}

#[test]
fn every_line_member_is_registered_by_id() {
    let mut network = line_network("Red", &["R1", "R2"], &[3]);
    network.add_station("B1", "Bay", "Blue");

    for line in network.lines() {
        for station in network.line(line) {
            let by_id = network.station(&station.id).expect("registered by id");
            assert_eq!(by_id.index(), station.index());
        }
    }
}

#[test]
fn lookup_reports_missing_station() {
    let network = Network::new();
    assert!(network.is_empty());
    assert!(network.station("R1").is_none());
    assert!(network.index_of("R1").is_none());
    assert!(network.lines().is_empty());
}
