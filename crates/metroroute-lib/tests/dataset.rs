mod common;

use std::fs;

use common::{ids, two_lines_path};
use metroroute_lib::{
    find_fastest_route, find_fewest_transfers_route, load_network, resolve_network_path, Error,
};
use tempfile::tempdir;

#[test]
fn fixture_document_loads() {
    let network = load_network(&two_lines_path()).expect("fixture loads");

    assert_eq!(network.len(), 9);
    assert_eq!(network.connection_count(), 8);
    assert_eq!(network.lines(), vec!["Green Line", "Red Line", "Yellow Line"]);
}

#[test]
fn fixture_document_routes() {
    let network = load_network(&two_lines_path()).expect("fixture loads");

    let fastest = find_fastest_route(&network, "G1", "R4").unwrap();
    assert_eq!(ids(&fastest.stations), vec!["G1", "G2", "R2", "R3", "R4"]);
    assert_eq!(fastest.minutes, 21);

    let fewest = find_fewest_transfers_route(&network, "G1", "R4").unwrap();
    assert_eq!(ids(&fewest), vec!["G1", "G2", "G3", "R4"]);

    assert!(find_fastest_route(&network, "R1", "Y1").is_none());
}

#[test]
fn missing_document_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = load_network(&dir.path().join("absent.json")).expect_err("file missing");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn document_with_unknown_endpoint_is_rejected() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("network.json");
    fs::write(
        &path,
        r#"{
            "stations": [{ "id": "A", "name": "Alpha", "line": "L" }],
            "connections": [{ "from": "A", "to": "B", "minutes": 1 }]
        }"#,
    )
    .expect("write document");

    let err = load_network(&path).expect_err("unknown endpoint");
    assert_eq!(err.to_string(), "connection references unknown station B");
}

#[test]
fn explicit_path_is_resolved_first() {
    let path = two_lines_path();
    assert_eq!(resolve_network_path(Some(&path)), Some(path.clone()));
}
