//! Built-in sample network with two Istanbul and three Ankara metro lines.
//!
//! Used by the CLI when no network document is configured, and as a shared
//! fixture for tests and benchmarks.

use crate::network::{Minutes, Network};

const STATIONS: &[(&str, &str, &str)] = &[
    // Istanbul
    ("K1", "Yenikapı", "Mavi Hat"),
    ("K2", "Haliç", "Mavi Hat"),
    ("K3", "Taksim", "Mavi Hat"),
    ("K4", "Levent", "Mavi Hat"),
    ("T1", "Merter", "Turuncu Hat"),
    ("T2", "Zincirlikuyu", "Turuncu Hat"),
    ("T3", "Altunizade", "Turuncu Hat"),
    ("T4", "Söğütlüçeşme", "Turuncu Hat"),
    // Ankara
    ("A1", "Kızılay", "Kırmızı Hat"),
    ("A2", "Ulus", "Kırmızı Hat"),
    ("A3", "Demetevler", "Kırmızı Hat"),
    ("A4", "OSB", "Kırmızı Hat"),
    ("B1", "AŞTİ", "Mavi Hat"),
    ("B2", "Kızılay", "Mavi Hat"),
    ("B3", "Sıhhiye", "Mavi Hat"),
    ("B4", "Gar", "Mavi Hat"),
    ("C1", "Batıkent", "Turuncu Hat"),
    ("C2", "Demetevler", "Turuncu Hat"),
    ("C3", "Gar", "Turuncu Hat"),
    ("C4", "Keçiören", "Turuncu Hat"),
];

const CONNECTIONS: &[(&str, &str, Minutes)] = &[
    ("K1", "K2", 4),
    ("K2", "K3", 4),
    ("K3", "K4", 12),
    ("T1", "T2", 32),
    ("T2", "T3", 8),
    ("T3", "T4", 12),
    // Istanbul transfer
    ("K1", "T1", 24),
    ("A1", "A2", 4),
    ("A2", "A3", 6),
    ("A3", "A4", 8),
    ("B1", "B2", 5),
    ("B2", "B3", 3),
    ("B3", "B4", 4),
    ("C1", "C2", 7),
    ("C2", "C3", 9),
    ("C3", "C4", 5),
    // Ankara transfers
    ("A1", "B2", 2),
    ("A3", "C2", 3),
    ("B4", "C3", 2),
];

/// Route queries exercised by the `demo` command: (label, start, goal).
pub const SAMPLE_QUERIES: &[(&str, &str, &str)] = &[
    ("Haliç -> Levent", "K2", "K4"),
    ("Yenikapı -> Söğütlüçeşme", "K1", "T4"),
    ("Merter -> Altunizade", "T1", "T3"),
    ("AŞTİ -> OSB", "B1", "A4"),
    ("Demetevler -> Keçiören", "C2", "C4"),
    ("Keçiören -> AŞTİ", "C4", "B1"),
];

/// Build the sample network.
///
/// The Istanbul and Ankara halves are not connected to each other.
pub fn sample_network() -> Network {
    let mut network = Network::new();
    for &(id, name, line) in STATIONS {
        network.add_station(id, name, line);
    }
    for &(from, to, minutes) in CONNECTIONS {
        network.add_connection(from, to, minutes);
    }
    network
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_network_is_fully_wired() {
        let network = sample_network();
        assert_eq!(network.len(), STATIONS.len());
        assert_eq!(network.connection_count(), CONNECTIONS.len());
        assert_eq!(
            network.lines(),
            vec!["Kırmızı Hat", "Mavi Hat", "Turuncu Hat"]
        );
    }

    #[test]
    fn sample_queries_reference_known_stations() {
        let network = sample_network();
        for (_, start, goal) in SAMPLE_QUERIES {
            assert!(network.station(start).is_some(), "{start}");
            assert!(network.station(goal).is_some(), "{goal}");
        }
    }
}
