//! Remaining-time estimates used to order the fastest-route search.

use std::fmt;

use serde::Serialize;

use crate::network::{Minutes, Station};

/// Estimate of the minutes left between a station and the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Always zero. The fastest-route search then behaves like Dijkstra and
    /// its result is guaranteed to be minimal.
    #[default]
    Zero,
    /// Absolute difference of the digit found at the second character of each
    /// identifier (`"K1"` vs `"K4"` gives 3).
    ///
    /// Identifiers carry no distance information, so this can overestimate and
    /// the returned route is then not guaranteed to be the fastest. When either
    /// identifier lacks a second character, or it is not an ASCII digit, the
    /// estimate is zero.
    IdentifierDigit,
}

impl Heuristic {
    pub fn estimate(self, station: &Station, goal: &Station) -> Minutes {
        match self {
            Heuristic::Zero => 0,
            Heuristic::IdentifierDigit => {
                match (position_digit(&station.id), position_digit(&goal.id)) {
                    (Some(a), Some(b)) => a.abs_diff(b),
                    _ => 0,
                }
            }
        }
    }
}

fn position_digit(id: &str) -> Option<Minutes> {
    id.chars().nth(1).and_then(|c| c.to_digit(10))
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::Zero => "zero",
            Heuristic::IdentifierDigit => "identifier-digit",
        };
        f.write_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;

    fn network() -> Network {
        let mut network = Network::new();
        network.add_station("K1", "Yenikapı", "Mavi Hat");
        network.add_station("K4", "Levent", "Mavi Hat");
        network.add_station("A9", "OSB", "Kırmızı Hat");
        network.add_station("X", "Short", "Test");
        network.add_station("QQ", "Letters", "Test");
        network
    }

    #[test]
    fn zero_is_always_zero() {
        let network = network();
        let k1 = network.station("K1").unwrap();
        let a9 = network.station("A9").unwrap();
        assert_eq!(Heuristic::Zero.estimate(k1, a9), 0);
    }

    #[test]
    fn identifier_digit_uses_second_character() {
        let network = network();
        let k1 = network.station("K1").unwrap();
        let k4 = network.station("K4").unwrap();
        let a9 = network.station("A9").unwrap();
        assert_eq!(Heuristic::IdentifierDigit.estimate(k1, k4), 3);
        assert_eq!(Heuristic::IdentifierDigit.estimate(k4, k1), 3);
        assert_eq!(Heuristic::IdentifierDigit.estimate(a9, k1), 8);
    }

    #[test]
    fn identifier_digit_falls_back_to_zero() {
        let network = network();
        let k4 = network.station("K4").unwrap();
        let short = network.station("X").unwrap();
        let letters = network.station("QQ").unwrap();
        assert_eq!(Heuristic::IdentifierDigit.estimate(short, k4), 0);
        assert_eq!(Heuristic::IdentifierDigit.estimate(k4, letters), 0);
    }

    #[test]
    fn display_matches_cli_names() {
        assert_eq!(Heuristic::Zero.to_string(), "zero");
        assert_eq!(Heuristic::IdentifierDigit.to_string(), "identifier-digit");
    }
}
