use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::path::route_minutes;

/// Travel time between two stations, in whole minutes.
pub type Minutes = u32;

/// Minimum Jaro-Winkler similarity for a station to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Position of a station inside the network's station table.
///
/// Indices are only meaningful for the [`Network`] that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationIndex(usize);

impl StationIndex {
    /// Raw position in the station table.
    pub fn get(self) -> usize {
        self.0
    }
}

/// One direction of a connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub target: StationIndex,
    pub minutes: Minutes,
}

/// A stop on one transit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub line: String,
    index: StationIndex,
    links: Vec<Link>,
}

impl Station {
    /// Position of this station in its network.
    pub fn index(&self) -> StationIndex {
        self.index
    }

    /// Outgoing links, one per connection endpoint added for this station.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Cheapest direct link from this station to `other`, if any.
    pub fn minutes_to(&self, other: &Station) -> Option<Minutes> {
        self.links
            .iter()
            .filter(|link| link.target == other.index)
            .map(|link| link.minutes)
            .min()
    }
}

/// In-memory transit network: stations, their lines and timed connections.
///
/// The network owns every [`Station`]; links refer to stations by
/// [`StationIndex`]. Queries only ever borrow it immutably, so a fully built
/// network can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    by_id: HashMap<String, StationIndex>,
    lines: HashMap<String, Vec<StationIndex>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station unless one with the same `id` already exists.
    ///
    /// Duplicates are ignored so that existing links are never clobbered.
    pub fn add_station(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        line: impl Into<String>,
    ) {
        let id = id.into();
        if self.by_id.contains_key(&id) {
            debug!(station = %id, "ignoring duplicate station");
            return;
        }

        let index = StationIndex(self.stations.len());
        let line = line.into();
        self.lines.entry(line.clone()).or_default().push(index);
        self.by_id.insert(id.clone(), index);
        self.stations.push(Station {
            id,
            name: name.into(),
            line,
            index,
            links: Vec::new(),
        });
    }

    /// Connect two stations in both directions.
    ///
    /// Connections that reference an unknown station are silently dropped; use
    /// [`Network::try_add_connection`] to have them reported instead.
    pub fn add_connection(&mut self, from: &str, to: &str, minutes: Minutes) {
        if let Err(err) = self.try_add_connection(from, to, minutes) {
            debug!(from, to, minutes, %err, "ignoring connection");
        }
    }

    /// Connect two stations in both directions, failing when either is unknown.
    ///
    /// The network is left untouched on error.
    pub fn try_add_connection(&mut self, from: &str, to: &str, minutes: Minutes) -> Result<()> {
        let a = self.require(from)?;
        let b = self.require(to)?;

        self.stations[a.0].links.push(Link { target: b, minutes });
        self.stations[b.0].links.push(Link { target: a, minutes });
        Ok(())
    }

    fn require(&self, id: &str) -> Result<StationIndex> {
        self.index_of(id)
            .ok_or_else(|| Error::UnknownConnectionEndpoint { id: id.to_string() })
    }

    /// Lookup a station by its identifier.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.index_of(id).map(|index| self.station_at(index))
    }

    /// Lookup the table index of a station identifier.
    pub fn index_of(&self, id: &str) -> Option<StationIndex> {
        self.by_id.get(id).copied()
    }

    /// Station stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` was not produced by this network.
    pub fn station_at(&self, index: StationIndex) -> &Station {
        &self.stations[index.0]
    }

    /// Links leaving the station at `index`.
    pub fn links(&self, index: StationIndex) -> &[Link] {
        self.stations
            .get(index.0)
            .map(|station| station.links.as_slice())
            .unwrap_or(&[])
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of undirected connections (each is stored once per endpoint).
    pub fn connection_count(&self) -> usize {
        self.stations.iter().map(|s| s.links.len()).sum::<usize>() / 2
    }

    /// Names of every line, sorted.
    pub fn lines(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Stations of one line in the order they were added.
    pub fn line(&self, name: &str) -> impl Iterator<Item = &Station> + '_ {
        self.lines
            .get(name)
            .into_iter()
            .flatten()
            .map(|index| self.station_at(*index))
    }

    /// Total minutes along a sequence of station ids.
    ///
    /// `None` when an id is unknown or two consecutive stations are not linked.
    pub fn path_minutes(&self, ids: &[&str]) -> Option<Minutes> {
        let stations = ids
            .iter()
            .map(|id| self.station(id))
            .collect::<Option<Vec<_>>>()?;
        route_minutes(&stations)
    }

    /// Station ids whose id or name resemble `query`, best match first.
    pub fn fuzzy_station_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .map(|station| {
                let by_id = strsim::jaro_winkler(&query, &station.id.to_lowercase());
                let by_name = strsim::jaro_winkler(&query, &station.name.to_lowercase());
                (by_id.max(by_name), station.id.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }
}
