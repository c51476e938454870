use std::cmp::Ordering;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::{Minutes, Network};

/// Environment variable that points at a network document.
pub const NETWORK_ENV_VAR: &str = "METROROUTE_NETWORK";

/// Default filename for a network document in the data directory.
const NETWORK_FILENAME: &str = "network.json";

/// Station entry of a network document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub line: String,
}

/// Connection entry of a network document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub minutes: Minutes,
}

/// Serialized description of a network.
///
/// ```json
/// {
///   "stations": [{ "id": "K1", "name": "Yenikapı", "line": "Mavi Hat" }],
///   "connections": [{ "from": "K1", "to": "K2", "minutes": 4 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

impl NetworkDocument {
    /// Build a network, rejecting connections to stations the document does
    /// not declare.
    pub fn into_network(self) -> Result<Network> {
        let mut network = Network::new();
        for station in self.stations {
            network.add_station(station.id, station.name, station.line);
        }
        for connection in &self.connections {
            network.try_add_connection(&connection.from, &connection.to, connection.minutes)?;
        }
        Ok(network)
    }

    /// Describe an existing network. Each connection is listed once.
    pub fn from_network(network: &Network) -> Self {
        let stations = network
            .stations()
            .map(|station| StationRecord {
                id: station.id.clone(),
                name: station.name.clone(),
                line: station.line.clone(),
            })
            .collect();

        let mut connections = Vec::new();
        for station in network.stations() {
            // Each connection is stored on both endpoints; keep the side with
            // the lower index. A self-loop stores two links on one station.
            let mut self_loops = 0usize;
            for link in station.links() {
                let keep = match station.index().cmp(&link.target) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => {
                        self_loops += 1;
                        self_loops % 2 == 1
                    }
                };
                if keep {
                    connections.push(ConnectionRecord {
                        from: station.id.clone(),
                        to: network.station_at(link.target).id.clone(),
                        minutes: link.minutes,
                    });
                }
            }
        }

        Self {
            stations,
            connections,
        }
    }
}

/// Parse a network document held in memory.
pub fn parse_network(source: &str, origin: &Path) -> Result<Network> {
    let document: NetworkDocument =
        serde_json::from_str(source).map_err(|source| Error::NetworkParse {
            path: origin.to_path_buf(),
            source,
        })?;
    document.into_network()
}

/// Load a network document from disk.
pub fn load_network(path: &Path) -> Result<Network> {
    let source = fs::read_to_string(path)?;
    let network = parse_network(&source, path)?;
    info!(
        path = %path.display(),
        stations = network.len(),
        connections = network.connection_count(),
        "loaded network"
    );
    Ok(network)
}

/// Resolve the default network document location using platform-specific
/// project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "metroroute", "metroroute")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Decide which network document to use.
///
/// Order: `explicit`, then the [`NETWORK_ENV_VAR`] environment variable, then
/// the default data directory when a document exists there. `None` means no
/// document is configured and callers should fall back to the sample network.
pub fn resolve_network_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit network document");
        return Some(path.to_path_buf());
    }

    if let Some(value) = env::var_os(NETWORK_ENV_VAR).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(
            path = %path.display(),
            env = NETWORK_ENV_VAR,
            "using network document from environment"
        );
        return Some(path);
    }

    match default_network_path() {
        Ok(path) if path.is_file() => {
            debug!(path = %path.display(), "using network document from data directory");
            Some(path)
        }
        Ok(_) => None,
        Err(err) => {
            debug!(%err, "no data directory available");
            None
        }
    }
}
