use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the metroroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station identifier could not be found in the network.
    #[error("unknown station: {id}{}", format_suggestions(.suggestions))]
    UnknownStation {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised by strict connection building when an endpoint is missing.
    #[error("connection references unknown station {id}")]
    UnknownConnectionEndpoint { id: String },

    /// Raised when a computed route plan lacks any stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for network data")]
    ProjectDirsUnavailable,

    /// Raised when a network document could not be parsed.
    #[error("failed to parse network document {path}: {source}")]
    NetworkParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
