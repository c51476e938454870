use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{Minutes, Network, Station};
use crate::path::line_changes;
use crate::routing::{RouteAlgorithm, RoutePlan, SUGGESTION_LIMIT};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: String,
    pub name: String,
}

/// Station visited by a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub line: String,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub line_changes: usize,
    pub minutes: Minutes,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with station names and lines.
    ///
    /// Fails with [`Error::UnknownStation`] when a step is not part of
    /// `network`, and with [`Error::EmptyRoutePlan`] when there are no steps.
    pub fn from_plan(network: &Network, plan: &RoutePlan) -> Result<Self> {
        let stations = plan
            .steps
            .iter()
            .map(|id| {
                network.station(id).ok_or_else(|| Error::UnknownStation {
                    id: id.clone(),
                    suggestions: network.fuzzy_station_matches(id, SUGGESTION_LIMIT),
                })
            })
            .collect::<Result<Vec<&Station>>>()?;

        let (Some(first), Some(last)) = (stations.first(), stations.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let steps = stations
            .iter()
            .enumerate()
            .map(|(index, station)| RouteStep {
                index,
                id: station.id.clone(),
                name: station.name.clone(),
                line: station.line.clone(),
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: stations.len() - 1,
            line_changes: line_changes(&stations),
            minutes: plan.minutes,
            start: endpoint(first),
            goal: endpoint(last),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {} line changes, {} min, algorithm: {})",
            self.start.name,
            self.goal.name,
            self.hops,
            self.line_changes,
            self.minutes,
            self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({}, {})",
                step.index, step.name, step.id, step.line
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, {} min, algorithm: `{}`)",
            self.start.name, self.goal.name, self.hops, self.minutes, self.algorithm
        );
        let mut current_line: Option<&str> = None;
        for step in &self.steps {
            if current_line != Some(step.line.as_str()) {
                let _ = writeln!(buffer, "* _{}_", step.line);
                current_line = Some(step.line.as_str());
            }
            let _ = writeln!(buffer, "  * {:>2}. **{}** (`{}`)", step.index, step.name, step.id);
        }
        buffer
    }
}

fn endpoint(station: &Station) -> RouteEndpoint {
    RouteEndpoint {
        id: station.id.clone(),
        name: station.name.clone(),
    }
}

/// Station names joined with arrows, e.g. `Haliç -> Taksim -> Levent`.
pub fn station_names(stations: &[&Station]) -> String {
    stations
        .iter()
        .map(|station| station.name.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
