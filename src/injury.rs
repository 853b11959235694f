//! Injury taxonomy: counts of (body location, severity) pairs across a squad.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::linear::Matrix;
use crate::player::PlayerRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("not valid JSON: {0}")]
    Syntax(String),

    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),

    #[error("severity for '{location}' must be a string or a number, got {kind}")]
    Severity { location: String, kind: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed injury payload in event {event} of player '{player}': {reason}")]
pub struct MalformedInjuryPayload {
    pub player: String,
    pub event: usize,
    pub reason: PayloadError,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes an injury payload into its location→severity mapping. Numeric severities are
/// carried as their JSON text.
pub fn decode_payload(text: &str) -> Result<BTreeMap<String, String>, PayloadError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| PayloadError::Syntax(err.to_string()))?;
    let object = match value {
        Value::Object(object) => object,
        other => return Err(PayloadError::NotAnObject(kind_of(&other))),
    };
    object
        .into_iter()
        .map(|(location, severity)| {
            let severity = match severity {
                Value::String(severity) => severity,
                Value::Number(severity) => severity.to_string(),
                other => {
                    return Err(PayloadError::Severity {
                        location,
                        kind: kind_of(&other),
                    })
                }
            };
            Ok((location, severity))
        })
        .collect()
}

/// A location × severity grid of injury counts. Both axes are sorted and contain only
/// labels that were observed.
#[derive(Debug, Clone, PartialEq)]
pub struct InjuryCategoryTable {
    locations: Vec<String>,
    severities: Vec<String>,
    counts: Matrix<u32>,
}
impl InjuryCategoryTable {
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn severities(&self) -> &[String] {
        &self.severities
    }

    /// Rows follow [`Self::locations`], columns follow [`Self::severities`].
    pub fn counts(&self) -> &Matrix<u32> {
        &self.counts
    }

    /// The count for a given cell, or `None` if either label was never observed.
    pub fn count(&self, location: &str, severity: &str) -> Option<u32> {
        let row = self.locations.binary_search_by(|probe| probe.as_str().cmp(location)).ok()?;
        let col = self.severities.binary_search_by(|probe| probe.as_str().cmp(severity)).ok()?;
        Some(self.counts[(row, col)])
    }

    pub fn total(&self) -> u32 {
        self.counts.flatten().iter().sum()
    }

    /// Per-location totals across all severities.
    pub fn location_totals(&self) -> Vec<(&str, u32)> {
        self.locations
            .iter()
            .zip(&self.counts)
            .map(|(location, row)| (location.as_str(), row.iter().sum()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn ordinals(labels: &[String]) -> FxHashMap<&str, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(ordinal, label)| (label.as_str(), ordinal))
        .collect()
}

/// Counts every (location, severity) pair across the injury histories of `players`. Events
/// whose mapping is empty contribute nothing; an undecodable payload fails the whole call.
pub fn injury_categories(players: &[PlayerRecord]) -> Result<InjuryCategoryTable, MalformedInjuryPayload> {
    let mut tally: FxHashMap<(String, String), u32> = FxHashMap::default();
    let mut events = 0;
    for player in players {
        for (event, injury) in player.injuries.iter().enumerate() {
            let mapping = decode_payload(&injury.payload).map_err(|reason| MalformedInjuryPayload {
                player: player.name.clone(),
                event,
                reason,
            })?;
            if !mapping.is_empty() {
                events += 1;
            }
            for pair in mapping {
                *tally.entry(pair).or_default() += 1;
            }
        }
    }

    let mut locations: Vec<_> = tally.keys().map(|(location, _)| location.clone()).collect();
    locations.sort_unstable();
    locations.dedup();
    let mut severities: Vec<_> = tally.keys().map(|(_, severity)| severity.clone()).collect();
    severities.sort_unstable();
    severities.dedup();

    let mut counts = Matrix::allocate(locations.len(), severities.len());
    {
        let rows = ordinals(&locations);
        let cols = ordinals(&severities);
        for ((location, severity), &count) in &tally {
            counts[(rows[location.as_str()], cols[severity.as_str()])] = count;
        }
    }
    debug!(
        "tallied {events} injury events from {} players into {} locations × {} severities",
        players.len(),
        locations.len(),
        severities.len()
    );

    Ok(InjuryCategoryTable {
        locations,
        severities,
        counts,
    })
}

#[cfg(test)]
mod tests;
