//! Player records as supplied by the data-loading layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry in a player's injury history. The payload is the JSON text of a
/// location→severity mapping, e.g. `{"knee": "minor"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryEvent {
    #[serde(rename = "type")]
    pub payload: String,
}
impl InjuryEvent {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("index has {index} points but there are {values} values")]
    LengthMismatch { index: usize, values: usize },

    #[error("index is not strictly increasing at position {0}")]
    UnorderedIndex(usize),
}

/// A daily readiness series. Missing observations are held as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReadinessSeries", into = "RawReadinessSeries")]
pub struct ReadinessSeries {
    index: Vec<NaiveDate>,
    values: Vec<f64>,
}
impl ReadinessSeries {
    pub fn new(index: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if index.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        if let Some(position) = index
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
        {
            return Err(SeriesError::UnorderedIndex(position + 1));
        }
        Ok(Self { index, values })
    }

    /// A series over consecutive days starting at `start`.
    pub fn daily(start: NaiveDate, values: Vec<f64>) -> Self {
        let index = start.iter_days().take(values.len()).collect();
        Self { index, values }
    }

    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-missing observations.
    pub fn observations(&self) -> usize {
        self.values.iter().filter(|value| !value.is_nan()).count()
    }
}

#[derive(Serialize, Deserialize)]
struct RawReadinessSeries {
    index: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

impl TryFrom<RawReadinessSeries> for ReadinessSeries {
    type Error = SeriesError;

    fn try_from(raw: RawReadinessSeries) -> Result<Self, Self::Error> {
        let values = raw
            .values
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect();
        ReadinessSeries::new(raw.index, values)
    }
}

impl From<ReadinessSeries> for RawReadinessSeries {
    fn from(series: ReadinessSeries) -> Self {
        let values = series
            .values
            .into_iter()
            .map(|value| if value.is_nan() { None } else { Some(value) })
            .collect();
        RawReadinessSeries {
            index: series.index,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub injuries: Vec<InjuryEvent>,
    pub readiness: ReadinessSeries,
}
