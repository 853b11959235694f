//! Squad readiness as a median and interquartile band over time.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use ordinalizer::Ordinal;
use strum_macros::{Display, EnumCount, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::linear::Matrix;
use crate::player::PlayerRecord;
use crate::quantile::NanQuantile;

pub const LOWER_QUANTILE: f64 = 0.25;
pub const HIGHER_QUANTILE: f64 = 0.75;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("no players to derive a time index from")]
    EmptyPlayerSet,

    #[error("readiness index of player '{player}' differs from that of player '{reference}'")]
    InconsistentTimeIndex { player: String, reference: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Display)]
pub enum QuantileColumn {
    #[strum(serialize = "median")]
    Median,
    #[strum(serialize = "lower_quantile")]
    LowerQuantile,
    #[strum(serialize = "higher_quantile")]
    HigherQuantile,
}

impl From<QuantileColumn> for usize {
    fn from(column: QuantileColumn) -> Self {
        column.ordinal()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessQuantileSeries {
    index: Vec<NaiveDate>,
    median: Vec<f64>,
    lower_quantile: Vec<f64>,
    higher_quantile: Vec<f64>,
}
impl ReadinessQuantileSeries {
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    pub fn median(&self) -> &[f64] {
        &self.median
    }

    pub fn lower_quantile(&self) -> &[f64] {
        &self.lower_quantile
    }

    pub fn higher_quantile(&self) -> &[f64] {
        &self.higher_quantile
    }

    pub fn column(&self, column: QuantileColumn) -> &[f64] {
        match column {
            QuantileColumn::Median => &self.median,
            QuantileColumn::LowerQuantile => &self.lower_quantile,
            QuantileColumn::HigherQuantile => &self.higher_quantile,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// The rows spanning the first through the last row holding at least one non-`NaN` value, or
/// `None` if there are no such rows.
pub fn trim_range(matrix: &Matrix<f64>) -> Option<RangeInclusive<usize>> {
    let has_value = |row: &[f64]| row.iter().any(|value| !value.is_nan());
    let first = matrix.into_iter().position(has_value)?;
    let last = (first..matrix.rows())
        .rev()
        .find(|&row| has_value(matrix.row_slice(row)))?;
    Some(first..=last)
}

/// Arranges the readiness values into a time × player matrix, after checking that every
/// player shares the first player's time index.
fn readiness_matrix(players: &[PlayerRecord]) -> Result<(&[NaiveDate], Matrix<f64>), ReadinessError> {
    let reference = players.first().ok_or(ReadinessError::EmptyPlayerSet)?;
    let index = reference.readiness.index();
    let mut matrix = Matrix::filled(index.len(), players.len(), f64::NAN);
    for (col, player) in players.iter().enumerate() {
        if player.readiness.index() != index {
            return Err(ReadinessError::InconsistentTimeIndex {
                player: player.name.clone(),
                reference: reference.name.clone(),
            });
        }
        for (row, &value) in player.readiness.values().iter().enumerate() {
            matrix[(row, col)] = value;
        }
    }
    Ok((index, matrix))
}

/// Median, lower and higher quartile of readiness across `players` at each point of their shared
/// time index. Leading and trailing points where no player has a value are dropped; interior
/// points with no values are kept as `NaN`. If no player has any value at all, every point is
/// kept.
pub fn readiness_quantiles(players: &[PlayerRecord]) -> Result<ReadinessQuantileSeries, ReadinessError> {
    let (index, matrix) = readiness_matrix(players)?;
    let retained = match trim_range(&matrix) {
        Some(range) => *range.start()..*range.end() + 1,
        None => 0..index.len(),
    };

    let rows = retained.len();
    let mut median = Vec::with_capacity(rows);
    let mut lower_quantile = Vec::with_capacity(rows);
    let mut higher_quantile = Vec::with_capacity(rows);
    for row in retained.clone() {
        let [lower, mid, higher] =
            matrix.row_slice(row).nan_quantiles([LOWER_QUANTILE, 0.5, HIGHER_QUANTILE]);
        lower_quantile.push(lower);
        median.push(mid);
        higher_quantile.push(higher);
    }
    debug!(
        "derived readiness quantiles for {} players over {rows} of {} points",
        players.len(),
        index.len()
    );

    Ok(ReadinessQuantileSeries {
        index: index[retained].to_vec(),
        median,
        lower_quantile,
        higher_quantile,
    })
}

#[cfg(test)]
mod tests;
