//! Squad-level statistics combining the injury and readiness views.

use thiserror::Error;

use crate::injury::{injury_categories, InjuryCategoryTable, MalformedInjuryPayload};
use crate::player::PlayerRecord;
use crate::readiness::{readiness_quantiles, ReadinessError, ReadinessQuantileSeries};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("{0}")]
    MalformedInjuryPayload(#[from] MalformedInjuryPayload),

    #[error("{0}")]
    Readiness(#[from] ReadinessError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatistics {
    pub injuries: InjuryCategoryTable,
    pub readiness: ReadinessQuantileSeries,
}
impl TeamStatistics {
    pub fn compute(players: &[PlayerRecord]) -> Result<Self, AggregationError> {
        let injuries = injury_categories(players)?;
        let readiness = readiness_quantiles(players)?;
        Ok(Self { injuries, readiness })
    }
}
