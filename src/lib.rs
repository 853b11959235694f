//! Squad-level statistics over soccer player records: a location × severity taxonomy of
//! injuries, and the median and interquartile band of readiness over time.

pub mod csv;
pub mod injury;
pub mod linear;
pub mod player;
pub mod print;
pub mod quantile;
pub mod readiness;
pub mod stats;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
