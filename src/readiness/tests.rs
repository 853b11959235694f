use assert_float_eq::*;
use strum::{EnumCount, IntoEnumIterator};

use super::*;
use crate::player::ReadinessSeries;
use crate::testing::assert_slice_f64_nan_eq;

const NAN: f64 = f64::NAN;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
}

fn player(name: &str, values: Vec<f64>) -> PlayerRecord {
    PlayerRecord {
        name: name.into(),
        injuries: vec![],
        readiness: ReadinessSeries::daily(start(), values),
    }
}

#[test]
fn trim_range_bounds() {
    let mut matrix = Matrix::filled(5, 2, NAN);
    assert_eq!(None, trim_range(&matrix));
    matrix[(1, 1)] = 3.0;
    assert_eq!(Some(1..=1), trim_range(&matrix));
    matrix[(3, 0)] = 4.0;
    assert_eq!(Some(1..=3), trim_range(&matrix));
    assert_eq!(None, trim_range(&Matrix::allocate(0, 2)));
}

#[test]
fn empty_player_set() {
    assert_eq!(Err(ReadinessError::EmptyPlayerSet), readiness_quantiles(&[]));
}

#[test]
fn inconsistent_time_index() {
    let mut shifted = player("C", vec![1.0, 2.0]);
    shifted.readiness = ReadinessSeries::daily(start().succ_opt().unwrap(), vec![1.0, 2.0]);
    let players = [player("A", vec![1.0, 2.0]), player("B", vec![3.0, 4.0]), shifted];
    assert_eq!(
        Err(ReadinessError::InconsistentTimeIndex {
            player: "C".into(),
            reference: "A".into()
        }),
        readiness_quantiles(&players)
    );

    let shorter = [player("A", vec![1.0, 2.0]), player("B", vec![3.0])];
    assert!(matches!(
        readiness_quantiles(&shorter),
        Err(ReadinessError::InconsistentTimeIndex { player, .. }) if player == "B"
    ));
}

#[test]
fn trims_to_common_valid_range() {
    let mut b = vec![NAN; 10];
    b[2] = 5.0;
    b[7] = 6.0;
    let players = [player("A", vec![NAN; 10]), player("B", b), player("C", vec![NAN; 10])];
    let series = readiness_quantiles(&players).unwrap();
    assert_eq!(6, series.len());
    let expected_index: Vec<_> = start().iter_days().skip(2).take(6).collect();
    assert_eq!(expected_index, series.index());
    assert_slice_f64_nan_eq(&[5.0, NAN, NAN, NAN, NAN, 6.0], series.median());
    assert_slice_f64_nan_eq(&[5.0, NAN, NAN, NAN, NAN, 6.0], series.lower_quantile());
    assert_slice_f64_nan_eq(&[5.0, NAN, NAN, NAN, NAN, 6.0], series.higher_quantile());
}

#[test]
fn interpolates_quartiles() {
    let players = [
        player("A", vec![1.0, NAN, 7.0]),
        player("B", vec![2.0, 4.0, NAN]),
        player("C", vec![3.0, 8.0, NAN]),
        player("D", vec![4.0, NAN, NAN]),
    ];
    let series = readiness_quantiles(&players).unwrap();
    assert_eq!(3, series.len());
    assert_f64_near!(2.5, series.median()[0]);
    assert_f64_near!(1.75, series.lower_quantile()[0]);
    assert_f64_near!(3.25, series.higher_quantile()[0]);
    assert_slice_f64_nan_eq(&[2.5, 6.0, 7.0], series.median());
    assert_slice_f64_nan_eq(&[1.75, 5.0, 7.0], series.lower_quantile());
    assert_slice_f64_nan_eq(&[3.25, 7.0, 7.0], series.higher_quantile());
}

#[test]
fn all_missing_keeps_every_point() {
    let players = [player("A", vec![NAN; 4]), player("B", vec![NAN; 4])];
    let series = readiness_quantiles(&players).unwrap();
    assert_eq!(4, series.len());
    for column in QuantileColumn::iter() {
        assert!(series.column(column).iter().all(|value| value.is_nan()));
    }
}

#[test]
fn empty_series() {
    let players = [player("A", vec![]), player("B", vec![])];
    let series = readiness_quantiles(&players).unwrap();
    assert!(series.is_empty());
}

#[test]
fn does_not_mutate_players() {
    let players = [player("A", vec![NAN, 1.0, NAN]), player("B", vec![NAN, 2.0, 3.0])];
    let before = players.clone();
    let first = readiness_quantiles(&players).unwrap();
    let second = readiness_quantiles(&players).unwrap();
    assert_eq!(before.len(), players.len());
    assert!(before.iter().zip(&players).all(|(b, p)| b.name == p.name && b.readiness.index() == p.readiness.index()));
    assert_eq!(first.index(), second.index());
    assert_eq!(2, first.len());
}

#[test]
fn column_names() {
    assert_eq!(3, QuantileColumn::COUNT);
    assert_eq!(
        vec!["median", "lower_quantile", "higher_quantile"],
        QuantileColumn::iter().map(|column| column.to_string()).collect::<Vec<_>>()
    );
    assert_eq!(1, usize::from(QuantileColumn::LowerQuantile));
}
