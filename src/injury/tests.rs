use chrono::NaiveDate;

use super::*;
use crate::player::{InjuryEvent, ReadinessSeries};

fn player(name: &str, payloads: &[&str]) -> PlayerRecord {
    PlayerRecord {
        name: name.into(),
        injuries: payloads.iter().map(|&payload| InjuryEvent::new(payload)).collect(),
        readiness: ReadinessSeries::daily(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), vec![]),
    }
}

#[test]
fn decode_payload_object() {
    let mapping = decode_payload(r#"{"knee": "minor", "ankle": "major"}"#).unwrap();
    assert_eq!(
        vec![("ankle", "major"), ("knee", "minor")],
        mapping.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>()
    );
}

#[test]
fn decode_payload_numeric_severity() {
    let mapping = decode_payload(r#"{"hamstring": 2}"#).unwrap();
    assert_eq!(Some(&"2".to_string()), mapping.get("hamstring"));
}

#[test]
fn decode_payload_empty() {
    assert!(decode_payload("{}").unwrap().is_empty());
}

#[test]
fn decode_payload_errors() {
    assert!(matches!(decode_payload("not json"), Err(PayloadError::Syntax(_))));
    assert_eq!(Err(PayloadError::NotAnObject("an array")), decode_payload(r#"["knee"]"#));
    assert_eq!(
        Err(PayloadError::Severity {
            location: "knee".into(),
            kind: "null"
        }),
        decode_payload(r#"{"knee": null}"#)
    );
}

#[test]
fn no_players() {
    let table = injury_categories(&[]).unwrap();
    assert!(table.is_empty());
    assert!(table.severities().is_empty());
    assert_eq!(0, table.counts().rows());
    assert_eq!(0, table.counts().cols());
    assert_eq!(0, table.total());
}

#[test]
fn pivots_and_fills_with_zero() {
    let players = [
        player("A", &[r#"{"knee": "minor"}"#, r#"{"ankle": "major", "knee": "minor"}"#]),
        player("B", &["{}", r#"{"ankle": "minor"}"#]),
        player("C", &[]),
    ];
    let table = injury_categories(&players).unwrap();
    assert_eq!(&["ankle", "knee"], table.locations());
    assert_eq!(&["major", "minor"], table.severities());
    assert_eq!(&[1, 1, 0, 2], table.counts().flatten());
    assert_eq!(Some(2), table.count("knee", "minor"));
    assert_eq!(Some(0), table.count("knee", "major"));
    assert_eq!(None, table.count("groin", "minor"));
    assert_eq!(None, table.count("knee", "severe"));
    assert_eq!(vec![("ankle", 2), ("knee", 2)], table.location_totals());
}

#[test]
fn only_empty_payloads() {
    let players = [player("A", &["{}", "{}"])];
    let table = injury_categories(&players).unwrap();
    assert!(table.is_empty());
    assert_eq!(0, table.total());
}

#[test]
fn counts_are_conserved() {
    let payloads = [
        r#"{"knee": "minor"}"#,
        r#"{"ankle": "major", "knee": "minor"}"#,
        "{}",
        r#"{"hamstring": 1, "groin": "minor", "knee": "major"}"#,
        r#"{"ankle": "minor"}"#,
    ];
    let players: Vec<_> = (0..payloads.len())
        .map(|offset| {
            let rotated: Vec<_> = payloads.iter().cycle().skip(offset).take(offset + 1).copied().collect();
            player(&format!("P{offset}"), &rotated)
        })
        .collect();

    let expected_pairs: usize = players
        .iter()
        .flat_map(|player| &player.injuries)
        .map(|injury| decode_payload(&injury.payload).unwrap().len())
        .sum();
    let table = injury_categories(&players).unwrap();
    assert_eq!(expected_pairs as u32, table.total());
    assert_eq!(
        table.total(),
        table.location_totals().iter().map(|(_, total)| total).sum::<u32>()
    );
}

#[test]
fn malformed_payload_identifies_player_and_event() {
    let players = [
        player("A", &[r#"{"knee": "minor"}"#]),
        player("B", &["{}", r#"{"ankle": "minor"}"#, "not json"]),
    ];
    let err = injury_categories(&players).unwrap_err();
    assert_eq!("B", err.player);
    assert_eq!(2, err.event);
    assert!(matches!(err.reason, PayloadError::Syntax(_)));
    assert!(
        err.to_string().starts_with("malformed injury payload in event 2 of player 'B': not valid JSON"),
        "{err}"
    );
}
