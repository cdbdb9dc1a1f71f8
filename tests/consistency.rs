//! Consistency Integration Tests
//!
//! Tests for timeline reduction, deduplication, grouping and the
//! divergence classification across variants.

use std::collections::HashSet;

use mvcheck::consistency::{
    check_consistency, reduce, ConsistencyError, ReducedTimeline, UniqueEventSet,
};
use mvcheck::domain::{DivergenceFinding, DivergenceKind, Event, EventKey, Variant};

fn variant(name: &str, raw: &[(f64, i32)]) -> Variant {
    Variant::new(
        name,
        raw.iter()
            .map(|&(ms, value)| Event::new(ms, value).unwrap())
            .collect(),
    )
}

#[test]
fn test_identical_single_points_have_no_findings() {
    let variants = vec![variant("A", &[(0.0, 100)]), variant("B", &[(0.0, 100)])];

    let findings = check_consistency(&variants).unwrap();
    assert!(findings.is_empty());
}

#[test]
fn test_two_variant_tie_is_missing_from() {
    let variants = vec![
        variant("A", &[(0.0, 100), (1000.0, 50)]),
        variant("B", &[(0.0, 100)]),
    ];

    let findings = check_consistency(&variants).unwrap();
    assert_eq!(findings.len(), 1);

    match &findings[0] {
        DivergenceFinding::MissingFrom {
            position,
            value,
            variants,
        } => {
            assert_eq!(position.as_ms(), 1000.0);
            assert_eq!(*value, 50);
            assert_eq!(variants, &vec!["B".to_string()]);
        }
        other => panic!("Expected MissingFrom, got {:?}", other),
    }
}

#[test]
fn test_value_difference_lists_every_variant() {
    let variants = vec![
        variant("A", &[(0.0, 100), (1000.0, 80)]),
        variant("B", &[(0.0, 100), (1000.0, 20)]),
        variant("C", &[(0.0, 100), (1000.0, 80)]),
    ];

    let findings = check_consistency(&variants).unwrap();
    assert_eq!(findings.len(), 1);

    match &findings[0] {
        DivergenceFinding::ValueDifference { position, values } => {
            assert_eq!(position.as_ms(), 1000.0);
            let listed: Vec<(&str, i32)> = values
                .iter()
                .map(|v| (v.variant.as_str(), v.value))
                .collect();
            assert_eq!(listed, vec![("A", 80), ("B", 20), ("C", 80)]);
        }
        other => panic!("Expected ValueDifference, got {:?}", other),
    }
}

#[test]
fn test_empty_variant_fails_run() {
    let variants = vec![variant("A", &[]), variant("B", &[(0.0, 100)])];

    let result = check_consistency(&variants);
    assert_eq!(
        result,
        Err(ConsistencyError::EmptyTimeline {
            variant: "A".to_string()
        })
    );
}

#[test]
fn test_reduction_preserves_first_event() {
    let raws: Vec<Vec<Event>> = vec![
        vec![Event::new(0.0, 5).unwrap()],
        vec![Event::new(40.0, 100).unwrap(), Event::new(80.0, 100).unwrap()],
        vec![
            Event::new(-30.0, 0).unwrap(),
            Event::new(0.0, 10).unwrap(),
            Event::new(10.0, 0).unwrap(),
        ],
    ];

    for raw in raws {
        let reduced = reduce(&raw).unwrap();
        assert_eq!(reduced.first(), raw.first());
        assert_eq!(reduce(&reduced).unwrap(), reduced);
    }
}

#[test]
fn test_dedup_closure_and_group_exhaustiveness() {
    let variants = vec![
        variant("Easy", &[(0.0, 100), (500.0, 70), (1500.0, 40), (3000.0, 100)]),
        variant("Normal", &[(0.0, 100), (500.0, 70), (1500.0, 50)]),
        variant("Hard", &[(0.0, 90), (500.0, 70), (2500.0, 30)]),
    ];
    let timelines: Vec<ReducedTimeline> = variants
        .iter()
        .map(|v| ReducedTimeline::from_variant(v).unwrap())
        .collect();

    let unique = UniqueEventSet::from_timelines(&timelines);

    // One representative per identity
    let all_keys: HashSet<EventKey> = timelines
        .iter()
        .flat_map(|t| t.events().iter().map(Event::key))
        .collect();
    assert_eq!(unique.len(), all_keys.len());

    // One group per distinct position, covering every timeline position
    let groups = unique.group_by_position();
    let group_positions: Vec<_> = groups.iter().map(|g| g.position).collect();
    let mut expected: Vec<_> = all_keys.iter().map(|k| k.position).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(group_positions, expected);
}

#[test]
fn test_mixed_divergences_in_position_order() {
    let variants = vec![
        variant("Easy", &[(0.0, 100), (500.0, 70), (1500.0, 40), (3000.0, 100)]),
        variant("Normal", &[(0.0, 100), (500.0, 70), (1500.0, 50)]),
        variant("Hard", &[(0.0, 90), (500.0, 70), (2500.0, 30)]),
    ];

    let findings = check_consistency(&variants).unwrap();
    let summary: Vec<(f64, DivergenceKind)> = findings
        .iter()
        .map(|f| (f.position().as_ms(), f.kind()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (0.0, DivergenceKind::ValueDifference),
            (1500.0, DivergenceKind::ValueDifference),
            (2500.0, DivergenceKind::ExistsOnly),
            (3000.0, DivergenceKind::ExistsOnly),
        ]
    );

    // Hard has no change at 1500 and is left out of the listing
    match &findings[1] {
        DivergenceFinding::ValueDifference { values, .. } => {
            let names: Vec<&str> = values.iter().map(|v| v.variant.as_str()).collect();
            assert_eq!(names, vec!["Easy", "Normal"]);
        }
        other => panic!("Expected ValueDifference, got {:?}", other),
    }
}

#[test]
fn test_variant_order_drives_output_order() {
    let forward = vec![
        variant("Insane", &[(0.0, 100), (800.0, 60)]),
        variant("Easy", &[(0.0, 100)]),
        variant("Hard", &[(0.0, 100)]),
        variant("Normal", &[(0.0, 100), (800.0, 60)]),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let names = |variants: &[Variant]| match check_consistency(variants).unwrap().remove(0) {
        DivergenceFinding::MissingFrom { variants, .. } => variants,
        other => panic!("Expected MissingFrom, got {:?}", other),
    };

    assert_eq!(names(&forward), vec!["Easy".to_string(), "Hard".to_string()]);
    assert_eq!(names(&backward), vec!["Hard".to_string(), "Easy".to_string()]);
}
