//! Global deduplication of events and grouping by position.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{Event, EventKey, Position};

use super::timeline::ReducedTimeline;

/// One representative per event identity across all variants
#[derive(Debug, Clone, Default)]
pub struct UniqueEventSet {
    seen: HashSet<EventKey>,
    events: Vec<Event>,
}

impl UniqueEventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every timeline; the first occurrence of an identity is kept
    pub fn from_timelines(timelines: &[ReducedTimeline]) -> Self {
        let mut set = Self::new();
        for event in timelines.iter().flat_map(|t| t.events()) {
            set.insert(*event);
        }
        set
    }

    /// Add an event; returns false if its identity was already present
    pub fn insert(&mut self, event: Event) -> bool {
        if self.seen.insert(event.key()) {
            self.events.push(event);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Partition the set by position, ascending
    pub fn group_by_position(&self) -> Vec<PositionGroup> {
        let mut groups: BTreeMap<Position, Vec<Event>> = BTreeMap::new();
        for event in &self.events {
            groups.entry(event.position).or_default().push(*event);
        }

        groups
            .into_iter()
            .map(|(position, events)| PositionGroup { position, events })
            .collect()
    }
}

/// Every distinct event at one position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup {
    pub position: Position,

    /// One event per distinct value seen at this position
    pub events: Vec<Event>,
}

impl PositionGroup {
    /// Variants disagree on the value here
    pub fn is_multi_value(&self) -> bool {
        self.events.len() > 1
    }

    /// First event of `timeline` that belongs to this group
    pub fn match_in<'a>(&self, timeline: &'a ReducedTimeline) -> Option<&'a Event> {
        timeline
            .events()
            .iter()
            .find(|e| self.events.iter().any(|g| g.same_occurrence(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Variant;

    fn timeline(name: &str, raw: &[(f64, i32)]) -> ReducedTimeline {
        let events = raw
            .iter()
            .map(|&(ms, value)| Event::new(ms, value).unwrap())
            .collect();
        ReducedTimeline::from_variant(&Variant::new(name, events)).unwrap()
    }

    #[test]
    fn test_dedup_keeps_one_per_identity() {
        let timelines = vec![
            timeline("A", &[(0.0, 100), (1000.0, 80)]),
            timeline("B", &[(0.0, 100), (1000.0, 20)]),
            timeline("C", &[(0.0, 100), (1000.0, 80)]),
        ];

        let set = UniqueEventSet::from_timelines(&timelines);
        assert_eq!(set.len(), 3);

        let keys: HashSet<EventKey> = set.iter().map(Event::key).collect();
        assert_eq!(keys.len(), set.len());
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = UniqueEventSet::new();
        assert!(set.insert(Event::new(5.0, 1).unwrap()));
        assert!(!set.insert(Event::new(5.0, 1).unwrap()));
        assert!(set.insert(Event::new(5.0, 2).unwrap()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_groups_are_exhaustive_and_sorted() {
        let timelines = vec![
            timeline("A", &[(0.0, 100), (500.0, 40), (2000.0, 60)]),
            timeline("B", &[(0.0, 100), (1000.0, 20), (2000.0, 70)]),
        ];

        let groups = UniqueEventSet::from_timelines(&timelines).group_by_position();
        let positions: Vec<f64> = groups.iter().map(|g| g.position.as_ms()).collect();
        assert_eq!(positions, vec![0.0, 500.0, 1000.0, 2000.0]);

        let sizes: Vec<usize> = groups.iter().map(|g| g.events.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 2]);
        assert!(groups[3].is_multi_value());
    }

    #[test]
    fn test_match_in_returns_first_member() {
        let a = timeline("A", &[(0.0, 100), (1000.0, 80)]);
        let b = timeline("B", &[(0.0, 100), (1000.0, 20)]);
        let groups = UniqueEventSet::from_timelines(&[a.clone(), b.clone()]).group_by_position();

        let group = &groups[1];
        assert_eq!(group.match_in(&a).map(|e| e.value), Some(80));
        assert_eq!(group.match_in(&b).map(|e| e.value), Some(20));

        let c = timeline("C", &[(0.0, 100)]);
        assert!(group.match_in(&c).is_none());
    }
}
