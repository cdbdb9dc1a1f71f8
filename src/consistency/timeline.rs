//! Reduction of raw timing events to change points.

use thiserror::Error;

use crate::domain::{Event, Variant};

/// A variant's events with repeated values removed.
///
/// The first raw event is always kept; every later event differs in value
/// from the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedTimeline {
    /// Label of the variant this timeline came from
    pub variant: String,

    events: Vec<Event>,
}

impl ReducedTimeline {
    /// Reduce a variant's raw events
    pub fn from_variant(variant: &Variant) -> Result<Self, ConsistencyError> {
        let events = reduce(&variant.timing_points).ok_or_else(|| ConsistencyError::EmptyTimeline {
            variant: variant.name.clone(),
        })?;

        Ok(Self {
            variant: variant.name.clone(),
            events,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// First kept event with the same identity as `event`
    pub fn find(&self, event: &Event) -> Option<&Event> {
        self.events.iter().find(|e| e.same_occurrence(event))
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.find(event).is_some()
    }
}

/// Keep the first event and each event whose value changes from the last kept one.
///
/// Returns `None` for an empty slice.
pub fn reduce(raw: &[Event]) -> Option<Vec<Event>> {
    let (first, rest) = raw.split_first()?;

    let mut kept = vec![*first];
    for event in rest {
        // kept is never empty here
        if kept.last().map(|last| last.value) != Some(event.value) {
            kept.push(*event);
        }
    }

    Some(kept)
}

/// Errors that stop a consistency run
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("Variant has no timing points: {variant}")]
    EmptyTimeline { variant: String },
}
