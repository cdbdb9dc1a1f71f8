//! Timed events and their identity.
//!
//! An event is an immutable `(position, value)` pair. Two events are the
//! same occurrence when both fields are exactly equal, regardless of which
//! variant they came from.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the timeline, in milliseconds.
///
/// Always finite. `-0.0` is stored as `0.0` so that equality, ordering and
/// hashing agree with plain numeric equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Position(f64);

impl Position {
    /// Create a position, rejecting NaN and infinities
    pub fn new(ms: f64) -> Result<Self, InputError> {
        if !ms.is_finite() {
            return Err(InputError::NonFinitePosition { value: ms });
        }
        // Adding 0.0 turns -0.0 into 0.0 and leaves everything else alone
        Ok(Self(ms + 0.0))
    }

    /// Milliseconds from the start of the track
    pub fn as_ms(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Position {
    type Error = InputError;

    fn try_from(ms: f64) -> Result<Self, Self::Error> {
        Self::new(ms)
    }
}

impl From<Position> for f64 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A volume change at a point on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Where the change happens
    #[serde(rename = "offset")]
    pub position: Position,

    /// Volume percentage in effect from this point on
    #[serde(rename = "volume")]
    pub value: i32,
}

impl Event {
    /// Create an event from a raw millisecond offset
    pub fn new(position_ms: f64, value: i32) -> Result<Self, InputError> {
        Ok(Self {
            position: Position::new(position_ms)?,
            value,
        })
    }

    /// The identity used for deduplication and grouping
    pub fn key(&self) -> EventKey {
        EventKey {
            position: self.position,
            value: self.value,
        }
    }

    /// True when both events are the same occurrence
    pub fn same_occurrence(&self, other: &Event) -> bool {
        self.key() == other.key()
    }
}

/// Equivalence key for events: exact position plus exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub position: Position,
    pub value: i32,
}

/// Input rejected before it reaches any check
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Timing point offset is not a finite number: {value}")]
    NonFinitePosition { value: f64 },

    #[error("Document set has no variants")]
    NoVariants,

    #[error("Variant name is used more than once: {name}")]
    DuplicateVariant { name: String },

    #[error("Variant name cannot be empty")]
    UnnamedVariant,

    #[error("Timing points go backwards in variant: {variant}")]
    UnorderedTimingPoints { variant: String },
}
