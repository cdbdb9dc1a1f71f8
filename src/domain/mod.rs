//! Domain types for mvcheck.
//!
//! This module contains the core data structures:
//! - Event: Immutable (position, value) timing changes
//! - Variant: One difficulty of a set, with its settings
//! - DocumentSet: All variants of one song, plus samples
//! - Finding: Severity levels and divergence findings

pub mod document;
pub mod event;
pub mod finding;
pub mod variant;

// Re-export commonly used types
pub use document::{DocumentSet, SampleInfo};
pub use event::{Event, EventKey, InputError, Position};
pub use finding::{DivergenceFinding, DivergenceKind, Level, VariantValue};
pub use variant::{DifficultySettings, Setting, Tier, Variant};
