//! mvcheck - Cross-difficulty consistency checks for beatmap sets
//!
//! Compares the difficulties of one song against each other and reports
//! where they disagree, along with a few per-difficulty sanity checks.
//!
//! # Architecture
//!
//! The central check works on already-parsed timing points:
//! - Each difficulty's timing points are reduced to real volume changes
//! - Changes are merged across difficulties by exact (offset, volume)
//! - Each offset is classified as a value difference, or as a change that
//!   only exists on / is missing from some difficulties
//!
//! # Modules
//!
//! - `consistency`: Timeline reduction, deduplication and classification
//! - `guidelines`: Recommended difficulty setting ranges per tier
//! - `samples`: Silent hit-sound file size inspection
//! - `checks`: Check registry and per-document reports
//! - `domain`: Data structures (Event, Variant, DocumentSet, findings)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Check every set in a directory
//! mvcheck check 'sets/*.yaml' --pretty
//!
//! # Fail CI on anything worse than a minor issue
//! mvcheck check song.yaml --fail-on warning
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod consistency;
pub mod domain;
pub mod guidelines;
pub mod samples;

// Re-export main types at crate root for convenience
pub use checks::{run_checks, Check, CheckError, CheckMetadata, Report};
pub use consistency::{check_consistency, ConsistencyError};
pub use domain::{DivergenceFinding, DivergenceKind, DocumentSet, Event, Level, Position, Variant};
