//! Cross-variant timeline consistency.
//!
//! Each variant's timing points are reduced to the points where the volume
//! actually changes. Those change points are merged across all variants
//! (one per exact `(position, value)` identity), grouped by position, and
//! each group is classified:
//!
//! - several values at one position: `ValueDifference`
//! - one value present on fewer variants than it is absent from: `ExistsOnly`
//! - one value absent from some variants (ties included): `MissingFrom`
//!
//! # Example
//!
//! ```
//! use mvcheck::consistency::check_consistency;
//! use mvcheck::domain::{Event, Variant};
//!
//! let variants = vec![
//!     Variant::new("Easy", vec![Event::new(0.0, 100).unwrap()]),
//!     Variant::new("Hard", vec![Event::new(0.0, 100).unwrap()]),
//! ];
//! assert!(check_consistency(&variants).unwrap().is_empty());
//! ```

pub mod classify;
pub mod timeline;
pub mod unique;

pub use classify::{check_consistency, classify};
pub use timeline::{reduce, ConsistencyError, ReducedTimeline};
pub use unique::{PositionGroup, UniqueEventSet};
