//! Difficulty settings guidelines.
//!
//! Each tier has a recommended range for circle size, approach rate,
//! overall difficulty and HP drain. A bound may be absent, in which case
//! only the other side is checked.

pub mod range;
pub mod table;

pub use range::{GuidelineRange, Violation};
pub use table::{GuidelineOverrides, GuidelineTable, SettingWarning};
