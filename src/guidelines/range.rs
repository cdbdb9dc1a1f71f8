//! Recommended ranges with optional bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recommended range; either bound may be absent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GuidelineRange {
    #[serde(default)]
    pub min: Option<f32>,
    #[serde(default)]
    pub max: Option<f32>,
}

impl GuidelineRange {
    pub const fn new(min: Option<f32>, max: Option<f32>) -> Self {
        Self { min, max }
    }

    /// Range with only an upper bound
    pub const fn at_most(max: f32) -> Self {
        Self::new(None, Some(max))
    }

    /// Range with only a lower bound
    pub const fn at_least(min: f32) -> Self {
        Self::new(Some(min), None)
    }

    pub const fn between(min: f32, max: f32) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// How `value` falls outside the range, if it does
    pub fn evaluate(&self, value: f32) -> Option<Violation> {
        let below = self.min.map_or(false, |min| value < min);
        let above = self.max.map_or(false, |max| value > max);

        match (self.min, self.max) {
            (None, Some(max)) if above => Some(Violation::AboveMaximum { max }),
            (Some(min), None) if below => Some(Violation::BelowMinimum { min }),
            (Some(min), Some(max)) if below || above => Some(Violation::OutsideRange { min, max }),
            _ => None,
        }
    }
}

impl fmt::Display for GuidelineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<f32>| b.map_or_else(|| "N/A".to_string(), |v| v.to_string());
        write!(f, "{} - {}", bound(self.min), bound(self.max))
    }
}

/// How a setting misses its recommended range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    /// Recommended to be less than `max`
    AboveMaximum { max: f32 },
    /// Recommended to be more than `min`
    BelowMinimum { min: f32 },
    /// Recommended to be between `min` and `max`
    OutsideRange { min: f32, max: f32 },
}
