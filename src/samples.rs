//! Silent hit-sound samples that aren't the standard blank file.
//!
//! A silent sample should be the 44-byte blank wave. Anything larger is
//! wasted space, and a 0-byte file does not play at all. Peak data is
//! computed upstream; this module only looks at it.

use serde::{Deserialize, Serialize};

use crate::domain::{Level, SampleInfo};

/// Size of the standard blank wave file
pub const BLANK_SAMPLE_BYTES: u64 = 44;

/// Result of inspecting one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleFinding {
    /// Silent, but not the blank file size
    OversizedSilent { name: String, size_bytes: u64 },

    /// Size or peak data unavailable; needs a manual look
    Unreadable { name: String },
}

impl SampleFinding {
    pub const OVERSIZED_LEVEL: Level = Level::Problem;
    pub const UNREADABLE_LEVEL: Level = Level::Error;

    pub fn level(&self) -> Level {
        match self {
            SampleFinding::OversizedSilent { .. } => Self::OVERSIZED_LEVEL,
            SampleFinding::Unreadable { .. } => Self::UNREADABLE_LEVEL,
        }
    }
}

/// True when there are no peak frames or the peaks don't sum above zero
pub fn is_silent(peaks: &[Vec<f32>]) -> bool {
    let total: f32 = peaks.iter().flatten().sum();
    peaks.is_empty() || !(total > 0.0)
}

/// Inspect one sample against the expected blank size
pub fn inspect(sample: &SampleInfo, blank_size_bytes: u64) -> Option<SampleFinding> {
    let (Some(size_bytes), Some(peaks)) = (sample.size_bytes, sample.peaks.as_deref()) else {
        tracing::warn!(sample = %sample.name, "Sample couldn't be inspected");
        return Some(SampleFinding::Unreadable {
            name: sample.name.clone(),
        });
    };

    if size_bytes != blank_size_bytes && is_silent(peaks) {
        return Some(SampleFinding::OversizedSilent {
            name: sample.name.clone(),
            size_bytes,
        });
    }

    None
}

/// Inspect every sample, in order
pub fn inspect_all(samples: &[SampleInfo], blank_size_bytes: u64) -> Vec<SampleFinding> {
    samples
        .iter()
        .filter_map(|sample| inspect(sample, blank_size_bytes))
        .collect()
}
