//! Silent hit-sound files that aren't the blank sample size.

use crate::domain::DocumentSet;
use crate::samples::{inspect_all, SampleFinding, BLANK_SAMPLE_BYTES};

use super::{Check, CheckError, CheckMetadata, Report};

#[derive(Debug, Clone, Copy)]
pub struct SilentSampleCheck {
    blank_size_bytes: u64,
}

impl SilentSampleCheck {
    pub fn new(blank_size_bytes: u64) -> Self {
        Self { blank_size_bytes }
    }
}

impl Default for SilentSampleCheck {
    fn default() -> Self {
        Self::new(BLANK_SAMPLE_BYTES)
    }
}

impl Check for SilentSampleCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "silent-sample-size",
            category: "Audio",
            message: "Silent hitsounds more than 44 bytes in size.",
            author: "enneya",
            level: SampleFinding::OVERSIZED_LEVEL,
            documentation: Some(
                "Purpose: silent hit-sounds should use the 44-byte blank sample.\n\
                 Reasoning: other silent files are needlessly large, and 0-byte files \
                 do not play at all. Files that couldn't be inspected are reported \
                 so they can be checked by hand.",
            ),
        }
    }

    fn run(&self, set: &DocumentSet, report: &mut Report) -> Result<(), CheckError> {
        report
            .sample_findings
            .extend(inspect_all(&set.samples, self.blank_size_bytes));
        Ok(())
    }
}
