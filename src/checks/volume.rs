//! Inconsistent volume changes across difficulties.

use tracing::debug;

use crate::consistency::check_consistency;
use crate::domain::{DivergenceFinding, DocumentSet};

use super::{Check, CheckError, CheckMetadata, Report};

/// Reports volume changes that differ between the variants of a set
#[derive(Debug, Clone, Copy, Default)]
pub struct InconsistentVolumeCheck;

impl Check for InconsistentVolumeCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "inconsistent-volume",
            category: "Hit Sounds",
            message: "Inconsistent volume changing timing points.",
            author: "enneya",
            level: DivergenceFinding::LEVEL,
            documentation: Some(
                "Volume changes are compared across every difficulty of the set. \
                 A change that differs in volume, exists on only some difficulties, \
                 or is missing from some difficulties is reported at its offset.",
            ),
        }
    }

    fn run(&self, set: &DocumentSet, report: &mut Report) -> Result<(), CheckError> {
        let findings = check_consistency(&set.variants)?;
        debug!(divergences = findings.len(), "Compared volume timelines");

        report.divergences.extend(findings);
        Ok(())
    }
}
