//! Difficulty settings outside guideline ranges.

use crate::domain::DocumentSet;
use crate::guidelines::{GuidelineTable, SettingWarning};

use super::{Check, CheckError, CheckMetadata, Report};

/// Reports CS/AR/OD/HP values outside the recommended range for a tier
#[derive(Debug, Clone)]
pub struct DifficultySettingsCheck {
    table: GuidelineTable,
}

impl DifficultySettingsCheck {
    pub fn new(table: GuidelineTable) -> Self {
        Self { table }
    }
}

impl Default for DifficultySettingsCheck {
    fn default() -> Self {
        Self::new(GuidelineTable::default())
    }
}

impl Check for DifficultySettingsCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "difficulty-settings",
            category: "Settings",
            message: "Difficulty settings exceeding guideline boundaries.",
            author: "enneya",
            level: SettingWarning::LEVEL,
            documentation: Some(
                "Purpose: check that difficulty settings conform to the guideline range \
                 for their difficulty level.\n\
                 Reasoning: catches settings left over from copying another difficulty, \
                 or a slider touched by accident. Out of range values can be intentional, \
                 especially for Insane and above, so use judgement before pointing them out.",
            ),
        }
    }

    fn run(&self, set: &DocumentSet, report: &mut Report) -> Result<(), CheckError> {
        report
            .setting_warnings
            .extend(self.table.check_variants(&set.variants));
        Ok(())
    }
}
