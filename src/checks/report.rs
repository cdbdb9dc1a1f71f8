//! Per-document report collecting every check's findings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DivergenceFinding, Level};
use crate::guidelines::SettingWarning;
use crate::samples::SampleFinding;

/// Findings for one document set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Title of the checked set
    pub title: String,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// Ids of the checks that ran, in order
    pub checks_run: Vec<String>,

    /// Volume divergences across variants
    #[serde(default)]
    pub divergences: Vec<DivergenceFinding>,

    /// Settings outside their guideline range
    #[serde(default)]
    pub setting_warnings: Vec<SettingWarning>,

    /// Sample file problems
    #[serde(default)]
    pub sample_findings: Vec<SampleFinding>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            checks_run: Vec::new(),
            divergences: Vec::new(),
            setting_warnings: Vec::new(),
            sample_findings: Vec::new(),
        }
    }

    /// Total number of findings
    pub fn finding_count(&self) -> usize {
        self.divergences.len() + self.setting_warnings.len() + self.sample_findings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }

    /// Most severe level among all findings
    pub fn highest_level(&self) -> Option<Level> {
        let divergence = (!self.divergences.is_empty()).then_some(DivergenceFinding::LEVEL);
        let settings = (!self.setting_warnings.is_empty()).then_some(SettingWarning::LEVEL);
        let samples = self.sample_findings.iter().map(SampleFinding::level).max();

        [divergence, settings, samples].into_iter().flatten().max()
    }
}
