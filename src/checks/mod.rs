//! Check registry.
//!
//! Every check reads a document set and adds its findings to a report.
//! Checks run in registration order; the first failure aborts the report.

pub mod report;
pub mod settings;
pub mod silent_samples;
pub mod volume;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ResolvedConfig;
use crate::consistency::ConsistencyError;
use crate::domain::{DocumentSet, InputError, Level};

pub use report::Report;
pub use settings::DifficultySettingsCheck;
pub use silent_samples::SilentSampleCheck;
pub use volume::InconsistentVolumeCheck;

/// Describes a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMetadata {
    /// Stable id used in config and on the command line
    pub id: &'static str,
    pub category: &'static str,
    /// One-line summary of what is reported
    pub message: &'static str,
    pub author: &'static str,
    /// Severity of the findings it produces
    pub level: Level,
    /// Purpose and reasoning, for `mvcheck checks`
    pub documentation: Option<&'static str>,
}

/// A single check over a document set
pub trait Check: Send + Sync {
    fn metadata(&self) -> CheckMetadata;

    /// Add this check's findings to `report`
    fn run(&self, set: &DocumentSet, report: &mut Report) -> Result<(), CheckError>;
}

/// Errors that stop a check
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckError {
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Unknown check: {id}")]
    UnknownCheck { id: String },
}

/// All checks, configured from `config`
pub fn registry(config: &ResolvedConfig) -> Vec<Box<dyn Check>> {
    vec![
        Box::new(InconsistentVolumeCheck),
        Box::new(DifficultySettingsCheck::new(config.guidelines.clone())),
        Box::new(SilentSampleCheck::new(config.blank_sample_bytes)),
    ]
}

/// Checks that should run: enabled in config, and in `only` when given
pub fn select(
    config: &ResolvedConfig,
    only: &[String],
) -> Result<Vec<Box<dyn Check>>, CheckError> {
    let all = registry(config);

    if let Some(unknown) = only
        .iter()
        .find(|id| !all.iter().any(|c| c.metadata().id == id.as_str()))
    {
        return Err(CheckError::UnknownCheck {
            id: unknown.clone(),
        });
    }

    Ok(all
        .into_iter()
        .filter(|check| {
            let id = check.metadata().id;
            config.is_enabled(id) && (only.is_empty() || only.iter().any(|o| o == id))
        })
        .collect())
}

/// Run `checks` over a set and collect their findings
pub fn run_checks(set: &DocumentSet, checks: &[Box<dyn Check>]) -> Result<Report, CheckError> {
    set.validate()?;

    let mut report = Report::new(set.title.clone());
    for check in checks {
        let meta = check.metadata();
        debug!(check = meta.id, "Running check");

        let before = report.finding_count();
        check.run(set, &mut report)?;
        report.checks_run.push(meta.id.to_string());

        debug!(check = meta.id, findings = report.finding_count() - before, "Check finished");
    }

    info!(
        title = %report.title,
        checks = report.checks_run.len(),
        findings = report.finding_count(),
        "Document set checked"
    );
    Ok(report)
}
