//! Findings produced by the checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::event::Position;

/// Severity of a finding, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Minor,
    Warning,
    Problem,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Minor => "minor",
            Level::Warning => "warning",
            Level::Problem => "problem",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minor" => Ok(Level::Minor),
            "warning" => Ok(Level::Warning),
            "problem" => Ok(Level::Problem),
            "error" => Ok(Level::Error),
            other => Err(format!("unknown level: {}", other)),
        }
    }
}

/// Which kind of divergence a finding describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceKind {
    /// Variants disagree on the value at a position
    ValueDifference,
    /// The event occurs on a minority of variants only
    ExistsOnly,
    /// The event is absent from a minority of variants
    MissingFrom,
}

/// A variant's value at a divergent position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantValue {
    pub variant: String,
    pub value: i32,
}

/// A point where variants' reduced timelines disagree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DivergenceFinding {
    /// Several values at one position; lists every variant holding one of them
    ValueDifference {
        position: Position,
        values: Vec<VariantValue>,
    },

    /// Event exists only on the listed variants
    ExistsOnly {
        position: Position,
        value: i32,
        variants: Vec<String>,
    },

    /// Event does not exist on the listed variants
    MissingFrom {
        position: Position,
        value: i32,
        variants: Vec<String>,
    },
}

impl DivergenceFinding {
    /// Severity of every divergence
    pub const LEVEL: Level = Level::Minor;

    pub fn kind(&self) -> DivergenceKind {
        match self {
            DivergenceFinding::ValueDifference { .. } => DivergenceKind::ValueDifference,
            DivergenceFinding::ExistsOnly { .. } => DivergenceKind::ExistsOnly,
            DivergenceFinding::MissingFrom { .. } => DivergenceKind::MissingFrom,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            DivergenceFinding::ValueDifference { position, .. }
            | DivergenceFinding::ExistsOnly { position, .. }
            | DivergenceFinding::MissingFrom { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_and_parse() {
        assert!(Level::Minor < Level::Warning);
        assert!(Level::Problem < Level::Error);
        assert_eq!("Problem".parse::<Level>(), Ok(Level::Problem));
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn test_finding_is_tagged() {
        let finding = DivergenceFinding::MissingFrom {
            position: Position::new(1000.0).unwrap(),
            value: 50,
            variants: vec!["Easy".to_string()],
        };

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["kind"], "missing_from");
        assert_eq!(json["position"], 1000.0);
        assert_eq!(finding.kind(), DivergenceKind::MissingFrom);
    }
}
