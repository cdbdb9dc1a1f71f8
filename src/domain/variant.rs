//! Variants: the parallel documents of one set (difficulties of one song).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::event::Event;

/// Difficulty tier a variant is interpreted as
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Easy,
    Normal,
    Hard,
    Insane,
    Expert,
}

impl Tier {
    /// Every tier, easiest first
    pub const ALL: [Tier; 5] = [
        Tier::Easy,
        Tier::Normal,
        Tier::Hard,
        Tier::Insane,
        Tier::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Normal => "Normal",
            Tier::Hard => "Hard",
            Tier::Insane => "Insane",
            Tier::Expert => "Expert",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four difficulty settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    CircleSize,
    ApproachRate,
    OverallDifficulty,
    HpDrain,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::CircleSize,
        Setting::ApproachRate,
        Setting::OverallDifficulty,
        Setting::HpDrain,
    ];

    /// Short label ("CS", "AR", "OD", "HP")
    pub fn label(&self) -> &'static str {
        match self {
            Setting::CircleSize => "CS",
            Setting::ApproachRate => "AR",
            Setting::OverallDifficulty => "OD",
            Setting::HpDrain => "HP",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Difficulty settings of a variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub circle_size: f32,
    pub approach_rate: f32,
    pub overall_difficulty: f32,
    pub hp_drain: f32,
}

impl DifficultySettings {
    /// Value of a single setting
    pub fn get(&self, setting: Setting) -> f32 {
        match setting {
            Setting::CircleSize => self.circle_size,
            Setting::ApproachRate => self.approach_rate,
            Setting::OverallDifficulty => self.overall_difficulty,
            Setting::HpDrain => self.hp_drain,
        }
    }
}

/// One parallel document in a set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Stable label (the difficulty name)
    pub name: String,

    /// Tier to interpret settings against; all tiers when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,

    /// Difficulty settings, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DifficultySettings>,

    /// Raw timing events in timeline order
    #[serde(default)]
    pub timing_points: Vec<Event>,
}

impl Variant {
    /// Create a variant with only timing events
    pub fn new(name: impl Into<String>, timing_points: Vec<Event>) -> Self {
        Self {
            name: name.into(),
            tier: None,
            settings: None,
            timing_points,
        }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_settings(mut self, settings: DifficultySettings) -> Self {
        self.settings = Some(settings);
        self
    }
}
