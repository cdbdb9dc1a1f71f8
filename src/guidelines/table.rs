//! Per-tier guideline table and the settings check.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Level, Setting, Tier, Variant};

use super::range::{GuidelineRange, Violation};

/// Config overrides: tier -> setting -> range
pub type GuidelineOverrides = HashMap<Tier, HashMap<Setting, GuidelineRange>>;

/// Recommended ranges for every tier and setting
#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineTable {
    ranges: HashMap<(Tier, Setting), GuidelineRange>,
}

impl Default for GuidelineTable {
    fn default() -> Self {
        use GuidelineRange as R;

        // CS, AR, OD, HP
        let rows: [(Tier, [GuidelineRange; 4]); 5] = [
            (Tier::Easy, [R::at_most(4.0), R::at_most(5.0), R::between(1.0, 3.0), R::between(1.0, 3.0)]),
            (Tier::Normal, [R::at_most(5.0), R::between(4.0, 6.0), R::between(3.0, 5.0), R::between(3.0, 5.0)]),
            (Tier::Hard, [R::at_most(6.0), R::between(6.0, 8.0), R::between(5.0, 7.0), R::between(4.0, 6.0)]),
            (Tier::Insane, [R::at_most(7.0), R::between(7.0, 9.3), R::between(7.0, 9.0), R::between(5.0, 8.0)]),
            (Tier::Expert, [R::at_most(7.0), R::at_least(8.0), R::at_least(8.0), R::at_least(5.0)]),
        ];

        let ranges = rows
            .into_iter()
            .flat_map(|(tier, row)| {
                Setting::ALL
                    .into_iter()
                    .zip(row)
                    .map(move |(setting, range)| ((tier, setting), range))
            })
            .collect();

        Self { ranges }
    }
}

impl GuidelineTable {
    /// Default table with config overrides applied cell by cell
    pub fn with_overrides(overrides: &GuidelineOverrides) -> Self {
        let mut table = Self::default();
        for (tier, settings) in overrides {
            for (setting, range) in settings {
                table.ranges.insert((*tier, *setting), *range);
            }
        }
        table
    }

    pub fn range(&self, tier: Tier, setting: Setting) -> GuidelineRange {
        self.ranges
            .get(&(tier, setting))
            .copied()
            .unwrap_or_default()
    }

    /// Check every variant with settings.
    ///
    /// A variant is checked against its declared tier, or against every
    /// tier when it declares none.
    pub fn check_variants(&self, variants: &[Variant]) -> Vec<SettingWarning> {
        let mut warnings = Vec::new();

        for variant in variants {
            let Some(settings) = variant.settings else {
                continue;
            };

            let tiers: &[Tier] = match &variant.tier {
                Some(tier) => std::slice::from_ref(tier),
                None => &Tier::ALL,
            };

            for &tier in tiers {
                for setting in Setting::ALL {
                    let value = settings.get(setting);
                    if let Some(violation) = self.range(tier, setting).evaluate(value) {
                        warnings.push(SettingWarning {
                            variant: variant.name.clone(),
                            tier,
                            setting,
                            value,
                            violation,
                        });
                    }
                }
            }
        }

        warnings
    }
}

/// A difficulty setting outside the range recommended for a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingWarning {
    pub variant: String,
    /// Tier the setting was interpreted as
    pub tier: Tier,
    pub setting: Setting,
    pub value: f32,
    #[serde(flatten)]
    pub violation: Violation,
}

impl SettingWarning {
    /// Severity of every settings warning
    pub const LEVEL: Level = Level::Warning;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DifficultySettings;

    fn settings(cs: f32, ar: f32, od: f32, hp: f32) -> DifficultySettings {
        DifficultySettings {
            circle_size: cs,
            approach_rate: ar,
            overall_difficulty: od,
            hp_drain: hp,
        }
    }

    #[test]
    fn test_default_table_cells() {
        let table = GuidelineTable::default();
        assert_eq!(table.range(Tier::Easy, Setting::CircleSize), GuidelineRange::at_most(4.0));
        assert_eq!(
            table.range(Tier::Insane, Setting::ApproachRate),
            GuidelineRange::between(7.0, 9.3)
        );
        assert_eq!(table.range(Tier::Expert, Setting::HpDrain), GuidelineRange::at_least(5.0));
    }

    #[test]
    fn test_declared_tier_only() {
        let variant = Variant::new("Normal", Vec::new())
            .with_tier(Tier::Normal)
            .with_settings(settings(4.0, 7.0, 4.0, 4.0));

        let warnings = GuidelineTable::default().check_variants(&[variant]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].tier, Tier::Normal);
        assert_eq!(warnings[0].setting, Setting::ApproachRate);
        assert_eq!(
            warnings[0].violation,
            Violation::OutsideRange { min: 4.0, max: 6.0 }
        );
    }

    #[test]
    fn test_undeclared_tier_checks_every_tier() {
        // Fits Easy everywhere, so only harder tiers complain
        let variant = Variant::new("Cup", Vec::new())
            .with_settings(settings(2.0, 3.0, 2.0, 2.0));

        let warnings = GuidelineTable::default().check_variants(&[variant]);
        assert!(warnings.iter().all(|w| w.tier != Tier::Easy));
        assert!(warnings
            .iter()
            .any(|w| w.tier == Tier::Expert && w.violation == Violation::BelowMinimum { min: 8.0 }));
    }

    #[test]
    fn test_variants_without_settings_are_skipped() {
        let variant = Variant::new("Insane", Vec::new()).with_tier(Tier::Insane);
        assert!(GuidelineTable::default().check_variants(&[variant]).is_empty());
    }

    #[test]
    fn test_overrides_replace_cells() {
        let mut overrides = GuidelineOverrides::new();
        overrides
            .entry(Tier::Easy)
            .or_default()
            .insert(Setting::ApproachRate, GuidelineRange::default());

        let table = GuidelineTable::with_overrides(&overrides);
        assert_eq!(table.range(Tier::Easy, Setting::ApproachRate), GuidelineRange::default());
        assert_eq!(table.range(Tier::Easy, Setting::CircleSize), GuidelineRange::at_most(4.0));
    }
}
