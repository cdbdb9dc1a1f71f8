//! Classification of position groups into divergence findings.

use tracing::debug;

use crate::domain::{DivergenceFinding, Variant, VariantValue};

use super::timeline::{ConsistencyError, ReducedTimeline};
use super::unique::{PositionGroup, UniqueEventSet};

/// Compare all variants and return their divergences, ascending by position.
///
/// Variants are reported in the order given. Fails without findings if any
/// variant has no timing points.
pub fn check_consistency(variants: &[Variant]) -> Result<Vec<DivergenceFinding>, ConsistencyError> {
    let timelines = variants
        .iter()
        .map(ReducedTimeline::from_variant)
        .collect::<Result<Vec<_>, _>>()?;

    let unique = UniqueEventSet::from_timelines(&timelines);
    let groups = unique.group_by_position();
    debug!(
        variants = timelines.len(),
        unique_events = unique.len(),
        positions = groups.len(),
        "Grouped timing changes"
    );

    Ok(groups
        .iter()
        .filter_map(|group| classify(group, &timelines))
        .collect())
}

/// Classify one position group against every variant's timeline
pub fn classify(group: &PositionGroup, timelines: &[ReducedTimeline]) -> Option<DivergenceFinding> {
    if group.is_multi_value() {
        // Variants with no event of this group are left out of the listing
        let values = timelines
            .iter()
            .filter_map(|t| {
                group.match_in(t).map(|event| VariantValue {
                    variant: t.variant.clone(),
                    value: event.value,
                })
            })
            .collect();

        return Some(DivergenceFinding::ValueDifference {
            position: group.position,
            values,
        });
    }

    let event = group.events.first()?;
    let (with, without): (Vec<&ReducedTimeline>, Vec<&ReducedTimeline>) =
        timelines.iter().partition(|t| t.contains(event));

    if without.is_empty() {
        return None;
    }

    let names = |set: Vec<&ReducedTimeline>| set.into_iter().map(|t| t.variant.clone()).collect();

    // Ties count as a majority having the event
    if without.len() > with.len() {
        Some(DivergenceFinding::ExistsOnly {
            position: event.position,
            value: event.value,
            variants: names(with),
        })
    } else {
        Some(DivergenceFinding::MissingFrom {
            position: event.position,
            value: event.value,
            variants: names(without),
        })
    }
}
