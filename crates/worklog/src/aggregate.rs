//! Lap aggregation.
//!
//! Laps sharing an issue key and description collapse into one [`WorkGroup`]
//! whose duration is the sum of its laps. Groups keep the order in which their
//! key was first seen, so equal inputs always produce the same processing order.

use std::collections::HashMap;

use crate::input::Lap;
use crate::label::ParsedLabel;

/// Aggregation of every lap with the same `(issue_id, description)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkGroup {
    pub issue_id: String,
    pub description: String,
    /// Label of the first lap in the group, kept for reporting.
    pub label: String,
    pub total_millis: i64,
    pub lap_count: usize,
    /// Set when the millisecond sum left the `i64` range. `total_millis`
    /// then holds the sum up to the lap that overflowed.
    pub overflowed: bool,
}

impl WorkGroup {
    /// Total duration in whole seconds (floor division).
    pub fn duration_seconds(&self) -> i64 {
        self.total_millis.div_euclid(1000)
    }

    /// A group can be submitted only with a positive, in-range duration and a
    /// description.
    pub fn is_valid(&self) -> bool {
        !self.overflowed && self.duration_seconds() > 0 && !self.description.trim().is_empty()
    }
}

/// Result of aggregating an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Groups in first-occurrence order.
    pub groups: Vec<WorkGroup>,
    /// Laps without an issue key, in input order.
    pub invalid_laps: Vec<Lap>,
}

impl Aggregation {
    /// Number of units the engine will process (groups plus invalid laps).
    pub fn unit_count(&self) -> usize {
        self.groups.len() + self.invalid_laps.len()
    }
}

/// Group laps by issue key and description, summing durations in milliseconds.
pub fn aggregate(laps: &[Lap]) -> Aggregation {
    let mut result = Aggregation::default();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for lap in laps {
        let ParsedLabel {
            issue_id,
            description,
        } = ParsedLabel::parse(&lap.text);

        let Some(issue_id) = issue_id else {
            result.invalid_laps.push(lap.clone());
            continue;
        };

        let slot = *index
            .entry((issue_id.clone(), description.clone()))
            .or_insert_with(|| {
                result.groups.push(WorkGroup {
                    issue_id,
                    description,
                    label: lap.text.clone(),
                    total_millis: 0,
                    lap_count: 0,
                    overflowed: false,
                });
                result.groups.len() - 1
            });

        let group = &mut result.groups[slot];
        match group.total_millis.checked_add(lap.duration_millis) {
            Some(total) if !group.overflowed => group.total_millis = total,
            _ => group.overflowed = true,
        }
        group.lap_count += 1;
    }

    result
}
