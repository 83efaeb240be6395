//! Grouping of timeline items that share a timestamp

use super::{format_time, Timestamped};

/// Items pinned to the same playback position
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampGroup<T> {
    pub timestamp: f64,
    pub label: String,
    pub items: Vec<T>,
}

/// Group items by exact timestamp.
///
/// Groups come back in ascending timestamp order; items inside a group keep
/// their input order. Items with a non-finite timestamp are dropped.
#[allow(clippy::float_cmp)]
pub fn group_by_timestamp<T: Timestamped>(items: Vec<T>) -> Vec<TimestampGroup<T>> {
    let mut items: Vec<T> = items
        .into_iter()
        .filter(|item| item.timestamp().is_finite())
        .collect();
    // Stable sort keeps input order among equal timestamps
    items.sort_by(|a, b| a.timestamp().total_cmp(&b.timestamp()));

    let mut groups: Vec<TimestampGroup<T>> = Vec::new();
    for item in items {
        let timestamp = item.timestamp();
        match groups.last_mut() {
            Some(group) if group.timestamp == timestamp => group.items.push(item),
            _ => groups.push(TimestampGroup {
                timestamp,
                label: format_time(timestamp),
                items: vec![item],
            }),
        }
    }

    groups
}
