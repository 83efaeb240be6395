//! Scrub-bar marker dots

use serde::Serialize;

use super::{format_time, Timestamped};

/// A dot on the scrub bar standing for one or more nearby items
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Timestamp of the first item in the bucket
    pub time: f64,
    pub label: String,
    pub comment_ids: Vec<i64>,
    pub count: usize,
    /// Position along the bar in percent, when the media duration is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// Bucket items into marker dots.
///
/// Items are taken in timestamp order. An item joins the current bucket when
/// it lies within `tolerance` seconds of the bucket's first timestamp,
/// otherwise it starts a new bucket. A `tolerance` of zero buckets only
/// identical timestamps. Negative or non-finite tolerance is treated as zero.
pub fn bucket_markers<T: Timestamped>(
    items: &[T],
    tolerance: f64,
    duration: Option<f64>,
) -> Vec<Marker> {
    let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        0.0
    };

    let mut points: Vec<(f64, i64)> = items
        .iter()
        .map(|item| (item.timestamp(), item.timeline_id()))
        .filter(|(timestamp, _)| timestamp.is_finite())
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut markers: Vec<Marker> = Vec::new();
    for (timestamp, id) in points {
        match markers.last_mut() {
            Some(marker) if timestamp - marker.time <= tolerance => {
                marker.comment_ids.push(id);
                marker.count += 1;
            }
            _ => markers.push(Marker {
                time: timestamp,
                label: format_time(timestamp),
                comment_ids: vec![id],
                count: 1,
                position: position_percent(timestamp, duration),
            }),
        }
    }

    markers
}

fn position_percent(timestamp: f64, duration: Option<f64>) -> Option<f64> {
    let duration = duration.filter(|d| d.is_finite() && *d > 0.0)?;
    Some((timestamp / duration * 100.0).clamp(0.0, 100.0))
}
