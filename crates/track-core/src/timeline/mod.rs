//! Timeline shaping for the media viewer
//!
//! Comments are pinned to a playback position. The viewer shows them as a
//! thread grouped by exact timestamp and as marker dots on the scrub bar,
//! where nearby comments share a single dot.

mod format;
mod grouping;
mod markers;

pub use format::format_time;
pub use grouping::{group_by_timestamp, TimestampGroup};
pub use markers::{bucket_markers, Marker};

use crate::entities::{Comment, CommentWithAuthor};

/// Anything that sits at a point on the timeline
pub trait Timestamped {
    /// Seconds into playback
    fn timestamp(&self) -> f64;

    /// Identifier reported in markers
    fn timeline_id(&self) -> i64;
}

impl Timestamped for Comment {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }

    fn timeline_id(&self) -> i64 {
        self.id
    }
}

impl Timestamped for CommentWithAuthor {
    fn timestamp(&self) -> f64 {
        self.comment.timestamp
    }

    fn timeline_id(&self) -> i64 {
        self.comment.id
    }
}
