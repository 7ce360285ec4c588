//! Gap markers
//!
//! When a log file has been quiet for a while, the next record is preceded by
//! a separator line carrying the current UTC time, and for short pauses the
//! number of seconds since the previous write.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Quiet period (seconds) after which a marker is written
pub const GAP_THRESHOLD_SECS: u64 = 10;

/// Longest pause (seconds) whose length is still printed
pub const GAP_DELTA_LIMIT_SECS: u64 = 120;

/// Leading text of every marker line
pub const GAP_MARKER_PREFIX: &str = "----";

/// Timestamp layout: `dd.mm.yy HH:MM:SS`
pub const GAP_TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M:%S";

/// Marker line for a pause of `elapsed_secs`, if one is due
pub fn gap_marker(elapsed_secs: u64, now: DateTime<Utc>) -> Option<String> {
    if elapsed_secs < GAP_THRESHOLD_SECS {
        return None;
    }

    let mut marker = format!("{} {}", GAP_MARKER_PREFIX, now.format(GAP_TIMESTAMP_FORMAT));
    if elapsed_secs <= GAP_DELTA_LIMIT_SECS {
        marker.push_str(&format!(" +{}", elapsed_secs));
    }
    Some(marker)
}

/// Whole seconds between the file's last modification and `now`
///
/// A missing file counts as last modified at the Unix epoch, so the first
/// write always gets a marker. A modification time in the future counts as 0.
pub fn elapsed_since_modified(path: &Path, now: SystemTime) -> u64 {
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(UNIX_EPOCH);
    now.duration_since(modified)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
