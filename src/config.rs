//! Run configuration derived from CLI arguments and environment.

use chrono::{
    DateTime,
    Duration,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::path::PathBuf;

/// Half-open metrics window `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MetricsWindow {
    /// Window ending at `end`, looking back the given number of days.
    pub fn looking_back(end: DateTime<Utc>, lookback_days: u32) -> Self {
        Self {
            start: end - Duration::days(i64::from(lookback_days)),
            end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Parent directory of the per-run timestamped output directories.
    pub output_root: PathBuf,
    /// Extended variant: usage columns plus the not-in-use report.
    pub extended: bool,
    /// Classify from the status flag alone, without querying metrics.
    pub skip_metrics: bool,
    pub window: MetricsWindow,
}

impl ReportOptions {
    pub fn new(
        output_root: PathBuf,
        extended: bool,
        skip_metrics: bool,
        lookback_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            output_root,
            extended,
            skip_metrics,
            window: MetricsWindow::looking_back(now, lookback_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_spans_lookback_days() {
        let end = "2026-08-29T12:00:00Z".parse().unwrap();
        let window = MetricsWindow::looking_back(end, 7);
        assert_eq!(window.end, end);
        assert_eq!(window.start, "2026-08-22T12:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }
}
