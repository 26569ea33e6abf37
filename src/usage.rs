//! Hub usage classification.
//!
//! The aggregation formulas are pure functions over a parsed metrics
//! response so they can be exercised without a live service. A hub counts
//! as in-use when any of the three aggregates is strictly positive; when
//! metrics were skipped or unavailable, the entity status flag decides
//! instead and the numeric fields stay empty.

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use usage_reporter_azure::metrics::{
    MetricPoint,
    MetricsResponse,
    ACTIVE_CONNECTIONS,
    INCOMING_MESSAGES,
    OUTGOING_MESSAGES,
};

/// Whether usage metrics were retrieved for a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricsStatus {
    /// Metrics were retrieved; the aggregates decided in-use.
    Ok,
    /// The metrics request failed; status flag decided in-use.
    Unavailable,
    /// Metrics lookups were disabled; status flag decided in-use.
    Skipped,
}

impl MetricsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsStatus::Ok => "OK",
            MetricsStatus::Unavailable => "Unavailable",
            MetricsStatus::Skipped => "Skipped",
        }
    }
}

/// Usage verdict for a single hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubUsage {
    pub metrics_status: MetricsStatus,
    pub incoming_total: Option<f64>,
    pub outgoing_total: Option<f64>,
    pub active_maxavg: Option<f64>,
    pub last_nonzero: Option<DateTime<Utc>>,
    pub in_use: bool,
}

impl HubUsage {
    /// Classify from a successfully retrieved metrics response. An empty
    /// series is treated as zero traffic, not as an error.
    pub fn from_metrics(response: &MetricsResponse) -> Self {
        let incoming_total = sum_totals(response.points(INCOMING_MESSAGES));
        let outgoing_total = sum_totals(response.points(OUTGOING_MESSAGES));
        let active_maxavg = max_average(response.points(ACTIVE_CONNECTIONS));
        Self {
            metrics_status: MetricsStatus::Ok,
            incoming_total: Some(incoming_total),
            outgoing_total: Some(outgoing_total),
            active_maxavg: Some(active_maxavg),
            last_nonzero: last_nonzero(response),
            in_use: incoming_total > 0.0 || outgoing_total > 0.0 || active_maxavg > 0.0,
        }
    }

    /// Fallback for a failed metrics request.
    pub fn unavailable(status_active: bool) -> Self {
        Self::status_only(MetricsStatus::Unavailable, status_active)
    }

    /// Fallback when metrics lookups are disabled by configuration.
    pub fn skipped(status_active: bool) -> Self {
        Self::status_only(MetricsStatus::Skipped, status_active)
    }

    fn status_only(metrics_status: MetricsStatus, status_active: bool) -> Self {
        Self {
            metrics_status,
            incoming_total: None,
            outgoing_total: None,
            active_maxavg: None,
            last_nonzero: None,
            in_use: status_active,
        }
    }
}

/// Sum of the `total` aggregation across data points; missing points are
/// zero.
pub fn sum_totals<'a>(points: impl Iterator<Item = &'a MetricPoint>) -> f64 {
    points.filter_map(|p| p.total).sum()
}

/// Maximum of the `average` aggregation across data points; zero when the
/// series is empty.
pub fn max_average<'a>(points: impl Iterator<Item = &'a MetricPoint>) -> f64 {
    points.filter_map(|p| p.average).fold(0.0, f64::max)
}

/// Latest timestamp of any data point showing activity: a positive message
/// `total`, or a positive active-connections `average`.
pub fn last_nonzero(response: &MetricsResponse) -> Option<DateTime<Utc>> {
    let messages = response
        .points(INCOMING_MESSAGES)
        .chain(response.points(OUTGOING_MESSAGES))
        .filter(|p| p.total.is_some_and(|t| t > 0.0));
    let connections = response
        .points(ACTIVE_CONNECTIONS)
        .filter(|p| p.average.is_some_and(|a| a > 0.0));
    messages.chain(connections).map(|p| p.time_stamp).max()
}
