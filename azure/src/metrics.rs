//! Response shape of `az monitor metrics list`.
//!
//! The command returns one [`Metric`] per requested metric name, each with
//! one or more time series of hourly [`MetricPoint`]s. Points omit the
//! aggregations that produced no value, so `total` and `average` are both
//! optional.

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Azure Monitor metric names requested for every hub.
pub const INCOMING_MESSAGES: &str = "IncomingMessages";
pub const OUTGOING_MESSAGES: &str = "OutgoingMessages";
pub const ACTIVE_CONNECTIONS: &str = "ActiveConnections";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub value: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub name: MetricName,
    #[serde(default)]
    pub timeseries: Vec<TimeSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricName {
    pub value: String,
    #[serde(default, rename = "localizedValue")]
    pub localized_value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    #[serde(default)]
    pub data: Vec<MetricPoint>,
}

/// One hourly data point with a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
}

impl MetricsResponse {
    /// The series for a given metric name, flattened across time series.
    pub fn points<'a>(&'a self, metric: &'a str) -> impl Iterator<Item = &'a MetricPoint> + 'a {
        self.value
            .iter()
            .filter(move |m| m.name.value == metric)
            .flat_map(|m| m.timeseries.iter())
            .flat_map(|ts| ts.data.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monitor_response_parses_mixed_aggregations() {
        let json = r#"
        {
          "value": [
            {
              "name": { "value": "IncomingMessages", "localizedValue": "Incoming Messages" },
              "timeseries": [
                {
                  "data": [
                    { "timeStamp": "2026-08-22T10:00:00Z", "total": 12.0 },
                    { "timeStamp": "2026-08-22T11:00:00Z" },
                    { "timeStamp": "2026-08-22T12:00:00Z", "total": 3.0 }
                  ]
                }
              ]
            },
            {
              "name": { "value": "ActiveConnections" },
              "timeseries": [
                {
                  "data": [
                    { "timeStamp": "2026-08-22T10:00:00Z", "average": 1.5 }
                  ]
                }
              ]
            }
          ]
        }"#;

        let response: MetricsResponse = serde_json::from_str(json).unwrap();
        let incoming: Vec<_> = response.points("IncomingMessages").collect();
        assert_eq!(incoming.len(), 3);
        assert_eq!(incoming[0].total, Some(12.0));
        assert_eq!(incoming[1].total, None);

        let active: Vec<_> = response.points("ActiveConnections").collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].average, Some(1.5));

        assert_eq!(response.points("OutgoingMessages").count(), 0);
    }

    #[test]
    fn empty_response_yields_no_points() {
        let response: MetricsResponse = serde_json::from_str(r#"{ "value": [] }"#).unwrap();
        assert_eq!(response.points("IncomingMessages").count(), 0);
    }
}
