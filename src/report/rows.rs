//! Fixed-order CSV row types.
//!
//! Column order is part of the report contract; the `HEADER` constants and
//! the `record()` methods must stay in lockstep. Absent values render as
//! empty cells so every row keeps the header's column count.

use crate::usage::HubUsage;
use chrono::{
    DateTime,
    Utc,
};
use std::collections::BTreeMap;
use usage_reporter_azure::models::{
    EhNamespace,
    EventHub,
    Subscription,
};

/// One row of `namespaces.csv`.
#[derive(Debug, Clone)]
pub struct NamespaceRow {
    pub subscription_id: String,
    pub subscription_name: String,
    pub resource_group: String,
    pub namespace_name: String,
    pub namespace_id: String,
    pub location: String,
    pub sku_name: String,
    pub sku_tier: String,
    pub sku_capacity: String,
    pub status: String,
    pub provisioning_state: String,
    pub kafka_enabled: String,
    pub zone_redundant: String,
    pub auto_inflate_enabled: String,
    pub maximum_throughput_units: String,
    pub tags_json: String,
}

impl NamespaceRow {
    pub const HEADER: [&'static str; 16] = [
        "SubscriptionId",
        "SubscriptionName",
        "ResourceGroup",
        "NamespaceName",
        "NamespaceId",
        "Location",
        "SkuName",
        "SkuTier",
        "SkuCapacity",
        "Status",
        "ProvisioningState",
        "KafkaEnabled",
        "ZoneRedundant",
        "AutoInflateEnabled",
        "MaximumThroughputUnits",
        "TagsJson",
    ];

    pub fn new(subscription: &Subscription, namespace: &EhNamespace) -> Self {
        let sku = namespace.sku.as_ref();
        Self {
            subscription_id: subscription.id.clone(),
            subscription_name: subscription.name.clone(),
            resource_group: namespace.resource_group().unwrap_or_default().to_string(),
            namespace_name: namespace.name.clone(),
            namespace_id: namespace.id.clone(),
            location: opt_str(&namespace.location),
            sku_name: opt_str(&sku.and_then(|s| s.name.clone())),
            sku_tier: opt_str(&sku.and_then(|s| s.tier.clone())),
            sku_capacity: opt_int(sku.and_then(|s| s.capacity)),
            status: opt_str(&namespace.status),
            provisioning_state: opt_str(&namespace.provisioning_state),
            kafka_enabled: opt_bool(namespace.kafka_enabled),
            zone_redundant: opt_bool(namespace.zone_redundant),
            auto_inflate_enabled: opt_bool(namespace.is_auto_inflate_enabled),
            maximum_throughput_units: opt_int(namespace.maximum_throughput_units),
            tags_json: tags_json(&namespace.tags),
        }
    }

    pub fn record(&self) -> Vec<String> {
        vec![
            self.subscription_id.clone(),
            self.subscription_name.clone(),
            self.resource_group.clone(),
            self.namespace_name.clone(),
            self.namespace_id.clone(),
            self.location.clone(),
            self.sku_name.clone(),
            self.sku_tier.clone(),
            self.sku_capacity.clone(),
            self.status.clone(),
            self.provisioning_state.clone(),
            self.kafka_enabled.clone(),
            self.zone_redundant.clone(),
            self.auto_inflate_enabled.clone(),
            self.maximum_throughput_units.clone(),
            self.tags_json.clone(),
        ]
    }
}

/// One row of `eventhubs.csv` (and, when not in use, of
/// `eventhubs_not_in_use.csv`). `usage` is present in the extended report
/// variant only.
#[derive(Debug, Clone)]
pub struct EventHubRow {
    pub subscription_id: String,
    pub subscription_name: String,
    pub resource_group: String,
    pub namespace_name: String,
    pub namespace_id: String,
    pub event_hub_name: String,
    pub event_hub_id: String,
    pub location: String,
    pub status: String,
    pub partition_count: String,
    pub message_retention_in_days: String,
    pub capture_enabled: String,
    pub capture_interval_seconds: String,
    pub capture_size_limit_bytes: String,
    pub capture_encoding: String,
    pub capture_skip_empty_archives: String,
    pub capture_destination_name: String,
    pub capture_storage_account_resource_id: String,
    pub capture_blob_container: String,
    pub capture_archive_name_format: String,
    pub usage: Option<HubUsage>,
}

impl EventHubRow {
    pub const BASIC_HEADER: [&'static str; 20] = [
        "SubscriptionId",
        "SubscriptionName",
        "ResourceGroup",
        "NamespaceName",
        "NamespaceId",
        "EventHubName",
        "EventHubId",
        "Location",
        "Status",
        "PartitionCount",
        "MessageRetentionInDays",
        "CaptureEnabled",
        "CaptureIntervalSeconds",
        "CaptureSizeLimitBytes",
        "CaptureEncoding",
        "CaptureSkipEmptyArchives",
        "CaptureDestinationName",
        "CaptureStorageAccountResourceId",
        "CaptureBlobContainer",
        "CaptureArchiveNameFormat",
    ];

    pub const USAGE_HEADER: [&'static str; 6] = [
        "IncomingMessagesTotal",
        "OutgoingMessagesTotal",
        "ActiveConnectionsMaxAvg",
        "LastNonZeroUtc",
        "MetricsStatus",
        "InUse",
    ];

    pub fn header(extended: bool) -> Vec<&'static str> {
        let mut header = Self::BASIC_HEADER.to_vec();
        if extended {
            header.extend(Self::USAGE_HEADER);
        }
        header
    }

    pub fn new(
        subscription: &Subscription,
        namespace: &EhNamespace,
        hub: &EventHub,
        usage: Option<HubUsage>,
    ) -> Self {
        let capture = hub.capture_description.as_ref();
        let destination = capture.and_then(|c| c.destination.as_ref());
        Self {
            subscription_id: subscription.id.clone(),
            subscription_name: subscription.name.clone(),
            resource_group: namespace.resource_group().unwrap_or_default().to_string(),
            namespace_name: namespace.name.clone(),
            namespace_id: namespace.id.clone(),
            event_hub_name: hub.name.clone(),
            event_hub_id: hub.id.clone(),
            // Hub describe payloads may omit the location; the namespace
            // location applies to all hubs inside it.
            location: opt_str(&hub.location.clone().or_else(|| namespace.location.clone())),
            status: opt_str(&hub.status),
            partition_count: opt_int(hub.partition_count),
            message_retention_in_days: opt_int(hub.message_retention_in_days),
            capture_enabled: opt_bool(capture.and_then(|c| c.enabled)),
            capture_interval_seconds: opt_int(capture.and_then(|c| c.interval_in_seconds)),
            capture_size_limit_bytes: opt_int(capture.and_then(|c| c.size_limit_in_bytes)),
            capture_encoding: opt_str(&capture.and_then(|c| c.encoding.clone())),
            capture_skip_empty_archives: opt_bool(capture.and_then(|c| c.skip_empty_archives)),
            capture_destination_name: opt_str(&destination.and_then(|d| d.name.clone())),
            capture_storage_account_resource_id: opt_str(&destination.and_then(|d| d.storage_account_resource_id.clone())),
            capture_blob_container: opt_str(&destination.and_then(|d| d.blob_container.clone())),
            capture_archive_name_format: opt_str(&destination.and_then(|d| d.archive_name_format.clone())),
            usage,
        }
    }

    /// `Some(false)` marks a row for the not-in-use report; `None` means
    /// the basic variant carries no verdict at all.
    pub fn in_use(&self) -> Option<bool> {
        self.usage.as_ref().map(|u| u.in_use)
    }

    pub fn record(&self) -> Vec<String> {
        let mut record = vec![
            self.subscription_id.clone(),
            self.subscription_name.clone(),
            self.resource_group.clone(),
            self.namespace_name.clone(),
            self.namespace_id.clone(),
            self.event_hub_name.clone(),
            self.event_hub_id.clone(),
            self.location.clone(),
            self.status.clone(),
            self.partition_count.clone(),
            self.message_retention_in_days.clone(),
            self.capture_enabled.clone(),
            self.capture_interval_seconds.clone(),
            self.capture_size_limit_bytes.clone(),
            self.capture_encoding.clone(),
            self.capture_skip_empty_archives.clone(),
            self.capture_destination_name.clone(),
            self.capture_storage_account_resource_id.clone(),
            self.capture_blob_container.clone(),
            self.capture_archive_name_format.clone(),
        ];
        if let Some(usage) = &self.usage {
            record.push(opt_float(usage.incoming_total));
            record.push(opt_float(usage.outgoing_total));
            record.push(opt_float(usage.active_maxavg));
            record.push(opt_utc(usage.last_nonzero));
            record.push(usage.metrics_status.as_str().to_string());
            record.push(if usage.in_use { "Yes" } else { "No" }.to_string());
        }
        record
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_bool(value: Option<bool>) -> String {
    value.map(|b| b.to_string()).unwrap_or_default()
}

fn opt_int(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn opt_float(value: Option<f64>) -> String {
    value.map(|f| f.to_string()).unwrap_or_default()
}

fn opt_utc(value: Option<DateTime<Utc>>) -> String {
    value.map(|ts| ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()).unwrap_or_default()
}

fn tags_json(tags: &Option<BTreeMap<String, String>>) -> String {
    tags.as_ref()
        .and_then(|t| serde_json::to_string(t).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::HubUsage;
    use pretty_assertions::assert_eq;

    fn subscription() -> Subscription {
        Subscription {
            id: "0000".into(),
            name: "prod".into(),
            state: "Enabled".into(),
        }
    }

    fn namespace() -> EhNamespace {
        serde_json::from_str(
            r#"{
                "id": "/subscriptions/0000/resourceGroups/rg-msg/providers/Microsoft.EventHub/namespaces/ns",
                "name": "ns",
                "location": "westeurope",
                "tags": { "env": "prod" }
            }"#,
        )
        .unwrap()
    }

    fn hub() -> EventHub {
        serde_json::from_str(
            r#"{
                "id": "/subscriptions/0000/resourceGroups/rg-msg/providers/Microsoft.EventHub/namespaces/ns/eventhubs/hub",
                "name": "hub",
                "status": "Active",
                "partitionCount": 2,
                "messageRetentionInDays": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn namespace_record_matches_header_width() {
        let row = NamespaceRow::new(&subscription(), &namespace());
        let record = row.record();
        assert_eq!(record.len(), NamespaceRow::HEADER.len());
        assert_eq!(record[2], "rg-msg");
        assert_eq!(record[15], r#"{"env":"prod"}"#);
        // Absent attributes render as empty cells, not omitted columns.
        assert_eq!(record[6], "");
        assert_eq!(record[11], "");
    }

    #[test]
    fn basic_hub_record_matches_basic_header_width() {
        let row = EventHubRow::new(&subscription(), &namespace(), &hub(), None);
        let record = row.record();
        assert_eq!(record.len(), EventHubRow::BASIC_HEADER.len());
        assert_eq!(record.len(), EventHubRow::header(false).len());
        assert_eq!(row.in_use(), None);
        // Location falls back to the namespace.
        assert_eq!(record[7], "westeurope");
        // Capture never configured: all capture cells empty.
        assert_eq!(&record[11..20], &[""; 9]);
    }

    #[test]
    fn extended_hub_record_appends_usage_columns() {
        let usage = HubUsage {
            metrics_status: crate::usage::MetricsStatus::Ok,
            incoming_total: Some(5.0),
            outgoing_total: Some(0.0),
            active_maxavg: Some(1.5),
            last_nonzero: Some("2026-08-25T13:00:00Z".parse().unwrap()),
            in_use: true,
        };
        let row = EventHubRow::new(&subscription(), &namespace(), &hub(), Some(usage));
        let record = row.record();
        assert_eq!(record.len(), EventHubRow::header(true).len());
        assert_eq!(&record[20..], &["5", "0", "1.5", "2026-08-25T13:00:00Z", "OK", "Yes"]);
    }

    #[test]
    fn status_fallback_leaves_numeric_cells_empty() {
        let row = EventHubRow::new(&subscription(), &namespace(), &hub(), Some(HubUsage::unavailable(true)));
        let record = row.record();
        assert_eq!(&record[20..], &["", "", "", "", "Unavailable", "Yes"]);
    }
}
