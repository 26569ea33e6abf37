//! Serde models for the `az` JSON payloads we consume.
//!
//! Azure leaves most attributes nullable, so nearly every field is an
//! `Option`: an absent field must stay distinguishable from a
//! present-but-empty one all the way into the CSV (absent renders as an
//! empty cell).

use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeMap;

/// One entry of `az account list --all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub state: String,
}

impl Subscription {
    /// Only subscriptions in this lifecycle state are reported on.
    pub const ENABLED: &'static str = "Enabled";

    pub fn is_enabled(&self) -> bool {
        self.state == Self::ENABLED
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub name: Option<String>,
    pub tier: Option<String>,
    pub capacity: Option<i64>,
}

/// One entry of `az eventhubs namespace list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EhNamespace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub resource_group: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sku: Option<Sku>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provisioning_state: Option<String>,
    #[serde(default)]
    pub kafka_enabled: Option<bool>,
    #[serde(default)]
    pub zone_redundant: Option<bool>,
    #[serde(default)]
    pub is_auto_inflate_enabled: Option<bool>,
    #[serde(default)]
    pub maximum_throughput_units: Option<i64>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
}

impl EhNamespace {
    /// Resource group, extracted from the resource id when the listing
    /// omitted the dedicated field.
    pub fn resource_group(&self) -> Option<&str> {
        if let Some(rg) = self.resource_group.as_deref() {
            return Some(rg);
        }
        resource_group_from_id(&self.id)
    }
}

/// Capture archival destination (storage account / container / name format).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDestination {
    pub name: Option<String>,
    pub storage_account_resource_id: Option<String>,
    pub blob_container: Option<String>,
    pub archive_name_format: Option<String>,
}

/// Capture configuration of a hub. Only present when capture was ever
/// configured; all fields nullable within that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDescription {
    pub enabled: Option<bool>,
    pub interval_in_seconds: Option<i64>,
    pub size_limit_in_bytes: Option<i64>,
    pub encoding: Option<String>,
    pub skip_empty_archives: Option<bool>,
    #[serde(default)]
    pub destination: Option<CaptureDestination>,
}

/// Full hub configuration from `az eventhubs eventhub show`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHub {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub partition_count: Option<i64>,
    #[serde(default)]
    pub message_retention_in_days: Option<i64>,
    #[serde(default)]
    pub capture_description: Option<CaptureDescription>,
}

impl EventHub {
    /// Entity status literal that counts as "active" for the
    /// status-based in-use fallback.
    pub const STATUS_ACTIVE: &'static str = "Active";

    pub fn is_status_active(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_ACTIVE)
    }
}

/// `/subscriptions/<id>/resourceGroups/<rg>/...` → `<rg>`
fn resource_group_from_id(id: &str) -> Option<&str> {
    let mut segments = id.split('/').skip_while(|s| !s.eq_ignore_ascii_case("resourceGroups"));
    segments.next()?;
    segments.next().filter(|rg| !rg.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn namespace_listing_parses_with_sparse_fields() {
        let json = r#"
        [
          {
            "id": "/subscriptions/0000/resourceGroups/rg-msg/providers/Microsoft.EventHub/namespaces/ns-prod",
            "name": "ns-prod",
            "location": "westeurope",
            "sku": { "name": "Standard", "tier": "Standard", "capacity": 2 },
            "status": "Active",
            "provisioningState": "Succeeded",
            "kafkaEnabled": true,
            "zoneRedundant": false,
            "isAutoInflateEnabled": true,
            "maximumThroughputUnits": 10,
            "tags": { "env": "prod", "owner": "messaging" }
          },
          {
            "id": "/subscriptions/0000/resourceGroups/rg-dev/providers/Microsoft.EventHub/namespaces/ns-dev",
            "name": "ns-dev"
          }
        ]"#;

        let namespaces: Vec<EhNamespace> = serde_json::from_str(json).unwrap();
        assert_eq!(namespaces.len(), 2);

        let prod = &namespaces[0];
        assert_eq!(prod.resource_group(), Some("rg-msg"));
        assert_eq!(prod.sku.as_ref().unwrap().capacity, Some(2));
        assert_eq!(prod.kafka_enabled, Some(true));
        assert_eq!(prod.tags.as_ref().unwrap()["env"], "prod");

        let dev = &namespaces[1];
        assert_eq!(dev.resource_group(), Some("rg-dev"));
        assert!(dev.sku.is_none());
        assert_eq!(dev.status, None);
        assert_eq!(dev.maximum_throughput_units, None);
    }

    #[test]
    fn event_hub_show_parses_capture_description() {
        let json = r#"
        {
          "id": "/subscriptions/0000/resourceGroups/rg-msg/providers/Microsoft.EventHub/namespaces/ns-prod/eventhubs/telemetry",
          "name": "telemetry",
          "status": "Active",
          "partitionCount": 4,
          "messageRetentionInDays": 7,
          "captureDescription": {
            "enabled": true,
            "intervalInSeconds": 300,
            "sizeLimitInBytes": 314572800,
            "encoding": "Avro",
            "skipEmptyArchives": true,
            "destination": {
              "name": "EventHubArchive.AzureBlockBlob",
              "storageAccountResourceId": "/subscriptions/0000/resourceGroups/rg-msg/providers/Microsoft.Storage/storageAccounts/archive",
              "blobContainer": "capture",
              "archiveNameFormat": "{Namespace}/{EventHub}/{PartitionId}"
            }
          }
        }"#;

        let hub: EventHub = serde_json::from_str(json).unwrap();
        assert!(hub.is_status_active());
        assert_eq!(hub.partition_count, Some(4));

        let capture = hub.capture_description.unwrap();
        assert_eq!(capture.enabled, Some(true));
        assert_eq!(capture.interval_in_seconds, Some(300));
        let destination = capture.destination.unwrap();
        assert_eq!(destination.blob_container.as_deref(), Some("capture"));
    }

    #[test]
    fn hub_without_capture_stays_absent() {
        let json = r#"{ "id": "/x/y", "name": "bare", "status": "Disabled" }"#;
        let hub: EventHub = serde_json::from_str(json).unwrap();
        assert!(!hub.is_status_active());
        assert!(hub.capture_description.is_none());
        assert_eq!(hub.partition_count, None);
    }

    #[test]
    fn disabled_subscriptions_are_detected() {
        let enabled = Subscription {
            id: "0000".into(),
            name: "prod".into(),
            state: "Enabled".into(),
        };
        let expired = Subscription {
            id: "0001".into(),
            name: "old".into(),
            state: "Disabled".into(),
        };
        assert!(enabled.is_enabled());
        assert!(!expired.is_enabled());
    }

    #[test]
    fn resource_group_parsed_from_id_case_insensitively() {
        assert_eq!(
            resource_group_from_id("/subscriptions/0/resourcegroups/RG-Lower/providers/x"),
            Some("RG-Lower")
        );
        assert_eq!(resource_group_from_id("/subscriptions/0"), None);
    }
}
