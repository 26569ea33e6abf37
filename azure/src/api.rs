use crate::{
    metrics::MetricsResponse,
    models::{
        EhNamespace,
        EventHub,
        Subscription,
    },
};
use chrono::{
    DateTime,
    Utc,
};
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};

/// Trait over the Azure listing / describe / metrics calls.
///
/// Every method takes the subscription scope explicitly; implementations
/// must not rely on (or mutate) an ambient account selection. Errors are
/// returned as-is, the caller decides whether a failure is fatal, degrades
/// to an empty scope, or skips a single item.
pub trait AzureApi {
    /// All subscriptions visible to the caller, regardless of state.
    fn list_subscriptions(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Subscription>>> + Send + '_>>;

    /// Event Hubs namespaces in one subscription.
    fn list_namespaces<'a>(
        &'a self,
        subscription: &'a Subscription,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<EhNamespace>>> + Send + 'a>>;

    /// Names of the hubs in one namespace.
    fn list_event_hubs<'a>(
        &'a self,
        subscription: &'a Subscription,
        resource_group: &'a str,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + 'a>>;

    /// Full configuration of one hub. `Ok(None)` means the hub vanished
    /// between listing and describing.
    fn get_event_hub<'a>(
        &'a self,
        subscription: &'a Subscription,
        resource_group: &'a str,
        namespace: &'a str,
        hub: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EventHub>>> + Send + 'a>>;

    /// Traffic metrics for one hub resource over `[start, end)` at hourly
    /// granularity, with Total and Average aggregations.
    fn query_hub_metrics<'a>(
        &'a self,
        subscription: &'a Subscription,
        hub_resource_id: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Pin<Box<dyn Future<Output = Result<MetricsResponse>> + Send + 'a>>;
}
