//! The sequential inventory pipeline.
//!
//! Subscriptions → namespaces → hubs → (optional metrics) →
//! classification → CSV rows, one item at a time, in listing order. Only
//! the subscription listing is fatal; every narrower failure degrades to
//! an empty scope or a skipped item and the run completes.

use crate::{
    config::ReportOptions,
    report::{
        EventHubRow,
        NamespaceRow,
        ReportWriter,
    },
    summary::RunSummary,
    usage::{
        HubUsage,
        MetricsStatus,
    },
};
use eyre::{
    Context as _,
    Result,
};
use tracing::{
    info,
    warn,
};
use usage_reporter_azure::{
    models::{
        EhNamespace,
        EventHub,
        Subscription,
    },
    AzureApi,
};

pub struct Reporter<'a, A: AzureApi> {
    api: &'a A,
    options: &'a ReportOptions,
}

impl<'a, A: AzureApi> Reporter<'a, A> {
    pub fn new(api: &'a A, options: &'a ReportOptions) -> Self {
        Self { api, options }
    }

    /// Walk the full inventory and write rows through `writer`.
    pub async fn run(&self, writer: &mut ReportWriter) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let subscriptions = self
            .api
            .list_subscriptions()
            .await
            .context("failed to list subscriptions")?;

        for subscription in subscriptions.iter().filter(|s| s.is_enabled()) {
            summary.subscriptions += 1;
            info!(subscription = %subscription.name, "scanning subscription");
            self.scan_subscription(subscription, writer, &mut summary).await?;
        }

        Ok(summary)
    }

    async fn scan_subscription(
        &self,
        subscription: &Subscription,
        writer: &mut ReportWriter,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let namespaces = match self.api.list_namespaces(subscription).await {
            Ok(namespaces) => namespaces,
            Err(err) => {
                warn!(subscription = %subscription.name, %err, "namespace listing failed; continuing without");
                summary.namespace_listing_failures += 1;
                Vec::new()
            }
        };

        for namespace in &namespaces {
            summary.namespaces += 1;
            writer.write_namespace(&NamespaceRow::new(subscription, namespace))?;
            self.scan_namespace(subscription, namespace, writer, summary).await?;
        }
        Ok(())
    }

    async fn scan_namespace(
        &self,
        subscription: &Subscription,
        namespace: &EhNamespace,
        writer: &mut ReportWriter,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let Some(resource_group) = namespace.resource_group() else {
            warn!(namespace = %namespace.name, "namespace has no resource group; skipping its hubs");
            return Ok(());
        };
        let resource_group = resource_group.to_string();

        let hubs = match self.api.list_event_hubs(subscription, &resource_group, &namespace.name).await {
            Ok(hubs) => hubs,
            Err(err) => {
                warn!(namespace = %namespace.name, %err, "hub listing failed; continuing without");
                summary.hub_listing_failures += 1;
                Vec::new()
            }
        };

        for hub_name in &hubs {
            let hub = match self
                .api
                .get_event_hub(subscription, &resource_group, &namespace.name, hub_name)
                .await
            {
                Ok(Some(hub)) => hub,
                Ok(None) => {
                    warn!(hub = %hub_name, "hub describe returned nothing; skipping");
                    summary.hubs_skipped += 1;
                    continue;
                }
                Err(err) => {
                    warn!(hub = %hub_name, %err, "hub describe failed; skipping");
                    summary.hubs_skipped += 1;
                    continue;
                }
            };

            let usage = if self.options.extended {
                Some(self.classify(subscription, &hub).await)
            } else {
                None
            };
            if let Some(usage) = &usage {
                if usage.metrics_status == MetricsStatus::Unavailable {
                    summary.metrics_unavailable += 1;
                }
                if usage.in_use {
                    summary.in_use += 1;
                } else {
                    summary.not_in_use += 1;
                }
            }

            writer.write_hub(&EventHubRow::new(subscription, namespace, &hub, usage))?;
            summary.event_hubs += 1;
        }
        Ok(())
    }

    /// Usage verdict for one hub, extended variant only.
    async fn classify(&self, subscription: &Subscription, hub: &EventHub) -> HubUsage {
        if self.options.skip_metrics {
            return HubUsage::skipped(hub.is_status_active());
        }

        let window = self.options.window;
        match self
            .api
            .query_hub_metrics(subscription, &hub.id, window.start, window.end)
            .await
        {
            Ok(response) => HubUsage::from_metrics(&response),
            Err(err) => {
                warn!(hub = %hub.name, %err, "metrics unavailable; classifying from status");
                HubUsage::unavailable(hub.is_status_active())
            }
        }
    }
}
