use crate::{
    api::AzureApi,
    metrics::{
        MetricsResponse,
        ACTIVE_CONNECTIONS,
        INCOMING_MESSAGES,
        OUTGOING_MESSAGES,
    },
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
use eyre::{
    Context as _,
    Result,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
};
use std::{
    future::Future,
    path::PathBuf,
    pin::Pin,
};
use tokio::process::Command;

/// Identity reported by `az account show`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub user: Option<AccountUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountUser {
    pub name: String,
}

/// Production [`AzureApi`] implementation backed by the `az` executable.
pub struct AzCli {
    program: PathBuf,
}

impl AzCli {
    /// Locate `az` on `PATH`. Failing this is a fatal precondition: the
    /// reporter cannot do anything without the Azure CLI.
    pub fn discover() -> Result<Self> {
        let program = which::which("az").context("azure cli (`az`) not found on PATH")?;
        debug!(?program, "found az at");
        Ok(Self { program })
    }

    /// Verify there is an authenticated session before any output is
    /// produced. `az account show` fails when the caller never logged in
    /// or the token expired.
    pub async fn ensure_authenticated(&self) -> Result<Account> {
        let account: Account = self
            .run_json(&["account", "show"])
            .await
            .context("not authenticated; run `az login` first")?;
        if let Some(user) = &account.user {
            debug!(account = %account.name, user = %user.name, "authenticated");
        }
        Ok(account)
    }

    /// Run `az <args> -o json` to completion and parse stdout.
    async fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        trace!(?args, "az");
        let output = Command::new(&self.program)
            .args(args)
            .args(["-o", "json"])
            .output()
            .await
            .with_context(|| format!("failed to spawn az {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(eyre::eyre!(
                "az {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            ));
        }

        serde_json::from_slice(&output.stdout).with_context(|| format!("unexpected output from az {}", args.join(" ")))
    }
}

impl AzureApi for AzCli {
    fn list_subscriptions(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Subscription>>> + Send + '_>> {
        Box::pin(async move { self.run_json(&["account", "list", "--all"]).await })
    }

    fn list_namespaces<'a>(
        &'a self,
        subscription: &'a Subscription,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<EhNamespace>>> + Send + 'a>> {
        Box::pin(async move {
            self.run_json(&["eventhubs", "namespace", "list", "--subscription", &subscription.id])
                .await
        })
    }

    fn list_event_hubs<'a>(
        &'a self,
        subscription: &'a Subscription,
        resource_group: &'a str,
        namespace: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + 'a>> {
        Box::pin(async move {
            // The listing is only used for names; the full configuration
            // comes from the per-hub describe call.
            #[derive(Deserialize)]
            struct HubRef {
                name: String,
            }

            let hubs: Vec<HubRef> = self
                .run_json(&[
                    "eventhubs",
                    "eventhub",
                    "list",
                    "--subscription",
                    &subscription.id,
                    "--resource-group",
                    resource_group,
                    "--namespace-name",
                    namespace,
                ])
                .await?;
            Ok(hubs.into_iter().map(|h| h.name).collect())
        })
    }

    fn get_event_hub<'a>(
        &'a self,
        subscription: &'a Subscription,
        resource_group: &'a str,
        namespace: &'a str,
        hub: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EventHub>>> + Send + 'a>> {
        Box::pin(async move {
            self.run_json(&[
                "eventhubs",
                "eventhub",
                "show",
                "--subscription",
                &subscription.id,
                "--resource-group",
                resource_group,
                "--namespace-name",
                namespace,
                "--name",
                hub,
            ])
            .await
        })
    }

    fn query_hub_metrics<'a>(
        &'a self,
        subscription: &'a Subscription,
        hub_resource_id: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Pin<Box<dyn Future<Output = Result<MetricsResponse>> + Send + 'a>> {
        Box::pin(async move {
            let start = start.format("%Y-%m-%dT%H:%M:%SZ").to_string();
            let end = end.format("%Y-%m-%dT%H:%M:%SZ").to_string();
            self.run_json(&[
                "monitor",
                "metrics",
                "list",
                "--subscription",
                &subscription.id,
                "--resource",
                hub_resource_id,
                "--metric",
                INCOMING_MESSAGES,
                OUTGOING_MESSAGES,
                ACTIVE_CONNECTIONS,
                "--start-time",
                &start,
                "--end-time",
                &end,
                "--interval",
                "PT1H",
                "--aggregation",
                "Total",
                "Average",
            ])
            .await
        })
    }
}
