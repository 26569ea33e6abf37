//! # Azure Collaborator Boundary
//!
//! Everything that talks to Azure lives in this crate. The rest of the
//! reporter only sees the [`AzureApi`] trait and plain serde models:
//!
//! - **`cli`**: [`AzCli`], the production implementation driving the `az`
//!   executable as a child process (`-o json`, parsed with serde)
//! - **`api`**: the [`AzureApi`] trait seam, so the pipeline can run
//!   against an in-memory stub in tests
//! - **`models`**: subscriptions, namespaces, event hubs, capture config
//! - **`metrics`**: the `az monitor metrics list` response shape
//!
//! Subscription scope is always passed explicitly per call. No command
//! issued here mutates the ambient `az account` selection.

#[macro_use]
extern crate tracing;

pub mod api;
pub mod cli;
pub mod metrics;
pub mod models;

pub use api::AzureApi;
pub use cli::AzCli;
pub use metrics::{
    Metric,
    MetricPoint,
    MetricsResponse,
    ACTIVE_CONNECTIONS,
    INCOMING_MESSAGES,
    OUTGOING_MESSAGES,
};
pub use models::{
    CaptureDescription,
    CaptureDestination,
    EhNamespace,
    EventHub,
    Sku,
    Subscription,
};
