//! # Event Hubs Usage Reporter
//!
//! Inventory and utilization CSV reports for Azure Event Hubs by:
//!
//! 1. Enumerating all enabled subscriptions visible to the caller
//! 2. Listing every namespace and every hub within each
//! 3. Optionally querying recent traffic metrics per hub
//! 4. Classifying each hub as in-use or idle
//! 5. Writing `namespaces.csv`, `eventhubs.csv` and (extended variant)
//!    `eventhubs_not_in_use.csv` into a timestamped run directory
//!
//! ## Architecture
//!
//! The pipeline is strictly sequential, one item at a time:
//!
//! - **`config`**: run options (output root, report variant, metrics
//!   window) derived from flags and environment
//! - **`inventory`**: the subscriptions → namespaces → hubs walk with
//!   best-effort degradation on per-scope failures
//! - **`usage`**: pure aggregation formulas and the in-use classifier
//! - **`report`**: fixed-order CSV rows and the per-run writer
//! - **`summary`**: end-of-run counters and their terminal table
//!
//! Azure itself sits behind the `AzureApi` trait of the
//! `usage-reporter-azure` crate, so everything here runs against an
//! in-memory stub in tests.
//!
//! ## Usage
//!
//! ```bash
//! # Extended report with a 7 day metrics window
//! eventhub-usage-reporter
//!
//! # Inventory only, no metrics traffic
//! eventhub-usage-reporter --basic
//!
//! # Extended columns, but classify from entity status alone
//! eventhub-usage-reporter --skip-metrics
//! ```

pub mod config;
pub mod inventory;
pub mod report;
pub mod summary;
pub mod usage;

pub use config::ReportOptions;
pub use inventory::Reporter;
pub use report::ReportWriter;
pub use summary::RunSummary;
