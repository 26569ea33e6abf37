//! CSV report output: fixed-order row types and the per-run writer.

pub mod rows;
pub mod writer;

pub use rows::{
    EventHubRow,
    NamespaceRow,
};
pub use writer::ReportWriter;
