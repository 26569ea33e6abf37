use comfy_table::{
    presets,
    Attribute,
    Cell,
    ContentArrangement,
    Table,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Counters accumulated over one run, shown as a terminal table at the
/// end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub subscriptions: usize,
    pub namespaces: usize,
    pub namespace_listing_failures: usize,
    pub hub_listing_failures: usize,
    pub event_hubs: usize,
    pub hubs_skipped: usize,
    pub in_use: usize,
    pub not_in_use: usize,
    pub metrics_unavailable: usize,
}

impl RunSummary {
    pub fn format(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Inventory").add_attribute(Attribute::Bold),
                Cell::new("Count").add_attribute(Attribute::Bold),
            ]);

        table.add_row(vec![Cell::new("Subscriptions"), Cell::new(self.subscriptions)]);
        table.add_row(vec![Cell::new("Namespaces"), Cell::new(self.namespaces)]);
        table.add_row(vec![Cell::new("Event hubs"), Cell::new(self.event_hubs)]);
        table.add_row(vec![Cell::new("  in use"), Cell::new(self.in_use)]);
        table.add_row(vec![Cell::new("  not in use"), Cell::new(self.not_in_use)]);
        table.add_row(vec![Cell::new("Hubs skipped (describe failed)"), Cell::new(self.hubs_skipped)]);
        table.add_row(vec![
            Cell::new("Namespace listings degraded"),
            Cell::new(self.namespace_listing_failures),
        ]);
        table.add_row(vec![
            Cell::new("Hub listings degraded"),
            Cell::new(self.hub_listing_failures),
        ]);
        table.add_row(vec![
            Cell::new("Metrics unavailable"),
            Cell::new(self.metrics_unavailable),
        ]);
        table
    }
}
