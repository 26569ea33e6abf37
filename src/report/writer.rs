use crate::report::rows::{
    EventHubRow,
    NamespaceRow,
};
use chrono::{
    DateTime,
    Utc,
};
use csv::{
    QuoteStyle,
    WriterBuilder,
};
use eyre::{
    Context as _,
    Result,
};
use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

/// Writes the per-run CSV reports.
///
/// Every field is double-quoted with inner quotes doubled
/// ([`QuoteStyle::Always`]); headers are written up front, rows appended
/// one at a time. A hub row whose in-use verdict is `No` is duplicated
/// into the not-in-use report verbatim.
pub struct ReportWriter {
    run_dir: PathBuf,
    namespaces: csv::Writer<fs::File>,
    hubs: csv::Writer<fs::File>,
    not_in_use: Option<csv::Writer<fs::File>>,
}

impl ReportWriter {
    pub const NAMESPACES_FILE: &'static str = "namespaces.csv";
    pub const HUBS_FILE: &'static str = "eventhubs.csv";
    pub const NOT_IN_USE_FILE: &'static str = "eventhubs_not_in_use.csv";

    /// Create `<output_root>/<UTC run timestamp>/` and the report files
    /// with their header rows. The not-in-use report only exists in the
    /// extended variant.
    pub fn create(output_root: &Path, extended: bool, started: DateTime<Utc>) -> Result<Self> {
        let run_dir = output_root.join(started.format("%Y%m%d-%H%M%S").to_string());
        fs::create_dir_all(&run_dir).with_context(|| format!("failed to create {}", run_dir.display()))?;

        let mut namespaces = open_csv(&run_dir.join(Self::NAMESPACES_FILE))?;
        namespaces.write_record(NamespaceRow::HEADER)?;

        let mut hubs = open_csv(&run_dir.join(Self::HUBS_FILE))?;
        hubs.write_record(EventHubRow::header(extended))?;

        let not_in_use = if extended {
            let mut writer = open_csv(&run_dir.join(Self::NOT_IN_USE_FILE))?;
            writer.write_record(EventHubRow::header(true))?;
            Some(writer)
        } else {
            None
        };

        Ok(Self {
            run_dir,
            namespaces,
            hubs,
            not_in_use,
        })
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    pub fn write_namespace(&mut self, row: &NamespaceRow) -> Result<()> {
        self.namespaces.write_record(row.record())?;
        Ok(())
    }

    pub fn write_hub(&mut self, row: &EventHubRow) -> Result<()> {
        let record = row.record();
        self.hubs.write_record(&record)?;
        if row.in_use() == Some(false) {
            if let Some(not_in_use) = &mut self.not_in_use {
                not_in_use.write_record(&record)?;
            }
        }
        Ok(())
    }

    /// Flush everything and hand back the run directory.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.namespaces.flush()?;
        self.hubs.flush()?;
        if let Some(not_in_use) = &mut self.not_in_use {
            not_in_use.flush()?;
        }
        Ok(self.run_dir)
    }
}

fn open_csv(path: &Path) -> Result<csv::Writer<fs::File>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))
}
