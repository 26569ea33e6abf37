use chrono::Utc;
use clap::Parser;
use color_eyre::Result;
use eventhub_usage_reporter::{
    ReportOptions,
    ReportWriter,
    Reporter,
};
use std::path::PathBuf;
use tracing::info;
use usage_reporter_azure::AzCli;

#[derive(Parser)]
#[command(name = "eventhub-usage-reporter")]
#[command(about = "Azure Event Hubs inventory and utilization CSV reports")]
#[command(version)]
struct Cli {
    /// Directory that receives one timestamped subdirectory per run
    #[arg(long, env = "EVENTHUB_REPORT_OUTPUT_ROOT", default_value = "reports")]
    output_root: PathBuf,

    /// Days of metrics history to examine for the in-use classification
    #[arg(long, env = "EVENTHUB_REPORT_LOOKBACK_DAYS", default_value_t = 7)]
    lookback_days: u32,

    /// Never query metrics; classify purely from the entity status flag
    #[arg(long, env = "EVENTHUB_REPORT_SKIP_METRICS")]
    skip_metrics: bool,

    /// Basic report variant: inventory columns only, no usage
    /// classification and no not-in-use report
    #[arg(long)]
    basic: bool,

    /// Optional path for a JSON copy of the run summary
    #[arg(long)]
    summary_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "eventhub_usage_reporter={log_level},usage_reporter_azure={log_level}"
        ))
        .init();

    color_eyre::install()?;

    // Fatal preconditions: without the CLI and a session there is nothing
    // to report on.
    let az = AzCli::discover()?;
    let account = az.ensure_authenticated().await?;
    info!(account = %account.name, "authenticated");

    let now = Utc::now();
    let options = ReportOptions::new(cli.output_root, !cli.basic, cli.skip_metrics, cli.lookback_days, now);
    if options.extended && !options.skip_metrics {
        info!(
            start = %options.window.start.format("%Y-%m-%d %H:%M:%S UTC"),
            end = %options.window.end.format("%Y-%m-%d %H:%M:%S UTC"),
            "metrics window"
        );
    }

    let mut writer = ReportWriter::create(&options.output_root, options.extended, now)?;
    info!(path = %writer.run_dir().display(), "writing reports to");

    let summary = Reporter::new(&az, &options).run(&mut writer).await?;
    let run_dir = writer.finish()?;

    println!("{}", summary.format());

    if let Some(summary_file) = &cli.summary_file {
        std::fs::write(summary_file, serde_json::to_string_pretty(&summary)?)?;
        info!(path = %summary_file.display(), "summary exported");
    }

    info!(path = %run_dir.display(), "run complete");
    Ok(())
}
