use crate::services::fetch::{Fetcher, ReqwestFetcher};
use crate::services::log::init_logging;
use crate::tools::group::{group_by, log_report, write_report};
use crate::tools::images::{accept_all, fetch_images};
use crate::tools::table::fetch_animal_records;
use crate::RunConfig;
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "wiki_animals",
    version,
    about = "Scrape Wikipedia's list of animal names, fetch their images, group them by attribute"
)]
pub struct Cli {
    /// Download each animal's lead image into this directory
    #[arg(long, value_name = "DIR")]
    images: Option<PathBuf>,

    /// Record field to group the report by [default: "Collateral adjective"]
    #[arg(long, value_name = "FIELD")]
    group_by: Option<String>,

    /// Also write the report to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Log file, truncated on start [default: wiki_animals.log]
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset [default: debug]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print the scraped records to stdout as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Overlay the given flags on the default configuration.
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::default();
        config.image_dir = self.images;
        config.report_file = self.report;
        config.print_json = self.json;
        if let Some(field) = self.group_by {
            config.group_by = field;
        }
        if let Some(path) = self.log_file {
            config.log_file = path;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(ua) = self.user_agent {
            config.user_agent = ua;
        }
        config
    }
}

pub fn run() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_logging(&config.log_file, &config.log_level)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create async runtime")?;

    let fetcher = ReqwestFetcher::new(&config.user_agent)?;
    let result = runtime.block_on(execute(&fetcher, &config));
    if let Err(e) = &result {
        error!("run failed: {:#}", e);
    }
    result
}

/// Scrape, optionally download images, then report.
///
/// Only the table scrape can fail the run; image failures are logged and
/// skipped.
pub async fn execute(fetcher: &dyn Fetcher, config: &RunConfig) -> anyhow::Result<()> {
    let records = fetch_animal_records(fetcher)
        .await
        .context("failed to scrape the animal list")?;

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    if let Some(dir) = &config.image_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let batch = fetch_images(fetcher, &records, accept_all, dir).await;
        for path in batch.saved_paths() {
            info!("saved {}", path.display());
        }
    }

    let index = group_by(&records, &config.group_by);
    info!(
        "{} groups for {:?} across {} records",
        index.len(),
        config.group_by,
        records.len()
    );
    log_report(&index);

    if let Some(path) = &config.report_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_report(&index, &mut out)?;
        out.flush()?;
    }

    Ok(())
}
