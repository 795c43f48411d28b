use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::ConverterConfig;
use crate::converter::convert_all_files;
use crate::utils::init_logging;

#[derive(Parser, Debug)]
#[command(name = "dump-converter")]
#[command(version = "0.1.0")]
#[command(about = "Convert tab-separated dump files into JSON arrays", long_about = None)]
pub struct Cli {
    /// Directory containing the .txt dump files
    #[arg(long, value_name = "DIR")]
    pub unprocessed_dir: Option<PathBuf>,

    /// Directory that receives the output_*.json files
    #[arg(long, value_name = "DIR")]
    pub processed_dir: Option<PathBuf>,

    /// Maximum number of lines read from each file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub row_limit: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults overridden by whichever flags were given
    pub fn to_config(&self) -> Result<ConverterConfig> {
        let mut config = ConverterConfig::default();
        if let Some(dir) = &self.unprocessed_dir {
            config.unprocessed_dir = dir.clone();
        }
        if let Some(dir) = &self.processed_dir {
            config.processed_dir = dir.clone();
        }
        if let Some(limit) = self.row_limit {
            config.row_limit = usize::try_from(limit).context("Row limit too large")?;
        }
        Ok(config)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config()?;
    let report = convert_all_files(&config).with_context(|| {
        format!(
            "Failed to convert dumps from {} to {}",
            config.unprocessed_dir.display(),
            config.processed_dir.display()
        )
    })?;

    if report.has_failures() {
        bail!("{} of {} files failed to convert", report.failed.len(), report.file_count());
    }

    Ok(())
}
