// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use crate::config::consts::DEFAULT_LOG_FILE;
use crate::config::options::{AppOptions, ExportFormat, ExportOptions, ScrapeOptions};
use crate::core::net::HttpFetcher;
use crate::progress::{Progress, WriterProgress};

#[derive(Parser, Debug)]
#[command(name = "imgpile_scrape", version, about = "Scrape image metadata from an imgpile album")]
pub struct Args {
    /// First album page, e.g. https://imgpile.com/album/AbCdE
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output file or directory (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// No "[Info] ..." progress lines on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append log output to a file instead of stderr. Bare `--log-file` uses
    /// .store/debug.log; a custom path must be given as `--log-file=PATH`
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_LOG_FILE
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                start_url: self.url.clone(),
                progress: !self.quiet,
            },
            export: ExportOptions {
                format: self.format.into(),
                out_path: self.out.clone(),
                pretty: !self.compact,
            },
        }
    }
}

/// Parse process args and run.
pub fn run() -> crate::error::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> crate::error::Result<()> {
    crate::log::init(args.verbose, args.log_file.as_deref())?;
    let opts = args.to_options();

    let fetcher = HttpFetcher::new();
    let mut stderr = WriterProgress::new(std::io::stderr());
    let progress: Option<&mut dyn Progress> =
        if opts.scrape.progress { Some(&mut stderr) } else { None };

    let records = crate::scrape::collect_images(&fetcher, &opts.scrape.start_url, progress)?;

    match crate::file::export_records(&opts.export, &records)? {
        Some(path) => {
            info!(path = %path.display(), records = records.len(), "export written");
            if opts.scrape.progress {
                eprintln!("[Info] Wrote {} records to {}", records.len(), path.display());
            }
        }
        None => info!(records = records.len(), "export written to stdout"),
    }
    Ok(())
}
