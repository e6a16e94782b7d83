// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{consts::{REQUEST_PAUSE_MS, URL_TEMPLATE}, options::{Delim, RunOptions}};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delim {
    fn from(f: Format) -> Self {
        match f { Format::Csv => Delim::Csv, Format::Tsv => Delim::Tsv }
    }
}

/// Fill a NIF spreadsheet with company name and CAE from einforma.pt
#[derive(Debug, Parser)]
#[command(name = "einforma-cli", version, about, long_about = None)]
pub struct Args {
    /// Input table; must have a NIF column
    pub input: PathBuf,

    /// Output table; overwritten if it exists
    pub output: PathBuf,

    /// Pause before every request, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Field separator of both input and output
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub delimiter: Format,

    /// Lookup URL; `{nif}` is replaced by the identifier
    #[arg(long, default_value = URL_TEMPLATE)]
    pub url_template: String,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// No progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions::new(&self.input, &self.output)
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_format(self.delimiter.into());
        opts.client.url_template = self.url_template.clone();
        opts
    }
}
