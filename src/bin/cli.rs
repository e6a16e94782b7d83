// src/bin/cli.rs
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use einforma_scrape::{cli::Args, log, pipeline, progress::Progress};

/// Progress bar on stderr; log lines go above it.
struct CliProgress {
    bar: Option<ProgressBar>,
}

impl CliProgress {
    fn new(quiet: bool) -> Self {
        Self { bar: (!quiet).then(|| ProgressBar::new(0)) }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} NIF | {msg}")
            {
                bar.set_style(style.progress_chars("=> "));
            }
        }
    }
    fn log(&mut self, msg: &str) {
        match &self.bar {
            Some(bar) => bar.set_message(msg.to_string()),
            None => println!("{msg}"),
        }
    }
    fn item_done(&mut self, current: usize, _total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(current as u64);
        }
    }
    fn done(&mut self, output: &Path) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        println!("Results saved to {}", output.display());
    }
    fn error(&mut self, _msg: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon();
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    log::init(args.verbose);

    let opts = args.to_options();
    let mut progress = CliProgress::new(args.quiet);
    let summary = pipeline::run_einforma(&opts, Some(&mut progress))
        .wrap_err_with(|| format!("enrichment of {} failed", opts.input.display()))?;

    println!(
        "{} rows: {} found, {} partial, {} not found",
        summary.rows, summary.found, summary.partial, summary.failed
    );
    Ok(())
}
