// src/pipeline.rs
use std::path::PathBuf;

use crate::{
    config::{consts::*, options::RunOptions},
    core::throttle::Throttle,
    error::EnrichError,
    lookup::{EInformaClient, Lookup},
    progress::{NullProgress, Progress},
    table::{self, Table},
};

/// How one row came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    /// Both fields scraped.
    Found,
    /// Lookup succeeded but at least one label was missing from the page.
    Partial,
    /// Lookup failed outright; both fields hold the sentinel.
    Failed,
}

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub rows: usize,
    pub found: usize,
    pub partial: usize,
    pub failed: usize,
}

impl RunSummary {
    fn count(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Found => self.found += 1,
            RowOutcome::Partial => self.partial += 1,
            RowOutcome::Failed => self.failed += 1,
        }
    }
}

/// Top-level runner against the live site. The client (and its connection pool)
/// lives exactly as long as the run.
pub fn run_einforma(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, EnrichError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let client = opts
        .validate()
        .and_then(|_| EInformaClient::new(opts.client.clone()).map_err(EnrichError::Client));
    let mut client = match client {
        Ok(c) => c,
        Err(e) => return Err(report(e, progress)),
    };

    run(opts, &mut client, Some(progress))
}

/// Load → validate → look up each row → save.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// Only fatal errors come back as `Err`; per-row lookup failures become sentinel cells.
pub fn run(
    opts: &RunOptions,
    lookup: &mut dyn Lookup,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, EnrichError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    match run_inner(opts, lookup, progress) {
        Ok(summary) => {
            progress.done(&summary.output);
            Ok(summary)
        }
        Err(e) => Err(report(e, progress)),
    }
}

fn report(e: EnrichError, progress: &mut dyn Progress) -> EnrichError {
    loge!("Run aborted: {}", e);
    progress.error(&e.to_string());
    e
}

fn run_inner(
    opts: &RunOptions,
    lookup: &mut dyn Lookup,
    progress: &mut dyn Progress,
) -> Result<RunSummary, EnrichError> {
    logf!("Reading {}", opts.input.display());
    let mut table = table::read_table(&opts.input, opts.format)?;

    let throttle = Throttle::new(opts.delay);
    let mut summary = enrich(&mut table, lookup, &throttle, progress)?;

    logf!("Writing {} rows to {}", table.len(), opts.output.display());
    table::write_table(&opts.output, &table, opts.format)?;

    summary.output = opts.output.clone();
    logf!(
        "Done: rows={} found={} partial={} failed={}",
        summary.rows, summary.found, summary.partial, summary.failed
    );
    progress.log(&format!("Finished. Results saved to {}", opts.output.display()));
    Ok(summary)
}

/// Fill `Nome_Empresa` and `CAE` for every row, in order, one lookup per row.
/// Fails only when the identifier column is missing, and then before any lookup.
pub fn enrich(
    table: &mut Table,
    lookup: &mut dyn Lookup,
    throttle: &Throttle,
    progress: &mut dyn Progress,
) -> Result<RunSummary, EnrichError> {
    let nif_col = table
        .column(COL_NIF)
        .ok_or_else(|| EnrichError::MissingColumn { column: s!(COL_NIF) })?;

    let name_col = table.ensure_column(COL_NAME);
    let cae_col = table.ensure_column(COL_CAE);

    let total = table.len();
    let mut summary = RunSummary { rows: total, ..RunSummary::default() };
    progress.begin(total);

    for i in 0..total {
        let nif = s!(table.cell(i, nif_col));
        progress.log(&format!("Processing NIF {nif}..."));

        throttle.wait();
        let outcome = match lookup.fetch(&nif) {
            Ok(info) => {
                let outcome = if info.degraded { RowOutcome::Partial } else { RowOutcome::Found };
                table.set(i, name_col, info.name);
                table.set(i, cae_col, info.activity_code);
                outcome
            }
            Err(e) => {
                logw!("Error processing NIF {}: {}", nif, e);
                progress.log(&format!("Error processing NIF {nif}: {e}"));
                table.set(i, name_col, NOT_FOUND);
                table.set(i, cae_col, NOT_FOUND);
                RowOutcome::Failed
            }
        };
        logd!("NIF {} → {:?}", nif, outcome);
        summary.count(outcome);
        progress.item_done(i + 1, total);
    }

    Ok(summary)
}
