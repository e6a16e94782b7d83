// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("input table has no '{column}' column")]
    MissingColumn { column: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: line {line} has {found} fields, header has {expected}", path.display())]
    RowTooLong {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("invalid options: {0}")]
    Config(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] LookupError),
}

impl EnrichError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}

/// A single identifier could not be looked up. Recovered per row by the pipeline.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page has {label:?} but no cell after it")]
    Parse { label: &'static str },

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
