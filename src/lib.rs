// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod gui;
pub mod lookup;
pub mod pipeline;
pub mod progress;
pub mod table;

pub use error::{EnrichError, LookupError};
pub use lookup::{CompanyInfo, EInformaClient, Lookup};
pub use pipeline::{RowOutcome, RunSummary};
