// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::EnrichError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn byte(&self) -> u8 {
        match self { Delim::Csv => b',', Delim::Tsv => b'\t' }
    }
}

/// Knobs for the HTTP side of a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Must contain `{nif}` exactly where the identifier goes.
    pub url_template: String,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            url_template: s!(URL_TEMPLATE),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ClientOptions {
    pub fn url_for(&self, nif: &str) -> String {
        self.url_template.replace(NIF_PLACEHOLDER, nif)
    }
}

/// Everything one enrichment run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Delim,
    pub delay: Duration,
    pub client: ClientOptions,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: Delim::default(),
            delay: Duration::from_millis(REQUEST_PAUSE_MS),
            client: ClientOptions::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_format(mut self, format: Delim) -> Self {
        self.format = format;
        self
    }

    /// Reject options that would make every lookup hit the same URL.
    pub fn validate(&self) -> Result<(), EnrichError> {
        if !self.client.url_template.contains(NIF_PLACEHOLDER) {
            return Err(EnrichError::Config(format!(
                "URL template must contain {NIF_PLACEHOLDER}: {}",
                self.client.url_template
            )));
        }
        Ok(())
    }
}
