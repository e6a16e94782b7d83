// src/progress.rs
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Lightweight progress reporting used by the enrichment run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the table is loaded, with the number of rows to look up.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each row, `current` counting from 1.
    fn item_done(&mut self, _current: usize, _total: usize) {}

    /// Called after the output file is written.
    fn done(&mut self, _output: &Path) {}

    /// Called when the run aborts.
    fn error(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as a stream of events, for frontends that run the pipeline on a worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunEvent {
    Begin(usize),
    Log(String),
    Progress { current: usize, total: usize },
    Done(PathBuf),
    Error(String),
}

/// Forwards every hook into a channel. A dropped receiver is not an error;
/// the run carries on without an audience.
pub struct ChannelProgress {
    tx: Sender<RunEvent>,
}

impl ChannelProgress {
    pub fn new(tx: Sender<RunEvent>) -> Self {
        Self { tx }
    }
    fn send(&self, ev: RunEvent) {
        let _ = self.tx.send(ev);
    }
}

impl Progress for ChannelProgress {
    fn begin(&mut self, total: usize) {
        self.send(RunEvent::Begin(total));
    }
    fn log(&mut self, msg: &str) {
        self.send(RunEvent::Log(s!(msg)));
    }
    fn item_done(&mut self, current: usize, total: usize) {
        self.send(RunEvent::Progress { current, total });
    }
    fn done(&mut self, output: &Path) {
        self.send(RunEvent::Done(output.to_path_buf()));
    }
    fn error(&mut self, msg: &str) {
        self.send(RunEvent::Error(s!(msg)));
    }
}
