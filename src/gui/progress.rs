// src/gui/progress.rs
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::progress::RunEvent;

/// UI-side view of a run, rebuilt from the worker's event stream.
#[derive(Debug, Default)]
pub struct RunView {
    pub current: usize,
    pub total: usize,
    pub log: Vec<String>,
    pub finished: Option<Result<PathBuf, String>>,
}

impl RunView {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.current as f32 / self.total as f32 }
    }

    pub fn apply(&mut self, ev: RunEvent) {
        match ev {
            RunEvent::Begin(total) => {
                self.total = total;
                self.current = 0;
            }
            RunEvent::Log(msg) => self.log.push(msg),
            RunEvent::Progress { current, total } => {
                self.current = current;
                self.total = total;
            }
            RunEvent::Done(path) => self.finished = Some(Ok(path)),
            RunEvent::Error(msg) => {
                self.log.push(format!("Error: {msg}"));
                self.finished = Some(Err(msg));
            }
        }
    }

    /// Apply everything queued so far; never blocks. Returns true if anything changed.
    /// A worker that hangs up without Done/Error counts as a failed run.
    pub fn drain(&mut self, rx: &Receiver<RunEvent>) -> bool {
        let mut changed = false;
        loop {
            match rx.try_recv() {
                Ok(ev) => {
                    self.apply(ev);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.finished.is_none() {
                        self.apply(RunEvent::Error(s!("worker stopped unexpectedly")));
                        changed = true;
                    }
                    break;
                }
            }
        }
        changed
    }
}
