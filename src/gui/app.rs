// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::{self, Receiver},
    thread,
};

use eframe::egui;

use super::progress::RunView;
use crate::{
    config::options::RunOptions,
    pipeline,
    progress::{ChannelProgress, RunEvent},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "EInforma Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )?;
    Ok(())
}

#[derive(Default)]
pub struct App {
    pub input_text: String,
    pub output_text: String,

    // worker → UI
    rx: Option<Receiver<RunEvent>>,
    pub view: RunView,
}

impl App {
    pub fn running(&self) -> bool {
        self.rx.is_some()
    }

    pub fn can_start(&self) -> bool {
        !self.running() && !self.input_text.trim().is_empty() && !self.output_text.trim().is_empty()
    }

    /// Spawn the pipeline on a worker thread; the UI only ever sees events.
    pub fn start(&mut self) {
        if !self.can_start() {
            return;
        }
        let opts = RunOptions::new(
            PathBuf::from(self.input_text.trim()),
            PathBuf::from(self.output_text.trim()),
        );
        let (tx, rx) = mpsc::channel();
        self.view = RunView::default();
        self.rx = Some(rx);

        logf!("GUI: start input={} output={}", opts.input.display(), opts.output.display());
        thread::spawn(move || {
            let mut progress = ChannelProgress::new(tx);
            // Outcome already reported through Done/Error events.
            let _ = pipeline::run_einforma(&opts, Some(&mut progress));
        });
    }

    fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };
        self.view.drain(rx);
        if self.view.finished.is_some() {
            self.rx = None;
        }
    }

    fn status_line(&self) -> String {
        match (&self.view.finished, self.running()) {
            (Some(Ok(path)), _) => format!("Done. Results saved to {}", path.display()),
            (Some(Err(msg)), _) => format!("Error: {msg}"),
            (None, true) => format!("Processing {}/{}", self.view.current, self.view.total),
            (None, false) => s!("Idle"),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();
        if self.running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Input CSV:");
            ui.add_enabled(!self.running(), egui::TextEdit::singleline(&mut self.input_text).desired_width(f32::INFINITY));
            ui.label("Output CSV:");
            ui.add_enabled(!self.running(), egui::TextEdit::singleline(&mut self.output_text).desired_width(f32::INFINITY));

            ui.add_space(8.0);
            if ui.add_enabled(self.can_start(), egui::Button::new("Start processing")).clicked() {
                self.start();
            }

            ui.add_space(8.0);
            ui.add(egui::ProgressBar::new(self.view.fraction()).show_percentage());
            ui.label(self.status_line());

            ui.separator();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for line in &self.view.log {
                        ui.monospace(line.as_str());
                    }
                });
        });
    }
}
