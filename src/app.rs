use std::path::Path;
use std::time::Duration;

use eframe::egui;

use crate::data::reader::FileReader;
use crate::state::{AppState, Message};
use crate::ui::{detail, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CourseBrowserApp {
    pub state: AppState,
    reader: FileReader,
}

impl CourseBrowserApp {
    pub fn new(initial_file: Option<&Path>) -> Self {
        let mut app = Self::default();
        if let Some(path) = initial_file {
            app.open(path);
        }
        app
    }

    fn open(&mut self, path: &Path) {
        self.reader.start(path);
        self.state.update(Message::ReadStarted {
            path: path.to_path_buf(),
        });
    }
}

impl eframe::App for CourseBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(done) = self.reader.poll() {
            self.state.update(done.into());
        }
        if self.reader.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        let mut messages = Vec::new();

        // ---- Top panel: menu bar ----
        let picked = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &self.state))
            .inner;

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::filter_panel(ui, &self.state, &mut messages);
            });

        // ---- Second side panel: course list ----
        egui::SidePanel::left("course_list")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::course_list(ui, &self.state, &mut messages);
            });

        // ---- Central panel: details ----
        egui::CentralPanel::default().show(ctx, |ui| {
            detail::course_detail(ui, &self.state);
        });

        if let Some(path) = picked {
            self.open(&path);
        }
        for message in messages {
            self.state.update(message);
        }
    }
}
