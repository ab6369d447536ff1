mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod view;

use app::CourseBrowserApp;
use config::{AppConfig, Invocation};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match AppConfig::from_env()? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Course Browser",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(CourseBrowserApp::new(
                config.initial_file.as_deref(),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {e}"))
}
