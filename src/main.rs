mod countdown;
mod gui;
mod interactivity;
mod locale;
mod logging;
mod placement;
mod settings;
mod win_util;

use crate::gui::OverlayApp;
use crate::settings::Settings;

use chrono::Local;
use eframe::egui;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging, settings.log_file.clone());

    let today = Local::now().date_naive();
    let chinese = locale::is_chinese_ui(settings.language.as_deref());
    let items = countdown::load_or_seed(Path::new(settings.data_path()), today, chinese);

    let height = 28.0 + 80.0 * items.len() as f32;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([240.0, height])
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "Days Overlay",
        native_options,
        Box::new(move |_cc| Box::new(OverlayApp::new(items, settings, chinese))),
    ) {
        tracing::error!("overlay window exited with error: {err}");
    }
    Ok(())
}
