#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;

use crate::config::{StartupConfig, MIN_HEIGHT, MIN_WIDTH};
use crate::ui::{HallApp, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    let startup = StartupConfig::parse();
    tracing_subscriber::fmt()
        .with_env_filter(startup.log_filter())
        .init();

    let [width, height] = startup.inner_size();
    tracing::info!(width, height, "starting reservation desktop ui");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width, height])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(HallApp::new()))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui stopped with an error: {err}"))
}
