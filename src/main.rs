// src/main.rs
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod error;
mod model;
mod state;
mod ui;

use crate::analysis::{HttpAnalysisService, Orchestrator};
use crate::app::ScenarioApp;
use crate::config::Settings;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let settings_path = Settings::default_path();
    let (settings, settings_error) = match Settings::load_from(settings_path.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_tracing(&settings.log_filter);
    if let Some(e) = settings_error {
        warn!("falling back to default settings: {:#}", e);
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();
    let handle = runtime.handle().clone();
    let service = Arc::new(HttpAnalysisService::default());
    info!(endpoint = %service.endpoint(), "starting scenario analyzer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_title("Scenario Analysis Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Scenario Analysis Tool",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let orchestrator = Orchestrator::new(service, handle)
                .with_notifier(Arc::new(move || ctx.request_repaint()));
            Box::new(ScenarioApp::new(orchestrator))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
