// src/ui/status.rs
use chrono::{Datelike, Local};
use eframe::egui;

pub fn show_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading("Scenario Analysis Tool");
        ui.label("Enter your scenario and constraints to get AI-powered analysis");
    });
}

pub fn show_footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.small(format!("Scenario Analysis Tool © {}", Local::now().year()));
    });
}

pub fn show_loading(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Analyzing your scenario...");
    });
}

/// Stays up until the next submission replaces it.
pub fn show_error(ui: &mut egui::Ui, message: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(egui::Color32::RED, egui::RichText::new("Error").strong());
        ui.label(message);
    });
}
