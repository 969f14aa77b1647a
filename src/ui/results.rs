// src/ui/results.rs
use eframe::egui;

use crate::model::{AnalysisResult, SectionBody};

pub fn show_results(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.heading("Analysis Results");
    ui.add_space(8.0);

    for section in result.sections() {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            match section.body {
                SectionBody::Text(text) => {
                    ui.strong(section.title);
                    ui.label(text);
                }
                SectionBody::List(items) => {
                    ui.strong(section.title);
                    for item in items {
                        ui.label(format!("• {}", item));
                    }
                }
            }
        });
        ui.add_space(4.0);
    }
}
