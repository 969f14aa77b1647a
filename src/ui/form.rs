// src/ui/form.rs
use eframe::egui;
use tracing::debug;

use crate::error::FormError;
use crate::state::ScenarioForm;

const ADD_CONSTRAINT: &str = "Add Constraint";
const REMOVE_CONSTRAINT: &str = "Remove";

fn submit_label(enabled: bool) -> &'static str {
    if enabled { "Analyze Scenario" } else { "Analyzing..." }
}

fn apply(result: Result<(), FormError>) {
    if let Err(e) = result {
        debug!(error = %e, "form edit rejected");
    }
}

/// Draws the scenario form. Returns true when the user asked to submit.
pub fn show_form(ui: &mut egui::Ui, form: &mut ScenarioForm) -> bool {
    let enabled = !form.is_disabled();
    let mut submit_clicked = false;

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        // Scenario field
        ui.label("Scenario:");
        let mut scenario = form.scenario().to_owned();
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::multiline(&mut scenario)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .hint_text("Describe your situation or challenge..."),
        );
        if response.changed() {
            apply(form.update_scenario(scenario));
        }
        if let Some(issue) = form.errors().scenario {
            ui.colored_label(egui::Color32::RED, issue.message());
        }

        ui.add_space(12.0);

        // Constraints list
        ui.label("Key Constraints:");
        if let Some(issue) = form.errors().constraints {
            ui.colored_label(egui::Color32::RED, issue.message());
        }

        let can_remove = form.can_remove_constraint();
        let mut remove_index = None;
        let mut edits = Vec::new();

        for (index, constraint) in form.constraints().iter().enumerate() {
            ui.horizontal(|ui| {
                let mut text = constraint.clone();
                let response = ui.add_enabled(
                    enabled,
                    egui::TextEdit::singleline(&mut text)
                        .desired_width(ui.available_width() - 80.0)
                        .hint_text("e.g., Budget: $10,000"),
                );
                if response.changed() {
                    edits.push((index, text));
                }

                if ui.add_enabled(can_remove, egui::Button::new(REMOVE_CONSTRAINT)).clicked() {
                    remove_index = Some(index);
                }
            });
        }

        for (index, text) in edits {
            apply(form.update_constraint(index, text));
        }
        if let Some(index) = remove_index {
            apply(form.remove_constraint(index));
        }

        if ui.add_enabled(enabled, egui::Button::new(ADD_CONSTRAINT)).clicked() {
            apply(form.add_constraint());
        }

        ui.add_space(12.0);

        if ui.add_enabled(enabled, egui::Button::new(submit_label(enabled))).clicked() {
            submit_clicked = true;
        }
    });

    submit_clicked
}
