// src/app.rs
use eframe::egui;
use tracing::{debug, warn};

use crate::analysis::Orchestrator;
use crate::error::FormError;
use crate::state::ScenarioForm;
use crate::ui::{form, results, status};

pub struct ScenarioApp {
    form: ScenarioForm,
    orchestrator: Orchestrator,
}

impl ScenarioApp {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            form: ScenarioForm::new(),
            orchestrator,
        }
    }

    /// Picks up a finished request and locks the form while one is in flight.
    fn sync(&mut self) {
        self.orchestrator.poll();
        self.form.set_disabled(self.orchestrator.is_loading());
    }

    fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(request) => {
                if let Err(e) = self.orchestrator.submit(request) {
                    warn!(error = %e, "submission rejected");
                }
            }
            Err(FormError::Invalid(errors)) => {
                debug!(%errors, "form failed validation");
            }
            Err(e) => {
                debug!(error = %e, "submit rejected");
            }
        }
        self.sync();
    }
}

impl eframe::App for ScenarioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync();

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            status::show_header(ui);
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            status::show_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    if form::show_form(ui, &mut self.form) {
                        self.submit_form();
                    }

                    ui.add_space(16.0);

                    let state = self.orchestrator.state();
                    if state.is_loading() {
                        status::show_loading(ui);
                    } else if let Some(message) = state.error() {
                        status::show_error(ui, message);
                    } else if let Some(result) = state.result() {
                        results::show_results(ui, result);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::runtime::Handle;
    use tokio::sync::Notify;

    use crate::analysis::AnalysisService;
    use crate::error::ServiceError;
    use crate::model::{AnalysisResult, ScenarioRequest};
    use crate::state::SubmissionState;

    /// Answers once `release` is notified.
    struct Gated {
        release: Arc<Notify>,
        outcome: Result<AnalysisResult, ServiceError>,
    }

    #[async_trait]
    impl AnalysisService for Gated {
        async fn analyze(&self, _request: &ScenarioRequest) -> Result<AnalysisResult, ServiceError> {
            self.release.notified().await;
            self.outcome.clone()
        }
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            scenario_summary: "Summary".to_string(),
            potential_pitfalls: vec!["Pitfall".to_string()],
            proposed_strategies: vec!["Strategy".to_string()],
            recommended_resources: vec!["Resource".to_string()],
            disclaimer: "Disclaimer".to_string(),
        }
    }

    fn app_with(outcome: Result<AnalysisResult, ServiceError>) -> (ScenarioApp, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let service = Arc::new(Gated { release: Arc::clone(&release), outcome });
        let mut app = ScenarioApp::new(Orchestrator::new(service, Handle::current()));
        app.form.update_scenario("Launching a new product").unwrap();
        app.form.update_constraint(0, "Budget: $10,000").unwrap();
        (app, release)
    }

    #[tokio::test]
    async fn form_locked_while_loading_then_reenabled() {
        let (mut app, release) = app_with(Ok(result()));

        app.submit_form();
        assert!(app.orchestrator.is_loading());
        assert!(app.form.is_disabled());

        // Edits and resubmits bounce off while the request is pending
        assert_eq!(app.form.update_scenario("something else entirely"), Err(FormError::Disabled));
        assert_eq!(app.form.add_constraint(), Err(FormError::Disabled));
        app.submit_form();
        assert_eq!(app.form.scenario(), "Launching a new product");
        assert_eq!(app.form.constraints().len(), 1);
        assert!(app.orchestrator.is_loading());

        release.notify_one();
        app.orchestrator.settle().await;
        app.sync();

        assert!(!app.form.is_disabled());
        assert_eq!(app.orchestrator.state(), &SubmissionState::Success(result()));
    }

    #[tokio::test]
    async fn server_error_leaves_no_result() {
        let (mut app, release) = app_with(Err(ServiceError::Status(500)));

        app.submit_form();
        release.notify_one();
        app.orchestrator.settle().await;
        app.sync();

        let state = app.orchestrator.state();
        assert!(state.error().unwrap().contains("500"));
        assert!(state.result().is_none());
        assert!(!app.form.is_disabled());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_service() {
        let (mut app, _release) = app_with(Ok(result()));
        app.form.update_scenario("short").unwrap();

        app.submit_form();
        assert_eq!(app.orchestrator.state(), &SubmissionState::Idle);
        assert!(app.form.errors().scenario.is_some());
        assert!(!app.form.is_disabled());
    }
}
