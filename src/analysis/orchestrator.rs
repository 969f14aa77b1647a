// src/analysis/orchestrator.rs
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::analysis::client::AnalysisService;
use crate::error::{ServiceError, SubmitError};
use crate::model::{AnalysisResult, ScenarioRequest};
use crate::state::SubmissionState;

type Outcome = Result<AnalysisResult, ServiceError>;

/// Called from the runtime once a request finishes.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Runs one analysis request at a time and tracks its outcome.
pub struct Orchestrator {
    service: Arc<dyn AnalysisService>,
    runtime: Handle,
    state: SubmissionState,
    pending: Option<oneshot::Receiver<Outcome>>,
    notifier: Option<Notifier>,
}

impl Orchestrator {
    pub fn new(service: Arc<dyn AnalysisService>, runtime: Handle) -> Self {
        Self {
            service,
            runtime,
            state: SubmissionState::Idle,
            pending: None,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn submit(&mut self, request: ScenarioRequest) -> Result<(), SubmitError> {
        if self.is_loading() {
            warn!("submission refused, request already in flight");
            return Err(SubmitError::Busy);
        }

        // Drops any previous result or error
        self.state = SubmissionState::Loading;

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        let service = Arc::clone(&self.service);
        let notifier = self.notifier.clone();
        let span = tracing::info_span!("submission", id = %Uuid::new_v4());

        self.runtime.spawn(
            async move {
                info!(constraints = request.constraints.len(), "analysis started");
                let outcome = service.analyze(&request).await;
                // Receiver may be gone if the app closed mid-request
                let _ = tx.send(outcome);
                if let Some(notify) = notifier {
                    notify();
                }
            }
            .instrument(span),
        );

        Ok(())
    }

    /// Applies the outcome of the pending request if it has arrived.
    /// Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.apply(Err(abandoned()));
                true
            }
        }
    }

    /// Waits for the pending request, if any, and applies its outcome.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.await.unwrap_or_else(|_| Err(abandoned()));
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        self.state = match outcome {
            Ok(result) => {
                info!("analysis succeeded");
                SubmissionState::Success(result)
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                SubmissionState::Error(format!("Error: {}", e))
            }
        };
    }
}

fn abandoned() -> ServiceError {
    ServiceError::Transport("analysis task ended without a response".to_string())
}
