// src/state/submission_state.rs
use crate::model::AnalysisResult;

/// Outcome slot for the current submission. Only one variant is live at a
/// time, so a result and an error can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(AnalysisResult),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SubmissionState::Success(result) => Some(result),
            _ => None,
        }
    }
}
