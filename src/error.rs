// src/error.rs
use thiserror::Error;

use crate::state::FormErrors;

/// Rejections from the scenario form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("form is disabled while a request is in flight")]
    Disabled,

    #[error("the last constraint slot cannot be removed")]
    LastConstraint,

    #[error("no constraint at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Invalid(FormErrors),
}

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Parse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("an analysis request is already in flight")]
    Busy,
}
