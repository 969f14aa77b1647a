// src/state/mod.rs
pub mod form_state;
pub mod submission_state;
pub mod validation;

// Re-export commonly used types
pub use form_state::ScenarioForm;
pub use submission_state::SubmissionState;
pub use validation::FormErrors;
