// src/model/mod.rs
pub mod request;
pub mod result;

// Re-export commonly used types
pub use request::ScenarioRequest;
pub use result::{AnalysisResult, SectionBody};
