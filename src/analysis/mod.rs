// src/analysis/mod.rs
pub mod client;
pub mod orchestrator;

// Re-export commonly used types
pub use client::{AnalysisService, HttpAnalysisService, DEFAULT_ENDPOINT};
pub use orchestrator::Orchestrator;
