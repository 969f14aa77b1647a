// src/model/request.rs
use serde::Serialize;

/// Payload sent to the analysis service. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRequest {
    pub scenario: String,
    pub constraints: Vec<String>,
}

impl ScenarioRequest {
    pub fn new(scenario: String, constraints: Vec<String>) -> Self {
        Self {
            scenario,
            constraints,
        }
    }
}
