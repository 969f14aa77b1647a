// src/state/validation.rs
use std::fmt;

pub const MIN_SCENARIO_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioIssue {
    Missing,
    TooShort,
}

impl ScenarioIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ScenarioIssue::Missing => "Scenario is required",
            ScenarioIssue::TooShort => "Scenario must be at least 10 characters",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintsIssue {
    NoneProvided,
}

impl ConstraintsIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ConstraintsIssue::NoneProvided => "At least one constraint is required",
        }
    }
}

/// Per-field validation results. Both fields are checked on every pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub scenario: Option<ScenarioIssue>,
    pub constraints: Option<ConstraintsIssue>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.scenario.is_none() && self.constraints.is_none()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.scenario.map(|i| i.message())
            .into_iter()
            .chain(self.constraints.map(|i| i.message()))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub fn check_scenario(scenario: &str) -> Option<ScenarioIssue> {
    let trimmed = scenario.trim();
    if trimmed.is_empty() {
        Some(ScenarioIssue::Missing)
    } else if trimmed.chars().count() < MIN_SCENARIO_CHARS {
        Some(ScenarioIssue::TooShort)
    } else {
        None
    }
}

pub fn check_constraints(constraints: &[String]) -> Option<ConstraintsIssue> {
    if constraints.iter().all(|c| is_blank(c)) {
        // Also covers the empty list
        Some(ConstraintsIssue::NoneProvided)
    } else {
        None
    }
}

pub fn validate(scenario: &str, constraints: &[String]) -> FormErrors {
    FormErrors {
        scenario: check_scenario(scenario),
        constraints: check_constraints(constraints),
    }
}
