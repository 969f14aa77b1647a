// src/state/form_state.rs
use crate::error::FormError;
use crate::model::ScenarioRequest;
use crate::state::validation::{self, FormErrors};

/// Editable scenario form. The constraint list always holds at least one
/// slot; blank slots are allowed while editing and dropped on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioForm {
    scenario: String,
    constraints: Vec<String>,
    errors: FormErrors,
    disabled: bool,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            scenario: String::new(),
            constraints: vec![String::new()],
            errors: FormErrors::default(),
            disabled: false,
        }
    }
}

impl ScenarioForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn can_remove_constraint(&self) -> bool {
        !self.disabled && self.constraints.len() > 1
    }

    fn ensure_enabled(&self) -> Result<(), FormError> {
        if self.disabled {
            Err(FormError::Disabled)
        } else {
            Ok(())
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.constraints.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange { index, len: self.constraints.len() })
        }
    }

    pub fn update_scenario(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        self.ensure_enabled()?;
        self.scenario = text.into();
        Ok(())
    }

    pub fn add_constraint(&mut self) -> Result<(), FormError> {
        self.ensure_enabled()?;
        self.constraints.push(String::new());
        Ok(())
    }

    pub fn remove_constraint(&mut self, index: usize) -> Result<(), FormError> {
        self.ensure_enabled()?;
        if self.constraints.len() <= 1 {
            return Err(FormError::LastConstraint);
        }
        self.ensure_index(index)?;
        self.constraints.remove(index);
        Ok(())
    }

    pub fn update_constraint(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        self.ensure_enabled()?;
        self.ensure_index(index)?;
        self.constraints[index] = text.into();
        Ok(())
    }

    /// Validates the form and builds the request payload. Errors from this
    /// pass replace whatever was recorded by the previous one.
    pub fn submit(&mut self) -> Result<ScenarioRequest, FormError> {
        self.ensure_enabled()?;

        let errors = validation::validate(&self.scenario, &self.constraints);
        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let constraints = self.constraints.iter()
            .filter(|c| !validation::is_blank(c))
            .cloned()
            .collect();

        Ok(ScenarioRequest::new(self.scenario.clone(), constraints))
    }
}
