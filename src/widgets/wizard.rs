//! Linear multi-step form.
//!
//! Steps are numbered `1..=N`. Navigation only moves between neighbours and
//! silently stops at either end; fields accumulate across steps and are
//! handed out as a snapshot when the last step submits.

use crate::config::StepDef;
use serde::Serialize;
use std::collections::BTreeMap;

/// Inputs accepted by `WizardState::apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Prev,
    SetField { name: String, value: String },
}

/// Wizard position and collected values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
    fields: BTreeMap<String, String>,
}

impl WizardState {
    /// Start at step 1 of `total_steps` (at least one step)
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 1,
            total_steps: total_steps.max(1),
            fields: BTreeMap::new(),
        }
    }

    pub fn apply(mut self, event: WizardEvent) -> Self {
        match event {
            WizardEvent::Next => {
                if self.current_step < self.total_steps {
                    self.current_step += 1;
                }
            }
            WizardEvent::Prev => {
                if self.current_step > 1 {
                    self.current_step -= 1;
                }
            }
            WizardEvent::SetField { name, value } => {
                self.fields.insert(name, value);
            }
        }
        self
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Snapshot of the fields, only available on the last step
    pub fn submit(&self) -> Option<FormSnapshot> {
        self.is_last().then(|| FormSnapshot(self.fields.clone()))
    }
}

/// Immutable copy of the submitted fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot(BTreeMap<String, String>);

impl FormSnapshot {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The form widget: step definitions plus wizard state
pub struct MultiStepForm {
    steps: Vec<StepDef>,
    state: WizardState,
    submitted: Option<FormSnapshot>,
}

impl MultiStepForm {
    pub fn new(steps: Vec<StepDef>) -> Self {
        let state = WizardState::new(steps.len());
        Self {
            steps,
            state,
            submitted: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Definition of the step currently shown
    pub fn current(&self) -> Option<&StepDef> {
        self.steps.get(self.state.current_step() - 1)
    }

    /// Value of the current step's field (empty if never set)
    pub fn current_value(&self) -> &str {
        self.current()
            .and_then(|step| self.state.field(&step.field))
            .unwrap_or("")
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.transition(WizardEvent::SetField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Replace the current step's field value
    pub fn set_current_value(&mut self, value: &str) {
        if let Some(name) = self.current().map(|step| step.field.clone()) {
            self.set_field(&name, value);
        }
    }

    pub fn next(&mut self) {
        self.transition(WizardEvent::Next);
    }

    pub fn prev(&mut self) {
        self.transition(WizardEvent::Prev);
    }

    /// Submit on the last step; earlier steps return None and change nothing
    pub fn submit(&mut self) -> Option<FormSnapshot> {
        let snapshot = self.state.submit()?;
        tracing::info!(fields = snapshot.len(), "Multi-step form submitted");
        self.submitted = Some(snapshot.clone());
        Some(snapshot)
    }

    pub fn last_submission(&self) -> Option<&FormSnapshot> {
        self.submitted.as_ref()
    }

    fn transition(&mut self, event: WizardEvent) {
        let state = std::mem::replace(&mut self.state, WizardState::new(1));
        self.state = state.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<StepDef> {
        ["name", "email", "age"]
            .iter()
            .enumerate()
            .map(|(i, field)| StepDef {
                title: format!("Step {}", i + 1),
                field: field.to_string(),
                placeholder: field.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        let state = WizardState::new(3).apply(WizardEvent::Prev);
        assert_eq!(state.current_step(), 1);

        let state = state
            .apply(WizardEvent::Next)
            .apply(WizardEvent::Next)
            .apply(WizardEvent::Next);
        assert_eq!(state.current_step(), 3);
        assert!(state.is_last());

        let state = state.apply(WizardEvent::Prev);
        assert_eq!(state.current_step(), 2);
    }

    #[test]
    fn test_zero_steps_clamped_to_one() {
        let state = WizardState::new(0);
        assert_eq!(state.total_steps(), 1);
        assert!(state.is_first() && state.is_last());
    }

    #[test]
    fn test_last_write_wins() {
        let state = WizardState::new(3)
            .apply(WizardEvent::SetField {
                name: "name".into(),
                value: "An".into(),
            })
            .apply(WizardEvent::SetField {
                name: "name".into(),
                value: "Ann".into(),
            });
        assert_eq!(state.field("name"), Some("Ann"));
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut form = MultiStepForm::new(steps());
        form.set_field("name", "Ann");
        form.set_field("email", "a@b.com");
        assert!(form.submit().is_none());
        assert!(form.last_submission().is_none());

        form.next();
        form.next();
        let snapshot = form.submit().expect("submit at step 3");
        assert_eq!(snapshot.get("name"), Some("Ann"));
        assert_eq!(snapshot.get("email"), Some("a@b.com"));
        assert_eq!(snapshot.get("age"), None);
        assert_eq!(snapshot.to_json(), r#"{"email":"a@b.com","name":"Ann"}"#);
        assert_eq!(form.last_submission(), Some(&snapshot));
    }

    #[test]
    fn test_current_value_follows_step() {
        let mut form = MultiStepForm::new(steps());
        form.set_current_value("Ann");
        form.next();
        assert_eq!(form.current().map(|s| s.field.as_str()), Some("email"));
        assert_eq!(form.current_value(), "");
        form.set_current_value("a@b.com");
        form.prev();
        assert_eq!(form.current_value(), "Ann");
    }
}
