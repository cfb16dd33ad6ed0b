use crate::core::{FieldId, Value};
use crate::state::store::ValueStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorVisibility {
    Hidden,
    Inline,
}

#[derive(Debug, Clone)]
pub struct ValidationEntry {
    pub error: String,
    pub visibility: ErrorVisibility,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationTarget {
    Field(FieldId),
    Step,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub target: ValidationTarget,
    pub message: String,
}

impl ValidationIssue {
    pub fn field(id: impl Into<FieldId>, message: impl Into<String>) -> Self {
        Self {
            target: ValidationTarget::Field(id.into()),
            message: message.into(),
        }
    }

    pub fn step(message: impl Into<String>) -> Self {
        Self {
            target: ValidationTarget::Step,
            message: message.into(),
        }
    }
}

/// Read-only view of the shared store handed to step validators.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    step_id: &'a str,
    values: &'a ValueStore,
}

impl<'a> ValidationContext<'a> {
    pub fn new(step_id: &'a str, values: &'a ValueStore) -> Self {
        Self { step_id, values }
    }

    pub fn step_id(&self) -> &'a str {
        self.step_id
    }

    pub fn value(&self, id: &str) -> Option<&'a Value> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&'a str> {
        self.value(id).and_then(Value::as_text)
    }

    pub fn bool_value(&self, id: &str) -> Option<bool> {
        self.value(id).and_then(Value::as_bool)
    }

    pub fn is_empty(&self, id: &str) -> bool {
        self.values.is_empty_value(id)
    }
}

pub type StepValidator =
    Box<dyn Fn(&ValidationContext<'_>) -> Vec<ValidationIssue> + Send + Sync>;

/// Current issues per field plus the step-level messages of the active step.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    entries: HashMap<FieldId, ValidationEntry>,
    step_errors: Vec<String>,
}

impl ValidationState {
    /// Keeps an already revealed error inline when the message changes.
    pub fn set_error(&mut self, id: impl Into<FieldId>, error: impl Into<String>) {
        let id = id.into();
        let visibility = self
            .entries
            .get(&id)
            .map(|entry| entry.visibility)
            .unwrap_or(ErrorVisibility::Hidden);
        self.entries.insert(
            id,
            ValidationEntry {
                error: error.into(),
                visibility,
            },
        );
    }

    pub fn clear_error(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn set_step_errors(&mut self, errors: Vec<String>) {
        self.step_errors = errors;
    }

    pub fn clear_step_errors(&mut self) {
        self.step_errors.clear();
    }

    pub fn step_errors(&self) -> &[String] {
        self.step_errors.as_slice()
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.error.as_str())
    }

    pub fn visible_error(&self, id: &str) -> Option<&str> {
        self.entries.get(id).and_then(|entry| {
            matches!(entry.visibility, ErrorVisibility::Inline).then_some(entry.error.as_str())
        })
    }

    pub fn is_hidden_invalid(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| matches!(entry.visibility, ErrorVisibility::Hidden))
    }

    pub fn reveal<'a>(&mut self, ids: impl IntoIterator<Item = &'a FieldId>) {
        for id in ids {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.visibility = ErrorVisibility::Inline;
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.step_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationContext, ValidationState};
    use crate::core::{FieldId, Value};
    use crate::state::store::ValueStore;

    #[test]
    fn errors_start_hidden_until_revealed() {
        let mut state = ValidationState::default();
        state.set_error("hearing_date", "Hearing date is required");
        assert!(state.is_hidden_invalid("hearing_date"));
        assert_eq!(state.visible_error("hearing_date"), None);

        state.reveal([&FieldId::from("hearing_date")]);
        assert_eq!(
            state.visible_error("hearing_date"),
            Some("Hearing date is required")
        );
    }

    #[test]
    fn revealed_error_stays_inline_on_update() {
        let mut state = ValidationState::default();
        state.set_error("case_number", "required");
        state.reveal([&FieldId::from("case_number")]);
        state.set_error("case_number", "must look like CV-2024-0001");
        assert_eq!(
            state.visible_error("case_number"),
            Some("must look like CV-2024-0001")
        );
        state.clear_error("case_number");
        assert_eq!(state.error("case_number"), None);
    }

    #[test]
    fn context_reads_store() {
        let mut store = ValueStore::new();
        store.set("sealed", Value::Bool(true));
        store.set("title", Value::from("State v. Doe"));
        let ctx = ValidationContext::new("details", &store);
        assert_eq!(ctx.step_id(), "details");
        assert_eq!(ctx.bool_value("sealed"), Some(true));
        assert_eq!(ctx.text("title"), Some("State v. Doe"));
        assert!(ctx.is_empty("judge"));
    }
}
