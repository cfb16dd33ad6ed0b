use super::MultiStepForm;
use crate::core::FieldId;
use crate::runtime::effect::Effect;
use crate::state::validation::{ValidationIssue, ValidationTarget};

struct StepOutcome {
    fields: Vec<(FieldId, String)>,
    messages: Vec<String>,
}

impl StepOutcome {
    fn collect(issues: Vec<ValidationIssue>) -> Self {
        let mut fields = Vec::<(FieldId, String)>::new();
        let mut messages = Vec::new();
        for issue in issues {
            match issue.target {
                ValidationTarget::Field(id) => {
                    if !fields.iter().any(|(seen, _)| *seen == id) {
                        fields.push((id, issue.message));
                    }
                }
                ValidationTarget::Step => messages.push(issue.message),
            }
        }
        Self { fields, messages }
    }

    fn is_valid(&self) -> bool {
        self.fields.is_empty() && self.messages.is_empty()
    }
}

impl MultiStepForm {
    /// Runs every step's validators and writes the outcome into the
    /// completion flags. Steps without validators keep whatever the host set.
    pub(super) fn revalidate(&mut self) -> Vec<Effect> {
        let current = self.session.current_step();
        let mut effects = Vec::new();

        for index in 0..self.steps.len() {
            let step = &self.steps[index];
            if step.validators.is_empty() {
                continue;
            }
            let outcome = StepOutcome::collect(step.evaluate(&self.store));

            for (id, message) in &outcome.fields {
                self.validation.set_error(id.clone(), message.as_str());
            }
            for id in step.fields.iter().chain(self.reported[index].iter()) {
                if !outcome.fields.iter().any(|(failed, _)| failed == id) {
                    self.validation.clear_error(id.as_str());
                }
            }
            self.reported[index] = outcome.fields.iter().map(|(id, _)| id.clone()).collect();

            if index == current && !self.validation.step_errors().is_empty() {
                self.validation.set_step_errors(outcome.messages.clone());
            }

            let complete = outcome.is_valid();
            if self.session.set_complete(index, complete) {
                effects.push(Effect::CompletionChanged { index, complete });
            }
        }
        effects
    }

    /// Shows the current step's field and step-level errors inline.
    pub(crate) fn reveal_current_errors(&mut self) -> Vec<Effect> {
        let index = self.session.current_step();
        let step = &self.steps[index];
        if step.validators.is_empty() {
            return Vec::new();
        }
        let outcome = StepOutcome::collect(step.evaluate(&self.store));
        self.validation.reveal(self.reported[index].iter());
        self.validation.set_step_errors(outcome.messages);
        vec![Effect::ErrorsRevealed(index)]
    }
}
