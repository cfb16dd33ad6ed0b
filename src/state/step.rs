use crate::core::FieldId;
use crate::state::store::ValueStore;
use crate::state::validation::{StepValidator, ValidationContext, ValidationIssue};
use crate::ui::view::StepView;
use regex::Regex;

pub type StepContent = Box<dyn Fn() -> Box<dyn StepView>>;

/// One entry of a form's ordered step list.
///
/// The content factory runs each time the step is mounted; inactive steps
/// never have a view.
pub struct StepDescriptor {
    pub id: String,
    pub label: Option<String>,
    pub hint: Option<String>,
    pub fields: Vec<FieldId>,
    pub validators: Vec<StepValidator>,
    content: StepContent,
}

impl StepDescriptor {
    pub fn new<F, V>(id: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: StepView + 'static,
    {
        Self {
            id: id.into(),
            label: None,
            hint: None,
            fields: Vec::new(),
            validators: Vec::new(),
            content: Box::new(move || Box::new(content()) as Box<dyn StepView>),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Declares a field as belonging to this step, so its errors are revealed
    /// together with the step's.
    pub fn with_field(mut self, id: impl Into<FieldId>) -> Self {
        let id = id.into();
        if !self.fields.contains(&id) {
            self.fields.push(id);
        }
        self
    }

    pub fn with_validator(mut self, validator: StepValidator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn require(self, field_id: impl Into<FieldId>, message: impl Into<String>) -> Self {
        let id = field_id.into();
        let msg = message.into();
        let check = id.clone();
        self.with_field(id).with_validator(Box::new(move |ctx: &ValidationContext<'_>| {
            if ctx.is_empty(check.as_str()) {
                vec![ValidationIssue::field(check.clone(), msg.clone())]
            } else {
                Vec::new()
            }
        }))
    }

    /// Non-empty values must match `pattern`; empty values are left to
    /// [`StepDescriptor::require`].
    pub fn matches(
        self,
        field_id: impl Into<FieldId>,
        pattern: Regex,
        message: impl Into<String>,
    ) -> Self {
        let id = field_id.into();
        let msg = message.into();
        let check = id.clone();
        self.with_field(id).with_validator(Box::new(move |ctx: &ValidationContext<'_>| {
            match ctx.value(check.as_str()) {
                Some(value) if !value.is_empty() && !pattern.is_match(&value.to_text()) => {
                    vec![ValidationIssue::field(check.clone(), msg.clone())]
                }
                _ => Vec::new(),
            }
        }))
    }

    pub fn validate(
        self,
        f: impl Fn(&ValidationContext<'_>) -> Option<ValidationIssue> + Send + Sync + 'static,
    ) -> Self {
        self.with_validator(Box::new(move |ctx: &ValidationContext<'_>| {
            f(ctx).into_iter().collect()
        }))
    }

    pub fn mount(&self) -> Box<dyn StepView> {
        (self.content)()
    }

    pub fn display_label(&self, index: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Step {}", index + 1),
        }
    }

    pub fn evaluate(&self, store: &ValueStore) -> Vec<ValidationIssue> {
        let ctx = ValidationContext::new(self.id.as_str(), store);
        self.validators
            .iter()
            .flat_map(|validator| validator(&ctx))
            .collect()
    }
}

impl std::fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("fields", &self.fields)
            .field("validators", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::StepDescriptor;
    use crate::core::Value;
    use crate::state::store::ValueStore;
    use crate::state::validation::{ValidationIssue, ValidationTarget};
    use crate::ui::view::TextView;
    use regex::Regex;

    fn empty_step(id: &str) -> StepDescriptor {
        StepDescriptor::new(id, || TextView::new(["content"]))
    }

    #[test]
    fn require_flags_empty_field() {
        let step = empty_step("parties").require("plaintiff", "Plaintiff is required");
        let mut store = ValueStore::new();
        let issues = step.evaluate(&store);
        assert_eq!(
            issues,
            vec![ValidationIssue::field("plaintiff", "Plaintiff is required")]
        );

        store.set("plaintiff", Value::from("Acme Corp"));
        assert!(step.evaluate(&store).is_empty());
        assert_eq!(step.fields.len(), 1);
    }

    #[test]
    fn pattern_skips_empty_values() {
        let step = empty_step("details").matches(
            "case_number",
            Regex::new(r"^[A-Z]{2}-\d{4}-\d{4}$").expect("regex"),
            "Use the CV-2024-0001 format",
        );
        let mut store = ValueStore::new();
        assert!(step.evaluate(&store).is_empty());

        store.set("case_number", Value::from("2024/1"));
        assert_eq!(step.evaluate(&store).len(), 1);

        store.set("case_number", Value::from("CV-2024-0001"));
        assert!(step.evaluate(&store).is_empty());
    }

    #[test]
    fn custom_step_validator() {
        let step = empty_step("evidence").validate(|ctx| {
            (ctx.bool_value("chain_of_custody") != Some(true))
                .then(|| ValidationIssue::step("Confirm the chain of custody"))
        });
        let mut store = ValueStore::new();
        let issues = step.evaluate(&store);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].target, ValidationTarget::Step);

        store.set("chain_of_custody", Value::Bool(true));
        assert!(step.evaluate(&store).is_empty());
    }

    #[test]
    fn evaluate_borrows_the_store() {
        let step = empty_step("hearing").validate(|ctx| {
            (ctx.text("courtroom") == Some("4B"))
                .then(|| ValidationIssue::step("Courtroom 4B is closed"))
        });
        let mut store = ValueStore::new();
        store.set("courtroom", Value::from("4B"));

        let held = store.text("courtroom");
        assert_eq!(step.evaluate(&store).len(), 1);
        assert_eq!(held, Some("4B"));
    }

    #[test]
    fn label_falls_back_to_position() {
        assert_eq!(empty_step("a").display_label(2), "Step 3");
        assert_eq!(
            empty_step("a").with_label("Hearing").display_label(0),
            "Hearing"
        );
    }

    #[test]
    fn mount_builds_fresh_view_each_time() {
        use std::cell::Cell;
        use std::rc::Rc;

        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);
        let step = StepDescriptor::new("summary", move || {
            counter.set(counter.get() + 1);
            TextView::new(["Review"])
        });
        assert_eq!(built.get(), 0);
        let _first = step.mount();
        let _second = step.mount();
        assert_eq!(built.get(), 2);
    }
}
