//! Declarative form definitions loaded from YAML

use crate::core::FieldId;
use crate::error::{FormError, Result};
use crate::state::form::MultiStepForm;
use crate::state::step::StepDescriptor;
use crate::state::validation::ValidationIssue;
use crate::ui::controls::NavigationControls;
use crate::ui::fields_view::{FieldKind, FieldSpec, FieldsView};
use crate::ui::view::TextView;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Top-level form definition
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub title: Option<String>,

    /// Labels and visibility of the Back / Next / Submit bar
    #[serde(default)]
    pub controls: NavigationControls,

    /// Zero-based step shown first; clamped to the last step
    #[serde(default)]
    pub initial_step: usize,

    /// Primary action on an incomplete step reveals its errors instead of
    /// moving on
    #[serde(default = "default_gate")]
    pub gate_on_completion: bool,

    pub steps: Vec<StepDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepDefinition {
    pub id: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub hint: Option<String>,

    /// Static text shown when the step has no fields
    #[serde(default)]
    pub body: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub label: String,

    #[serde(default)]
    pub kind: FieldKind,

    #[serde(default)]
    pub placeholder: Option<String>,

    /// Text fields must be non-blank, toggles must be checked
    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub required_message: Option<String>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub pattern_message: Option<String>,
}

fn default_gate() -> bool {
    true
}

impl FormDefinition {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FormError::DefinitionRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Builds the form host. Fails on empty forms, duplicate ids and patterns
    /// that do not compile.
    pub fn build(&self) -> Result<MultiStepForm> {
        let mut seen = HashSet::<&str>::new();
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            for field in &step.fields {
                if !seen.insert(field.id.as_str()) {
                    return Err(FormError::DuplicateField {
                        step: step.id.clone(),
                        field: field.id.clone(),
                    });
                }
            }
            steps.push(step.build()?);
        }

        let mut form = MultiStepForm::new(steps)?
            .with_controls(self.controls.clone())
            .gate_on_completion(self.gate_on_completion)
            .with_initial_step(self.initial_step);
        if let Some(title) = &self.title {
            form = form.with_title(title.as_str());
        }
        Ok(form)
    }
}

impl StepDefinition {
    fn build(&self) -> Result<StepDescriptor> {
        let mut descriptor = if self.fields.is_empty() {
            let body = self.body.clone();
            StepDescriptor::new(self.id.as_str(), move || TextView::new(body.clone()))
        } else {
            let specs: Vec<FieldSpec> = self.fields.iter().map(FieldDefinition::spec).collect();
            StepDescriptor::new(self.id.as_str(), move || FieldsView::new(specs.clone()))
        };
        if let Some(label) = &self.label {
            descriptor = descriptor.with_label(label.as_str());
        }
        if let Some(hint) = &self.hint {
            descriptor = descriptor.with_hint(hint.as_str());
        }

        for field in &self.fields {
            descriptor = field.attach(descriptor)?;
        }
        Ok(descriptor)
    }
}

impl FieldDefinition {
    fn spec(&self) -> FieldSpec {
        let spec = match self.kind {
            FieldKind::Text => FieldSpec::text(self.id.as_str(), self.label.as_str()),
            FieldKind::Toggle => FieldSpec::toggle(self.id.as_str(), self.label.as_str()),
        };
        match &self.placeholder {
            Some(placeholder) => spec.with_placeholder(placeholder.as_str()),
            None => spec,
        }
    }

    fn attach(&self, descriptor: StepDescriptor) -> Result<StepDescriptor> {
        let mut descriptor = descriptor.with_field(self.id.as_str());

        if self.required {
            let message = self
                .required_message
                .clone()
                .unwrap_or_else(|| format!("{} is required", self.label));
            descriptor = match self.kind {
                FieldKind::Text => descriptor.require(self.id.as_str(), message),
                FieldKind::Toggle => {
                    let id = FieldId::from(self.id.as_str());
                    descriptor.validate(move |ctx| {
                        (ctx.bool_value(id.as_str()) != Some(true))
                            .then(|| ValidationIssue::field(id.clone(), message.clone()))
                    })
                }
            };
        }

        if let Some(pattern) = &self.pattern {
            let regex = Regex::new(pattern).map_err(|e| FormError::InvalidPattern {
                field: self.id.clone(),
                source: e,
            })?;
            let message = self
                .pattern_message
                .clone()
                .unwrap_or_else(|| format!("{} has an invalid format", self.label));
            descriptor = descriptor.matches(self.id.as_str(), regex, message);
        }
        Ok(descriptor)
    }
}
