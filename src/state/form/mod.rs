use crate::core::FieldId;
use crate::error::{FormError, Result};
use crate::runtime::batch::UpdateBatch;
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::session::{FormSession, SessionSnapshot};
use crate::state::step::StepDescriptor;
use crate::state::store::ValueStore;
use crate::state::validation::ValidationState;
use crate::ui::controls::{ControlsView, NavigationControls};
use crate::ui::indicator::{StepIndicator, StepMarker};
use crate::ui::render::{MountChange, StepRenderer};
use crate::ui::theme::Theme;
use serde::Serialize;
use std::collections::HashSet;

pub type SubmitHandler = Box<dyn FnMut(&ValueStore)>;

/// Host object for one multi-step form.
///
/// Owns the session, the shared values, the validation collaborator that
/// feeds completion flags, and the renderer holding the active step view.
pub struct MultiStepForm {
    title: Option<String>,
    steps: Vec<StepDescriptor>,
    initial_session: FormSession,
    session: FormSession,
    store: ValueStore,
    validation: ValidationState,
    reported: Vec<Vec<FieldId>>,
    renderer: StepRenderer,
    controls: NavigationControls,
    theme: Theme,
    gate_on_completion: bool,
    on_submit: Option<SubmitHandler>,
    submissions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub title: Option<String>,
    pub current_step_id: String,
    pub session: SessionSnapshot,
    pub markers: Vec<StepMarker>,
    pub controls: ControlsView,
    pub mounted_step: Option<usize>,
    pub values: ValueStore,
}

impl MultiStepForm {
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self> {
        let mut seen = HashSet::<&str>::new();
        for step in &steps {
            if !seen.insert(step.id.as_str()) {
                return Err(FormError::DuplicateStep {
                    id: step.id.clone(),
                });
            }
        }

        let session = FormSession::new(steps.len())?;
        let reported = vec![Vec::new(); steps.len()];
        let mut form = Self {
            title: None,
            steps,
            initial_session: session.clone(),
            session,
            store: ValueStore::new(),
            validation: ValidationState::default(),
            reported,
            renderer: StepRenderer::new(),
            controls: NavigationControls::default(),
            theme: Theme::default(),
            gate_on_completion: false,
            on_submit: None,
            submissions: 0,
        };
        form.revalidate();
        form.sync_view();
        Ok(form)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Starting step used on mount and on reset; clamped to the last step.
    pub fn with_initial_step(mut self, index: usize) -> Self {
        let index = index.min(self.steps.len().saturating_sub(1));
        self.initial_session.jump_to(index);
        self.session.jump_to(index);
        self.sync_view();
        self
    }

    pub fn with_controls(mut self, controls: NavigationControls) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Makes the primary control refuse to leave an incomplete step.
    pub fn gate_on_completion(mut self, enabled: bool) -> Self {
        self.gate_on_completion = enabled;
        self
    }

    pub fn on_submit(mut self, handler: impl FnMut(&ValueStore) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// The only public way to change the form. The mounted step view is
    /// synced with the session before this returns.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        self.dispatch_all([intent])
    }

    pub fn dispatch_all(&mut self, intents: impl IntoIterator<Item = Intent>) -> Vec<Effect> {
        let mut batch = UpdateBatch::new();
        for intent in intents {
            batch.push(intent);
        }
        batch.commit(self)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        self.steps.as_slice()
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.session.current_step()]
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn controls(&self) -> &NavigationControls {
        &self.controls
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn renderer(&self) -> &StepRenderer {
        &self.renderer
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn labels(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| step.display_label(index))
            .collect()
    }

    pub fn markers(&self) -> Vec<StepMarker> {
        StepIndicator::markers(&self.session, &self.labels())
    }

    pub fn controls_view(&self) -> ControlsView {
        self.controls.view(&self.session)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            title: self.title.clone(),
            current_step_id: self.current_step().id.clone(),
            session: self.session.snapshot(),
            markers: self.markers(),
            controls: self.controls_view(),
            mounted_step: self.renderer.mounted_index(),
            values: self.store.clone(),
        }
    }

    pub(crate) fn sync_view(&mut self) -> Option<MountChange> {
        self.renderer
            .sync(self.session.current_step(), &self.steps, &self.store)
    }
}

mod navigation;
mod validation_runtime;
mod value_sync;
