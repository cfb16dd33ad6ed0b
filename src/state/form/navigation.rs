use super::MultiStepForm;
use crate::runtime::effect::Effect;
use crate::terminal::KeyEvent;
use crate::ui::indicator::StepIndicator;
use tracing::{debug, info};

impl MultiStepForm {
    pub(crate) fn advance(&mut self) -> Vec<Effect> {
        let from = self.session.current_step();
        let moved = self.session.advance();
        self.step_changed(from, moved)
    }

    pub(crate) fn retreat(&mut self) -> Vec<Effect> {
        let from = self.session.current_step();
        let moved = self.session.retreat();
        self.step_changed(from, moved)
    }

    /// Unconditional jump; only the indicator checks completion.
    pub(crate) fn jump_to(&mut self, index: usize) -> Vec<Effect> {
        let from = self.session.current_step();
        let moved = self.session.jump_to(index);
        self.step_changed(from, moved)
    }

    pub(crate) fn click_indicator(&mut self, index: usize) -> Vec<Effect> {
        let from = self.session.current_step();
        let moved = StepIndicator::click(&mut self.session, index);
        if !moved {
            debug!(index, current = from, "ignored click on locked step");
        }
        self.step_changed(from, moved)
    }

    pub(crate) fn set_complete(&mut self, index: usize, complete: bool) -> Vec<Effect> {
        if self.session.set_complete(index, complete) {
            vec![Effect::CompletionChanged { index, complete }]
        } else {
            Vec::new()
        }
    }

    /// Next on inner steps, submit on the last one. Only steps that declare
    /// validators are gated; others have nothing to reveal.
    pub(crate) fn activate_primary(&mut self) -> Vec<Effect> {
        if self.controls.disabled {
            return Vec::new();
        }
        let current = self.session.current_step();
        if self.gate_on_completion
            && !self.steps[current].validators.is_empty()
            && !self.session.is_complete(current)
        {
            return self.reveal_current_errors();
        }
        if self.session.is_last_step() {
            self.submit()
        } else {
            self.advance()
        }
    }

    pub(crate) fn activate_back(&mut self) -> Vec<Effect> {
        if self.controls.disabled {
            return Vec::new();
        }
        self.retreat()
    }

    /// Hands the collected values to the completion callback. Incomplete
    /// steps do not block submission here.
    pub(crate) fn submit(&mut self) -> Vec<Effect> {
        self.submissions += 1;
        info!(
            fields = self.store.len(),
            completed = self.session.completion_store().completed_count(),
            total = self.session.total_steps(),
            "form submitted"
        );
        if let Some(handler) = self.on_submit.as_mut() {
            handler(&self.store);
        }
        vec![Effect::Submitted]
    }

    /// Drops values and errors and returns to the initial step with fresh
    /// completion flags.
    pub(crate) fn reset(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(previous) = self.renderer.unmount() {
            effects.push(Effect::StepUnmounted(previous));
        }
        self.session = self.initial_session.clone();
        self.store.clear();
        self.validation.clear();
        for reported in &mut self.reported {
            reported.clear();
        }
        self.revalidate();
        info!(step = self.session.current_step(), "form reset");
        effects.push(Effect::Reset);
        effects
    }

    /// Forwards a key to the mounted view and stores the values it reports.
    pub(crate) fn dispatch_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(change) = self.sync_view() {
            if let Some(previous) = change.unmounted {
                effects.push(Effect::StepUnmounted(previous));
            }
            effects.push(Effect::StepMounted(change.mounted));
        }

        let Some(view) = self.renderer.view_mut() else {
            return effects;
        };
        let result = view.on_key(key);

        for change in result.changes {
            effects.extend(self.set_value(change));
        }
        if result.handled {
            effects.push(Effect::RequestRender);
        }
        effects
    }

    fn step_changed(&mut self, from: usize, moved: bool) -> Vec<Effect> {
        if !moved || self.session.current_step() == from {
            return Vec::new();
        }
        self.validation.clear_step_errors();
        vec![Effect::StepChanged {
            from,
            to: self.session.current_step(),
        }]
    }
}
