use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::reducer::Reducer;
use crate::state::form::MultiStepForm;

/// Intents issued during one event-handling turn.
///
/// All intents are reduced before the active step view is synced, so
/// observers only ever see the state after the whole batch.
#[derive(Debug, Default)]
pub struct UpdateBatch {
    intents: Vec<Intent>,
}

impl UpdateBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn commit(self, form: &mut MultiStepForm) -> Vec<Effect> {
        let mut effects = Vec::new();
        for intent in self.intents {
            effects.extend(Reducer::reduce(form, intent));
        }

        if let Some(change) = form.sync_view() {
            if let Some(previous) = change.unmounted {
                effects.push(Effect::StepUnmounted(previous));
            }
            effects.push(Effect::StepMounted(change.mounted));
        }

        let requested = effects.contains(&Effect::RequestRender);
        let changed = effects
            .iter()
            .any(|effect| !matches!(effect, Effect::Exit | Effect::RequestRender));
        effects.retain(|effect| *effect != Effect::RequestRender);
        if requested || changed {
            effects.push(Effect::RequestRender);
        }
        effects
    }
}
