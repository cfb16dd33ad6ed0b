use super::MultiStepForm;
use crate::runtime::effect::Effect;
use crate::runtime::event::ValueChange;

impl MultiStepForm {
    /// Writes one value and re-runs validation. Unchanged values are a no-op.
    pub(crate) fn set_value(&mut self, change: ValueChange) -> Vec<Effect> {
        let ValueChange { target, value } = change;
        if !self.store.set(target.clone(), value) {
            return Vec::new();
        }
        let mut effects = vec![Effect::ValueChanged(target)];
        effects.extend(self.revalidate());
        effects
    }
}
