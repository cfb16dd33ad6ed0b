use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::form::MultiStepForm;

pub struct Reducer;

impl Reducer {
    /// Applies one intent to the form. Mounting the active step view is left
    /// to the enclosing batch.
    pub fn reduce(form: &mut MultiStepForm, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Advance => form.advance(),
            Intent::Retreat => form.retreat(),
            Intent::JumpTo(index) => form.jump_to(index),
            Intent::IndicatorClick(index) => form.click_indicator(index),
            Intent::SetComplete { index, complete } => form.set_complete(index, complete),
            Intent::SetValue(change) => form.set_value(change),
            Intent::Primary => form.activate_primary(),
            Intent::Back => form.activate_back(),
            Intent::Submit => form.submit(),
            Intent::RevealErrors => form.reveal_current_errors(),
            Intent::Reset => form.reset(),
            Intent::InputKey(key) => form.dispatch_key(key),
            Intent::Exit => vec![Effect::Exit],
            Intent::Noop => vec![],
        }
    }
}
