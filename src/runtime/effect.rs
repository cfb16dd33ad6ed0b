use crate::core::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StepChanged { from: usize, to: usize },
    StepUnmounted(usize),
    StepMounted(usize),
    CompletionChanged { index: usize, complete: bool },
    ValueChanged(FieldId),
    ErrorsRevealed(usize),
    Submitted,
    Reset,
    Exit,
    RequestRender,
}
