use crate::runtime::event::ValueChange;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Advance,
    Retreat,
    JumpTo(usize),
    /// Jump request coming from a step marker; ignored for locked steps.
    IndicatorClick(usize),
    SetComplete { index: usize, complete: bool },
    SetValue(ValueChange),
    /// The primary control: Next before the last step, Submit on it.
    Primary,
    /// The Back control.
    Back,
    Submit,
    RevealErrors,
    Reset,
    InputKey(KeyEvent),
    Exit,
    Noop,
}
