use crate::runtime::event::ValueChange;
use crate::state::store::ValueStore;
use crate::state::validation::ValidationState;
use crate::terminal::{CursorPos, KeyEvent};
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;

pub struct ViewContext<'a> {
    pub store: &'a ValueStore,
    pub validation: &'a ValidationState,
    pub theme: &'a Theme,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewResult {
    pub handled: bool,
    pub changes: Vec<ValueChange>,
}

impl ViewResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            changes: Vec::new(),
        }
    }

    pub fn with_change(change: ValueChange) -> Self {
        Self {
            handled: true,
            changes: vec![change],
        }
    }
}

/// Content of one mounted step.
///
/// A view is built by its step's content factory when the step becomes
/// active and dropped when it stops being active, so anything kept on the
/// view itself (focus, cursor, drafts) is transient. Values meant to outlive
/// navigation are reported through [`ViewResult::changes`] and land in the
/// shared [`ValueStore`].
pub trait StepView {
    fn on_mount(&mut self, _store: &ValueStore) {}

    fn draw(&self, ctx: &ViewContext) -> Vec<SpanLine>;

    fn on_key(&mut self, _key: KeyEvent) -> ViewResult {
        ViewResult::ignored()
    }

    /// Cursor relative to the first line returned by [`StepView::draw`].
    fn cursor(&self) -> Option<CursorPos> {
        None
    }
}

/// Static text content, mostly useful for summary and confirmation steps.
pub struct TextView {
    lines: Vec<String>,
}

impl TextView {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl StepView for TextView {
    fn draw(&self, _ctx: &ViewContext) -> Vec<SpanLine> {
        self.lines
            .iter()
            .map(|line| vec![crate::ui::span::Span::new(line.as_str())])
            .collect()
    }
}
