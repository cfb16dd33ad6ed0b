use crate::state::step::StepDescriptor;
use crate::state::store::ValueStore;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::view::{StepView, ViewContext};
use tracing::debug;

struct MountedStep {
    index: usize,
    generation: u64,
    view: Box<dyn StepView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountChange {
    pub unmounted: Option<usize>,
    pub mounted: usize,
}

/// Keeps exactly one step view alive: the active one.
#[derive(Default)]
pub struct StepRenderer {
    mounted: Option<MountedStep>,
    mounts: u64,
}

impl StepRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts the step at `current` if it is not the mounted one already.
    /// The previous view is dropped before the new one is built.
    pub fn sync(
        &mut self,
        current: usize,
        steps: &[StepDescriptor],
        store: &ValueStore,
    ) -> Option<MountChange> {
        if self.mounted_index() == Some(current) {
            return None;
        }
        let step = steps.get(current)?;

        let unmounted = self.unmount();
        let mut view = step.mount();
        view.on_mount(store);
        self.mounts += 1;
        debug!(step = %step.id, index = current, generation = self.mounts, "mounted step");
        self.mounted = Some(MountedStep {
            index: current,
            generation: self.mounts,
            view,
        });

        Some(MountChange {
            unmounted,
            mounted: current,
        })
    }

    pub fn unmount(&mut self) -> Option<usize> {
        let previous = self.mounted.take()?;
        debug!(index = previous.index, "unmounted step");
        Some(previous.index)
    }

    pub fn mounted_index(&self) -> Option<usize> {
        self.mounted.as_ref().map(|mounted| mounted.index)
    }

    /// Increases on every mount, so a remounted step gets a new value.
    pub fn generation(&self) -> Option<u64> {
        self.mounted.as_ref().map(|mounted| mounted.generation)
    }

    pub fn view(&self) -> Option<&dyn StepView> {
        self.mounted.as_ref().map(|mounted| mounted.view.as_ref())
    }

    pub fn view_mut(&mut self) -> Option<&mut (dyn StepView + 'static)> {
        self.mounted.as_mut().map(|mounted| mounted.view.as_mut())
    }

    /// Header, hint and the mounted view's lines. Empty when nothing is mounted.
    pub fn build(
        &self,
        steps: &[StepDescriptor],
        ctx: &ViewContext,
    ) -> (Vec<SpanLine>, Option<CursorPos>) {
        let Some(mounted) = &self.mounted else {
            return (Vec::new(), None);
        };
        let Some(step) = steps.get(mounted.index) else {
            return (Vec::new(), None);
        };

        let mut lines = Vec::<SpanLine>::new();
        lines.push(vec![Span::styled(
            step.display_label(mounted.index),
            ctx.theme.prompt,
        )]);
        if let Some(hint) = step.hint.as_deref().filter(|hint| !hint.is_empty()) {
            lines.push(vec![Span::styled(hint, ctx.theme.hint)]);
        }

        let header_rows = lines.len() as u16;
        lines.extend(mounted.view.draw(ctx));
        let cursor = mounted.view.cursor().map(|cursor| CursorPos {
            col: cursor.col,
            row: cursor.row.saturating_add(header_rows),
        });
        (lines, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::StepRenderer;
    use crate::state::step::StepDescriptor;
    use crate::state::store::ValueStore;
    use crate::state::validation::ValidationState;
    use crate::ui::span::line_text;
    use crate::ui::theme::Theme;
    use crate::ui::view::{TextView, ViewContext};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracked_steps(log: &Rc<RefCell<Vec<&'static str>>>) -> Vec<StepDescriptor> {
        ["details", "hearing", "evidence"]
            .into_iter()
            .map(|id| {
                let log = Rc::clone(log);
                StepDescriptor::new(id, move || {
                    log.borrow_mut().push(id);
                    TextView::new([format!("{id} body")])
                })
                .with_label(id.to_uppercase())
            })
            .collect()
    }

    #[test]
    fn only_active_step_is_constructed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = tracked_steps(&log);
        let store = ValueStore::new();
        let mut renderer = StepRenderer::new();

        let change = renderer.sync(1, &steps, &store).expect("mount");
        assert_eq!(change.unmounted, None);
        assert_eq!(change.mounted, 1);
        assert_eq!(*log.borrow(), vec!["hearing"]);
    }

    #[test]
    fn sync_is_idempotent_for_same_step() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = tracked_steps(&log);
        let store = ValueStore::new();
        let mut renderer = StepRenderer::new();

        renderer.sync(0, &steps, &store);
        assert!(renderer.sync(0, &steps, &store).is_none());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn switching_steps_remounts_with_new_generation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = tracked_steps(&log);
        let store = ValueStore::new();
        let mut renderer = StepRenderer::new();

        renderer.sync(0, &steps, &store);
        let first = renderer.generation().expect("generation");
        let change = renderer.sync(2, &steps, &store).expect("switch");
        assert_eq!(change.unmounted, Some(0));
        renderer.sync(0, &steps, &store);
        let again = renderer.generation().expect("generation");

        assert!(again > first);
        assert_eq!(*log.borrow(), vec!["details", "evidence", "details"]);
    }

    #[test]
    fn out_of_range_index_keeps_current_view() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = tracked_steps(&log);
        let store = ValueStore::new();
        let mut renderer = StepRenderer::new();

        renderer.sync(0, &steps, &store);
        assert!(renderer.sync(9, &steps, &store).is_none());
        assert_eq!(renderer.mounted_index(), Some(0));
    }

    #[test]
    fn build_renders_label_and_body() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = tracked_steps(&log);
        let store = ValueStore::new();
        let validation = ValidationState::default();
        let theme = Theme::default();
        let ctx = ViewContext {
            store: &store,
            validation: &validation,
            theme: &theme,
        };
        let mut renderer = StepRenderer::new();
        assert!(renderer.build(&steps, &ctx).0.is_empty());

        renderer.sync(1, &steps, &store);
        let (lines, cursor) = renderer.build(&steps, &ctx);
        let text: Vec<String> = lines.iter().map(|line| line_text(line)).collect();
        assert_eq!(text, vec!["HEARING", "hearing body"]);
        assert!(cursor.is_none());
    }
}
