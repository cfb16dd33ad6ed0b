use crate::core::{FieldId, Value};
use crate::runtime::event::ValueChange;
use crate::state::store::ValueStore;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::text_edit;
use crate::ui::view::{StepView, ViewContext, ViewResult};
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "› ";
const BLANK_MARKER: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn text(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            kind: FieldKind::Text,
        }
    }

    pub fn toggle(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Toggle,
            ..Self::text(id, label)
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A vertical list of text and toggle fields.
///
/// Focus and cursor belong to the view and reset on every mount; field values
/// are read back from the store in [`StepView::on_mount`].
pub struct FieldsView {
    fields: Vec<FieldSpec>,
    drafts: Vec<String>,
    toggles: Vec<bool>,
    focus: usize,
    cursor: usize,
}

impl FieldsView {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let len = fields.len();
        Self {
            fields,
            drafts: vec![String::new(); len],
            toggles: vec![false; len],
            focus: 0,
            cursor: 0,
        }
    }

    pub fn focused_field(&self) -> Option<&FieldSpec> {
        self.fields.get(self.focus)
    }

    pub fn draft(&self, index: usize) -> Option<&str> {
        self.drafts.get(index).map(String::as_str)
    }

    fn focus_to(&mut self, index: usize) -> bool {
        if index >= self.fields.len() || index == self.focus {
            return false;
        }
        self.focus = index;
        self.cursor = text_edit::char_count(&self.drafts[index]);
        true
    }

    fn text_changed(&self) -> ViewResult {
        let field = &self.fields[self.focus];
        ViewResult::with_change(ValueChange::new(
            field.id.clone(),
            Value::Text(self.drafts[self.focus].clone()),
        ))
    }

    fn edit_text(&mut self, key: KeyEvent) -> ViewResult {
        let value = &mut self.drafts[self.focus];
        let cursor = &mut self.cursor;
        match key.code {
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                text_edit::insert_char(value, cursor, ch);
                self.text_changed()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(value, cursor) {
                    return self.text_changed();
                }
                ViewResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(value, cursor) {
                    return self.text_changed();
                }
                ViewResult::ignored()
            }
            KeyCode::Left => move_result(text_edit::move_left(cursor, value)),
            KeyCode::Right => move_result(text_edit::move_right(cursor, value)),
            KeyCode::Home => {
                *cursor = 0;
                ViewResult::handled()
            }
            KeyCode::End => {
                *cursor = text_edit::char_count(value);
                ViewResult::handled()
            }
            _ => ViewResult::ignored(),
        }
    }

    fn flip_toggle(&mut self) -> ViewResult {
        let flag = &mut self.toggles[self.focus];
        *flag = !*flag;
        ViewResult::with_change(ValueChange::new(
            self.fields[self.focus].id.clone(),
            Value::Bool(*flag),
        ))
    }
}

fn move_result(moved: bool) -> ViewResult {
    if moved {
        ViewResult::handled()
    } else {
        ViewResult::ignored()
    }
}

impl StepView for FieldsView {
    fn on_mount(&mut self, store: &ValueStore) {
        for (index, field) in self.fields.iter().enumerate() {
            let value = store.get(field.id.as_str());
            match field.kind {
                FieldKind::Text => {
                    self.drafts[index] = value.map(Value::to_text).unwrap_or_default();
                }
                FieldKind::Toggle => {
                    self.toggles[index] = value.and_then(Value::as_bool).unwrap_or(false);
                }
            }
        }
        self.focus = 0;
        self.cursor = self
            .drafts
            .first()
            .map(|draft| text_edit::char_count(draft))
            .unwrap_or(0);
    }

    fn draw(&self, ctx: &ViewContext) -> Vec<SpanLine> {
        let mut lines = Vec::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            let focused = index == self.focus;
            let mut line = SpanLine::new();
            let label_style = if focused {
                ctx.theme.focused
            } else {
                ctx.theme.label
            };
            line.push(Span::styled(
                if focused { FOCUS_MARKER } else { BLANK_MARKER },
                label_style,
            ));
            line.push(Span::styled(format!("{}: ", field.label), label_style));

            match field.kind {
                FieldKind::Text => {
                    let draft = &self.drafts[index];
                    if draft.is_empty() {
                        if let Some(placeholder) = &field.placeholder {
                            line.push(Span::styled(placeholder.as_str(), ctx.theme.placeholder));
                        }
                    } else {
                        line.push(Span::new(draft.as_str()));
                    }
                }
                FieldKind::Toggle => {
                    let mark = if self.toggles[index] { "[x]" } else { "[ ]" };
                    line.push(Span::new(mark));
                }
            }

            if let Some(error) = ctx.validation.visible_error(field.id.as_str()) {
                line.push(Span::styled(format!("  ✗ {error}"), ctx.theme.error));
            }
            lines.push(line);
        }
        lines
    }

    fn on_key(&mut self, key: KeyEvent) -> ViewResult {
        let Some(kind) = self.focused_field().map(|field| field.kind) else {
            return ViewResult::ignored();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => move_result(self.focus_to(self.focus + 1)),
            KeyCode::BackTab | KeyCode::Up => {
                move_result(self.focus > 0 && self.focus_to(self.focus - 1))
            }
            _ => match kind {
                FieldKind::Text => self.edit_text(key),
                FieldKind::Toggle if key.code == KeyCode::Char(' ') => self.flip_toggle(),
                FieldKind::Toggle => ViewResult::ignored(),
            },
        }
    }

    fn cursor(&self) -> Option<CursorPos> {
        let field = self.fields.get(self.focus)?;
        if field.kind != FieldKind::Text {
            return None;
        }
        let prefix = FOCUS_MARKER.width() + field.label.width() + 2;
        let offset = text_edit::cursor_width(&self.drafts[self.focus], self.cursor);
        Some(CursorPos {
            col: (prefix + offset) as u16,
            row: self.focus as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldSpec, FieldsView};
    use crate::core::Value;
    use crate::state::store::ValueStore;
    use crate::state::validation::ValidationState;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::ui::span::line_text;
    use crate::ui::theme::Theme;
    use crate::ui::view::{StepView, ViewContext};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    fn view() -> FieldsView {
        FieldsView::new(vec![
            FieldSpec::text("case_number", "Case number").with_placeholder("CV-2024-0001"),
            FieldSpec::toggle("urgent", "Urgent"),
        ])
    }

    #[test]
    fn typing_reports_value_changes() {
        let mut view = view();
        view.on_mount(&ValueStore::new());
        view.on_key(key(KeyCode::Char('C')));
        let result = view.on_key(key(KeyCode::Char('V')));
        assert!(result.handled);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].target.as_str(), "case_number");
        assert_eq!(result.changes[0].value, Value::from("CV"));
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut view = view();
        view.on_mount(&ValueStore::new());
        let result = view.on_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert!(!result.handled);
        assert_eq!(view.draft(0), Some(""));
    }

    #[test]
    fn toggle_flips_with_space() {
        let mut view = view();
        view.on_mount(&ValueStore::new());
        assert!(view.on_key(key(KeyCode::Tab)).handled);
        let result = view.on_key(key(KeyCode::Char(' ')));
        assert_eq!(result.changes[0].value, Value::Bool(true));
        assert!(!view.on_key(key(KeyCode::Char('x'))).handled);
    }

    #[test]
    fn focus_stops_at_edges() {
        let mut view = view();
        view.on_mount(&ValueStore::new());
        assert!(!view.on_key(key(KeyCode::Up)).handled);
        assert!(view.on_key(key(KeyCode::Down)).handled);
        assert!(!view.on_key(key(KeyCode::Down)).handled);
        assert_eq!(view.focused_field().map(|f| f.id.as_str()), Some("urgent"));
    }

    #[test]
    fn mount_hydrates_from_store_and_resets_focus() {
        let mut store = ValueStore::new();
        store.set("case_number", Value::from("CR-2023-0440"));
        store.set("urgent", Value::Bool(true));

        let mut view = view();
        view.on_mount(&store);
        assert_eq!(view.draft(0), Some("CR-2023-0440"));
        let cursor = view.cursor().expect("cursor on text field");
        assert_eq!(cursor.row, 0);
        assert_eq!(cursor.col as usize, 2 + "Case number".len() + 2 + 12);

        let validation = ValidationState::default();
        let theme = Theme::default();
        let ctx = ViewContext {
            store: &store,
            validation: &validation,
            theme: &theme,
        };
        let text: Vec<String> = view.draw(&ctx).iter().map(|l| line_text(l)).collect();
        assert_eq!(
            text,
            vec!["› Case number: CR-2023-0440", "  Urgent: [x]"]
        );
    }

    #[test]
    fn placeholder_and_revealed_errors_are_drawn() {
        let store = ValueStore::new();
        let mut validation = ValidationState::default();
        validation.set_error("case_number", "Case number is required");
        validation.reveal([&crate::core::FieldId::from("case_number")]);
        let theme = Theme::default();
        let ctx = ViewContext {
            store: &store,
            validation: &validation,
            theme: &theme,
        };
        let mut view = view();
        view.on_mount(&store);
        let first = line_text(&view.draw(&ctx)[0]);
        assert_eq!(
            first,
            "› Case number: CV-2024-0001  ✗ Case number is required"
        );
    }
}
