use crate::state::form::MultiStepForm;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::controls::NavigationControls;
use crate::ui::indicator::StepIndicator;
use crate::ui::span::{Span, SpanLine};
use crate::ui::view::ViewContext;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    /// Title, indicator rail, the mounted step, step-level errors and the
    /// controls bar, top to bottom. Lines wider than the terminal are cut.
    pub fn render(form: &MultiStepForm, size: TerminalSize) -> RenderFrame {
        let theme = form.theme();
        let mut frame = RenderFrame::default();

        if let Some(title) = form.title() {
            frame.lines.push(vec![Span::styled(title, theme.title)]);
        }
        frame
            .lines
            .push(StepIndicator::draw(&form.markers(), theme));
        frame.lines.push(SpanLine::new());

        let ctx = ViewContext {
            store: form.store(),
            validation: form.validation(),
            theme,
        };
        let row_offset = frame.lines.len() as u16;
        let (step_lines, cursor) = form.renderer().build(form.steps(), &ctx);
        frame.cursor = cursor.map(|cursor| CursorPos {
            col: cursor.col,
            row: cursor.row.saturating_add(row_offset),
        });
        frame.lines.extend(step_lines);

        for error in form.validation().step_errors() {
            frame
                .lines
                .push(vec![Span::styled(format!("✗ {error}"), theme.error)]);
        }

        frame.lines.push(SpanLine::new());
        frame
            .lines
            .push(NavigationControls::draw(&form.controls_view(), theme));

        let width = size.width as usize;
        frame.lines = frame
            .lines
            .into_iter()
            .map(|line| clip_line(line, width))
            .collect();
        if let Some(cursor) = frame.cursor
            && cursor.col as usize >= width
        {
            frame.cursor = None;
        }
        frame
    }
}

fn clip_line(line: SpanLine, width: usize) -> SpanLine {
    let mut used = 0usize;
    let mut clipped = SpanLine::with_capacity(line.len());
    for span in line {
        if used >= width {
            break;
        }
        if used + span.width() <= width {
            used += span.width();
            clipped.push(span);
            continue;
        }
        let mut text = String::new();
        for ch in span.text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                break;
            }
            used += ch_width;
            text.push(ch);
        }
        clipped.push(Span::styled(text, span.style));
        break;
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::{Renderer, clip_line};
    use crate::core::Value;
    use crate::runtime::event::ValueChange;
    use crate::runtime::intent::Intent;
    use crate::state::form::MultiStepForm;
    use crate::state::step::StepDescriptor;
    use crate::terminal::TerminalSize;
    use crate::ui::fields_view::{FieldSpec, FieldsView};
    use crate::ui::span::{Span, line_text};
    use crate::ui::view::TextView;

    const WIDE: TerminalSize = TerminalSize {
        width: 80,
        height: 24,
    };

    fn form() -> MultiStepForm {
        MultiStepForm::new(vec![
            StepDescriptor::new("details", || {
                FieldsView::new(vec![FieldSpec::text("case_number", "Case number")])
            })
            .with_label("Details")
            .with_hint("Docket information")
            .require("case_number", "Case number is required")
            .validate(|ctx| {
                (ctx.text("case_number") == Some("CV-0"))
                    .then(|| crate::state::validation::ValidationIssue::step("Case CV-0 is sealed"))
            }),
            StepDescriptor::new("review", || TextView::new(["Ready to file."])).with_label("Review"),
        ])
        .expect("form")
        .with_title("New case request")
    }

    fn text(frame: &super::RenderFrame) -> Vec<String> {
        frame.lines.iter().map(|line| line_text(line)).collect()
    }

    #[test]
    fn renders_first_step_layout() {
        let frame = Renderer::render(&form(), WIDE);
        assert_eq!(
            text(&frame),
            vec![
                "New case request",
                "◆ 1 Details ─ ◇ 2 Review",
                "",
                "Details",
                "Docket information",
                "› Case number: ",
                "",
                "[ Next ]",
            ]
        );
        let cursor = frame.cursor.expect("cursor");
        assert_eq!(cursor.row, 5);
        assert_eq!(cursor.col as usize, 2 + "Case number: ".len());
    }

    #[test]
    fn revealed_step_errors_follow_the_step() {
        let mut form = form().gate_on_completion(true);
        form.dispatch(Intent::SetValue(ValueChange::new(
            "case_number",
            Value::from("CV-0"),
        )));
        form.dispatch(Intent::Primary);

        let lines = text(&Renderer::render(&form, WIDE));
        assert_eq!(lines[6], "✗ Case CV-0 is sealed");
        assert_eq!(form.session().current_step(), 0);
    }

    #[test]
    fn last_step_shows_back_and_submit() {
        let mut form = form();
        form.dispatch(Intent::Advance);
        let lines = text(&Renderer::render(&form, WIDE));
        assert_eq!(lines[1], "◇ 1 Details ─ ◆ 2 Review");
        assert_eq!(lines.last().map(String::as_str), Some("[ Back ]  [ Submit ]"));
    }

    #[test]
    fn clipping_respects_wide_chars() {
        let line = vec![Span::new("ab"), Span::new("法院x")];
        assert_eq!(line_text(&clip_line(line.clone(), 5)), "ab法");
        assert_eq!(line_text(&clip_line(line, 2)), "ab");
    }
}
