use crate::state::session::FormSession;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    Next,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub back: Option<Button>,
    pub primary: Button,
    pub primary_action: PrimaryAction,
}

/// Back / Next / Submit bar. Labels and visibility come from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationControls {
    pub show_back_on_first: bool,
    pub back_label: String,
    pub next_label: String,
    pub submit_label: String,
    pub disabled: bool,
}

impl Default for NavigationControls {
    fn default() -> Self {
        Self {
            show_back_on_first: false,
            back_label: "Back".to_string(),
            next_label: "Next".to_string(),
            submit_label: "Submit".to_string(),
            disabled: false,
        }
    }
}

impl NavigationControls {
    pub fn primary_action(session: &FormSession) -> PrimaryAction {
        if session.is_last_step() {
            PrimaryAction::Submit
        } else {
            PrimaryAction::Next
        }
    }

    pub fn view(&self, session: &FormSession) -> ControlsView {
        let back = (!session.is_first_step() || self.show_back_on_first).then(|| Button {
            label: self.back_label.clone(),
            enabled: !self.disabled && !session.is_first_step(),
        });
        let primary_action = Self::primary_action(session);
        let label = match primary_action {
            PrimaryAction::Next => self.next_label.clone(),
            PrimaryAction::Submit => self.submit_label.clone(),
        };
        ControlsView {
            back,
            primary: Button {
                label,
                enabled: !self.disabled,
            },
            primary_action,
        }
    }

    pub fn draw(view: &ControlsView, theme: &Theme) -> SpanLine {
        let mut line = SpanLine::new();
        if let Some(back) = &view.back {
            line.push(button_span(back, theme));
            line.push(Span::new("  "));
        }
        line.push(button_span(&view.primary, theme));
        line
    }
}

fn button_span(button: &Button, theme: &Theme) -> Span {
    let style = if button.enabled {
        theme.button
    } else {
        theme.button_disabled
    };
    Span::styled(format!("[ {} ]", button.label), style)
}
