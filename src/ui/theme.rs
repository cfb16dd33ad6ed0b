use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub prompt: Style,
    pub hint: Style,
    pub label: Style,
    pub focused: Style,
    pub placeholder: Style,
    pub error: Style,
    pub marker_active: Style,
    pub marker_complete: Style,
    pub marker_locked: Style,
    pub button: Style,
    pub button_disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            prompt: Style::new().bold(),
            hint: Style::new().color(Color::DarkGrey),
            label: Style::new(),
            focused: Style::new().color(Color::Cyan),
            placeholder: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            marker_active: Style::new().color(Color::Green).bold(),
            marker_complete: Style::new().color(Color::Green),
            marker_locked: Style::new().color(Color::DarkGrey),
            button: Style::new().color(Color::Cyan).bold(),
            button_disabled: Style::new().color(Color::DarkGrey).dim(),
        }
    }
}
