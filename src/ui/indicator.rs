use crate::state::session::FormSession;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerState {
    Active,
    Complete,
    Locked,
}

impl MarkerState {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Active => "◆",
            Self::Complete => "◈",
            Self::Locked => "◇",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    pub index: usize,
    pub label: String,
    pub state: MarkerState,
    pub navigable: bool,
}

/// Derived view over a session: one marker per step. Holds no state.
pub struct StepIndicator;

impl StepIndicator {
    pub fn marker_state(session: &FormSession, index: usize) -> MarkerState {
        if index == session.current_step() {
            MarkerState::Active
        } else if session.is_complete(index) {
            MarkerState::Complete
        } else {
            MarkerState::Locked
        }
    }

    /// A step can be revisited once reached or finished, never skipped into.
    pub fn is_navigable(session: &FormSession, index: usize) -> bool {
        index < session.total_steps()
            && (session.is_complete(index) || index <= session.current_step())
    }

    /// `labels` may be shorter than the step count; missing ones read "Step N".
    pub fn markers(session: &FormSession, labels: &[String]) -> Vec<StepMarker> {
        (0..session.total_steps())
            .map(|index| StepMarker {
                index,
                label: labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("Step {}", index + 1)),
                state: Self::marker_state(session, index),
                navigable: Self::is_navigable(session, index),
            })
            .collect()
    }

    /// Jumps to `index` if its marker is clickable. Returns whether it moved.
    pub fn click(session: &mut FormSession, index: usize) -> bool {
        if !Self::is_navigable(session, index) {
            return false;
        }
        session.jump_to(index)
    }

    pub fn draw(markers: &[StepMarker], theme: &Theme) -> SpanLine {
        let mut line = SpanLine::new();
        for (position, marker) in markers.iter().enumerate() {
            if position > 0 {
                line.push(Span::styled(" ─ ", theme.marker_locked));
            }
            let style = match marker.state {
                MarkerState::Active => theme.marker_active,
                MarkerState::Complete => theme.marker_complete,
                MarkerState::Locked => theme.marker_locked,
            };
            line.push(Span::styled(
                format!("{} {} {}", marker.state.symbol(), marker.index + 1, marker.label),
                style,
            ));
        }
        line
    }
}
