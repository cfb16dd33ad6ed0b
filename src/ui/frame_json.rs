use crate::state::form::MultiStepForm;
use crate::terminal::TerminalSize;
use crate::ui::renderer::RenderFrame;

pub fn frame_to_json(frame: &RenderFrame, size: TerminalSize) -> serde_json::Value {
    let cursor = frame.cursor.map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    serde_json::json!({
        "terminal": {
            "width": size.width,
            "height": size.height,
        },
        "cursor": cursor,
        "lines": frame.lines,
    })
}

/// Rendered frame plus the form's derived state, for headless hosts.
pub fn form_to_json(
    form: &MultiStepForm,
    frame: &RenderFrame,
    size: TerminalSize,
) -> crate::error::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "form": serde_json::to_value(form.snapshot())?,
        "frame": frame_to_json(frame, size),
    }))
}
