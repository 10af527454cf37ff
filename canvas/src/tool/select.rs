//! Click-to-select tool.
//!
//! Single state. Each `mouse_down` drops a marker line anchored at the click,
//! appends its id to the current selection and re-renders. Everything else
//! is ignored.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::consts::SELECT_MARKER_EXTENT;
use crate::engine::Engine;
use crate::event::Event;
use crate::tool::{Tool, ToolId};
use crate::viewport::Point;

#[derive(Debug, Default)]
pub struct SelectTool;

impl SelectTool {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn select_at(engine: &mut dyn Engine, at: Point) {
        let mut marker = match engine.create_line() {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "select tool could not create marker");
                return;
            }
        };
        marker.set_start(at);
        marker.set_end(Point::new(at.x + SELECT_MARKER_EXTENT, at.y + SELECT_MARKER_EXTENT));
        if let Err(e) = engine.patch_node(&marker) {
            tracing::warn!(error = %e, id = %marker.id, "failed to persist marker");
        }

        match engine.get_selection() {
            Ok(mut selection) => {
                selection.push(marker.id);
                if let Err(e) = engine.set_selection(selection) {
                    tracing::warn!(error = %e, "failed to update selection");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to read selection"),
        }

        engine.render_current_page();
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &str {
        ToolId::Select.as_str()
    }

    fn handle_event(&mut self, event: &Event, engine: &mut dyn Engine) {
        if let Event::MouseDown(p) = event {
            Self::select_at(engine, p.canvas());
        }
    }
}
