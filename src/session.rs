//! Drives an [`Editor`] over an in-memory [`Document`] from parsed script input.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::doc::{Document, Line, NodeId};
use canvas::editor::{Dispatch, Editor, EditorError};
use canvas::engine::Engine;
use canvas::event::Event;
use serde::Serialize;
use tracing::debug;

use crate::script::{Input, PointerKind};

/// Start-up settings for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tool: String,
    pub page: String,
    pub surface: String,
}

/// Final state printed once the script has run.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub page: &'a str,
    pub tool: Option<&'a str>,
    pub zoom: f64,
    pub origin: [f64; 2],
    pub lines: Vec<&'a Line>,
    pub selection: Vec<NodeId>,
}

pub struct Session {
    editor: Editor<Document>,
}

impl Session {
    /// Build a document with one page and activate the initial tool.
    pub fn start(config: &SessionConfig) -> Result<Self, EditorError> {
        let mut editor = Editor::new(Document::with_page(config.page.as_str()));
        editor.init(&config.surface);
        editor.resize_canvas(config.canvas_width, config.canvas_height);
        editor.activate_tool(&config.tool)?;
        Ok(Self { editor })
    }

    /// Feed one input through the editor.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Pointer { kind, at } => {
                let pointer = self.editor.pointer_at(at);
                let event = match kind {
                    PointerKind::Down => Event::MouseDown(pointer),
                    PointerKind::Move => Event::MouseMove(pointer),
                    PointerKind::Up => Event::MouseUp(pointer),
                };
                self.dispatch(event);
            }
            Input::Key { pressed: true, code } => self.dispatch(Event::KeyDown { code }),
            Input::Key { pressed: false, code } => self.dispatch(Event::KeyUp { code }),
            Input::Wheel { delta_y, at } => self.editor.zoom_viewport(delta_y, at.x, at.y),
            Input::Pan { delta_x, delta_y } => self.editor.pan_viewport(delta_x, delta_y),
            Input::Resize { width, height } => self.editor.resize_canvas(width, height),
            Input::Command(text) => self.dispatch(Event::command(text)),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let kind = event.kind();
        match self.editor.dispatch_event(event) {
            Dispatch::Forwarded | Dispatch::ToolActivated(_) => {}
            Dispatch::NoActiveTool => debug!(%kind, "no active tool; event dropped"),
            Dispatch::ToolNotRecognized(name) => debug!(tool = %name, "command ignored"),
        }
    }

    #[must_use]
    pub fn editor(&self) -> &Editor<Document> {
        &self.editor
    }

    pub fn summary(&self) -> Summary<'_> {
        let doc = self.editor.engine();
        let viewport = self.editor.viewport();
        let origin = viewport.origin();
        Summary {
            page: doc.current_page().map_or("", |page| page.name.as_str()),
            tool: self.editor.active_tool_name(),
            zoom: viewport.zoom_factor(),
            origin: [origin.x, origin.y],
            lines: doc.current_lines(),
            selection: doc.get_selection().unwrap_or_default(),
        }
    }
}
