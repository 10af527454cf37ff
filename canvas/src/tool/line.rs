//! Two-click line drawing.
//!
//! ```text
//! Idle ──mouse_down──▶ GotPoint1 ──mouse_down──▶ Idle
//!                        │  ▲
//!                        └──┘ mouse_move (preview)
//! ```
//!
//! The first click creates and persists a line anchored at the click. Moves
//! drag its end point for live preview; the second click fixes the end point.

#[cfg(test)]
#[path = "line_test.rs"]
mod line_test;

use crate::doc::Line;
use crate::engine::Engine;
use crate::event::Event;
use crate::tool::{Tool, ToolId};
use crate::viewport::Point;

/// Gesture state. The partially built line exists only while a gesture is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LineState {
    /// Waiting for the first click.
    #[default]
    Idle,
    /// First end point placed; `line` is the engine handle being edited.
    GotPoint1 { line: Line },
}

impl LineState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::GotPoint1 { .. } => "got_point1",
        }
    }
}

/// Effect of a transition. Each action implies its target state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAction {
    /// Create a line starting here, then enter `GotPoint1`.
    Begin(Point),
    /// Move the pending end point here and re-render; stay in `GotPoint1`.
    Preview(Point),
    /// Fix the end point here and re-render, then return to `Idle`.
    Finish(Point),
}

/// The transition table: what `event` does in `state`, if anything.
#[must_use]
pub fn transition(state: &LineState, event: &Event) -> Option<LineAction> {
    match (state, event) {
        (LineState::Idle, Event::MouseDown(p)) => Some(LineAction::Begin(p.canvas())),
        (LineState::GotPoint1 { .. }, Event::MouseMove(p)) => Some(LineAction::Preview(p.canvas())),
        (LineState::GotPoint1 { .. }, Event::MouseDown(p)) => Some(LineAction::Finish(p.canvas())),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct LineTool {
    state: LineState,
}

impl LineTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LineState {
        &self.state
    }

    /// The line being drawn, if a gesture is open.
    #[must_use]
    pub fn pending_line(&self) -> Option<&Line> {
        match &self.state {
            LineState::GotPoint1 { line } => Some(line),
            LineState::Idle => None,
        }
    }

    fn begin(&mut self, engine: &mut dyn Engine, at: Point) {
        let mut line = match engine.create_line() {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "line tool could not create line");
                return;
            }
        };
        line.set_start(at);
        persist(engine, &line);
        tracing::debug!(id = %line.id, x = at.x, y = at.y, "line started");
        self.state = LineState::GotPoint1 { line };
    }

    fn preview(&mut self, engine: &mut dyn Engine, at: Point) {
        if let LineState::GotPoint1 { line } = &mut self.state {
            line.set_end(at);
            persist(engine, line);
            engine.render_current_page();
        }
    }

    fn finish(&mut self, engine: &mut dyn Engine, at: Point) {
        if let LineState::GotPoint1 { mut line } = std::mem::take(&mut self.state) {
            line.set_end(at);
            persist(engine, &line);
            engine.render_current_page();
            tracing::debug!(id = %line.id, x = at.x, y = at.y, "line finished");
        }
    }
}

impl Tool for LineTool {
    fn name(&self) -> &str {
        ToolId::Line.as_str()
    }

    fn stop(&mut self) {
        if let LineState::GotPoint1 { line } = std::mem::take(&mut self.state) {
            tracing::debug!(id = %line.id, "line tool stopped mid-gesture; pending line dropped");
        }
    }

    fn handle_event(&mut self, event: &Event, engine: &mut dyn Engine) {
        let Some(action) = transition(&self.state, event) else {
            tracing::trace!(state = self.state.name(), event = %event.kind(), "line tool ignored event");
            return;
        };
        match action {
            LineAction::Begin(at) => self.begin(engine, at),
            LineAction::Preview(at) => self.preview(engine, at),
            LineAction::Finish(at) => self.finish(engine, at),
        }
    }
}

fn persist(engine: &mut dyn Engine, line: &Line) {
    if let Err(e) = engine.patch_node(line) {
        tracing::warn!(error = %e, id = %line.id, "failed to persist line");
    }
}
