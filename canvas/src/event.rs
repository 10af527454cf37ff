//! Input events: the closed set of interactions the editor understands.
//!
//! The host normalizes raw pointer, keyboard and command-line input into an
//! [`Event`] before handing it to [`crate::editor::Editor::dispatch_event`].
//! Pointer events carry both client (screen) and canvas (document)
//! coordinates so tools never need to consult the viewport themselves.
//!
//! On the wire an event is an internally tagged JSON object, for example
//! `{"type":"mouse_down","clientX":10,"clientY":20,"canvasX":10,"canvasY":20}`
//! or `{"type":"command","command":"line"}`.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::viewport::{Point, Viewport};

/// Pointer position in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    /// Horizontal position in client (screen) pixels.
    pub client_x: f64,
    /// Vertical position in client (screen) pixels.
    pub client_y: f64,
    /// Horizontal position in canvas (document) units.
    pub canvas_x: f64,
    /// Vertical position in canvas (document) units.
    pub canvas_y: f64,
}

impl PointerEvent {
    /// Build a pointer payload for a client point, resolving canvas
    /// coordinates through the viewport.
    #[must_use]
    pub fn at(client: Point, viewport: &Viewport) -> Self {
        let canvas = viewport.client_to_canvas(client);
        Self {
            client_x: client.x,
            client_y: client.y,
            canvas_x: canvas.x,
            canvas_y: canvas.y,
        }
    }

    #[must_use]
    pub fn client(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }

    #[must_use]
    pub fn canvas(&self) -> Point {
        Point::new(self.canvas_x, self.canvas_y)
    }
}

/// A single normalized input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Free text entered on the command line.
    Command { command: String },
    /// Primary button pressed.
    MouseDown(PointerEvent),
    /// Pointer moved.
    MouseMove(PointerEvent),
    /// Primary button released.
    MouseUp(PointerEvent),
    /// Key pressed. `code` is the key name as reported by the host (e.g. `"Escape"`).
    KeyDown {
        #[serde(rename = "keyCode")]
        code: String,
    },
    /// Key released.
    KeyUp {
        #[serde(rename = "keyCode")]
        code: String,
    },
}

impl Event {
    /// Convenience constructor for a command-line event.
    #[must_use]
    pub fn command(text: impl Into<String>) -> Self {
        Self::Command { command: text.into() }
    }

    /// The tag of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Command { .. } => EventKind::Command,
            Self::MouseDown(_) => EventKind::MouseDown,
            Self::MouseMove(_) => EventKind::MouseMove,
            Self::MouseUp(_) => EventKind::MouseUp,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::KeyUp { .. } => EventKind::KeyUp,
        }
    }

    /// The pointer payload, if this is a pointer event.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::MouseDown(p) | Self::MouseMove(p) | Self::MouseUp(p) => Some(p),
            Self::Command { .. } | Self::KeyDown { .. } | Self::KeyUp { .. } => None,
        }
    }
}

/// Event tag without payload, used for logging and transition lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Command,
    MouseDown,
    MouseMove,
    MouseUp,
    KeyDown,
    KeyUp,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::MouseDown => "mouse_down",
            Self::MouseMove => "mouse_move",
            Self::MouseUp => "mouse_up",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
