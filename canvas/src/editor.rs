//! The editor: owns the active tool and the viewport, and routes events.
//!
//! `command` events never reach the active tool. They are handed to a
//! single-use [`CommandTool`], which switches tools by name. Every other
//! event is forwarded unchanged to the active tool, or dropped when no tool
//! is active.
//!
//! The editor is also the only writer of the [`Viewport`]. After each
//! viewport change it mirrors the new state into the engine and, for pan
//! and zoom, requests a re-render.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::engine::Engine;
use crate::event::{Event, PointerEvent};
use crate::tool::{CommandTool, Tool, ToolFactory};
use crate::viewport::{Point, Viewport};

/// Failure reported by [`Editor::activate_tool`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// The name is not in the tool registry. The active tool is unchanged.
    #[error("tool {0} not recognized")]
    UnknownTool(String),
}

/// What [`Editor::dispatch_event`] did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Handed to the active tool.
    Forwarded,
    /// Dropped because no tool is active.
    NoActiveTool,
    /// A command switched to the named tool.
    ToolActivated(String),
    /// A command named an unknown tool; nothing changed.
    ToolNotRecognized(String),
}

pub struct Editor<E: Engine> {
    engine: E,
    viewport: Viewport,
    factory: ToolFactory,
    active: Option<Box<dyn Tool>>,
}

impl<E: Engine> Editor<E> {
    /// An editor over `engine` with the built-in tools and a default viewport.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self::with_factory(engine, ToolFactory::default())
    }

    /// An editor with a custom tool registry.
    #[must_use]
    pub fn with_factory(mut engine: E, factory: ToolFactory) -> Self {
        let viewport = Viewport::default();
        engine.sync_viewport(&viewport);
        Self { engine, viewport, factory, active: None }
    }

    // --- Tools ---

    /// Make the named tool active, stopping the current one first.
    ///
    /// Unknown names leave the active tool untouched and return
    /// [`EditorError::UnknownTool`].
    pub fn activate_tool(&mut self, name: &str) -> Result<(), EditorError> {
        let Some(mut tool) = self.factory.create(name) else {
            tracing::warn!(tool = name, "tool not recognized");
            return Err(EditorError::UnknownTool(name.to_string()));
        };
        if let Some(mut previous) = self.active.take() {
            tracing::debug!(tool = previous.name(), "stopping tool");
            previous.stop();
        }
        tool.start();
        tracing::info!(tool = tool.name(), "tool activated");
        self.active = Some(tool);
        Ok(())
    }

    /// Route one event. Never fails; unknown tool names are reported in the outcome.
    pub fn dispatch_event(&mut self, event: Event) -> Dispatch {
        if let Event::Command { command } = event {
            return match CommandTool::new(self).run(&command) {
                Ok(()) => Dispatch::ToolActivated(command),
                Err(_) => Dispatch::ToolNotRecognized(command),
            };
        }
        let Some(tool) = self.active.as_mut() else {
            tracing::trace!(event = %event.kind(), "no active tool; event dropped");
            return Dispatch::NoActiveTool;
        };
        tool.handle_event(&event, &mut self.engine);
        Dispatch::Forwarded
    }

    #[must_use]
    pub fn active_tool(&self) -> Option<&dyn Tool> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn active_tool_name(&self) -> Option<&str> {
        self.active.as_deref().map(|tool| tool.name())
    }

    #[must_use]
    pub fn factory(&self) -> &ToolFactory {
        &self.factory
    }

    // --- Engine ---

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // --- Viewport ---

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Bind the viewport to a host surface.
    pub fn init(&mut self, surface_id: &str) {
        self.viewport.set_surface_id(surface_id);
        self.engine.sync_viewport(&self.viewport);
        tracing::debug!(surface_id, "surface bound");
    }

    /// Zoom about a client point. See [`Viewport::zoom`].
    pub fn zoom_viewport(&mut self, delta_y: f64, client_x: f64, client_y: f64) {
        self.viewport.zoom(delta_y, client_x, client_y);
        tracing::debug!(zoom = self.viewport.zoom_factor(), "viewport zoomed");
        self.refresh();
    }

    /// Pan by a client-space delta. See [`Viewport::pan`].
    pub fn pan_viewport(&mut self, delta_x: f64, delta_y: f64) {
        self.viewport.pan(delta_x, delta_y);
        self.refresh();
    }

    /// Record the host canvas size in pixels.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        self.viewport.resize_canvas(width, height);
        self.engine.sync_viewport(&self.viewport);
        tracing::debug!(width, height, "canvas resized");
    }

    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        self.viewport.client_to_canvas(client)
    }

    /// Pointer payload for a client point under the current viewport.
    #[must_use]
    pub fn pointer_at(&self, client: Point) -> PointerEvent {
        PointerEvent::at(client, &self.viewport)
    }

    fn refresh(&mut self) {
        self.engine.sync_viewport(&self.viewport);
        self.engine.render_current_page();
    }
}
