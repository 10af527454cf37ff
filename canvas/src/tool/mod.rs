//! Tools: stateful handlers that interpret input events for one editing mode.
//!
//! Exactly one tool is active at a time, owned by the
//! [`crate::editor::Editor`]. A tool is created by the [`ToolFactory`],
//! started once, fed events, stopped once when superseded and then dropped.
//! Tools never hold the engine; it is lent to them for each event.

mod command;
mod factory;
mod line;
mod select;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::fmt;
use std::str::FromStr;

use crate::engine::Engine;
use crate::event::Event;

pub use command::CommandTool;
pub use factory::ToolFactory;
pub use line::{LineAction, LineState, LineTool};
pub use select::SelectTool;

/// A gesture state machine over [`Event`]s.
pub trait Tool: fmt::Debug {
    /// Registry name of this tool.
    fn name(&self) -> &str;

    /// Called once right after the tool becomes active.
    fn start(&mut self) {}

    /// Called once right before the tool is replaced. Pending gesture state is discarded.
    fn stop(&mut self) {}

    /// Advance the gesture. Events with no transition in the current state are ignored.
    fn handle_event(&mut self, event: &Event, engine: &mut dyn Engine);
}

/// The built-in tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Click to drop a marker line and add it to the selection.
    Select,
    /// Two clicks draw a straight line, with live preview in between.
    Line,
}

impl ToolId {
    pub const ALL: [Self; 2] = [Self::Select, Self::Line];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Line => "line",
        }
    }

    /// A fresh, idle instance of this tool.
    #[must_use]
    pub fn create(self) -> Box<dyn Tool> {
        match self {
            Self::Select => Box::new(SelectTool::new()),
            Self::Line => Box::new(LineTool::new()),
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ToolId::from_str`] for names outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct ToolIdError(pub String);

impl FromStr for ToolId {
    type Err = ToolIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ToolIdError(s.to_string()))
    }
}
