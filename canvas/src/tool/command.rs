//! The command pseudo-tool: turns command-line text into a tool switch.
//!
//! It is never activated. The editor builds one per `command` event and
//! hands it the command text, so only command events can ever reach it.

use crate::editor::{Editor, EditorError};
use crate::engine::Engine;

/// Single-use handler bound to an editor for one command.
pub struct CommandTool<'a, E: Engine> {
    editor: &'a mut Editor<E>,
}

impl<'a, E: Engine> CommandTool<'a, E> {
    #[must_use]
    pub fn new(editor: &'a mut Editor<E>) -> Self {
        Self { editor }
    }

    /// Activate the tool named by `command`. Consumes the command tool.
    pub fn run(self, command: &str) -> Result<(), EditorError> {
        tracing::debug!(command, "command received");
        self.editor.activate_tool(command)
    }
}
