//! The editing-engine contract tools and the editor call into.
//!
//! An engine owns the document model and rendering. The core never reaches
//! past this trait, so any backend (the in-memory [`crate::doc::Document`],
//! a browser renderer, a test double) can sit behind an
//! [`crate::editor::Editor`].

use crate::doc::{Line, NodeId, PageId};
use crate::viewport::Viewport;

/// Failure reported by an engine call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The operation needs a current page and none exists.
    #[error("no current page")]
    NoCurrentPage,
    /// No node with this id is stored.
    #[error("node not found: {0}")]
    UnknownNode(NodeId),
    /// No page with this id is stored.
    #[error("page not found: {0}")]
    UnknownPage(PageId),
}

/// Geometry, selection and rendering operations exposed by the engine.
///
/// All calls are synchronous and expected to be fast.
pub trait Engine {
    /// Create a new line on the current page and return a working copy of it.
    fn create_line(&mut self) -> Result<Line, EngineError>;

    /// Persist the current field values of a line previously returned by
    /// [`Engine::create_line`].
    fn patch_node(&mut self, line: &Line) -> Result<(), EngineError>;

    /// Ids currently selected on the current page, in selection order.
    fn get_selection(&self) -> Result<Vec<NodeId>, EngineError>;

    /// Replace the selection of the current page.
    fn set_selection(&mut self, ids: Vec<NodeId>) -> Result<(), EngineError>;

    /// Redraw the current page.
    fn render_current_page(&mut self);

    /// Mirror the authoritative viewport. Engines must not change it on their own.
    fn sync_viewport(&mut self, viewport: &Viewport);
}
