//! Document model: pages, line nodes, and the in-memory engine that owns them.
//!
//! [`Document`] is a complete [`Engine`] implementation backed by hash maps.
//! It keeps one current page; new lines are attached to it and the
//! selection is stored per page. Rendering is reduced to counting render
//! requests, which is what callers and tests observe.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_LINE_END;
use crate::engine::{Engine, EngineError};
use crate::viewport::{Point, Viewport};

/// Unique identifier for a node (line) in the document.
pub type NodeId = Uuid;

/// Unique identifier for a page.
pub type PageId = Uuid;

/// A straight line segment from `(x1, y1)` to `(x2, y2)` in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: NodeId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    /// A new line from the origin to the default end point.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self { id, x1: 0.0, y1: 0.0, x2: DEFAULT_LINE_END, y2: DEFAULT_LINE_END }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn set_start(&mut self, p: Point) {
        self.x1 = p.x;
        self.y1 = p.y;
    }

    pub fn set_end(&mut self, p: Point) {
        self.x2 = p.x;
        self.y2 = p.y;
    }
}

/// A page: an ordered list of nodes plus the current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    /// Nodes on this page in creation order.
    pub node_ids: Vec<NodeId>,
    /// Selected ids in selection order.
    pub selected_ids: Vec<NodeId>,
}

impl Page {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), node_ids: Vec::new(), selected_ids: Vec::new() }
    }
}

/// In-memory document and engine.
#[derive(Debug, Default)]
pub struct Document {
    pages: HashMap<PageId, Page>,
    current_page: Option<PageId>,
    lines: HashMap<NodeId, Line>,
    viewport: Viewport,
    render_count: u64,
}

impl Document {
    /// Create an empty document with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding a single page, which becomes current.
    #[must_use]
    pub fn with_page(name: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.create_page(name);
        doc
    }

    // --- Pages ---

    /// Add a page and make it current.
    pub fn create_page(&mut self, name: impl Into<String>) -> PageId {
        let page = Page::new(name);
        let id = page.id;
        tracing::debug!(page = %page.name, %id, "page created");
        self.pages.insert(id, page);
        self.current_page = Some(id);
        id
    }

    /// Switch the current page.
    pub fn set_current_page(&mut self, id: PageId) -> Result<(), EngineError> {
        if !self.pages.contains_key(&id) {
            return Err(EngineError::UnknownPage(id));
        }
        self.current_page = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.and_then(|id| self.pages.get(&id))
    }

    #[must_use]
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    // --- Nodes ---

    #[must_use]
    pub fn line(&self, id: &NodeId) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Lines on the current page in creation order.
    #[must_use]
    pub fn current_lines(&self) -> Vec<&Line> {
        self.current_page()
            .map(|page| page.node_ids.iter().filter_map(|id| self.lines.get(id)).collect())
            .unwrap_or_default()
    }

    /// Number of lines across all pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // --- Rendering ---

    /// How many times a render of the current page has been performed.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// The last viewport mirrored from the editor.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn current_page_mut(&mut self) -> Result<&mut Page, EngineError> {
        let id = self.current_page.ok_or(EngineError::NoCurrentPage)?;
        self.pages.get_mut(&id).ok_or(EngineError::UnknownPage(id))
    }
}

impl Engine for Document {
    fn create_line(&mut self) -> Result<Line, EngineError> {
        let line = Line::new(Uuid::new_v4());
        self.current_page_mut()?.node_ids.push(line.id);
        self.lines.insert(line.id, line.clone());
        Ok(line)
    }

    fn patch_node(&mut self, line: &Line) -> Result<(), EngineError> {
        let Some(stored) = self.lines.get_mut(&line.id) else {
            return Err(EngineError::UnknownNode(line.id));
        };
        stored.clone_from(line);
        Ok(())
    }

    fn get_selection(&self) -> Result<Vec<NodeId>, EngineError> {
        self.current_page()
            .map(|page| page.selected_ids.clone())
            .ok_or(EngineError::NoCurrentPage)
    }

    fn set_selection(&mut self, ids: Vec<NodeId>) -> Result<(), EngineError> {
        self.current_page_mut()?.selected_ids = ids;
        Ok(())
    }

    fn render_current_page(&mut self) {
        let Some(page) = self.current_page() else {
            tracing::warn!("render requested with no current page");
            return;
        };
        tracing::debug!(
            page = %page.name,
            nodes = page.node_ids.len(),
            zoom = self.viewport.zoom_factor(),
            "render current page"
        );
        self.render_count += 1;
    }

    fn sync_viewport(&mut self, viewport: &Viewport) {
        self.viewport.clone_from(viewport);
    }
}
