#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// Line
// =============================================================

#[test]
fn line_new_has_default_endpoints() {
    let id = Uuid::new_v4();
    let line = Line::new(id);
    assert_eq!(line.id, id);
    assert_eq!(line.start(), Point::new(0.0, 0.0));
    assert_eq!(line.end(), Point::new(50.0, 50.0));
}

#[test]
fn line_setters_update_fields() {
    let mut line = Line::new(Uuid::new_v4());
    line.set_start(Point::new(1.0, 2.0));
    line.set_end(Point::new(3.0, 4.0));
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn line_serializes_flat_fields() {
    let line = Line::new(Uuid::nil());
    let value = serde_json::to_value(&line).unwrap();
    assert_eq!(value["x2"], 50.0);
    assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
}

// =============================================================
// Pages
// =============================================================

#[test]
fn new_document_has_no_pages() {
    let doc = Document::new();
    assert_eq!(doc.page_count(), 0);
    assert!(doc.current_page().is_none());
    assert!(doc.is_empty());
}

#[test]
fn with_page_sets_current_page() {
    let doc = Document::with_page("sheet");
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.current_page().map(|p| p.name.as_str()), Some("sheet"));
}

#[test]
fn create_page_switches_current() {
    let mut doc = Document::with_page("first");
    let second = doc.create_page("second");
    assert_eq!(doc.current_page().map(|p| p.id), Some(second));
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn set_current_page_rejects_unknown_id() {
    let mut doc = Document::with_page("only");
    let missing = Uuid::new_v4();
    assert_eq!(doc.set_current_page(missing), Err(EngineError::UnknownPage(missing)));
}

#[test]
fn set_current_page_switches_back() {
    let mut doc = Document::new();
    let first = doc.create_page("first");
    doc.create_page("second");
    doc.set_current_page(first).unwrap();
    assert_eq!(doc.current_page().map(|p| p.id), Some(first));
    assert!(doc.page(&first).is_some());
}

// =============================================================
// Engine: lines
// =============================================================

#[test]
fn create_line_without_page_fails() {
    let mut doc = Document::new();
    assert_eq!(doc.create_line(), Err(EngineError::NoCurrentPage));
    assert!(doc.is_empty());
}

#[test]
fn create_line_attaches_to_current_page() {
    let mut doc = Document::with_page("p");
    let line = doc.create_line().unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.line(&line.id), Some(&line));
    assert_eq!(doc.current_page().unwrap().node_ids, vec![line.id]);
}

#[test]
fn patch_node_persists_working_copy() {
    let mut doc = Document::with_page("p");
    let mut line = doc.create_line().unwrap();
    line.set_start(Point::new(7.0, 8.0));
    assert_eq!(doc.line(&line.id).unwrap().start(), Point::new(0.0, 0.0));

    doc.patch_node(&line).unwrap();
    assert_eq!(doc.line(&line.id).unwrap().start(), Point::new(7.0, 8.0));
}

#[test]
fn patch_node_unknown_id_fails() {
    let mut doc = Document::with_page("p");
    let stray = Line::new(Uuid::new_v4());
    assert_eq!(doc.patch_node(&stray), Err(EngineError::UnknownNode(stray.id)));
    assert!(doc.is_empty());
}

#[test]
fn current_lines_in_creation_order() {
    let mut doc = Document::with_page("p");
    let a = doc.create_line().unwrap();
    let b = doc.create_line().unwrap();
    let ids: Vec<NodeId> = doc.current_lines().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[test]
fn current_lines_scoped_to_current_page() {
    let mut doc = Document::with_page("first");
    doc.create_line().unwrap();
    doc.create_page("second");
    assert!(doc.current_lines().is_empty());
    assert_eq!(doc.len(), 1);
}

// =============================================================
// Engine: selection
// =============================================================

#[test]
fn selection_starts_empty() {
    let doc = Document::with_page("p");
    assert_eq!(doc.get_selection(), Ok(Vec::new()));
}

#[test]
fn selection_round_trips_through_engine() {
    let mut doc = Document::with_page("p");
    let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
    doc.set_selection(ids.clone()).unwrap();
    assert_eq!(doc.get_selection(), Ok(ids));
}

#[test]
fn selection_is_per_page() {
    let mut doc = Document::new();
    let first = doc.create_page("first");
    doc.set_selection(vec![Uuid::new_v4()]).unwrap();
    doc.create_page("second");
    assert_eq!(doc.get_selection(), Ok(Vec::new()));
    doc.set_current_page(first).unwrap();
    assert_eq!(doc.get_selection().unwrap().len(), 1);
}

#[test]
fn selection_without_page_fails() {
    let mut doc = Document::new();
    assert_eq!(doc.get_selection(), Err(EngineError::NoCurrentPage));
    assert_eq!(doc.set_selection(vec![]), Err(EngineError::NoCurrentPage));
}

// =============================================================
// Engine: render and viewport
// =============================================================

#[test]
fn render_counts_requests() {
    let mut doc = Document::with_page("p");
    doc.render_current_page();
    doc.render_current_page();
    assert_eq!(doc.render_count(), 2);
}

#[test]
fn render_without_page_is_skipped() {
    let mut doc = Document::new();
    doc.render_current_page();
    assert_eq!(doc.render_count(), 0);
}

#[test]
fn sync_viewport_mirrors_state() {
    let mut doc = Document::new();
    let mut vp = Viewport::new(640.0, 480.0);
    vp.pan(10.0, 20.0);
    doc.sync_viewport(&vp);
    assert_eq!(doc.viewport(), &vp);
}
