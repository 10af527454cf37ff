#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Document;
use crate::event::PointerEvent;

fn down(x: f64, y: f64) -> Event {
    Event::MouseDown(PointerEvent { client_x: 0.0, client_y: 0.0, canvas_x: x, canvas_y: y })
}

#[test]
fn name_is_select() {
    assert_eq!(SelectTool::new().name(), "select");
}

#[test]
fn click_drops_marker_at_canvas_point() {
    let mut doc = Document::with_page("p");
    let mut tool = SelectTool::new();

    tool.handle_event(&down(10.0, 20.0), &mut doc);

    let lines = doc.current_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].start(), Point::new(10.0, 20.0));
    assert_eq!(lines[0].end(), Point::new(110.0, 120.0));
    assert_eq!(doc.render_count(), 1);
}

#[test]
fn click_appends_marker_to_selection() {
    let mut doc = Document::with_page("p");
    let existing = uuid::Uuid::new_v4();
    doc.set_selection(vec![existing]).unwrap();
    let mut tool = SelectTool::new();

    tool.handle_event(&down(1.0, 1.0), &mut doc);
    tool.handle_event(&down(2.0, 2.0), &mut doc);

    let selection = doc.get_selection().unwrap();
    let lines = doc.current_lines();
    assert_eq!(selection, vec![existing, lines[0].id, lines[1].id]);
}

#[test]
fn other_events_are_ignored() {
    let mut doc = Document::with_page("p");
    let mut tool = SelectTool::new();
    let p = PointerEvent { client_x: 0.0, client_y: 0.0, canvas_x: 0.0, canvas_y: 0.0 };

    tool.handle_event(&Event::MouseMove(p), &mut doc);
    tool.handle_event(&Event::MouseUp(p), &mut doc);
    tool.handle_event(&Event::KeyDown { code: "a".into() }, &mut doc);

    assert!(doc.is_empty());
    assert_eq!(doc.get_selection(), Ok(Vec::new()));
    assert_eq!(doc.render_count(), 0);
}

#[test]
fn click_without_page_changes_nothing() {
    let mut doc = Document::new();
    let mut tool = SelectTool::new();
    tool.handle_event(&down(1.0, 1.0), &mut doc);
    assert!(doc.is_empty());
    assert_eq!(doc.render_count(), 0);
}
