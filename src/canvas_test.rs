use super::*;
use crate::geometry::Point;
use crate::stroke::Brush;

fn stroke_at(x: f64, y: f64) -> Stroke {
    Stroke::begin(Point::new(x, y), Brush::new(1.0, "black").unwrap())
}

#[test]
fn new_canvas_is_empty() {
    let canvas = Canvas::new();
    assert!(canvas.is_empty());
    assert_eq!(canvas.len(), 0);
}

#[test]
fn push_keeps_insertion_order() {
    let mut canvas = Canvas::new();
    let a = canvas.push(stroke_at(0.0, 0.0));
    let b = canvas.push(stroke_at(1.0, 1.0));
    let c = canvas.push(stroke_at(2.0, 2.0));
    let ids: Vec<StrokeId> = canvas.strokes().iter().map(Stroke::id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn get_and_get_mut_by_id() {
    let mut canvas = Canvas::new();
    let id = canvas.push(stroke_at(0.0, 0.0));
    assert!(canvas.get(&id).is_some());

    canvas.get_mut(&id).unwrap().line_to(Point::new(3.0, 3.0));
    assert_eq!(canvas.get(&id).unwrap().commands().len(), 2);
}

#[test]
fn get_missing_returns_none() {
    let canvas = Canvas::new();
    assert!(canvas.get(&uuid::Uuid::new_v4()).is_none());
}

#[test]
fn remove_returns_stroke_and_keeps_order() {
    let mut canvas = Canvas::new();
    let a = canvas.push(stroke_at(0.0, 0.0));
    let b = canvas.push(stroke_at(1.0, 1.0));
    let c = canvas.push(stroke_at(2.0, 2.0));

    let removed = canvas.remove(&b).unwrap();
    assert_eq!(removed.id(), b);
    let ids: Vec<StrokeId> = canvas.strokes().iter().map(Stroke::id).collect();
    assert_eq!(ids, vec![a, c]);
    assert!(canvas.remove(&b).is_none());
}

#[test]
fn remove_where_reports_ids_in_draw_order() {
    let mut canvas = Canvas::new();
    let a = canvas.push(stroke_at(0.0, 0.0));
    let b = canvas.push(stroke_at(50.0, 50.0));
    let c = canvas.push(stroke_at(2.0, 2.0));

    let removed = canvas.remove_where(|s| s.bounding_box().is_some_and(|r| r.x < 10.0));
    assert_eq!(removed, vec![a, c]);
    assert_eq!(canvas.len(), 1);
    assert_eq!(canvas.strokes()[0].id(), b);
}

#[test]
fn remove_where_nothing_matches() {
    let mut canvas = Canvas::new();
    canvas.push(stroke_at(0.0, 0.0));
    assert!(canvas.remove_where(|_| false).is_empty());
    assert_eq!(canvas.len(), 1);
}
