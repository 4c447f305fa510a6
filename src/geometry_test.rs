#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(pt(x1, y1), pt(x2, y2))
}

// =============================================================
// segments_intersect
// =============================================================

#[test]
fn crossing_diagonals_intersect() {
    assert!(segments_intersect(seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)));
}

#[test]
fn parallel_segments_do_not_intersect() {
    assert!(!segments_intersect(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 1.0, 2.0)));
}

#[test]
fn collinear_overlap_is_not_an_intersection() {
    assert!(!segments_intersect(seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.0, 15.0, 0.0)));
    assert!(!segments_intersect(seg(0.0, 0.0, 4.0, 4.0), seg(1.0, 1.0, 2.0, 2.0)));
}

#[test]
fn identical_segments_do_not_intersect() {
    let s = seg(1.0, 2.0, 3.0, 5.0);
    assert!(!segments_intersect(s, s));
}

#[test]
fn zero_length_segment_never_intersects() {
    let dot = seg(5.0, 5.0, 5.0, 5.0);
    assert!(!segments_intersect(dot, seg(0.0, 0.0, 10.0, 10.0)));
    assert!(!segments_intersect(seg(0.0, 10.0, 10.0, 0.0), dot));
    assert!(!segments_intersect(dot, dot));
}

#[test]
fn endpoint_touch_counts() {
    // T-junction: one segment ends exactly on the other.
    assert!(segments_intersect(seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.0, 5.0, 5.0)));
    // Shared endpoint, non-parallel.
    assert!(segments_intersect(seg(0.0, 0.0, 10.0, 0.0), seg(10.0, 0.0, 10.0, 10.0)));
}

#[test]
fn near_miss_does_not_intersect() {
    assert!(!segments_intersect(seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.5, 5.0, 5.0)));
    assert!(!segments_intersect(seg(0.0, 0.0, 4.0, 4.0), seg(10.0, 0.0, 6.0, 4.0)));
}

#[test]
fn lines_cross_outside_segment_bounds() {
    // The infinite lines meet at (5, 5) but neither segment reaches it.
    assert!(!segments_intersect(seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 10.0, 2.0, 8.0)));
}

#[test]
fn axis_aligned_cross_intersects() {
    assert!(segments_intersect(seg(-5.0, 0.0, 5.0, 0.0), seg(0.0, -5.0, 0.0, 5.0)));
}

#[test]
fn direction_does_not_matter() {
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(0.0, 10.0, 10.0, 0.0);
    let a_rev = seg(10.0, 10.0, 0.0, 0.0);
    let b_rev = seg(10.0, 0.0, 0.0, 10.0);
    assert!(segments_intersect(a_rev, b));
    assert!(segments_intersect(a, b_rev));
    assert!(segments_intersect(a_rev, b_rev));
}

#[test]
fn intersection_is_symmetric_for_non_parallel_pairs() {
    let cases = [
        (seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)),
        (seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.5, 5.0, 5.0)),
        (seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.0, 5.0, 5.0)),
        (seg(-3.0, 7.5, 12.0, -1.0), seg(2.0, -4.0, 3.0, 9.0)),
        (seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 10.0, 2.0, 8.0)),
        (seg(50.0, 250.0, 250.0, 50.0), seg(0.0, 0.0, 300.0, 300.0)),
    ];
    for (a, b) in cases {
        assert_eq!(segments_intersect(a, b), segments_intersect(b, a), "{a:?} vs {b:?}");
    }
}

// =============================================================
// point_in_rect
// =============================================================

#[test]
fn point_inside_rect() {
    assert!(point_in_rect(pt(5.0, 5.0), Rect::new(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn point_outside_rect() {
    assert!(!point_in_rect(pt(11.0, 5.0), Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(!point_in_rect(pt(5.0, -0.1), Rect::new(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn point_on_boundary_is_inside() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_rect(pt(0.0, 0.0), r));
    assert!(point_in_rect(pt(10.0, 10.0), r));
    assert!(point_in_rect(pt(10.0, 3.0), r));
}

#[test]
fn zero_area_rect_contains_its_point() {
    let r = Rect::new(3.0, 4.0, 0.0, 0.0);
    assert!(point_in_rect(pt(3.0, 4.0), r));
    assert!(!point_in_rect(pt(3.0, 4.5), r));
}

// =============================================================
// Rect
// =============================================================

#[test]
fn from_points_empty_is_none() {
    assert!(Rect::from_points(std::iter::empty()).is_none());
}

#[test]
fn from_points_single_point_is_zero_area() {
    let r = Rect::from_points([pt(2.0, 3.0)]).unwrap();
    assert_eq!(r, Rect::new(2.0, 3.0, 0.0, 0.0));
}

#[test]
fn from_points_hull() {
    let r = Rect::from_points([pt(5.0, -1.0), pt(-2.0, 4.0), pt(1.0, 9.0)]).unwrap();
    assert_eq!(r, Rect::new(-2.0, -1.0, 7.0, 10.0));
    assert!(r.width >= 0.0 && r.height >= 0.0);
}

#[test]
fn edges_order_is_top_bottom_left_right() {
    let [top, bottom, left, right] = Rect::new(1.0, 2.0, 10.0, 20.0).edges();
    assert_eq!(top, seg(1.0, 2.0, 11.0, 2.0));
    assert_eq!(bottom, seg(1.0, 22.0, 11.0, 22.0));
    assert_eq!(left, seg(1.0, 2.0, 1.0, 22.0));
    assert_eq!(right, seg(11.0, 2.0, 11.0, 22.0));
}

// =============================================================
// segment_intersects_rect
// =============================================================

#[test]
fn sweep_across_rect_hits() {
    let r = Rect::new(0.0, 0.0, 300.0, 300.0);
    assert!(segment_intersects_rect(seg(50.0, 250.0, 250.0, 50.0), r));
    assert!(segment_intersects_rect(seg(-10.0, 150.0, 310.0, 150.0), r));
}

#[test]
fn sweep_ending_inside_hits() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(segment_intersects_rect(seg(4.0, 4.0, 6.0, 6.0), r));
}

#[test]
fn zero_length_sweep_inside_hits_by_containment() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(segment_intersects_rect(seg(5.0, 5.0, 5.0, 5.0), r));
}

#[test]
fn sweep_far_away_misses() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!segment_intersects_rect(seg(20.0, 20.0, 30.0, 25.0), r));
}

#[test]
fn sweep_leaving_rect_hits_through_edge() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(segment_intersects_rect(seg(5.0, 5.0, 15.0, 5.0), r));
}

#[test]
fn sweep_touching_zero_height_rect() {
    // A horizontal stroke has a flat bounding box; a vertical sweep still crosses it.
    let r = Rect::new(0.0, 5.0, 10.0, 0.0);
    assert!(segment_intersects_rect(seg(5.0, 0.0, 5.0, 10.0), r));
    assert!(!segment_intersects_rect(seg(15.0, 0.0, 15.0, 10.0), r));
}

#[test]
fn only_sweep_end_is_containment_tested() {
    // Collinear with a flat box, so no edge test can fire; only containment decides.
    let r = Rect::new(0.0, 5.0, 10.0, 0.0);
    assert!(!segment_intersects_rect(seg(5.0, 5.0, 20.0, 5.0), r));
    assert!(segment_intersects_rect(seg(20.0, 5.0, 5.0, 5.0), r));
}
