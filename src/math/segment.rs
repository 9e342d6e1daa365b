//! Line segment and circle geometry used by the path strategies.

use super::Point2d;
use arrayvec::ArrayVec;
use cgmath::prelude::*;

/// Tolerance for accepting a computed intersection as lying on the segment.
const INTERSECT_EPSILON: f64 = 1e-3;

/// Projects `p` orthogonally onto the line through `a` and `b`.
///
/// The result is NOT clamped to the segment; callers wanting a point
/// between `a` and `b` must check containment with [point_on_segment].
/// A degenerate segment (`a == b`) projects everything onto `a`.
pub fn closest_point_on_segment(p: Point2d, a: Point2d, b: Point2d) -> Point2d {
    let ab = b - a;
    let denom = ab.magnitude2();
    if denom == 0.0 {
        return a;
    }
    a + ab * ((p - a).dot(ab) / denom)
}

/// Whether `p` lies on the segment from `a` to `b`, within `epsilon`.
///
/// This is a perimeter-equality test: the distances from `p` to both ends
/// must sum to the segment length. It is tolerant near the endpoints and
/// rejects lateral error beyond `epsilon`.
pub fn point_on_segment(p: Point2d, a: Point2d, b: Point2d, epsilon: f64) -> bool {
    let via_p = a.distance(p) + b.distance(p);
    (a.distance(b) - via_p).abs() < epsilon
}

/// Finds the intersections of a circle with a line segment.
///
/// Solves the quadratic for the infinite line through `seg_start` and
/// `seg_end`, then keeps only roots that lie on the segment itself.
/// Yields no points when the discriminant is negative and a single point
/// at an exact tangency.
pub fn line_circle_intersections(
    seg_start: Point2d,
    seg_end: Point2d,
    center: Point2d,
    radius: f64,
) -> ArrayVec<Point2d, 2> {
    let d = seg_end - seg_start;
    let f = seg_start - center;

    let a = d.dot(d);
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let mut points = ArrayVec::new();
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 || a == 0.0 {
        return points;
    }

    let disc = disc.sqrt();
    let mut ts = ArrayVec::<f64, 2>::new();
    ts.push((-b - disc) / (2.0 * a));
    if disc > 0.0 {
        ts.push((-b + disc) / (2.0 * a));
    }

    for t in ts {
        let p = seg_start + d * t;
        if point_on_segment(p, seg_start, seg_end, INTERSECT_EPSILON) {
            points.push(p);
        }
    }
    points
}
