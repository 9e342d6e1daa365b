//! Pure pursuit: steers towards the intersection of a lookahead circle
//! with the waypoint polyline, falling back to the nearest waypoint when
//! the circle misses the path entirely.

use crate::math::{line_circle_intersections, Point2d};
use crate::path::Path;
use crate::steering::{arrive, seek};
use crate::tracker::Tracker;
use crate::util::rotated_range;
use cgmath::prelude::*;
use log::trace;

/// Geometry from a pure-pursuit tick, for optional visualization.
#[derive(Clone, Debug)]
pub struct PursuitDebug {
    /// The waypoint nearest the tracker.
    pub nearest: Point2d,
    /// All intersections of the lookahead circle with the path,
    /// in segment order.
    pub intersections: Vec<Point2d>,
    /// The point the tracker was steered towards.
    pub target: Point2d,
}

/// Advances the tracker one tick of pure pursuit along the path.
pub fn pursue_path(tracker: &mut Tracker, path: &Path) -> PursuitDebug {
    let attrib = *tracker.attributes();
    let position = tracker.position();
    let waypoints = path.waypoints();

    // Nearest waypoint by squared distance. The search starts from the
    // previously nearest index so that exact ties keep the tracker
    // progressing along the path rather than snapping back.
    let start = tracker.nearest_index.min(waypoints.len() - 1);
    let mut nearest = start;
    let mut best = f64::INFINITY;
    for i in rotated_range(waypoints.len(), start) {
        let dist2 = position.distance2(waypoints[i]);
        if dist2 < best {
            best = dist2;
            nearest = i;
        }
    }
    tracker.nearest_index = nearest;

    // Every intersection of the lookahead circle with the path,
    // concatenated in segment order
    let intersections: Vec<Point2d> = path
        .segments()
        .flat_map(|(a, b)| line_circle_intersections(a, b, position, attrib.lookahead))
        .collect();

    // Chase the last intersection found; with none, the nearest waypoint
    let mut target = match intersections.last() {
        Some(point) => *point,
        None => {
            trace!("pursuit: no lookahead intersections, falling back to waypoint {nearest}");
            waypoints[nearest]
        }
    };

    // Prefer the final waypoint once it is nearer than the chosen target,
    // so the tracker can decelerate and terminate
    let last = path.last();
    if position.distance2(last) < position.distance2(target) {
        target = last;
        arrive(tracker, target);
    } else {
        tracker.speed = attrib.max_linear_speed;
    }

    if !tracker.arrived {
        seek(tracker, target);
    }

    PursuitDebug {
        nearest: waypoints[nearest],
        intersections,
        target,
    }
}
