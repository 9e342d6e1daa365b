//! Corridor path-following: keeps the tracker within a tolerance band
//! around a polyline by steering towards the projection of a lookahead
//! point onto the nearest segment.

use crate::math::{closest_point_on_segment, point_on_segment, set_magnitude, Point2d};
use crate::path::Path;
use crate::steering::{seek, seek_and_arrive};
use crate::tracker::Tracker;
use cgmath::prelude::*;
use log::trace;

/// Tolerance for deciding whether a projection lies on its segment.
/// Projections that fall outside are replaced by the segment's end.
const PROJECTION_EPSILON: f64 = 1.0;

/// How this tick's path-following target was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowMode {
    /// Near the final waypoint; heading straight for it.
    EndGame,
    /// Off the corridor; steering back towards the normal point.
    Correct,
    /// On the corridor; cruising straight ahead.
    Cruise,
}

/// Geometry from a path-following tick, for optional visualization.
#[derive(Clone, Copy, Debug)]
pub struct FollowDebug {
    /// The lookahead point projected ahead of the tracker.
    pub predicted: Point2d,
    /// The chosen normal point on the corridor.
    pub normal: Point2d,
    /// The point the tracker was steered towards.
    pub target: Point2d,
    /// How the target was chosen.
    pub mode: FollowMode,
}

/// Advances the tracker one tick along the waypoint corridor.
pub fn follow_path(tracker: &mut Tracker, path: &Path) -> FollowDebug {
    let attrib = *tracker.attributes();
    let position = tracker.position();

    // Project a point ahead of the tracker along its current heading.
    // A stationary tracker has a degenerate velocity vector, so its
    // heading direction stands in.
    let ahead = set_magnitude(tracker.velocity_vector(), attrib.lookahead)
        .unwrap_or_else(|_| tracker.direction_vector(attrib.lookahead));
    let predicted = position + ahead;

    // Best candidate point per segment: the orthogonal projection when it
    // lies on the segment, otherwise the segment's end waypoint
    let mut normal = path.first();
    let mut best = f64::INFINITY;
    for (a, b) in path.segments() {
        let mut candidate = closest_point_on_segment(predicted, a, b);
        if !point_on_segment(candidate, a, b, PROJECTION_EPSILON) {
            candidate = b;
        }
        let dist2 = candidate.distance2(predicted);
        if dist2 < best {
            best = dist2;
            normal = candidate;
        }
    }

    let last = path.last();
    if position.distance(last) < attrib.lookahead + tracker.speed * 10.0 {
        // End-game: ignore the corridor and arrive at the final waypoint
        trace!("follow: end-game towards final waypoint");
        seek_and_arrive(tracker, last);
        FollowDebug {
            predicted,
            normal,
            target: last,
            mode: FollowMode::EndGame,
        }
    } else if predicted.distance(normal) > attrib.corridor_tolerance {
        // Drifted out of the corridor; steer back to the normal point
        trace!("follow: correcting towards the corridor");
        tracker.speed = attrib.max_linear_speed;
        seek(tracker, normal);
        FollowDebug {
            predicted,
            normal,
            target: normal,
            mode: FollowMode::Correct,
        }
    } else {
        // On the corridor: cruise straight ahead at full speed
        tracker.speed = attrib.max_linear_speed;
        tracker.angular_rate = 0.0;
        tracker.integrate();
        FollowDebug {
            predicted,
            normal,
            target: predicted,
            mode: FollowMode::Cruise,
        }
    }
}
