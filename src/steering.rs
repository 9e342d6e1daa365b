//! Single-target steering behaviors: seek and arrive.

use crate::math::{angle_wrap, heading, min_magnitude, Point2d};
use crate::tracker::{SpeedScaling, Tracker};
use cgmath::prelude::*;
use log::debug;
use std::f64::consts::{FRAC_PI_2, PI};

/// Turns and drives the tracker towards `target` for one tick.
///
/// The commanded speed set by the caller (or by [arrive]) is scaled down
/// as the required turn grows, the heading is advanced by a clamped
/// proportional turn controller, and the pose is integrated with the new
/// heading. A tracker already on top of the target is flagged as arrived
/// and left in place, since the bearing to it is undefined.
pub fn seek(tracker: &mut Tracker, target: Point2d) {
    let delta = target - tracker.position();
    if delta.magnitude2() == 0.0 {
        tracker.speed = 0.0;
        tracker.arrived = true;
        return;
    }

    // Heading error, taking whichever turn direction is shorter
    let absolute = heading(delta);
    let error = angle_wrap(absolute - tracker.pose.heading);
    let complement = error - 2.0 * PI * error.signum();
    let mut turn = min_magnitude(error, complement);

    // When reversing, point the nose away from the target instead
    let attrib = *tracker.attributes();
    if attrib.reverse {
        turn = angle_wrap(turn + PI);
    }

    // Slow down to turn sharply; zero speed at a quarter turn or more
    let mut speed = tracker.speed;
    if attrib.speed_scaling == SpeedScaling::AngleProportional {
        speed *= (1.0 - turn.abs() / FRAC_PI_2).max(0.0);
    }
    if attrib.reverse {
        speed = -speed;
    }

    // Clamped proportional turn controller
    let rate = turn.signum() * f64::min(attrib.max_angular_speed, attrib.turn_gain * turn.abs());
    tracker.pose.heading += rate;
    tracker.angular_rate = rate;

    tracker.speed = speed;
    tracker.integrate();
}

/// Ramps the commanded speed down as the tracker nears `target`.
///
/// Only sets the command fields; [seek] performs the actual movement.
/// Outside the ramp radius the full linear speed is commanded. Inside
/// it the speed falls off linearly with distance, and once within the
/// end radius the speed is zeroed and the tracker is flagged arrived.
pub fn arrive(tracker: &mut Tracker, target: Point2d) {
    let distance = tracker.position().distance(target);
    let attrib = *tracker.attributes();

    if distance < attrib.end_radius {
        tracker.speed = 0.0;
        if !tracker.arrived {
            debug!(
                "tracker arrived at ({:.2}, {:.2})",
                target.x, target.y
            );
        }
        tracker.arrived = true;
    } else if distance < attrib.ramp_radius {
        tracker.speed = attrib.max_linear_speed * (distance / attrib.ramp_radius);
    } else {
        tracker.speed = attrib.max_linear_speed;
    }
}

/// One tick of single-target steering: [arrive] then [seek].
pub fn seek_and_arrive(tracker: &mut Tracker, target: Point2d) {
    arrive(tracker, target);
    if tracker.arrived {
        return;
    }
    seek(tracker, target);
}
