//! Tests that drive trackers along multi-waypoint courses.

use tracker_sim::cgmath::MetricSpace;
use tracker_sim::math::Point2d;
use tracker_sim::{Goal, Path, Pose, Simulation, StrategyDebug, TrackerAttributes};

fn zigzag_course() -> Path {
    Path::new(vec![
        Point2d::new(0.0, 0.0),
        Point2d::new(120.0, 0.0),
        Point2d::new(180.0, 60.0),
        Point2d::new(300.0, 60.0),
    ])
    .unwrap()
}

/// Test that corridor following completes a course.
#[test]
fn follow_completes_the_course() {
    let mut sim = Simulation::new();
    let tracker = sim.add_tracker(&TrackerAttributes::default(), Pose::new(0.0, 0.0, 0.0));
    let path = zigzag_course();
    let end = path.last();
    sim.set_goal(tracker, Goal::Follow(path));

    for _ in 0..2000 {
        sim.step();
        if sim.get_tracker(tracker).arrived() {
            break;
        }
    }

    let tracker = sim.get_tracker(tracker);
    assert!(tracker.arrived());
    assert!(tracker.position().distance(end) < tracker.attributes().end_radius);
}

/// Test that pure pursuit completes a course.
#[test]
fn pursuit_completes_the_course() {
    let mut sim = Simulation::new();
    let tracker = sim.add_tracker(&TrackerAttributes::default(), Pose::new(0.0, 0.0, 0.0));
    let path = zigzag_course();
    let end = path.last();
    sim.set_goal(tracker, Goal::Pursue(path));

    for _ in 0..2000 {
        sim.step();
        if sim.get_tracker(tracker).arrived() {
            break;
        }
    }

    let tracker = sim.get_tracker(tracker);
    assert!(tracker.arrived());
    assert!(tracker.position().distance(end) < tracker.attributes().end_radius);
}

/// Test that pursuit debug geometry is published every tick.
#[test]
fn pursuit_publishes_debug_geometry() {
    let mut sim = Simulation::new();
    let tracker = sim.add_tracker(&TrackerAttributes::default(), Pose::new(0.0, 0.0, 0.0));
    sim.set_goal(tracker, Goal::Pursue(zigzag_course()));
    sim.step();

    match sim.debug(tracker) {
        Some(StrategyDebug::Pursuit(debug)) => {
            // The tracker starts on the first segment, well within
            // lookahead range of it
            assert!(!debug.intersections.is_empty());
            assert_eq!(debug.nearest, Point2d::new(0.0, 0.0));
        }
        other => panic!("expected pursuit debug geometry, got {:?}", other),
    }
}

/// Test that two trackers advance independently in one simulation.
#[test]
fn trackers_are_independent() {
    let mut sim = Simulation::new();
    let follower = sim.add_tracker(&TrackerAttributes::default(), Pose::new(0.0, 0.0, 0.0));
    let idler = sim.add_tracker(&TrackerAttributes::default(), Pose::new(50.0, 50.0, 1.0));
    sim.set_goal(follower, Goal::Follow(zigzag_course()));

    for _ in 0..50 {
        sim.step();
    }

    assert_ne!(sim.get_tracker(follower).position(), Point2d::new(0.0, 0.0));
    assert_eq!(sim.get_tracker(idler).position(), Point2d::new(50.0, 50.0));
    assert_eq!(sim.frame(), 50);
}
