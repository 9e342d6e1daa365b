use crate::follow::{follow_path, FollowDebug};
use crate::math::Point2d;
use crate::path::Path;
use crate::pursuit::{pursue_path, PursuitDebug};
use crate::steering::seek_and_arrive;
use crate::tracker::{Pose, Tracker, TrackerAttributes};
use crate::{TrackerId, TrackerSet};

/// What a tracker is currently driving towards.
#[derive(Clone, Debug)]
pub enum Goal {
    /// Hold position.
    Idle,
    /// Seek and arrive at a single point.
    Point(Point2d),
    /// Track the waypoint corridor.
    Follow(Path),
    /// Pure pursuit along the waypoints.
    Pursue(Path),
}

/// Debug geometry retained from a tracker's latest strategy tick.
#[derive(Clone, Debug)]
pub enum StrategyDebug {
    Follow(FollowDebug),
    Pursuit(PursuitDebug),
}

/// A tracker paired with its goal.
pub(crate) struct Unit {
    tracker: Tracker,
    goal: Goal,
    debug: Option<StrategyDebug>,
}

/// A steering simulation.
///
/// Owns any number of trackers, each with an independent goal; one
/// [step](Self::step) call advances every tracker by a single tick.
/// Single-threaded and synchronous, driven by an external caller at a
/// fixed tick rate.
#[derive(Default)]
pub struct Simulation {
    /// The trackers being simulated.
    trackers: TrackerSet,
    /// The current frame of simulation.
    frame: usize,
}

impl Simulation {
    /// Creates a new simulation.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a tracker to the simulation with no goal.
    pub fn add_tracker(&mut self, attributes: &TrackerAttributes, pose: Pose) -> TrackerId {
        self.trackers.insert(Unit {
            tracker: Tracker::new(attributes, pose),
            goal: Goal::Idle,
            debug: None,
        })
    }

    /// Removes a tracker from the simulation.
    pub fn remove_tracker(&mut self, id: TrackerId) {
        self.trackers.remove(id);
    }

    /// Assigns a tracker's goal, clearing its arrival state so the
    /// scenario driver can re-use the tracker for a new run.
    pub fn set_goal(&mut self, id: TrackerId, goal: Goal) {
        let unit = &mut self.trackers[id];
        unit.tracker.arrived = false;
        unit.tracker.nearest_index = 0;
        unit.goal = goal;
        unit.debug = None;
    }

    /// Resets a tracker's pose, clearing its command state.
    pub fn set_pose(&mut self, id: TrackerId, pose: Pose) {
        self.trackers[id].tracker.set_pose(pose);
    }

    /// Gets a reference to the tracker with the given ID.
    pub fn get_tracker(&self, id: TrackerId) -> &Tracker {
        &self.trackers[id].tracker
    }

    /// Returns an iterator over all the trackers in the simulation.
    pub fn iter_trackers(&self) -> impl Iterator<Item = (TrackerId, &Tracker)> {
        self.trackers.iter().map(|(id, unit)| (id, &unit.tracker))
    }

    /// The debug geometry from the tracker's latest strategy tick,
    /// if its goal produces any.
    pub fn debug(&self, id: TrackerId) -> Option<&StrategyDebug> {
        self.trackers[id].debug.as_ref()
    }

    /// Gets the current simulation frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances every tracker by one tick.
    pub fn step(&mut self) {
        for (_, unit) in &mut self.trackers {
            unit.debug = match &unit.goal {
                Goal::Idle => None,
                Goal::Point(target) => {
                    seek_and_arrive(&mut unit.tracker, *target);
                    None
                }
                Goal::Follow(path) => {
                    Some(StrategyDebug::Follow(follow_path(&mut unit.tracker, path)))
                }
                Goal::Pursue(path) => {
                    Some(StrategyDebug::Pursuit(pursue_path(&mut unit.tracker, path)))
                }
            };
        }
        self.frame += 1;
    }
}
