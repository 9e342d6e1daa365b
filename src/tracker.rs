use crate::math::{Point2d, Vector2d};

/// A position and heading on the 2D plane.
///
/// The heading is in radians and unconstrained in range; it is wrapped
/// where an angle comparison is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// The position in world space.
    pub position: Point2d,
    /// The heading in radians.
    pub heading: f64,
}

impl Pose {
    /// Creates a pose from coordinates and a heading.
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Point2d::new(x, y),
            heading,
        }
    }
}

/// How the commanded linear speed responds to the size of the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedScaling {
    /// Scale speed down in proportion to the heading error,
    /// reaching zero at a quarter turn.
    AngleProportional,
    /// Drive at the commanded speed regardless of the turn.
    None,
}

/// The attributes of a tracker.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerAttributes {
    /// The maximum linear speed, in units per tick.
    pub max_linear_speed: f64,
    /// The maximum angular speed, in radians per tick.
    pub max_angular_speed: f64,
    /// Proportional gain mapping heading error to turn rate.
    pub turn_gain: f64,
    /// The lookahead distance for path-following and pure pursuit.
    pub lookahead: f64,
    /// How far the predicted point may stray from the corridor
    /// before path-following steers back towards it.
    pub corridor_tolerance: f64,
    /// Radius of the arrive deceleration ramp around a target.
    pub ramp_radius: f64,
    /// Radius around a target inside which the tracker has arrived.
    pub end_radius: f64,
    /// How turning affects the commanded linear speed.
    pub speed_scaling: SpeedScaling,
    /// Drive backwards, nose pointed away from the target.
    pub reverse: bool,
}

impl Default for TrackerAttributes {
    fn default() -> Self {
        Self {
            max_linear_speed: 5.5,
            max_angular_speed: 0.8,
            turn_gain: 1.0,
            lookahead: 25.0,
            corridor_tolerance: 5.0,
            ramp_radius: 50.0,
            end_radius: 1.0,
            speed_scaling: SpeedScaling::AngleProportional,
            reverse: false,
        }
    }
}

/// A simulated point-mass tracker.
#[derive(Clone, Debug)]
pub struct Tracker {
    /// The tracker's kinematic attributes.
    attrib: TrackerAttributes,
    /// The tracker's pose.
    pub(crate) pose: Pose,
    /// The commanded linear speed in units per tick; negative is reversing.
    pub(crate) speed: f64,
    /// The turn rate applied on the last tick, in radians.
    pub(crate) angular_rate: f64,
    /// Whether the tracker has arrived at its goal.
    pub(crate) arrived: bool,
    /// Index of the waypoint the tracker was last nearest to,
    /// used by pure pursuit for search continuity.
    pub(crate) nearest_index: usize,
}

impl Tracker {
    /// Creates a new tracker at the given pose.
    pub fn new(attributes: &TrackerAttributes, pose: Pose) -> Self {
        Self {
            attrib: *attributes,
            pose,
            speed: 0.0,
            angular_rate: 0.0,
            arrived: false,
            nearest_index: 0,
        }
    }

    /// The tracker's pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The tracker's position in world space.
    pub fn position(&self) -> Point2d {
        self.pose.position
    }

    /// The tracker's heading in radians.
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    /// The commanded linear speed, in units per tick.
    /// Negative while reversing.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The turn rate applied on the last tick, in radians.
    pub fn angular_rate(&self) -> f64 {
        self.angular_rate
    }

    /// Whether the tracker has arrived at its goal.
    pub fn arrived(&self) -> bool {
        self.arrived
    }

    /// The tracker's attributes.
    pub fn attributes(&self) -> &TrackerAttributes {
        &self.attrib
    }

    /// Resets the tracker to a new pose for another run,
    /// clearing its command state.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.speed = 0.0;
        self.angular_rate = 0.0;
        self.arrived = false;
        self.nearest_index = 0;
    }

    /// The tracker's velocity for this tick as a vector.
    pub fn velocity_vector(&self) -> Vector2d {
        self.direction_vector(self.speed)
    }

    /// A vector of the given magnitude along the tracker's heading.
    pub fn direction_vector(&self, magnitude: f64) -> Vector2d {
        Vector2d::new(
            magnitude * self.pose.heading.cos(),
            magnitude * self.pose.heading.sin(),
        )
    }

    /// Translates the tracker along its heading at the commanded speed.
    ///
    /// Explicit Euler at a fixed tick; steering updates the heading
    /// before this is called.
    pub(crate) fn integrate(&mut self) {
        self.pose.position += self.velocity_vector();
    }
}
