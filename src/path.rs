use crate::error::SteeringError;
use crate::math::Point2d;
use itertools::Itertools;

/// An ordered polyline of waypoints for a tracker to traverse.
///
/// Insertion order is traversal order. The steering strategies treat the
/// path as read-only; it is owned by the scenario driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    waypoints: Vec<Point2d>,
}

impl Path {
    /// Creates a path from a list of waypoints.
    ///
    /// Fails with [SteeringError::InsufficientWaypoints] unless at least
    /// two waypoints are supplied, so the strategies can assume every
    /// path has at least one segment.
    pub fn new(waypoints: Vec<Point2d>) -> Result<Self, SteeringError> {
        if waypoints.len() < 2 {
            return Err(SteeringError::InsufficientWaypoints {
                count: waypoints.len(),
            });
        }
        Ok(Self { waypoints })
    }

    /// The waypoints in traversal order.
    pub fn waypoints(&self) -> &[Point2d] {
        &self.waypoints
    }

    /// The number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// A validated path is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first waypoint.
    pub fn first(&self) -> Point2d {
        self.waypoints[0]
    }

    /// The final waypoint.
    pub fn last(&self) -> Point2d {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Iterates over the path's segments as consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point2d, Point2d)> + '_ {
        self.waypoints.iter().copied().tuple_windows()
    }
}
