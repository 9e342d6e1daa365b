use thiserror::Error;

/// Errors raised by the steering core.
///
/// Both variants are precondition violations rather than transient
/// faults; there are no retry semantics. A failed call leaves the
/// tracker's previous pose unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SteeringError {
    /// A zero-length vector was given where a direction is required.
    #[error("cannot take the direction of a zero-length vector")]
    DegenerateVector,

    /// A path was constructed with fewer than two waypoints.
    #[error("a path requires at least 2 waypoints, got {count}")]
    InsufficientWaypoints { count: usize },
}
