pub use cgmath;
pub use error::SteeringError;
pub use follow::{follow_path, FollowDebug, FollowMode};
pub use path::Path;
pub use pursuit::{pursue_path, PursuitDebug};
pub use simulation::{Goal, Simulation, StrategyDebug};
pub use steering::{arrive, seek, seek_and_arrive};
pub use tracker::{Pose, SpeedScaling, Tracker, TrackerAttributes};
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};

mod error;
mod follow;
pub mod math;
mod path;
mod pursuit;
mod simulation;
mod steering;
mod tracker;
mod util;

new_key_type! {
    /// Unique ID of a [Tracker] within a [Simulation].
    pub struct TrackerId;
}

type TrackerSet = SlotMap<TrackerId, simulation::Unit>;
