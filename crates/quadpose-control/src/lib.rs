//! Control API for quadpose robots.
//!
//! - [`Robot`]: owns one robot's state, re-solves all legs after every
//!   command and hands world-space frames to a [`FrameSink`]
//! - [`Preset`]: named stances (`crouch`, `stand_tall`, `power_off`, ...)
//! - [`RecordingSink`], [`TracingSink`], [`NullSink`]: stock sinks
//!
//! With the `bevy` feature, [`QuadposePlugin`](plugin::QuadposePlugin) copies
//! frames into entity transforms.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quadpose_control::prelude::*;
//!
//! let config = Arc::new(RobotConfiguration::default());
//! let mut robot = Robot::spawn(config, RecordingSink::new()).unwrap();
//! robot.stand_tall().unwrap();
//! robot.set_body_pose(BodyPoseUpdate::new().yaw(0.2)).unwrap();
//!
//! let body = robot.sink().get(&FrameName::Body).unwrap();
//! assert!((body.translation().z - 4.0).abs() < 1e-12);
//! ```

#[cfg(feature = "bevy")]
pub mod plugin;
pub mod presets;
pub mod robot;
pub mod sink;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

#[cfg(feature = "bevy")]
pub use plugin::{FrameBuffer, FrameTarget, QuadposePlugin, RobotRig, frame_to_transform};
pub use presets::Preset;
pub use robot::{Robot, RobotState};
pub use sink::{FrameSink, NullSink, RecordingSink, TracingSink};

pub mod prelude {
    pub use crate::presets::Preset;
    pub use crate::robot::{Robot, RobotState};
    pub use crate::sink::{FrameSink, NullSink, RecordingSink, TracingSink};
    pub use quadpose_core::prelude::*;
    pub use quadpose_ik::{Frame, FrameName, JointAngles, LegFrame};
}
