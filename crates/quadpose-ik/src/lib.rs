//! Frame algebra and analytic leg IK for quadpose robots.
//!
//! # Architecture
//!
//! ```text
//! BodyPose ──► body Frame ──► LegSolver ──► LegSolution (7 frames + 3 angles)
//! ```
//!
//! Every frame the solver produces is relative to the robot's footprint. The
//! solver never emits anything itself; `quadpose-control` composes the result
//! with the footprint and hands it to a sink.

pub mod frame;
pub mod names;
pub mod solver;

pub use frame::{Frame, wrap_angle};
pub use names::{FrameName, LegFrame};
pub use solver::{
    JointAngles, LegFrames, LegSolution, LegSolver, PlanarSolution, RobotPose, solve_hip_yaw,
    solve_planar,
};
