//! Robot state and the control API.
//!
//! [`Robot`] owns the mutable [`RobotState`] of one robot and a [`FrameSink`].
//! Every control call updates the state, re-solves all four legs, and hands
//! the resulting world-space frames to the sink.
//!
//! A call either succeeds completely or leaves the robot untouched: all legs
//! are solved before the sink sees anything, and on failure the state is
//! restored to what it was before the call.

use std::sync::Arc;

use nalgebra::Vector3;
use tracing::{debug, info, warn};

use quadpose_core::{
    BodyPose, BodyPoseUpdate, ConfigError, KinematicsError, LegId, QuadposeError,
    RobotConfiguration, RotationOrder,
};
use quadpose_ik::{Frame, FrameName, JointAngles, LegSolver, RobotPose};

use crate::presets::Preset;
use crate::sink::FrameSink;

// ---------------------------------------------------------------------------
// RobotState
// ---------------------------------------------------------------------------

/// Everything about one robot that changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotState {
    /// Body pose relative to the footprint.
    pub body_pose: BodyPose,
    /// Footprint pose in the world.
    pub footprint: Frame,
    /// Lateral foot distance from the body centerline.
    pub foot_out: f64,
    pub rotation_order: RotationOrder,
    pending_offsets: [Option<Vector3<f64>>; 4],
}

impl RobotState {
    /// Powered-off stance: wide feet, body resting just above the footprint.
    pub fn initial(config: &RobotConfiguration) -> Self {
        Self {
            body_pose: BodyPose::at_height(1.0),
            footprint: Frame::identity(config.rotation_order),
            foot_out: config.power_off_foot_out(),
            rotation_order: config.rotation_order,
            pending_offsets: [None; 4],
        }
    }

    /// One-shot foot offset waiting for the next recomputation.
    pub const fn pending_offset(&self, leg: LegId) -> Option<Vector3<f64>> {
        self.pending_offsets[leg.index()]
    }

    pub fn has_pending_offsets(&self) -> bool {
        self.pending_offsets.iter().any(Option::is_some)
    }
}

// ---------------------------------------------------------------------------
// Robot
// ---------------------------------------------------------------------------

/// One robot: shared geometry, its own state, and where its frames go.
#[derive(Debug)]
pub struct Robot<S: FrameSink> {
    config: Arc<RobotConfiguration>,
    state: RobotState,
    sink: S,
    last_pose: Option<RobotPose>,
}

impl<S: FrameSink> Robot<S> {
    /// Build a robot in its initial state without solving anything.
    pub fn new(config: Arc<RobotConfiguration>, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RobotState::initial(&config);
        Ok(Self {
            config,
            state,
            sink,
            last_pose: None,
        })
    }

    /// Build a robot and place its initial frames.
    pub fn spawn(config: Arc<RobotConfiguration>, sink: S) -> Result<Self, QuadposeError> {
        let mut robot = Self::new(config, sink)?;
        robot.recompute_all()?;
        info!(
            foot_out = robot.state.foot_out,
            z = robot.state.body_pose.z,
            "robot spawned"
        );
        Ok(robot)
    }

    // ---- accessors ----

    pub fn config(&self) -> &RobotConfiguration {
        &self.config
    }

    pub const fn state(&self) -> &RobotState {
        &self.state
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Footprint-relative result of the last successful recomputation.
    pub const fn last_pose(&self) -> Option<&RobotPose> {
        self.last_pose.as_ref()
    }

    pub fn joint_angles(&self, leg: LegId) -> Option<JointAngles> {
        self.last_pose.as_ref().map(|pose| pose.leg(leg).angles)
    }

    /// World-space frame from the last successful recomputation.
    pub fn world_frame(&self, name: &FrameName) -> Option<Frame> {
        let pose = self.last_pose.as_ref()?;
        pose.frames()
            .find(|(n, _)| n == name)
            .map(|(_, frame)| self.state.footprint * *frame)
    }

    // ---- control ----

    /// Change the fields of the body pose that `update` sets.
    pub fn set_body_pose(&mut self, update: BodyPoseUpdate) -> Result<(), KinematicsError> {
        self.update(|state| state.body_pose = state.body_pose.merged(&update))
    }

    /// Replace the footprint frame.
    pub fn set_footprint_frame(&mut self, frame: Frame) -> Result<(), KinematicsError> {
        self.update(|state| state.footprint = frame.with_order(state.rotation_order))
    }

    /// Put the footprint at an absolute world pose.
    pub fn place_footprint(
        &mut self,
        yaw: f64,
        roll: f64,
        pitch: f64,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<(), KinematicsError> {
        self.update(|state| {
            state.footprint = Frame::from_euler_and_position(
                state.rotation_order,
                (yaw, roll, pitch),
                (x, y, z),
            );
        })
    }

    /// Move the footprint by a delta expressed in its own frame.
    pub fn move_footprint(
        &mut self,
        yaw: f64,
        roll: f64,
        pitch: f64,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<(), KinematicsError> {
        self.update(|state| {
            let delta = Frame::from_euler_and_position(
                state.rotation_order,
                (yaw, roll, pitch),
                (x, y, z),
            );
            state.footprint = state.footprint * delta;
        })
    }

    /// Offset `leg`'s foot target by `(x, y, z)` on the next recomputation only.
    ///
    /// Replaces any offset already pending for that leg. Nothing is solved
    /// until the next control call or [`recompute_all`](Self::recompute_all).
    pub fn move_foot(&mut self, leg: LegId, x: f64, y: f64, z: f64) {
        debug!(%leg, x, y, z, "foot offset queued");
        self.state.pending_offsets[leg.index()] = Some(Vector3::new(x, y, z));
    }

    /// Drop a pending foot offset without applying it.
    pub fn cancel_foot_move(&mut self, leg: LegId) -> Option<Vector3<f64>> {
        self.state.pending_offsets[leg.index()].take()
    }

    /// Use `order` for every frame built from angles from now on.
    ///
    /// The fixed joint-A and hip attitudes are decoded in this order too, so
    /// the leg geometry changes with it: joint A's X axis points outward under
    /// `ZXY`, `XZY` and `ZYX` but down under the other three. A stance that is
    /// reachable in one order may fail in another, in which case the order is
    /// left unchanged.
    pub fn set_rotation_order(&mut self, order: RotationOrder) -> Result<(), KinematicsError> {
        self.update(|state| {
            state.rotation_order = order;
            state.footprint = state.footprint.with_order(order);
        })
    }

    // ---- presets ----

    pub fn apply(&mut self, preset: Preset) -> Result<(), KinematicsError> {
        let foot_out = preset.foot_out(&self.config);
        let body_pose = preset.body_pose();
        self.update(|state| {
            state.foot_out = foot_out;
            state.body_pose = body_pose;
        })?;
        info!(%preset, "preset applied");
        Ok(())
    }

    pub fn crouch(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::Crouch)
    }

    pub fn stand_tall(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::StandTall)
    }

    pub fn power_on(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::PowerOn)
    }

    pub fn power_off(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::PowerOff)
    }

    pub fn pose_1(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::Pose1)
    }

    pub fn pose_2(&mut self) -> Result<(), KinematicsError> {
        self.apply(Preset::Pose2)
    }

    // ---- solving ----

    /// Solve the body and all four legs from the current state and place
    /// every frame in world space.
    ///
    /// Pending foot offsets are consumed. On failure nothing is placed and
    /// the offsets stay pending.
    pub fn recompute_all(&mut self) -> Result<(), KinematicsError> {
        let offsets = self.state.pending_offsets;
        let pose = match self.solve_current() {
            Ok(pose) => pose,
            Err(err) => {
                self.state.pending_offsets = offsets;
                warn!(leg = %err.leg(), error = %err, "recompute failed");
                return Err(err);
            }
        };

        let footprint = self.state.footprint;
        for (name, frame) in pose.frames() {
            self.sink.place(&name, &(footprint * *frame));
        }
        self.last_pose = Some(pose);
        Ok(())
    }

    fn solve_current(&mut self) -> Result<RobotPose, KinematicsError> {
        let solver = LegSolver::new(&self.config).with_order(self.state.rotation_order);
        let foot_out = self.state.foot_out;
        let pending = &mut self.state.pending_offsets;
        let targets = LegId::ALL.map(|leg| solver.foot_target(leg, foot_out, pending[leg.index()].take()));
        solver.solve_robot(&self.state.body_pose, &targets)
    }

    /// Apply `change` and recompute, restoring the previous state on failure.
    fn update(&mut self, change: impl FnOnce(&mut RobotState)) -> Result<(), KinematicsError> {
        let snapshot = self.state;
        change(&mut self.state);
        if let Err(err) = self.recompute_all() {
            self.state = snapshot;
            return Err(err);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
