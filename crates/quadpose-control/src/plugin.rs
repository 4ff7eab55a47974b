//! Bevy integration.
//!
//! [`QuadposePlugin`] spawns a [`Robot`] whose sink is a [`FrameBuffer`] and
//! copies each buffered frame into the [`Transform`] of every entity tagged
//! with a matching [`FrameTarget`].
//!
//! # Usage
//!
//! 1. Add [`QuadposePlugin`] to your app.
//! 2. Spawn scene nodes with `(FrameTarget(name), Transform::default())`.
//! 3. Drive the robot through `ResMut<RobotRig>`.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::prelude::*;
use tracing::error;

use quadpose_core::RobotConfiguration;
use quadpose_ik::{Frame, FrameName};

use crate::robot::Robot;
use crate::sink::FrameSink;

/// Bevy plugin that keeps tagged transforms in sync with a robot.
#[derive(Debug, Clone, Default)]
pub struct QuadposePlugin {
    pub config: Arc<RobotConfiguration>,
}

impl QuadposePlugin {
    pub const fn new(config: Arc<RobotConfiguration>) -> Self {
        Self { config }
    }
}

impl Plugin for QuadposePlugin {
    fn build(&self, app: &mut App) {
        match Robot::spawn(Arc::clone(&self.config), FrameBuffer::default()) {
            Ok(robot) => {
                app.insert_resource(RobotRig(robot));
            }
            Err(err) => error!(error = %err, "could not spawn robot"),
        }
        app.add_systems(
            Update,
            sync_frame_targets.run_if(resource_exists::<RobotRig>),
        );
    }
}

/// Tags an entity whose transform follows the named frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTarget(pub FrameName);

/// The robot driven by [`QuadposePlugin`].
#[derive(Resource, Debug)]
pub struct RobotRig(pub Robot<FrameBuffer>);

/// Sink holding the latest world-space frame per name.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    frames: HashMap<FrameName, Frame>,
}

impl FrameBuffer {
    pub fn get(&self, name: &FrameName) -> Option<&Frame> {
        self.frames.get(name)
    }
}

impl FrameSink for FrameBuffer {
    fn place(&mut self, name: &FrameName, frame: &Frame) {
        self.frames.insert(*name, *frame);
    }
}

/// Single-precision Bevy transform for a frame.
#[allow(clippy::cast_possible_truncation)]
pub fn frame_to_transform(frame: &Frame) -> Transform {
    let t = frame.translation();
    let q = frame.rotation();
    Transform {
        translation: Vec3::new(t.x as f32, t.y as f32, t.z as f32),
        rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32).normalize(),
        scale: Vec3::ONE,
    }
}

/// Copies buffered frames into tagged transforms.
fn sync_frame_targets(rig: Res<RobotRig>, mut targets: Query<(&FrameTarget, &mut Transform)>) {
    let buffer = rig.0.sink();
    for (target, mut transform) in &mut targets {
        if let Some(frame) = buffer.get(&target.0) {
            *transform = frame_to_transform(frame);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
