//! Analytic leg IK.
//!
//! Each leg is a hip-yaw joint (joint A), a hip link of fixed length, and a
//! planar thigh/shank pair. The solve runs in two stages:
//!
//! 1. Turn joint A so the end of the hip link lies in the plane that also
//!    contains the foot target.
//! 2. Solve the thigh/shank pair in that plane with the law of cosines.
//!
//! All four legs share one derivation; [`LegId`] sign accessors mirror it.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;
use tracing::{debug, trace};

use quadpose_core::{
    BodyPose, KinematicsError, KneeBranch, LegId, RobotConfiguration, RotationOrder,
};

use crate::frame::Frame;
use crate::names::{FrameName, LegFrame};

/// Slack on `|cos(knee)| <= 1` for targets exactly at full extension or fold.
const REACH_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Solved joint angles for one leg, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Joint A, about the leg's longitudinal axis.
    pub hip_yaw: f64,
    pub hip_pitch: f64,
    pub knee: f64,
}

/// Result of the planar thigh/shank solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarSolution {
    pub hip_pitch: f64,
    pub knee: f64,
}

/// Footprint-relative frames of one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegFrames {
    pub joint_a_location: Frame,
    pub foot_target: Frame,
    pub joint_a_rotated: Frame,
    pub hip_location: Frame,
    pub hip_rotated: Frame,
    pub knee_location: Frame,
    pub knee_rotated: Frame,
}

impl LegFrames {
    pub const fn get(&self, which: LegFrame) -> &Frame {
        match which {
            LegFrame::JointALocation => &self.joint_a_location,
            LegFrame::FootTarget => &self.foot_target,
            LegFrame::JointARotated => &self.joint_a_rotated,
            LegFrame::HipLocation => &self.hip_location,
            LegFrame::HipRotated => &self.hip_rotated,
            LegFrame::KneeLocation => &self.knee_location,
            LegFrame::KneeRotated => &self.knee_rotated,
        }
    }

    /// Frames in solve order.
    pub fn iter(&self) -> impl Iterator<Item = (LegFrame, &Frame)> {
        LegFrame::ALL.into_iter().map(move |which| (which, self.get(which)))
    }
}

/// Everything computed for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegSolution {
    pub leg: LegId,
    pub frames: LegFrames,
    pub angles: JointAngles,
    shank_length: f64,
}

impl LegSolution {
    /// Foot center from forward kinematics (footprint space).
    pub fn foot_position(&self) -> Vector3<f64> {
        self.frames
            .knee_rotated
            .transform_point(&Vector3::new(self.shank_length, 0.0, 0.0))
    }

    /// Foot target the leg was solved for (footprint space).
    pub fn target_position(&self) -> Vector3<f64> {
        self.frames.foot_target.translation()
    }

    pub fn named_frames(&self) -> impl Iterator<Item = (FrameName, &Frame)> {
        let leg = self.leg;
        self.frames
            .iter()
            .map(move |(which, frame)| (FrameName::Leg(leg, which), frame))
    }
}

/// A fully solved robot: the body frame and all four legs, footprint-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotPose {
    pub body: Frame,
    pub legs: [LegSolution; 4],
}

impl RobotPose {
    pub const fn leg(&self, leg: LegId) -> &LegSolution {
        &self.legs[leg.index()]
    }

    /// All frames in emission order: the body, then each leg in [`LegId::ALL`] order.
    pub fn frames(&self) -> impl Iterator<Item = (FrameName, &Frame)> {
        std::iter::once((FrameName::Body, &self.body))
            .chain(self.legs.iter().flat_map(LegSolution::named_frames))
    }
}

// ---------------------------------------------------------------------------
// LegSolver
// ---------------------------------------------------------------------------

/// Analytic IK solver bound to one robot geometry.
#[derive(Debug, Clone, Copy)]
pub struct LegSolver<'a> {
    config: &'a RobotConfiguration,
    order: RotationOrder,
    knee_branch: KneeBranch,
}

impl<'a> LegSolver<'a> {
    /// Solver using the configuration's rotation order and knee branch.
    pub const fn new(config: &'a RobotConfiguration) -> Self {
        Self {
            config,
            order: config.rotation_order,
            knee_branch: config.knee_branch,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: RotationOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn with_knee_branch(mut self, branch: KneeBranch) -> Self {
        self.knee_branch = branch;
        self
    }

    pub const fn config(&self) -> &RobotConfiguration {
        self.config
    }

    pub const fn order(&self) -> RotationOrder {
        self.order
    }

    /// Body frame relative to the footprint.
    pub fn body_frame(&self, pose: &BodyPose) -> Frame {
        Frame::from_euler_and_position(self.order, pose.angles(), pose.position())
    }

    /// Fixed transform from the body frame to a leg's joint A.
    ///
    /// Puts joint A at a body corner. The attitude is decoded in the solver's
    /// rotation order: under `ZXY` (and `XZY`, `ZYX`) joint A's local X axis
    /// points away from the body, under the other orders it points down.
    pub fn joint_a_offset(&self, leg: LegId) -> Frame {
        Frame::from_euler_and_position(
            self.order,
            (leg.lateral_sign() * FRAC_PI_2, 0.0, FRAC_PI_2),
            (
                leg.longitudinal_sign() * self.config.half_body_length(),
                leg.lateral_sign() * self.config.half_body_width(),
                0.0,
            ),
        )
    }

    /// Resting foot position for `leg` in footprint space, plus an optional offset.
    pub fn foot_target(
        &self,
        leg: LegId,
        foot_out: f64,
        offset: Option<Vector3<f64>>,
    ) -> Vector3<f64> {
        let rest = Vector3::new(
            leg.longitudinal_sign() * self.config.half_body_length()
                - self.config.foot_back_offset,
            leg.lateral_sign() * foot_out,
            self.config.foot_radius,
        );
        rest + offset.unwrap_or_else(Vector3::zeros)
    }

    /// Solve one leg for a foot target given in footprint space.
    pub fn solve(
        &self,
        body: &Frame,
        leg: LegId,
        foot_target: &Vector3<f64>,
    ) -> Result<LegSolution, KinematicsError> {
        let cfg = self.config;
        let order = self.order;

        let joint_a_location = body * &self.joint_a_offset(leg);
        let foot_frame = Frame::from_translation(order, foot_target.x, foot_target.y, foot_target.z);

        let in_joint_a = joint_a_location.local_point(foot_target);
        let hip_yaw = solve_hip_yaw(leg, in_joint_a.x, in_joint_a.y, cfg.hip_link_length())?;
        let joint_a_rotated = joint_a_location * Frame::from_yaw(order, -hip_yaw);

        let hip_offset = Frame::from_euler_and_position(
            order,
            (0.0, 0.0, leg.hip_axis_sign() * FRAC_PI_2),
            (cfg.hip_link_length(), 0.0, 0.0),
        );
        let hip_location = joint_a_rotated * hip_offset;

        let in_hip = hip_location.local_point(foot_target);
        trace!(%leg, x = in_hip.x, y = in_hip.y, off_plane = in_hip.z, "planar target");
        let planar = solve_planar(
            leg,
            in_hip.x,
            in_hip.y,
            cfg.thigh_length,
            cfg.shank_length,
            self.knee_branch,
        )?;

        let hip_rotated = hip_location * Frame::from_yaw(order, planar.hip_pitch);
        let knee_location = hip_rotated * Frame::from_translation(order, cfg.thigh_length, 0.0, 0.0);
        let knee_rotated = knee_location * Frame::from_yaw(order, planar.knee);

        let angles = JointAngles {
            hip_yaw,
            hip_pitch: planar.hip_pitch,
            knee: planar.knee,
        };
        debug!(
            %leg,
            hip_yaw = angles.hip_yaw,
            hip_pitch = angles.hip_pitch,
            knee = angles.knee,
            "leg solved"
        );

        Ok(LegSolution {
            leg,
            frames: LegFrames {
                joint_a_location,
                foot_target: foot_frame,
                joint_a_rotated,
                hip_location,
                hip_rotated,
                knee_location,
                knee_rotated,
            },
            angles,
            shank_length: cfg.shank_length,
        })
    }

    /// Solve the body and all four legs. `targets` is indexed by [`LegId::index`].
    ///
    /// Stops at the first leg that fails.
    pub fn solve_robot(
        &self,
        pose: &BodyPose,
        targets: &[Vector3<f64>; 4],
    ) -> Result<RobotPose, KinematicsError> {
        let body = self.body_frame(pose);
        let solve = |leg: LegId| self.solve(&body, leg, &targets[leg.index()]);
        let legs = [
            solve(LegId::FrontLeft)?,
            solve(LegId::FrontRight)?,
            solve(LegId::BackLeft)?,
            solve(LegId::BackRight)?,
        ];
        Ok(RobotPose { body, legs })
    }
}

// ---------------------------------------------------------------------------
// Closed-form stages
// ---------------------------------------------------------------------------

/// Hip-yaw angle that swings a hip link of `hip_link_length` into the plane
/// of the foot.
///
/// `(dx, dy)` is the foot in joint A's frame: X along the unturned hip link,
/// Y across it.
#[allow(clippy::float_cmp)]
pub fn solve_hip_yaw(
    leg: LegId,
    dx: f64,
    dy: f64,
    hip_link_length: f64,
) -> Result<f64, KinematicsError> {
    let raw = (dx / dy).atan();
    let sin_raw = raw.sin();
    if !sin_raw.is_finite() || sin_raw == 0.0 {
        return Err(KinematicsError::SingularYaw {
            leg,
            reason: "foot target on the hip-yaw axis",
        });
    }
    let hypotenuse = dx / sin_raw;
    let ratio = hip_link_length / hypotenuse;
    if !ratio.is_finite() || ratio.abs() > 1.0 {
        return Err(KinematicsError::SingularYaw {
            leg,
            reason: "foot target closer to the hip-yaw axis than the hip link",
        });
    }
    Ok(raw - ratio.asin())
}

/// Two-link planar IK for a target at `(x, y)` in the hip-pitch frame.
pub fn solve_planar(
    leg: LegId,
    x: f64,
    y: f64,
    thigh: f64,
    shank: f64,
    branch: KneeBranch,
) -> Result<PlanarSolution, KinematicsError> {
    let ct2 = (x * x + y * y - thigh * thigh - shank * shank) / (2.0 * thigh * shank);
    if !ct2.is_finite() || ct2.abs() > 1.0 + REACH_TOLERANCE {
        return Err(KinematicsError::OutOfReach { leg, ct2 });
    }
    let ct2 = ct2.clamp(-1.0, 1.0);
    let root = (1.0 - ct2 * ct2).sqrt();
    let st2 = if root > 0.0 { branch.sign() * root } else { 0.0 };

    let knee = st2.atan2(ct2);
    let k1 = thigh + shank * knee.cos();
    let k2 = shank * knee.sin();
    let hip_pitch = y.atan2(x) - k2.atan2(k1);

    Ok(PlanarSolution { hip_pitch, knee })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::frame::wrap_angle;
    use approx::assert_relative_eq;

    fn planar_fk(sol: &PlanarSolution, thigh: f64, shank: f64) -> (f64, f64) {
        let a = sol.hip_pitch;
        let b = sol.hip_pitch + sol.knee;
        (
            thigh * a.cos() + shank * b.cos(),
            thigh * a.sin() + shank * b.sin(),
        )
    }

    // ---- hip yaw ----

    #[test]
    fn hip_yaw_zero_when_foot_below_hip_link() {
        // Foot straight below the end of a unit hip link.
        let yaw = solve_hip_yaw(LegId::FrontLeft, 1.0, -1.75, 1.0).unwrap();
        assert_relative_eq!(yaw, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn hip_yaw_puts_hip_link_end_in_foot_plane() {
        let (dx, dy, link) = (2.75, -3.0, 1.25);
        let yaw = solve_hip_yaw(LegId::FrontLeft, dx, dy, link).unwrap();
        // Foot coordinate along the turned hip link equals the link length.
        let along = dx * yaw.cos() - dy * yaw.sin();
        assert_relative_eq!(along, link, epsilon = 1e-12);
    }

    #[test]
    fn hip_yaw_is_odd_in_dy() {
        let left = solve_hip_yaw(LegId::FrontLeft, 2.0, -1.5, 1.0).unwrap();
        let right = solve_hip_yaw(LegId::FrontRight, 2.0, 1.5, 1.0).unwrap();
        assert_relative_eq!(left, -right, epsilon = 1e-12);
    }

    #[test]
    fn hip_yaw_on_axis_is_singular() {
        let err = solve_hip_yaw(LegId::BackLeft, 0.0, -2.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            KinematicsError::SingularYaw {
                leg: LegId::BackLeft,
                ..
            }
        ));
        assert!(solve_hip_yaw(LegId::BackLeft, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn hip_yaw_inside_hip_link_is_singular() {
        let err = solve_hip_yaw(LegId::FrontRight, 0.3, 0.4, 1.0).unwrap_err();
        assert!(matches!(err, KinematicsError::SingularYaw { .. }));
    }

    // ---- planar ----

    #[test]
    fn planar_round_trip_over_annulus() {
        let (thigh, shank) = (3.0, 2.0);
        for i in 0..=10 {
            let r = 1.0 + 4.0 * f64::from(i) / 10.0;
            for j in 0..12 {
                let phi = -PI + 2.0 * PI * f64::from(j) / 12.0;
                let (x, y) = (r * phi.cos(), r * phi.sin());
                for branch in [KneeBranch::Positive, KneeBranch::Negative] {
                    let sol = solve_planar(LegId::FrontLeft, x, y, thigh, shank, branch).unwrap();
                    let (fx, fy) = planar_fk(&sol, thigh, shank);
                    assert_relative_eq!(fx, x, epsilon = 1e-9);
                    assert_relative_eq!(fy, y, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn planar_full_extension_gives_zero_knee() {
        let sol = solve_planar(LegId::FrontLeft, 5.0, 0.0, 3.0, 2.0, KneeBranch::Positive).unwrap();
        assert_relative_eq!(sol.knee, 0.0);
        assert_relative_eq!(sol.hip_pitch, 0.0);
        let sol = solve_planar(LegId::FrontLeft, 5.0, 0.0, 3.0, 2.0, KneeBranch::Negative).unwrap();
        assert_relative_eq!(sol.knee, 0.0);
    }

    #[test]
    fn planar_full_fold_gives_pi_knee() {
        let sol = solve_planar(LegId::FrontLeft, 1.0, 0.0, 3.0, 2.0, KneeBranch::Positive).unwrap();
        assert_relative_eq!(sol.knee, PI);
        let sol = solve_planar(LegId::FrontLeft, 1.0, 0.0, 3.0, 2.0, KneeBranch::Negative).unwrap();
        assert_relative_eq!(sol.knee, PI);
    }

    #[test]
    fn planar_knee_branch_sign() {
        let pos = solve_planar(LegId::FrontLeft, 0.5, -3.5, 3.0, 3.0, KneeBranch::Positive).unwrap();
        let neg = solve_planar(LegId::FrontLeft, 0.5, -3.5, 3.0, 3.0, KneeBranch::Negative).unwrap();
        assert!(pos.knee > 0.0);
        assert!(neg.knee < 0.0);
        assert_relative_eq!(pos.knee, -neg.knee, epsilon = 1e-12);
    }

    #[test]
    fn planar_too_far_is_out_of_reach() {
        let err = solve_planar(LegId::BackRight, 7.0, 0.0, 3.0, 3.0, KneeBranch::Positive).unwrap_err();
        match err {
            KinematicsError::OutOfReach { leg, ct2 } => {
                assert_eq!(leg, LegId::BackRight);
                assert!(ct2 > 1.0);
            }
            other => panic!("expected OutOfReach, got {other:?}"),
        }
    }

    #[test]
    fn planar_too_close_is_out_of_reach() {
        let err = solve_planar(LegId::FrontLeft, 0.5, 0.0, 3.0, 2.0, KneeBranch::Positive).unwrap_err();
        assert!(matches!(err, KinematicsError::OutOfReach { ct2, .. } if ct2 < -1.0));
    }

    // ---- full leg ----

    fn crouch_solution(config: &RobotConfiguration, leg: LegId) -> LegSolution {
        let solver = LegSolver::new(config);
        let body = solver.body_frame(&BodyPose::at_height(2.0));
        let target = solver.foot_target(leg, config.nominal_foot_out(), None);
        solver.solve(&body, leg, &target).unwrap()
    }

    #[test]
    fn joint_a_points_outward() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        for leg in LegId::ALL {
            let joint_a = solver.joint_a_offset(leg);
            assert_relative_eq!(
                joint_a.axis(0),
                Vector3::new(0.0, leg.lateral_sign(), 0.0),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                joint_a.translation(),
                Vector3::new(3.0 * leg.longitudinal_sign(), 0.8 * leg.lateral_sign(), 0.0),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn joint_a_axis_follows_rotation_order() {
        let config = RobotConfiguration::default();
        for (order, expected) in [
            (RotationOrder::Zxy, Vector3::new(0.0, 1.0, 0.0)),
            (RotationOrder::Xzy, Vector3::new(0.0, 1.0, 0.0)),
            (RotationOrder::Zyx, Vector3::new(0.0, 1.0, 0.0)),
            (RotationOrder::Xyz, Vector3::new(0.0, 0.0, -1.0)),
            (RotationOrder::Yxz, Vector3::new(0.0, 0.0, -1.0)),
            (RotationOrder::Yzx, Vector3::new(0.0, 0.0, -1.0)),
        ] {
            let joint_a = LegSolver::new(&config)
                .with_order(order)
                .joint_a_offset(LegId::FrontLeft);
            assert_relative_eq!(joint_a.axis(0), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn knee_branch_override_flips_knee() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config).with_knee_branch(KneeBranch::Negative);
        let body = solver.body_frame(&BodyPose::at_height(2.0));
        let target = solver.foot_target(LegId::BackRight, config.nominal_foot_out(), None);
        let sol = solver.solve(&body, LegId::BackRight, &target).unwrap();
        let default = crouch_solution(&config, LegId::BackRight);
        assert!(sol.angles.knee < 0.0);
        assert_relative_eq!(sol.angles.knee, -default.angles.knee, epsilon = 1e-12);
        assert_relative_eq!(sol.foot_position(), target, epsilon = 1e-9);
    }

    #[test]
    fn foot_target_rest_and_offset() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        let rest = solver.foot_target(LegId::BackRight, 1.8, None);
        assert_relative_eq!(rest, Vector3::new(-3.25, -1.8, 0.25), epsilon = 1e-12);
        let moved = solver.foot_target(LegId::BackRight, 1.8, Some(Vector3::new(1.0, 0.5, 0.0)));
        assert_relative_eq!(moved, Vector3::new(-2.25, -1.3, 0.25), epsilon = 1e-12);
    }

    #[test]
    fn crouch_angles() {
        let config = RobotConfiguration::default();
        let fl = crouch_solution(&config, LegId::FrontLeft);
        assert_relative_eq!(fl.angles.hip_yaw, 0.0, epsilon = 1e-9);
        assert_relative_eq!(fl.angles.hip_pitch, -2.98442, epsilon = 1e-4);
        assert_relative_eq!(fl.angles.knee, 2.54346, epsilon = 1e-4);
        let fr = crouch_solution(&config, LegId::FrontRight);
        assert_relative_eq!(fr.angles.hip_pitch, 0.15717, epsilon = 1e-4);
        assert_relative_eq!(fr.angles.knee, 2.54346, epsilon = 1e-4);
    }

    #[test]
    fn forward_kinematics_reaches_target() {
        let config = RobotConfiguration::default();
        for leg in LegId::ALL {
            let sol = crouch_solution(&config, leg);
            assert_relative_eq!(sol.foot_position(), sol.target_position(), epsilon = 1e-9);
        }
    }

    #[test]
    fn frame_chain_is_connected() {
        let config = RobotConfiguration::default();
        let sol = crouch_solution(&config, LegId::BackLeft);
        let f = &sol.frames;
        // Rotations do not move the origin.
        assert_relative_eq!(f.joint_a_rotated.translation(), f.joint_a_location.translation(), epsilon = 1e-12);
        assert_relative_eq!(f.hip_rotated.translation(), f.hip_location.translation(), epsilon = 1e-12);
        assert_relative_eq!(f.knee_rotated.translation(), f.knee_location.translation(), epsilon = 1e-12);
        // Links keep their lengths.
        let hip_link = (f.hip_location.translation() - f.joint_a_location.translation()).norm();
        assert_relative_eq!(hip_link, config.hip_link_length(), epsilon = 1e-12);
        let thigh = (f.knee_location.translation() - f.hip_location.translation()).norm();
        assert_relative_eq!(thigh, config.thigh_length, epsilon = 1e-12);
    }

    #[test]
    fn negative_knee_branch_reaches_target() {
        let config = RobotConfiguration {
            knee_branch: KneeBranch::Negative,
            ..RobotConfiguration::default()
        };
        let sol = crouch_solution(&config, LegId::FrontLeft);
        assert_relative_eq!(sol.angles.knee, -2.54346, epsilon = 1e-4);
        assert_relative_eq!(sol.foot_position(), sol.target_position(), epsilon = 1e-9);
    }

    #[test]
    fn every_rotation_order_reaches_target() {
        let config = RobotConfiguration::default();
        for order in RotationOrder::ALL {
            let solver = LegSolver::new(&config).with_order(order);
            let body = solver.body_frame(&BodyPose::at_height(2.0));
            for leg in LegId::ALL {
                let target = solver.foot_target(leg, config.nominal_foot_out(), None);
                let sol = solver.solve(&body, leg, &target).unwrap();
                assert_relative_eq!(sol.foot_position(), target, epsilon = 1e-9);
                assert_eq!(sol.frames.knee_rotated.order(), order);
            }
        }
    }

    #[test]
    fn body_too_high_is_out_of_reach() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        let body = solver.body_frame(&BodyPose::at_height(10.0));
        let target = solver.foot_target(LegId::FrontLeft, config.nominal_foot_out(), None);
        let err = solver.solve(&body, LegId::FrontLeft, &target).unwrap_err();
        assert!(matches!(err, KinematicsError::OutOfReach { leg: LegId::FrontLeft, .. }));
    }

    #[test]
    fn target_inside_hip_link_is_singular() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        let body = solver.body_frame(&BodyPose::at_height(2.0));
        // Level with joint A, half a hip link outboard.
        let target = Vector3::new(3.0, 1.3, 2.0);
        let err = solver.solve(&body, LegId::FrontLeft, &target).unwrap_err();
        assert!(matches!(err, KinematicsError::SingularYaw { .. }));
    }

    #[test]
    fn solve_robot_orders_legs() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        let targets = LegId::ALL.map(|leg| solver.foot_target(leg, config.nominal_foot_out(), None));
        let pose = solver.solve_robot(&BodyPose::at_height(2.0), &targets).unwrap();
        for leg in LegId::ALL {
            assert_eq!(pose.leg(leg).leg, leg);
        }
        let names: Vec<FrameName> = pose.frames().map(|(n, _)| n).collect();
        let expected: Vec<FrameName> = FrameName::all().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn solve_robot_fails_on_any_leg() {
        let config = RobotConfiguration::default();
        let solver = LegSolver::new(&config);
        let mut targets = LegId::ALL.map(|leg| solver.foot_target(leg, config.nominal_foot_out(), None));
        targets[LegId::BackRight.index()].z -= 20.0;
        let err = solver.solve_robot(&BodyPose::at_height(2.0), &targets).unwrap_err();
        assert_eq!(err.leg(), LegId::BackRight);
    }

    #[test]
    fn mirrored_legs_have_mirrored_angles() {
        let config = RobotConfiguration::default();
        let fl = crouch_solution(&config, LegId::FrontLeft);
        let fr = crouch_solution(&config, LegId::FrontRight);
        assert_relative_eq!(fl.angles.hip_yaw, -fr.angles.hip_yaw, epsilon = 1e-9);
        assert_relative_eq!(fl.angles.knee, fr.angles.knee, epsilon = 1e-9);
        assert_relative_eq!(
            wrap_angle(fl.angles.hip_pitch - fr.angles.hip_pitch).abs(),
            PI,
            epsilon = 1e-9
        );
    }
}
