//! Standard robot geometries and foot targets.

use nalgebra::Vector3;
use quadpose_core::{LegId, RobotConfiguration};
use quadpose_ik::LegSolver;

/// The stock geometry (hip link 1.0, foot out 1.8).
pub fn default_config() -> RobotConfiguration {
    RobotConfiguration::default()
}

/// Stock geometry with a longer hip (hip link 1.25).
pub fn long_hip_config() -> RobotConfiguration {
    RobotConfiguration {
        hip_length: 1.0,
        ..RobotConfiguration::default()
    }
}

/// Resting foot targets at the nominal stance, indexed by [`LegId::index`].
pub fn nominal_targets(config: &RobotConfiguration) -> [Vector3<f64>; 4] {
    let solver = LegSolver::new(config);
    LegId::ALL.map(|leg| solver.foot_target(leg, config.nominal_foot_out(), None))
}

/// Resting foot targets at the wide powered-off stance.
pub fn power_off_targets(config: &RobotConfiguration) -> [Vector3<f64>; 4] {
    let solver = LegSolver::new(config);
    LegId::ALL.map(|leg| solver.foot_target(leg, config.power_off_foot_out(), None))
}
