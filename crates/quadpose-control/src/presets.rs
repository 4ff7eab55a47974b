//! Named stances.

use std::fmt;
use std::str::FromStr;

use quadpose_core::{BodyPose, RobotConfiguration};

/// A canned body pose plus stance width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Nominal stance, body low.
    Crouch,
    StandTall,
    /// Same stance as [`Preset::Crouch`].
    PowerOn,
    /// Wide stance with the body almost on the ground.
    PowerOff,
    /// Standing tall, turned about the vertical axis.
    Pose1,
    /// Standing tall, turned and tilted.
    Pose2,
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Crouch,
        Self::StandTall,
        Self::PowerOn,
        Self::PowerOff,
        Self::Pose1,
        Self::Pose2,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crouch => "crouch",
            Self::StandTall => "stand_tall",
            Self::PowerOn => "power_on",
            Self::PowerOff => "power_off",
            Self::Pose1 => "pose_1",
            Self::Pose2 => "pose_2",
        }
    }

    /// Body pose the preset puts the robot in. Every field is set.
    pub const fn body_pose(self) -> BodyPose {
        match self {
            Self::Crouch | Self::PowerOn => BodyPose::at_height(2.0),
            Self::StandTall => BodyPose::at_height(4.0),
            Self::PowerOff => BodyPose::at_height(1.0),
            Self::Pose1 => BodyPose::new(0.4, 0.0, 0.0, 0.0, 0.0, 4.0),
            Self::Pose2 => BodyPose::new(0.4, 0.1, 0.4, 0.0, 0.0, 4.0),
        }
    }

    /// Lateral foot distance from the centerline for this preset.
    pub fn foot_out(self, config: &RobotConfiguration) -> f64 {
        match self {
            Self::PowerOff => config.power_off_foot_out(),
            _ => config.nominal_foot_out(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "crouch" => Ok(Self::Crouch),
            "stand_tall" | "stand" => Ok(Self::StandTall),
            "power_on" => Ok(Self::PowerOn),
            "power_off" => Ok(Self::PowerOff),
            "pose_1" | "pose1" => Ok(Self::Pose1),
            "pose_2" | "pose2" => Ok(Self::Pose2),
            _ => Err(format!(
                "unknown preset '{s}' (expected one of: {})",
                Self::ALL.map(Self::as_str).join(", ")
            )),
        }
    }
}
