use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{KneeBranch, RotationOrder};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_body_length() -> f64 {
    6.0
}
const fn default_body_width() -> f64 {
    1.6
}
const fn default_hip_length() -> f64 {
    0.75
}
const fn default_leg_width() -> f64 {
    0.5
}
const fn default_thigh_length() -> f64 {
    3.0
}
const fn default_shank_length() -> f64 {
    3.0
}
const fn default_foot_radius() -> f64 {
    0.25
}
const fn default_foot_back_offset() -> f64 {
    0.25
}
const fn default_power_off_spread() -> f64 {
    1.25
}

// ---------------------------------------------------------------------------
// RobotConfiguration
// ---------------------------------------------------------------------------

/// Fixed geometry of the robot.
///
/// Built once (usually from TOML) and shared read-only by every robot that
/// uses it. Lengths are in scene units, not necessarily meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotConfiguration {
    /// Distance between the front and back hip-yaw joints.
    #[serde(default = "default_body_length")]
    pub body_length: f64,

    /// Distance between the left and right hip-yaw joints.
    #[serde(default = "default_body_width")]
    pub body_width: f64,

    /// Length of the hip link from the yaw joint to the leg's outer face.
    #[serde(default = "default_hip_length")]
    pub hip_length: f64,

    /// Thickness of the leg; half of it is added to the hip link.
    #[serde(default = "default_leg_width")]
    pub leg_width: f64,

    /// Hip-pitch to knee distance.
    #[serde(default = "default_thigh_length")]
    pub thigh_length: f64,

    /// Knee to foot-center distance.
    #[serde(default = "default_shank_length")]
    pub shank_length: f64,

    #[serde(default = "default_foot_radius")]
    pub foot_radius: f64,

    /// How far behind its hip-yaw joint each foot rests.
    #[serde(default = "default_foot_back_offset")]
    pub foot_back_offset: f64,

    /// Extra lateral foot distance for the powered-off stance.
    #[serde(default = "default_power_off_spread")]
    pub power_off_spread: f64,

    /// Euler order used for every frame built from angles.
    #[serde(default)]
    pub rotation_order: RotationOrder,

    /// Knee solution taken by the planar solve.
    #[serde(default)]
    pub knee_branch: KneeBranch,
}

impl Default for RobotConfiguration {
    fn default() -> Self {
        Self {
            body_length: default_body_length(),
            body_width: default_body_width(),
            hip_length: default_hip_length(),
            leg_width: default_leg_width(),
            thigh_length: default_thigh_length(),
            shank_length: default_shank_length(),
            foot_radius: default_foot_radius(),
            foot_back_offset: default_foot_back_offset(),
            power_off_spread: default_power_off_spread(),
            rotation_order: RotationOrder::default(),
            knee_branch: KneeBranch::default(),
        }
    }
}

impl RobotConfiguration {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("body_length", self.body_length),
            ("body_width", self.body_width),
            ("thigh_length", self.thigh_length),
            ("shank_length", self.shank_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        for (field, value) in [
            ("hip_length", self.hip_length),
            ("leg_width", self.leg_width),
            ("foot_radius", self.foot_radius),
            ("foot_back_offset", self.foot_back_offset),
            ("power_off_spread", self.power_off_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOffset { field, value });
            }
        }
        if self.hip_link_length() <= 0.0 {
            return Err(ConfigError::Incompatible(
                "hip_length and leg_width are both zero; the hip-yaw solve needs a hip link"
                    .into(),
            ));
        }
        Ok(())
    }

    pub fn half_body_length(&self) -> f64 {
        self.body_length / 2.0
    }

    pub fn half_body_width(&self) -> f64 {
        self.body_width / 2.0
    }

    /// Offset from the hip-yaw axis to the plane the thigh and shank move in.
    pub fn hip_link_length(&self) -> f64 {
        self.leg_width / 2.0 + self.hip_length
    }

    /// Lateral foot distance from the body centerline for a normal stance.
    ///
    /// Puts each foot directly below the end of its hip link.
    pub fn nominal_foot_out(&self) -> f64 {
        self.hip_link_length() + self.half_body_width()
    }

    /// Lateral foot distance for the wide, powered-off stance.
    pub fn power_off_foot_out(&self) -> f64 {
        self.nominal_foot_out() + self.power_off_spread
    }

    /// Longest hip-to-foot distance the thigh and shank can span.
    pub fn max_reach(&self) -> f64 {
        self.thigh_length + self.shank_length
    }

    /// Shortest hip-to-foot distance the thigh and shank can span.
    pub fn min_reach(&self) -> f64 {
        (self.thigh_length - self.shank_length).abs()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
