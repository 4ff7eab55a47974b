use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// LegId
// ---------------------------------------------------------------------------

/// One of the four legs.
///
/// A single symmetric derivation is mirrored across the legs with the sign
/// accessors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegId {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl LegId {
    /// All legs in solve order.
    pub const ALL: [Self; 4] = [
        Self::FrontLeft,
        Self::FrontRight,
        Self::BackLeft,
        Self::BackRight,
    ];

    /// +1 for left legs, -1 for right legs.
    pub const fn lateral_sign(self) -> f64 {
        match self {
            Self::FrontLeft | Self::BackLeft => 1.0,
            Self::FrontRight | Self::BackRight => -1.0,
        }
    }

    /// +1 for front legs, -1 for back legs.
    pub const fn longitudinal_sign(self) -> f64 {
        match self {
            Self::FrontLeft | Self::FrontRight => 1.0,
            Self::BackLeft | Self::BackRight => -1.0,
        }
    }

    /// Sign of the quarter turn that takes the yaw frame to the hip-pitch frame.
    ///
    /// Opposite to [`lateral_sign`](Self::lateral_sign).
    pub const fn hip_axis_sign(self) -> f64 {
        -self.lateral_sign()
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Self::FrontLeft | Self::BackLeft)
    }

    pub const fn is_front(self) -> bool {
        matches!(self, Self::FrontLeft | Self::FrontRight)
    }

    /// Conventional leg number: 1 = FL, 2 = FR, 3 = BL, 4 = BR.
    pub const fn number(self) -> u8 {
        match self {
            Self::FrontLeft => 1,
            Self::FrontRight => 2,
            Self::BackLeft => 3,
            Self::BackRight => 4,
        }
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::FrontLeft),
            2 => Some(Self::FrontRight),
            3 => Some(Self::BackLeft),
            4 => Some(Self::BackRight),
            _ => None,
        }
    }

    /// Leg on the other side of the body.
    pub const fn mirror(self) -> Self {
        match self {
            Self::FrontLeft => Self::FrontRight,
            Self::FrontRight => Self::FrontLeft,
            Self::BackLeft => Self::BackRight,
            Self::BackRight => Self::BackLeft,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontLeft => "front_left",
            Self::FrontRight => "front_right",
            Self::BackLeft => "back_left",
            Self::BackRight => "back_right",
        }
    }

    /// Index into per-leg arrays ordered like [`LegId::ALL`].
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegId {
    type Err = String;

    /// Accepts snake_case names, short codes (`fl`, `fr`, `bl`, `br`) or leg numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front_left" | "fl" | "1" => Ok(Self::FrontLeft),
            "front_right" | "fr" | "2" => Ok(Self::FrontRight),
            "back_left" | "bl" | "3" => Ok(Self::BackLeft),
            "back_right" | "br" | "4" => Ok(Self::BackRight),
            other => Err(format!("unknown leg: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// RotationOrder
// ---------------------------------------------------------------------------

/// Euler rotation order.
///
/// `ABC` applies the rotation about axis A first, then B, then C, all about
/// fixed axes: `R = R_C * R_B * R_A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RotationOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    #[default]
    Zxy,
    Zyx,
}

impl RotationOrder {
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    /// Axis indices (0 = X, 1 = Y, 2 = Z) in application order.
    pub const fn axes(self) -> [usize; 3] {
        match self {
            Self::Xyz => [0, 1, 2],
            Self::Xzy => [0, 2, 1],
            Self::Yxz => [1, 0, 2],
            Self::Yzx => [1, 2, 0],
            Self::Zxy => [2, 0, 1],
            Self::Zyx => [2, 1, 0],
        }
    }

    /// Whether the axis sequence is a cyclic (even) permutation of XYZ.
    pub const fn is_cyclic(self) -> bool {
        matches!(self, Self::Xyz | Self::Yzx | Self::Zxy)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "XYZ",
            Self::Xzy => "XZY",
            Self::Yxz => "YXZ",
            Self::Yzx => "YZX",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidRotationOrder(s.to_owned()))
    }
}

impl TryFrom<String> for RotationOrder {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RotationOrder> for String {
    fn from(order: RotationOrder) -> Self {
        order.as_str().to_owned()
    }
}

// ---------------------------------------------------------------------------
// KneeBranch
// ---------------------------------------------------------------------------

/// Which root of `sin(knee)` the planar solve takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KneeBranch {
    /// Non-negative root; knee angle in `[0, pi]`.
    #[default]
    Positive,
    /// Non-positive root; knee angle in `[-pi, 0]`.
    Negative,
}

impl KneeBranch {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// BodyPose
// ---------------------------------------------------------------------------

/// Body pose relative to the footprint frame. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyPose {
    pub yaw: f64,
    pub roll: f64,
    pub pitch: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BodyPose {
    pub const fn new(yaw: f64, roll: f64, pitch: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            yaw,
            roll,
            pitch,
            x,
            y,
            z,
        }
    }

    /// Level body at height `z` above the footprint origin.
    pub const fn at_height(z: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, z)
    }

    /// `(yaw, roll, pitch)` as taken by frame constructors.
    pub const fn angles(&self) -> (f64, f64, f64) {
        (self.yaw, self.roll, self.pitch)
    }

    pub const fn position(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Overwrite the fields set in `update`, keep the rest.
    #[must_use]
    pub fn merged(self, update: &BodyPoseUpdate) -> Self {
        Self {
            yaw: update.yaw.unwrap_or(self.yaw),
            roll: update.roll.unwrap_or(self.roll),
            pitch: update.pitch.unwrap_or(self.pitch),
            x: update.x.unwrap_or(self.x),
            y: update.y.unwrap_or(self.y),
            z: update.z.unwrap_or(self.z),
        }
    }
}

/// Partial body pose. `None` keeps the current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyPoseUpdate {
    pub yaw: Option<f64>,
    pub roll: Option<f64>,
    pub pitch: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl BodyPoseUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update that sets every field.
    pub const fn full(pose: BodyPose) -> Self {
        Self {
            yaw: Some(pose.yaw),
            roll: Some(pose.roll),
            pitch: Some(pose.pitch),
            x: Some(pose.x),
            y: Some(pose.y),
            z: Some(pose.z),
        }
    }

    #[must_use]
    pub const fn yaw(mut self, yaw: f64) -> Self {
        self.yaw = Some(yaw);
        self
    }

    #[must_use]
    pub const fn roll(mut self, roll: f64) -> Self {
        self.roll = Some(roll);
        self
    }

    #[must_use]
    pub const fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    #[must_use]
    pub const fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    #[must_use]
    pub const fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub const fn z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.yaw.is_none()
            && self.roll.is_none()
            && self.pitch.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.z.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
