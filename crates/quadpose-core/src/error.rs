use thiserror::Error;

use crate::types::LegId;

/// Top-level error type for quadpose.
#[derive(Debug, Error)]
pub enum QuadposeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid length for {field}: {value} (must be > 0)")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("Invalid value for {field}: {value} (must be >= 0)")]
    NegativeOffset { field: &'static str, value: f64 },

    #[error("Invalid rotation order: {0:?} (expected one of XYZ, XZY, YXZ, YZX, ZXY, ZYX)")]
    InvalidRotationOrder(String),

    #[error("Incompatible configuration: {0}")]
    Incompatible(String),
}

/// Per-leg solver failures.
///
/// Copy + static messages so a failed leg can be reported without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    #[error("Foot target out of reach for {leg}: cos(knee) = {ct2:.6}")]
    OutOfReach { leg: LegId, ct2: f64 },

    #[error("Singular hip-yaw geometry for {leg}: {reason}")]
    SingularYaw { leg: LegId, reason: &'static str },
}

impl KinematicsError {
    /// The leg whose solve failed.
    pub const fn leg(&self) -> LegId {
        match *self {
            Self::OutOfReach { leg, .. } | Self::SingularYaw { leg, .. } => leg,
        }
    }
}
