// quadpose-core: Geometry config, leg identifiers, pose types and errors for quadpose.

pub mod config;
pub mod error;
pub mod types;

pub use config::RobotConfiguration;
pub use error::{ConfigError, KinematicsError, QuadposeError};
pub use types::{BodyPose, BodyPoseUpdate, KneeBranch, LegId, RotationOrder};

pub mod prelude {
    pub use crate::config::RobotConfiguration;
    pub use crate::error::{ConfigError, KinematicsError, QuadposeError};
    pub use crate::types::{BodyPose, BodyPoseUpdate, KneeBranch, LegId, RotationOrder};
}
