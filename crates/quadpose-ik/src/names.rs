//! Names under which solved frames are handed to sinks.

use std::fmt;

use quadpose_core::LegId;

/// One of the frames computed for a leg, in solve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegFrame {
    /// Hip-yaw joint before it turns.
    JointALocation,
    /// Where the foot is being placed.
    FootTarget,
    /// Hip-yaw joint after turning by the hip-yaw angle.
    JointARotated,
    /// Hip-pitch joint at the end of the hip link.
    HipLocation,
    HipRotated,
    KneeLocation,
    KneeRotated,
}

impl LegFrame {
    pub const ALL: [Self; 7] = [
        Self::JointALocation,
        Self::FootTarget,
        Self::JointARotated,
        Self::HipLocation,
        Self::HipRotated,
        Self::KneeLocation,
        Self::KneeRotated,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JointALocation => "joint_a_loc",
            Self::FootTarget => "foot_target",
            Self::JointARotated => "joint_a_rot",
            Self::HipLocation => "hip_loc",
            Self::HipRotated => "hip_rot",
            Self::KneeLocation => "knee_loc",
            Self::KneeRotated => "knee_rot",
        }
    }
}

/// Name of an emitted frame.
///
/// Renders as `body` or `<leg>/<frame>`, e.g. `front_left/hip_rot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrameName {
    Body,
    Leg(LegId, LegFrame),
}

impl FrameName {
    pub const fn leg(self) -> Option<LegId> {
        match self {
            Self::Body => None,
            Self::Leg(leg, _) => Some(leg),
        }
    }

    /// Every name a full recomputation emits, in emission order.
    pub fn all() -> impl Iterator<Item = Self> {
        std::iter::once(Self::Body).chain(
            LegId::ALL
                .into_iter()
                .flat_map(|leg| LegFrame::ALL.into_iter().map(move |f| Self::Leg(leg, f))),
        )
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => f.write_str("body"),
            Self::Leg(leg, frame) => write!(f, "{leg}/{}", frame.as_str()),
        }
    }
}
