//! The six fixed humanoid body segments.

use std::fmt;

use crate::errors::{AppendageError, Result};

/// One of the six regions of a humanoid model that can carry appendages.
///
/// The set is closed: segments are compile-time constants, never created or
/// destroyed at runtime. A segment is a pure key into the mount-point
/// catalog and into the host model's part lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodySegment {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl BodySegment {
    /// Every segment, in declaration order.
    pub const ALL: [BodySegment; 6] = [
        BodySegment::Head,
        BodySegment::Torso,
        BodySegment::RightArm,
        BodySegment::LeftArm,
        BodySegment::RightLeg,
        BodySegment::LeftLeg,
    ];

    /// Stable name used in persisted documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BodySegment::Head => "head",
            BodySegment::Torso => "torso",
            BodySegment::RightArm => "right_arm",
            BodySegment::LeftArm => "left_arm",
            BodySegment::RightLeg => "right_leg",
            BodySegment::LeftLeg => "left_leg",
        }
    }

    /// Parses a persisted segment name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|segment| segment.name() == name)
            .ok_or_else(|| AppendageError::UnknownSegment(name.to_string()))
    }

    /// Selects this segment's part from a host model.
    pub fn part_of<M: HumanoidModel>(self, model: &M) -> &M::Part {
        match self {
            BodySegment::Head => model.head(),
            BodySegment::Torso => model.torso(),
            BodySegment::RightArm => model.right_arm(),
            BodySegment::LeftArm => model.left_arm(),
            BodySegment::RightLeg => model.right_leg(),
            BodySegment::LeftLeg => model.left_leg(),
        }
    }
}

impl fmt::Display for BodySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host-model seam: anything that exposes one part per body segment.
///
/// The crate never inspects `Part`; it only routes a segment to the right
/// accessor so the host can fetch that part's bounds.
pub trait HumanoidModel {
    type Part;

    fn head(&self) -> &Self::Part;
    fn torso(&self) -> &Self::Part;
    fn right_arm(&self) -> &Self::Part;
    fn left_arm(&self) -> &Self::Part;
    fn right_leg(&self) -> &Self::Part;
    fn left_leg(&self) -> &Self::Part;
}
