//! Box-space geometry input.
//!
//! The host model describes each body segment with an axis-aligned bounding
//! box expressed in "box units": 16 box units equal one model unit. Every
//! translation derived from these bounds is rescaled to model units before
//! it reaches a [`FrameStack`](crate::frame::FrameStack).

use glam::Vec3;

/// Number of box units per model unit. Fixed system parameter.
pub const BOX_UNITS_PER_MODEL_UNIT: f32 = 16.0;

/// Axis-aligned bounding box in box units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Centroid of the box, still in box units.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the box on each axis, in box units.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
