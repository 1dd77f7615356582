//! Coordinate-frame operation sequences.
//!
//! The crate never prescribes the host's transform representation. Instead
//! every placement is emitted as an ordered list of frame operations
//! (translate by a vector, rotate by an angle about a principal axis) that
//! the host folds into its own matrix stack. [`FrameStack::to_affine`] is a
//! reference composition for hosts (and tests) that use glam directly.

use glam::{Affine3A, Quat, Vec3};

/// A principal axis of the segment-local coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One step of a coordinate-frame mutation.
///
/// Operations apply in sequence, each in the frame produced by the previous
/// one, exactly like pushes onto a transform stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOp {
    /// Translate by a vector in model units.
    Translate(Vec3),
    /// Rotate about a principal axis of the current frame.
    Rotate { axis: Axis, degrees: f32 },
}

/// An append-only ordered sequence of [`FrameOp`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStack {
    ops: Vec<FrameOp>,
}

impl FrameStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.ops.push(FrameOp::Translate(offset));
    }

    pub fn rotate(&mut self, axis: Axis, degrees: f32) {
        self.ops.push(FrameOp::Rotate { axis, degrees });
    }

    /// The recorded operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[FrameOp] {
        &self.ops
    }

    /// Folds the sequence into a single affine transform.
    ///
    /// Later operations apply in the frame established by earlier ones, so
    /// composition is a running right-multiply.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        let mut acc = Affine3A::IDENTITY;
        for op in &self.ops {
            let step = match *op {
                FrameOp::Translate(offset) => Affine3A::from_translation(offset),
                FrameOp::Rotate { axis, degrees } => {
                    Affine3A::from_quat(Quat::from_axis_angle(axis.unit(), degrees.to_radians()))
                }
            };
            acc = acc * step;
        }
        acc
    }
}
