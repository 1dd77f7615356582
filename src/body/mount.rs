//! Per-segment mount point catalog.
//!
//! Every body segment exposes the same seven named anchors, each deriving a
//! local coordinate frame from the segment's box-space bounds. The catalog
//! is closed: it is materialized once into a process-wide registry, shared
//! by `&'static` reference afterwards, and never grows. Identity of the
//! shared entries is meaningful: mirroring is an involution over them.

use std::sync::LazyLock;

use glam::Vec3;
use serde_json::{Value, json};

use crate::body::segment::BodySegment;
use crate::errors::{AppendageError, Result};
use crate::frame::{Axis, FrameStack};
use crate::geometry::{BOX_UNITS_PER_MODEL_UNIT, BoundingBox};

/// The seven anchor kinds present on every segment.
///
/// An anchor is pure data: a translation rule over the segment bounds, an
/// optional fixed rotation, and a mirror partner. `Left` and `Right` mirror
/// each other; every other anchor is its own mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Origin,
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Anchor {
    /// Every anchor, in catalog order.
    pub const ALL: [Anchor; 7] = [
        Anchor::Origin,
        Anchor::Top,
        Anchor::Bottom,
        Anchor::Left,
        Anchor::Right,
        Anchor::Front,
        Anchor::Back,
    ];

    /// Catalog name, unique within a segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Anchor::Origin => "origin",
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::Front => "front",
            Anchor::Back => "back",
        }
    }

    /// Mirror partner across the sagittal plane.
    #[must_use]
    pub const fn mirrored(self) -> Anchor {
        match self {
            Anchor::Left => Anchor::Right,
            Anchor::Right => Anchor::Left,
            other => other,
        }
    }

    /// Anchor translation in model units.
    ///
    /// Bounds are in box units (16 per model unit). Centroid components
    /// average two box coordinates, so the /32 applies the averaging and the
    /// unit conversion in one step; face components convert with /16.
    #[must_use]
    pub fn translation(self, bounds: &BoundingBox) -> Vec3 {
        let center = (bounds.min + bounds.max) / (2.0 * BOX_UNITS_PER_MODEL_UNIT);
        let min = bounds.min / BOX_UNITS_PER_MODEL_UNIT;
        let max = bounds.max / BOX_UNITS_PER_MODEL_UNIT;
        match self {
            Anchor::Origin => center,
            Anchor::Top => Vec3::new(center.x, min.y, center.z),
            Anchor::Bottom => Vec3::new(center.x, max.y, center.z),
            Anchor::Left => Vec3::new(max.x, center.y, center.z),
            Anchor::Right => Vec3::new(min.x, center.y, center.z),
            Anchor::Front => Vec3::new(center.x, center.y, min.z),
            Anchor::Back => Vec3::new(center.x, center.y, max.z),
        }
    }

    /// Fixed rotation applied after the translation, if any.
    ///
    /// Side anchors roll about the depth axis so that "up" points away from
    /// the segment; front/back pitch about the width axis likewise.
    #[must_use]
    pub const fn rotation(self) -> Option<(Axis, f32)> {
        match self {
            Anchor::Origin | Anchor::Top => None,
            Anchor::Bottom => Some((Axis::Z, 180.0)),
            Anchor::Left => Some((Axis::Z, 90.0)),
            Anchor::Right => Some((Axis::Z, -90.0)),
            Anchor::Front => Some((Axis::X, 90.0)),
            Anchor::Back => Some((Axis::X, -90.0)),
        }
    }
}

/// A named anchor on a specific body segment.
///
/// Mount points live in the process-wide registry and are handed out as
/// `&'static` references; callers never construct one. Two lookups of the
/// same segment + name always return the same entry, so pointer identity
/// (`std::ptr::eq`) is a valid equality check and the one the mirroring
/// invariants are stated in.
#[derive(Debug, PartialEq, Eq)]
pub struct MountPoint {
    segment: BodySegment,
    anchor: Anchor,
}

impl MountPoint {
    /// The segment that owns this mount point.
    #[must_use]
    pub const fn segment(&self) -> BodySegment {
        self.segment
    }

    /// The anchor kind backing this mount point.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Catalog name, unique within the owning segment.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.anchor.name()
    }

    /// The registry entry for this mount point's mirror partner.
    ///
    /// Involution holds by identity: `p.mirrored().mirrored()` is `p`
    /// itself, and symmetric anchors return their own entry.
    #[must_use]
    pub fn mirrored(&self) -> &'static MountPoint {
        registry_entry(self.segment, self.anchor.mirrored())
    }

    /// Extends `frame` with this anchor's translation and rotation.
    ///
    /// Pure with respect to the registry; safe to call repeatedly and from
    /// multiple threads at once.
    pub fn apply_transform(&self, bounds: &BoundingBox, frame: &mut FrameStack) {
        frame.translate(self.anchor.translation(bounds));
        if let Some((axis, degrees)) = self.anchor.rotation() {
            frame.rotate(axis, degrees);
        }
    }

    /// Identification document: `{"segment": ..., "name": ...}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "segment": self.segment.name(),
            "name": self.name(),
        })
    }

    /// Resolves an identification document back to its registry entry.
    ///
    /// A stale name (an anchor that no longer exists) surfaces as
    /// [`AppendageError::MountPointNotFound`].
    pub fn from_json(doc: &Value) -> Result<&'static MountPoint> {
        let segment = string_field(doc, "segment")?;
        let name = string_field(doc, "name")?;
        BodySegment::from_name(segment)?.mount_point(name)
    }
}

impl BodySegment {
    /// This segment's full catalog: always the same seven entries, in
    /// catalog order, stable across calls.
    #[must_use]
    pub fn mount_points(self) -> &'static [MountPoint; 7] {
        &registry()[self as usize]
    }

    /// Resolves a mount point by name within this segment's catalog.
    pub fn mount_point(self, name: &str) -> Result<&'static MountPoint> {
        self.mount_points()
            .iter()
            .find(|point| point.name() == name)
            .ok_or_else(|| {
                log::warn!("mount point lookup failed: segment={self}, name={name:?}");
                AppendageError::MountPointNotFound {
                    segment: self,
                    name: name.to_string(),
                }
            })
    }
}

// ============================================================================
// Registry
// ============================================================================

type Registry = [[MountPoint; 7]; 6];

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    log::debug!(
        "materializing mount point registry: {} segments x {} anchors",
        BodySegment::ALL.len(),
        Anchor::ALL.len()
    );
    BodySegment::ALL.map(|segment| Anchor::ALL.map(|anchor| MountPoint { segment, anchor }))
});

fn registry() -> &'static Registry {
    &REGISTRY
}

fn registry_entry(segment: BodySegment, anchor: Anchor) -> &'static MountPoint {
    // ALL orders match the enum discriminants, so direct indexing is exact.
    &registry()[segment as usize][anchor as usize]
}

fn string_field<'a>(doc: &'a Value, key: &str) -> Result<&'a str> {
    doc.get(key).and_then(Value::as_str).ok_or_else(|| {
        AppendageError::MalformedDocument(format!(
            "mount point document needs a string \"{key}\" field"
        ))
    })
}
