//! The composed appendage entity.
//!
//! An appendage is a value record: a shape identifier, a texture, an owned
//! color palette, a shared mount-point reference, and three local offset
//! vectors. Construction goes through [`AppendageBuilder`], which stages
//! fields freely and validates the required ones at [`AppendageBuilder::build`].

pub mod catalog;
pub mod palette;

use glam::Vec3;
use serde_json::{Value, json};

use crate::appendage::catalog::{AppendageTexture, AppendageType};
use crate::appendage::palette::ColorPalette;
use crate::body::mount::MountPoint;
use crate::errors::{AppendageError, Result};
use crate::frame::{Axis, FrameStack};
use crate::geometry::BoundingBox;

/// Palette slots given to an appendage whose builder stages no palette.
const DEFAULT_PALETTE_SLOTS: usize = 3;

/// A placeable decorative entity: shape + appearance + anchor + local
/// offset/rotation/scale.
///
/// Offsets are plain value fields. `position_offset` is in model units,
/// `rotation_offset` is Euler degrees (x = pitch, y = yaw, z = roll), and
/// `scale` is a per-axis multiplier. The mount point is a shared reference
/// into the immutable registry; everything else is owned, and `Clone`
/// duplicates it all, so two clones never share palette storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Appendage {
    kind: AppendageType,
    texture: AppendageTexture,
    palette: ColorPalette,
    mount_point: &'static MountPoint,

    pub position_offset: Vec3,
    pub rotation_offset: Vec3,
    pub scale: Vec3,
}

impl Appendage {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> AppendageBuilder {
        AppendageBuilder::new()
    }

    #[must_use]
    pub fn kind(&self) -> &AppendageType {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: AppendageType) {
        self.kind = kind;
    }

    #[must_use]
    pub fn texture(&self) -> &AppendageTexture {
        &self.texture
    }

    pub fn set_texture(&mut self, texture: AppendageTexture) {
        self.texture = texture;
    }

    #[must_use]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        &mut self.palette
    }

    #[must_use]
    pub fn mount_point(&self) -> &'static MountPoint {
        self.mount_point
    }

    pub fn set_mount_point(&mut self, mount_point: &'static MountPoint) {
        self.mount_point = mount_point;
    }

    /// An independent sibling of this appendage.
    ///
    /// Every owned field is duplicated, the palette included; only the
    /// mount-point reference is shared, which is safe because registry
    /// entries are immutable.
    #[must_use]
    pub fn copy(&self) -> Appendage {
        self.clone()
    }

    /// This appendage reflected across the body's sagittal plane.
    ///
    /// The lateral position component flips, twist and roll flip while
    /// pitch is preserved, the lateral and depth scale axes flip sign to
    /// keep handedness consistent with the reflected geometry, and the
    /// mount point jumps to its mirror partner.
    #[must_use]
    pub fn mirrored(&self) -> Appendage {
        let mut mirror = self.copy();

        mirror.position_offset = self.position_offset * Vec3::new(-1.0, 1.0, 1.0);
        mirror.rotation_offset = self.rotation_offset * Vec3::new(1.0, -1.0, -1.0);
        mirror.scale = self.scale * Vec3::new(-1.0, 1.0, -1.0);
        mirror.mount_point = self.mount_point.mirrored();

        mirror
    }

    /// Extends `frame` with the full placement sequence: the mount point's
    /// anchor operations, then this appendage's position offset, then its
    /// rotation offsets about Y, X, Z (yaw, pitch, roll).
    ///
    /// The op sequence has a fixed shape; zero offsets are emitted as
    /// identity operations. `scale` is not part of the frame-op vocabulary;
    /// hosts read it directly when placing geometry.
    pub fn apply_transform(&self, bounds: &BoundingBox, frame: &mut FrameStack) {
        self.mount_point.apply_transform(bounds, frame);
        frame.translate(self.position_offset);
        frame.rotate(Axis::Y, self.rotation_offset.y);
        frame.rotate(Axis::X, self.rotation_offset.x);
        frame.rotate(Axis::Z, self.rotation_offset.z);
    }

    /// Projects the appendage to its persisted document.
    ///
    /// Field names and array order are a compatibility contract; the same
    /// logical state always serializes to byte-identical output.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.kind.to_json(),
            "texture": self.texture.to_json(),
            "palette": self.palette.to_json(),
            "mount_point": self.mount_point.to_json(),
            "position": vec3_to_json(self.position_offset),
            "rotation": vec3_to_json(self.rotation_offset),
            "scale": vec3_to_json(self.scale),
        })
    }

    /// Reads a persisted document back into an appendage.
    ///
    /// Parsing routes through the builder, so a document missing a required
    /// field fails the same way an incomplete build does. Absent vector
    /// fields fall back to their defaults.
    pub fn from_json(doc: &Value) -> Result<Appendage> {
        let obj = doc.as_object().ok_or_else(|| {
            AppendageError::MalformedDocument("appendage document must be an object".to_string())
        })?;

        let mut builder = AppendageBuilder::new();
        if let Some(kind) = obj.get("type") {
            builder = builder.kind(AppendageType::from_json(kind)?);
        }
        if let Some(texture) = obj.get("texture") {
            builder = builder.texture(AppendageTexture::from_json(texture)?);
        }
        if let Some(palette) = obj.get("palette") {
            builder = builder.palette(ColorPalette::from_json(palette)?);
        }
        if let Some(mount_point) = obj.get("mount_point") {
            builder = builder.mount_point(MountPoint::from_json(mount_point)?);
        }
        if let Some(position) = obj.get("position") {
            builder = builder.position_offset(vec3_from_json(position, "position")?);
        }
        if let Some(rotation) = obj.get("rotation") {
            builder = builder.rotation_offset(vec3_from_json(rotation, "rotation")?);
        }
        if let Some(scale) = obj.get("scale") {
            builder = builder.scale(vec3_from_json(scale, "scale")?);
        }
        builder.build()
    }

    /// Parses an appendage from JSON text.
    pub fn from_json_str(text: &str) -> Result<Appendage> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_json(&doc)
    }
}

/// Staged construction for [`Appendage`].
///
/// Setters stage fields without validation; [`AppendageBuilder::build`]
/// checks the required ones (shape type, texture, mount point) and fills
/// defaults for the rest.
#[derive(Debug, Default)]
pub struct AppendageBuilder {
    kind: Option<AppendageType>,
    texture: Option<AppendageTexture>,
    palette: Option<ColorPalette>,
    mount_point: Option<&'static MountPoint>,
    position_offset: Option<Vec3>,
    rotation_offset: Option<Vec3>,
    scale: Option<Vec3>,
}

impl AppendageBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: AppendageType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn texture(mut self, texture: AppendageTexture) -> Self {
        self.texture = Some(texture);
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: ColorPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    #[must_use]
    pub fn mount_point(mut self, mount_point: &'static MountPoint) -> Self {
        self.mount_point = Some(mount_point);
        self
    }

    #[must_use]
    pub fn position_offset(mut self, position_offset: Vec3) -> Self {
        self.position_offset = Some(position_offset);
        self
    }

    #[must_use]
    pub fn rotation_offset(mut self, rotation_offset: Vec3) -> Self {
        self.rotation_offset = Some(rotation_offset);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Finalizes the appendage, validating required fields.
    pub fn build(self) -> Result<Appendage> {
        let kind = self.kind.ok_or(AppendageError::MissingField("type"))?;
        let texture = self.texture.ok_or(AppendageError::MissingField("texture"))?;
        let mount_point = self
            .mount_point
            .ok_or(AppendageError::MissingField("mount point"))?;

        Ok(Appendage {
            kind,
            texture,
            palette: self
                .palette
                .unwrap_or_else(|| ColorPalette::new(DEFAULT_PALETTE_SLOTS)),
            mount_point,
            position_offset: self.position_offset.unwrap_or(Vec3::ZERO),
            rotation_offset: self.rotation_offset.unwrap_or(Vec3::ZERO),
            scale: self.scale.unwrap_or(Vec3::ONE),
        })
    }
}

fn vec3_to_json(v: Vec3) -> Value {
    json!([v.x, v.y, v.z])
}

fn vec3_from_json(doc: &Value, field: &str) -> Result<Vec3> {
    let components = doc
        .as_array()
        .filter(|entries| entries.len() == 3)
        .and_then(|entries| {
            entries
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<_>>>()
        })
        .ok_or_else(|| {
            AppendageError::MalformedDocument(format!(
                "\"{field}\" must be a 3-element numeric array"
            ))
        })?;
    Ok(Vec3::new(
        components[0] as f32,
        components[1] as f32,
        components[2] as f32,
    ))
}
