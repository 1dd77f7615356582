//! Appendage entity tests
//!
//! Tests for:
//! - Builder staging, required-field validation, defaults
//! - Copy independence (vectors and palette)
//! - Mirror sign algebra and double-mirror restoration
//! - Persisted document shape, determinism, and round-trips

use appendages::{
    Appendage, AppendageColor, AppendageError, AppendageTexture, AppendageType, BodySegment,
    ColorPalette,
};
use glam::Vec3;

// ============================================================================
// Helpers
// ============================================================================

fn tail() -> Appendage {
    Appendage::builder()
        .kind(AppendageType::new("appendages:tail/fluffy"))
        .texture(AppendageTexture::new("textures/tail/fluffy.png"))
        .mount_point(BodySegment::Torso.mount_point("back").unwrap())
        .position_offset(Vec3::new(1.5, 2.0, -3.0))
        .rotation_offset(Vec3::new(10.0, 20.0, 30.0))
        .scale(Vec3::new(2.0, 3.0, 4.0))
        .build()
        .unwrap()
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn build_without_type_fails() {
    let err = Appendage::builder()
        .texture(AppendageTexture::new("textures/horn.png"))
        .mount_point(BodySegment::Head.mount_point("top").unwrap())
        .build()
        .unwrap_err();
    match err {
        AppendageError::MissingField(field) => assert_eq!(field, "type"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn build_without_texture_fails() {
    let err = Appendage::builder()
        .kind(AppendageType::new("appendages:horn"))
        .mount_point(BodySegment::Head.mount_point("top").unwrap())
        .build()
        .unwrap_err();
    match err {
        AppendageError::MissingField(field) => assert_eq!(field, "texture"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn build_without_mount_point_fails() {
    let err = Appendage::builder()
        .kind(AppendageType::new("appendages:horn"))
        .texture(AppendageTexture::new("textures/horn.png"))
        .build()
        .unwrap_err();
    match err {
        AppendageError::MissingField(field) => assert_eq!(field, "mount point"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn build_keeps_exactly_the_staged_values() {
    let mount = BodySegment::LeftArm.mount_point("bottom").unwrap();
    let mut palette = ColorPalette::new(2);
    palette.set(0, AppendageColor::rgb(0xff, 0x80, 0x00)).unwrap();

    let appendage = Appendage::builder()
        .kind(AppendageType::new("appendages:claw"))
        .texture(AppendageTexture::new("textures/claw.png"))
        .palette(palette.clone())
        .mount_point(mount)
        .position_offset(Vec3::new(0.5, 0.0, 0.0))
        .rotation_offset(Vec3::new(0.0, 45.0, 0.0))
        .scale(Vec3::new(1.0, 2.0, 1.0))
        .build()
        .unwrap();

    assert_eq!(appendage.kind().id(), "appendages:claw");
    assert_eq!(appendage.texture().path(), "textures/claw.png");
    assert_eq!(appendage.palette(), &palette);
    assert!(std::ptr::eq(appendage.mount_point(), mount));
    assert_eq!(appendage.position_offset, Vec3::new(0.5, 0.0, 0.0));
    assert_eq!(appendage.rotation_offset, Vec3::new(0.0, 45.0, 0.0));
    assert_eq!(appendage.scale, Vec3::new(1.0, 2.0, 1.0));
}

#[test]
fn build_defaults_unstaged_fields() {
    let appendage = Appendage::builder()
        .kind(AppendageType::new("appendages:horn"))
        .texture(AppendageTexture::new("textures/horn.png"))
        .mount_point(BodySegment::Head.mount_point("top").unwrap())
        .build()
        .unwrap();

    assert_eq!(appendage.position_offset, Vec3::ZERO);
    assert_eq!(appendage.rotation_offset, Vec3::ZERO);
    assert_eq!(appendage.scale, Vec3::ONE);
    assert_eq!(appendage.palette().len(), 3);
    for slot in 0..appendage.palette().len() {
        assert_eq!(appendage.palette().get(slot).unwrap(), None);
    }
}

// ============================================================================
// Copy Independence
// ============================================================================

#[test]
fn copied_vectors_are_independent() {
    let original = tail();
    let mut copy = original.copy();

    copy.position_offset = Vec3::new(9.0, 9.0, 9.0);
    copy.rotation_offset = Vec3::new(1.0, 1.0, 1.0);
    copy.scale = Vec3::splat(0.5);

    assert_eq!(original.position_offset, Vec3::new(1.5, 2.0, -3.0));
    assert_eq!(original.rotation_offset, Vec3::new(10.0, 20.0, 30.0));
    assert_eq!(original.scale, Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn copied_palette_is_independent() {
    let original = tail();
    let mut copy = original.copy();

    copy.palette_mut()
        .set(0, AppendageColor::rgb(0x12, 0x34, 0x56))
        .unwrap();

    assert_eq!(original.palette().get(0).unwrap(), None);
    assert_eq!(
        copy.palette().get(0).unwrap(),
        Some(AppendageColor::rgb(0x12, 0x34, 0x56))
    );
}

#[test]
fn copy_shares_the_mount_point_entry() {
    let original = tail();
    let copy = original.copy();
    assert!(std::ptr::eq(original.mount_point(), copy.mount_point()));
}

// ============================================================================
// Mirroring
// ============================================================================

#[test]
fn mirror_sign_algebra() {
    let mirror = tail().mirrored();

    assert_eq!(mirror.position_offset, Vec3::new(-1.5, 2.0, -3.0));
    assert_eq!(mirror.rotation_offset, Vec3::new(10.0, -20.0, -30.0));
    assert_eq!(mirror.scale, Vec3::new(-2.0, 3.0, -4.0));
}

#[test]
fn mirror_swaps_the_mount_point() {
    let left = BodySegment::Torso.mount_point("left").unwrap();
    let right = BodySegment::Torso.mount_point("right").unwrap();

    let appendage = Appendage::builder()
        .kind(AppendageType::new("appendages:wing"))
        .texture(AppendageTexture::new("textures/wing.png"))
        .mount_point(left)
        .build()
        .unwrap();

    assert!(std::ptr::eq(appendage.mirrored().mount_point(), right));
}

#[test]
fn mirror_keeps_symmetric_mount_points() {
    let appendage = tail();
    assert!(std::ptr::eq(
        appendage.mirrored().mount_point(),
        appendage.mount_point()
    ));
}

#[test]
fn double_mirror_restores_the_original() {
    let original = tail();
    let twice = original.mirrored().mirrored();

    assert_eq!(twice.position_offset, original.position_offset);
    assert_eq!(twice.rotation_offset, original.rotation_offset);
    assert_eq!(twice.scale, original.scale);
    assert!(std::ptr::eq(twice.mount_point(), original.mount_point()));
    assert_eq!(twice, original);
}

#[test]
fn mirror_does_not_touch_appearance() {
    let original = tail();
    let mirror = original.mirrored();

    assert_eq!(mirror.kind(), original.kind());
    assert_eq!(mirror.texture(), original.texture());
    assert_eq!(mirror.palette(), original.palette());
}

// ============================================================================
// Persisted Documents
// ============================================================================

#[test]
fn document_has_the_seven_persisted_fields() {
    let doc = tail().to_json();
    let obj = doc.as_object().unwrap();

    for field in [
        "type",
        "texture",
        "palette",
        "mount_point",
        "position",
        "rotation",
        "scale",
    ] {
        assert!(obj.contains_key(field), "missing field {field}");
    }

    for field in ["position", "rotation", "scale"] {
        let entries = doc[field].as_array().unwrap();
        assert_eq!(entries.len(), 3, "{field} must be a 3-element array");
        assert!(entries.iter().all(serde_json::Value::is_number));
    }
    assert_eq!(doc["position"][0], 1.5);
    assert_eq!(doc["mount_point"]["segment"], "torso");
    assert_eq!(doc["mount_point"]["name"], "back");
}

#[test]
fn serialization_is_deterministic() {
    let a = serde_json::to_string(&tail().to_json()).unwrap();
    let b = serde_json::to_string(&tail().to_json()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn document_round_trips_through_from_json() {
    let original = tail();
    let restored = Appendage::from_json(&original.to_json()).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn document_without_type_fails_like_the_builder() {
    let mut doc = tail().to_json();
    doc.as_object_mut().unwrap().remove("type");
    let err = Appendage::from_json(&doc).unwrap_err();
    assert!(matches!(err, AppendageError::MissingField("type")));
}

#[test]
fn document_with_short_vector_is_rejected() {
    let mut doc = tail().to_json();
    doc["position"] = serde_json::json!([1.0, 2.0]);
    let err = Appendage::from_json(&doc).unwrap_err();
    assert!(matches!(err, AppendageError::MalformedDocument(_)));
}

#[test]
fn document_vector_defaults_apply_when_absent() {
    let mut doc = tail().to_json();
    let obj = doc.as_object_mut().unwrap();
    obj.remove("position");
    obj.remove("rotation");
    obj.remove("scale");

    let restored = Appendage::from_json(&doc).unwrap();
    assert_eq!(restored.position_offset, Vec3::ZERO);
    assert_eq!(restored.rotation_offset, Vec3::ZERO);
    assert_eq!(restored.scale, Vec3::ONE);
}

#[test]
fn text_round_trip_preserves_the_appendage() {
    let original = tail();
    let text = serde_json::to_string(&original.to_json()).unwrap();
    let restored = Appendage::from_json_str(&text).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn invalid_json_text_is_rejected() {
    let err = Appendage::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, AppendageError::JsonError(_)));
}

#[test]
fn mirrored_document_is_loadable() {
    let mirror = tail().mirrored();
    let restored = Appendage::from_json(&mirror.to_json()).unwrap();
    assert_eq!(restored, mirror);
}

// ============================================================================
// Post-build Mutation
// ============================================================================

#[test]
fn setters_replace_appearance_and_anchor() {
    let mut appendage = tail();

    appendage.set_kind(AppendageType::new("appendages:tail/scaly"));
    appendage.set_texture(AppendageTexture::new("textures/tail/scaly.png"));
    let origin = BodySegment::Torso.mount_point("origin").unwrap();
    appendage.set_mount_point(origin);

    assert_eq!(appendage.kind().id(), "appendages:tail/scaly");
    assert_eq!(appendage.texture().path(), "textures/tail/scaly.png");
    assert!(std::ptr::eq(appendage.mount_point(), origin));
}
