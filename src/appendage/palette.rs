//! Per-appendage color palettes.
//!
//! A palette is a fixed-length run of slots, each independently unset or
//! holding a concrete color. Slots map to the color channels of the
//! appendage's texture; how many channels a texture has is the catalog's
//! business, so the palette never resizes after construction.

use std::fmt;

use serde_json::{Value, json};

use crate::errors::{AppendageError, Result};

/// A concrete sRGB color assigned to a palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppendageColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AppendageColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "r": self.r, "g": self.g, "b": self.b })
    }

    pub fn from_json(doc: &Value) -> Result<Self> {
        let channel = |key: &str| -> Result<u8> {
            doc.get(key)
                .and_then(Value::as_u64)
                .and_then(|value| u8::try_from(value).ok())
                .ok_or_else(|| {
                    AppendageError::MalformedDocument(format!(
                        "color document needs an integer \"{key}\" field in 0..=255"
                    ))
                })
        };
        Ok(Self::rgb(channel("r")?, channel("g")?, channel("b")?))
    }
}

impl fmt::Display for AppendageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed-length, index-addressed set of color slots.
///
/// `Clone` produces a fully independent palette; mutating a clone never
/// affects the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    slots: Vec<Option<AppendageColor>>,
}

impl ColorPalette {
    /// Creates a palette of `size` slots, all unset.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Number of slots, fixed for the palette's lifetime.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reads a slot; `None` means the slot is unset.
    pub fn get(&self, index: usize) -> Result<Option<AppendageColor>> {
        self.check(index)?;
        Ok(self.slots[index])
    }

    /// Assigns a color to a slot.
    pub fn set(&mut self, index: usize, color: AppendageColor) -> Result<()> {
        self.check(index)?;
        self.slots[index] = Some(color);
        Ok(())
    }

    /// Returns a slot to the unset state.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.slots[index] = None;
        Ok(())
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(AppendageError::PaletteIndexOutOfBounds {
                index,
                size: self.slots.len(),
            })
        }
    }

    /// One entry per slot: a color document, or `null` for unset.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.slots
                .iter()
                .map(|slot| slot.map_or(Value::Null, |color| color.to_json()))
                .collect(),
        )
    }

    /// Reads a palette document; the array length fixes the palette size.
    pub fn from_json(doc: &Value) -> Result<Self> {
        let entries = doc.as_array().ok_or_else(|| {
            AppendageError::MalformedDocument("palette document must be an array".to_string())
        })?;
        let slots = entries
            .iter()
            .map(|entry| {
                if entry.is_null() {
                    Ok(None)
                } else {
                    AppendageColor::from_json(entry).map(Some)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { slots })
    }
}
