//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`AppendageError`] covers all failure modes:
//! - Builder finalization with a required field missing
//! - Mount-point catalog misses (the catalog is closed)
//! - Palette slot access outside the fixed size
//! - Structured-document parse failures
//!
//! Every variant is a local contract violation, not a transient fault:
//! callers must fix their input rather than retry.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AppendageError>`.

use thiserror::Error;

use crate::body::segment::BodySegment;

/// The main error type for the appendages crate.
#[derive(Error, Debug)]
pub enum AppendageError {
    // ========================================================================
    // Builder Errors
    // ========================================================================
    /// The builder was finalized without a required field.
    #[error("appendage is missing required field: {0}")]
    MissingField(&'static str),

    // ========================================================================
    // Mount Point Catalog Errors
    // ========================================================================
    /// The requested mount point name is not in the segment's catalog.
    #[error("no mount point named \"{name}\" on segment \"{segment}\"")]
    MountPointNotFound {
        /// The segment whose catalog was searched
        segment: BodySegment,
        /// The name that failed to resolve
        name: String,
    },

    /// A segment name failed to parse.
    #[error("unknown body segment: \"{0}\"")]
    UnknownSegment(String),

    // ========================================================================
    // Palette Errors
    // ========================================================================
    /// Palette slot index outside `[0, size)`.
    #[error("palette index out of bounds: index {index}, size {size}")]
    PaletteIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// The palette's fixed size
        size: usize,
    },

    // ========================================================================
    // Document Errors
    // ========================================================================
    /// A structured document did not have the expected shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, AppendageError>`.
pub type Result<T> = std::result::Result<T, AppendageError>;
