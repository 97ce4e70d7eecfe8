//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ViewerError`] covers the failure modes of the
//! animation core and its collaborators:
//! - Refused playback (not enough keyframes captured)
//! - Model validation errors (group vectors, vertex indices)
//! - Settings loading and validation errors
//!
//! Capturing into a full keyframe sequence and deleting from an empty one are
//! not errors; both are silent no-ops.
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ViewerError>`.
//!
//! ```rust,ignore
//! use keyview::errors::Result;
//! use keyview::settings::AnimationSettings;
//!
//! fn load() -> Result<AnimationSettings> {
//!     AnimationSettings::from_json_str(r#"{ "phase_step": 0.01 }"#)
//! }
//! ```

use thiserror::Error;

/// The main error type for the keyframe viewer core.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// Playback was requested before the keyframe sequence was full.
    #[error("Insufficient keyframes: {count} captured, {required} required")]
    InsufficientKeyframes {
        /// Number of keyframes currently captured
        count: usize,
        /// Number of keyframes playback needs
        required: usize,
    },

    // ========================================================================
    // Model Errors
    // ========================================================================
    /// The number of explosion vectors does not match the number of groups.
    #[error("Group vector count mismatch: {groups} groups, {vectors} vectors")]
    GroupVectorCountMismatch {
        /// Number of mesh groups
        groups: usize,
        /// Number of supplied explosion vectors
        vectors: usize,
    },

    /// A group references a vertex that does not exist.
    #[error("Vertex index out of bounds in group '{group}' (index: {index}, vertices: {len})")]
    VertexIndexOutOfBounds {
        /// Name of the offending group
        group: String,
        /// The invalid vertex index
        index: u32,
        /// Number of vertices in the model
        len: usize,
    },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Settings parsed but hold unusable values.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
