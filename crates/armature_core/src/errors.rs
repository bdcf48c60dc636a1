//! Error Types
//!
//! This module defines the error type shared by every Armature crate.
//!
//! # Overview
//!
//! [`ArmatureError`] covers three failure classes:
//! - Construction: malformed tracks or skins, too many joints, names that
//!   cannot be resolved while binding a model
//! - Evaluation: interpolation modes the evaluator does not implement,
//!   evaluating an animation set that was never bound
//! - Loading: I/O and JSON errors while reading model descriptors
//!
//! None of them are transient. Evaluation is deterministic computation over
//! in-memory data, so a failing call fails the same way every time.
//!
//! # Usage
//!
//! ```rust,ignore
//! use armature_core::errors::{ArmatureError, Result};
//!
//! fn bind() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::interpolation::InterpolationMode;

/// What kind of reference failed to resolve during model binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A joint name listed by a skin binding.
    Joint,
    /// The target node of an animation set.
    AnimationTarget,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Joint => f.write_str("joint"),
            Self::AnimationTarget => f.write_str("animation target"),
        }
    }
}

/// The main error type for Armature.
#[derive(Error, Debug)]
pub enum ArmatureError {
    // ========================================================================
    // Evaluation Errors
    // ========================================================================
    /// A keyframe track uses an interpolation mode that cannot be evaluated.
    #[error("Unsupported interpolation mode {mode} on track targeting '{target}'")]
    UnsupportedInterpolation {
        /// Name of the node driven by the track
        target: String,
        /// The offending mode
        mode: InterpolationMode,
    },

    /// An animation set was evaluated before its target node was bound.
    #[error("Animation set targeting '{target}' is not bound to a node")]
    UnboundTarget {
        /// Name of the node the set should drive
        target: String,
    },

    // ========================================================================
    // Construction & Binding Errors
    // ========================================================================
    /// A name referenced by a skin or animation does not exist in the model.
    #[error("Unresolved {kind} '{name}' ({context})")]
    NameResolution {
        /// Which reference failed
        kind: ReferenceKind,
        /// The name that was looked up
        name: String,
        /// Where the reference came from (skin node or clip name)
        context: String,
    },

    /// A skin binding lists more joints than a bone palette can hold.
    #[error("Skin has {count} joints, palette capacity is {max}")]
    TooManyJoints {
        /// Number of joints in the skin
        count: usize,
        /// Palette capacity
        max: usize,
    },

    /// Keyframe data is structurally invalid.
    #[error("Invalid keyframe track targeting '{target}': {reason}")]
    InvalidTrack {
        /// Name of the node driven by the track
        target: String,
        /// Description of the defect
        reason: String,
    },

    /// Skin data is structurally invalid.
    #[error("Invalid skin binding: {0}")]
    InvalidSkin(String),

    /// The requested animation clip does not exist.
    #[error("Animation index out of bounds: {index} (clips: {count})")]
    InvalidAnimationIndex {
        /// The requested index
        index: usize,
        /// Number of loaded clips
        count: usize,
    },

    // ========================================================================
    // Loading Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ArmatureError>`.
pub type Result<T> = std::result::Result<T, ArmatureError>;
