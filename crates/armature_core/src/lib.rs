//! Armature Core
//!
//! Foundational types shared by the Armature crates:
//!
//! - [`errors`]: the [`ArmatureError`] enum and [`Result`] alias
//! - [`TransformData`]: rotation/translation/scale triple used for keyframes
//! - [`InterpolationMode`]: interpolation tag of animation channels
//! - [`NodeHandle`]: arena key identifying a scene node

pub mod errors;
pub mod interpolation;
pub mod transform;

pub use errors::{ArmatureError, ReferenceKind, Result};
pub use interpolation::InterpolationMode;
pub use transform::TransformData;

use slotmap::new_key_type;

new_key_type! {
    /// Key of a node inside a model's node arena.
    pub struct NodeHandle;
}

/// Capacity of a bone palette, fixed by the size of the skinning constant
/// buffer on the GPU side.
pub const MAX_JOINTS: usize = 256;
