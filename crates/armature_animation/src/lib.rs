//! Armature Animation
//!
//! Keyframe evaluation for node transforms:
//!
//! - [`KeyframeTrack`]: bracket search plus linear or Bezier interpolation
//! - [`AnimationSet`]: a track bound to one target node
//! - [`AnimationManager`]: the sets of one clip and its duration
//! - [`Binder`]: resolves target names through a [`NodeResolver`]
//!
//! Evaluated matrices are written through the [`PoseTarget`] trait, so this
//! crate never depends on the concrete node storage.

pub mod binder;
pub mod manager;
pub mod set;
pub mod tracks;
pub mod values;

pub use binder::{Binder, NodeResolver, PoseTarget};
pub use manager::AnimationManager;
pub use set::AnimationSet;
pub use tracks::KeyframeTrack;
pub use values::Interpolatable;
