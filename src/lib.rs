//! # Armature
//!
//! Scene-graph evaluation, keyframe animation and skinning palettes for
//! skinned models.
//!
//! The workspace is split into focused crates, re-exported here:
//!
//! - [`core`]: error type, interpolation modes, decomposed transforms
//! - [`assets`]: importer descriptors and JSON loading
//! - [`animation`]: keyframe tracks, sets and clip managers
//! - [`scene`]: node tree, skins and the [`Model`] container
//!
//! ```rust,ignore
//! use armature::{AnimationPlayer, Model, ModelDescriptor, ModelSettings, ViewTransforms};
//!
//! let descriptor = ModelDescriptor::from_path("assets/two_bone.json")?;
//! let mut model = Model::from_descriptor(&descriptor, &ModelSettings::default())?;
//! let mut player = AnimationPlayer::default();
//!
//! player.advance(&mut model, 1.0 / 60.0)?;
//! for draw in model.draw_transforms(&ViewTransforms::default()) {
//!     // upload draw.world(), draw.transform(), draw.palette()
//! }
//! ```

pub mod player;
pub mod utils;

pub use armature_animation as animation;
pub use armature_assets as assets;
pub use armature_core as core;
pub use armature_scene as scene;
pub use glam;

pub use armature_animation::{AnimationManager, AnimationSet, Binder, KeyframeTrack};
pub use armature_assets::{
    AnimationDescriptor, AssetReader, ChannelDescriptor, FileAssetReader, GeometryDescriptor,
    MemoryAssetReader, ModelDescriptor, NodeDescriptor, NodeKind, SkinDescriptor,
};
pub use armature_core::{ArmatureError, InterpolationMode, MAX_JOINTS, NodeHandle, Result, TransformData};
pub use armature_scene::{
    BindingPolicy, BonePalette, DrawTransforms, Geometry, Model, ModelBuilder, ModelSettings,
    Node, NodeTree, SkinBinding, ViewTransforms,
};
pub use player::{AnimationPlayer, PlaybackSettings};
pub use utils::Timer;
