//! Armature Assets
//!
//! The data contract between an importer and the evaluator: a tree of
//! [`NodeDescriptor`]s and a list of [`AnimationDescriptor`]s, serializable
//! with serde and loadable from JSON through an [`AssetReader`].

pub mod descriptor;
pub mod io;

pub use descriptor::{
    AnimationDescriptor, ChannelDescriptor, GeometryDescriptor, ModelDescriptor, NodeDescriptor,
    NodeKind, SkinDescriptor,
};
pub use io::{AssetReader, FileAssetReader, MemoryAssetReader};
