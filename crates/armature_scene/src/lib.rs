//! Armature Scene
//!
//! Node hierarchy, skinning and the [`Model`] container.
//!
//! A model is built from an [`armature_assets::ModelDescriptor`] in two
//! phases: [`ModelBuilder::from_descriptor`] creates the node arena, then
//! [`ModelBuilder::bind`] resolves joint names and animation targets. Per
//! frame, [`Model::set_time`] poses the nodes and
//! [`Model::draw_transforms`] produces what a renderer uploads.

pub mod geometry;
pub mod hierarchy;
pub mod model;
pub mod node;
pub mod settings;
pub mod skin;

pub use geometry::{DrawTransforms, Geometry, ViewTransforms};
pub use hierarchy::NodeTree;
pub use model::{Model, ModelBuilder};
pub use node::Node;
pub use settings::{BindingPolicy, ModelSettings};
pub use skin::{BonePalette, SkinBinding};
