//! Importer output data model.
//!
//! An importer (Collada, Wavefront, or anything else) describes a model as a
//! tree of [`NodeDescriptor`]s plus a list of [`AnimationDescriptor`]s. These
//! are plain data: names are unresolved strings and nothing is validated
//! until a model is built from them.
//!
//! All matrices use glam's column-vector convention (`parent * local`).

use glam::Mat4;
use serde::{Deserialize, Serialize};

use armature_core::InterpolationMode;

/// Complete description of a model: node forest and animation clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,
    #[serde(default)]
    pub animations: Vec<AnimationDescriptor>,
}

/// Importer tag of a node. Collada distinguishes skeleton joints from plain
/// nodes, the evaluator treats both the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Joint,
    #[default]
    Node,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    /// Bind-time local transform.
    #[serde(default)]
    pub world: Mat4,
    #[serde(default)]
    pub children: Vec<NodeDescriptor>,
    #[serde(default)]
    pub geometries: Vec<GeometryDescriptor>,
    #[serde(default)]
    pub skin: Option<SkinDescriptor>,
}

impl NodeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Node,
            world: Mat4::IDENTITY,
            children: Vec::new(),
            geometries: Vec::new(),
            skin: None,
        }
    }

    #[must_use]
    pub fn joint(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Joint,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_world(mut self, world: Mat4) -> Self {
        self.world = world;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: NodeDescriptor) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, name: impl Into<String>) -> Self {
        self.geometries.push(GeometryDescriptor { name: name.into() });
        self
    }

    #[must_use]
    pub fn with_skin(mut self, skin: SkinDescriptor) -> Self {
        self.skin = Some(skin);
        self
    }
}

/// A drawable attached to a node. Vertex data stays with the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryDescriptor {
    pub name: String,
}

/// Skin controller of a node.
///
/// `joint_names` and `inverse_bind_matrices` are parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinDescriptor {
    /// Bind-shape matrix applied to the mesh before skinning.
    #[serde(default)]
    pub bind_matrix: Mat4,
    pub joint_names: Vec<String>,
    pub inverse_bind_matrices: Vec<Mat4>,
}

/// One animation clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub channels: Vec<ChannelDescriptor>,
}

/// Keyframes driving the transform of one node.
///
/// `input` holds sample times in seconds. `output`, and for Bezier channels
/// `in_tangent` and `out_tangent`, hold one matrix per sample. Collada may
/// nest animations; nested channels are listed in `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub target: String,
    #[serde(default)]
    pub interpolation: InterpolationMode,
    #[serde(default)]
    pub input: Vec<f32>,
    #[serde(default)]
    pub output: Vec<Mat4>,
    #[serde(default)]
    pub in_tangent: Vec<Mat4>,
    #[serde(default)]
    pub out_tangent: Vec<Mat4>,
    #[serde(default)]
    pub children: Vec<ChannelDescriptor>,
}

impl ChannelDescriptor {
    #[must_use]
    pub fn linear(target: impl Into<String>, input: Vec<f32>, output: Vec<Mat4>) -> Self {
        Self {
            target: target.into(),
            interpolation: InterpolationMode::Linear,
            input,
            output,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bezier(
        target: impl Into<String>,
        input: Vec<f32>,
        output: Vec<Mat4>,
        in_tangent: Vec<Mat4>,
        out_tangent: Vec<Mat4>,
    ) -> Self {
        Self {
            target: target.into(),
            interpolation: InterpolationMode::Bezier,
            input,
            output,
            in_tangent,
            out_tangent,
            children: Vec::new(),
        }
    }

    /// Visits this channel and its nested channels depth-first.
    pub fn for_each_channel<'a>(&'a self, f: &mut impl FnMut(&'a ChannelDescriptor)) {
        f(self);
        for child in &self.children {
            child.for_each_channel(f);
        }
    }
}
