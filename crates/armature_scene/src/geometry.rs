use glam::Mat4;

use armature_core::NodeHandle;

use crate::skin::BonePalette;

/// A drawable attached to a node.
///
/// Vertex and index data belong to the renderer; the model only tracks which
/// node places the geometry and whether it is skinned.
#[derive(Debug, Clone)]
pub struct Geometry {
    name: String,
    node: NodeHandle,
    skinned: bool,
}

impl Geometry {
    #[must_use]
    pub fn new(name: impl Into<String>, node: NodeHandle, skinned: bool) -> Self {
        Self {
            name: name.into(),
            node,
            skinned,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    /// True when the owning node carries a skin binding.
    #[inline]
    #[must_use]
    pub fn is_skinned(&self) -> bool {
        self.skinned
    }
}

/// Per-frame camera input of a draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransforms {
    /// Combined projection * view * world matrix.
    pub transform: Mat4,
    /// World matrix of the model instance.
    pub world: Mat4,
}

impl Default for ViewTransforms {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
        }
    }
}

/// What the renderer uploads for one geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawTransforms {
    /// Rigid geometry: the node's world transform is baked into both
    /// matrices.
    Static { world: Mat4, transform: Mat4 },
    /// Skinned geometry: joints carry the hierarchy, so `world` only folds in
    /// the node's own local transform and `transform` passes through.
    Skinned {
        world: Mat4,
        transform: Mat4,
        palette: BonePalette,
    },
}

impl DrawTransforms {
    #[inline]
    #[must_use]
    pub fn world(&self) -> &Mat4 {
        match self {
            Self::Static { world, .. } | Self::Skinned { world, .. } => world,
        }
    }

    #[inline]
    #[must_use]
    pub fn transform(&self) -> &Mat4 {
        match self {
            Self::Static { transform, .. } | Self::Skinned { transform, .. } => transform,
        }
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> Option<&BonePalette> {
        match self {
            Self::Static { .. } => None,
            Self::Skinned { palette, .. } => Some(palette),
        }
    }
}
