use glam::Mat4;
use smallvec::SmallVec;

use armature_assets::NodeKind;
use armature_core::NodeHandle;

use crate::skin::SkinBinding;

/// A named entry of the scene hierarchy.
///
/// # Hierarchy
///
/// Nodes live in a [`NodeTree`](crate::hierarchy::NodeTree) arena:
/// - `parent`: handle of the parent node (None for roots), never owning
/// - `children`: handles of the child nodes, in import order
///
/// # Transforms
///
/// - `world`: the bind-time local transform from the importer
/// - `precomputed`: the current local transform, overwritten by animation
///   every frame and equal to `world` for nodes no clip targets
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,

    // === Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Transforms ===
    pub(crate) world: Mat4,
    pub(crate) precomputed: Mat4,

    // === Attachments ===
    pub(crate) skin: Option<SkinBinding>,
    /// Indices into the owning model's geometry list.
    pub(crate) geometries: SmallVec<[usize; 2]>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind, world: Mat4) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            world,
            precomputed: world,
            skin: None,
            geometries: SmallVec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Bind-time local transform.
    #[inline]
    #[must_use]
    pub fn bind_transform(&self) -> &Mat4 {
        &self.world
    }

    /// Current local transform.
    #[inline]
    #[must_use]
    pub fn precomputed(&self) -> &Mat4 {
        &self.precomputed
    }

    #[inline]
    pub fn set_precomputed(&mut self, matrix: Mat4) {
        self.precomputed = matrix;
    }

    /// Restores the current transform to the bind pose.
    #[inline]
    pub fn reset_pose(&mut self) {
        self.precomputed = self.world;
    }

    #[inline]
    #[must_use]
    pub fn skin(&self) -> Option<&SkinBinding> {
        self.skin.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn geometries(&self) -> &[usize] {
        &self.geometries
    }
}
