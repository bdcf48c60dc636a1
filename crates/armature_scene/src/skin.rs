use glam::Mat4;

use armature_animation::NodeResolver;
use armature_assets::SkinDescriptor;
use armature_core::{ArmatureError, MAX_JOINTS, NodeHandle, Result};

use crate::hierarchy::NodeTree;

/// Skinning data of one node.
///
/// `joint_names`, `inverse_bind_matrices` and `joints` are parallel lists.
/// `joints` starts out unresolved and is filled by [`resolve`](Self::resolve)
/// once the whole node tree exists, because joints may live anywhere in the
/// model.
#[derive(Debug, Clone)]
pub struct SkinBinding {
    bind_shape_matrix: Mat4,
    joint_names: Vec<String>,
    inverse_bind_matrices: Vec<Mat4>,
    joints: Vec<Option<NodeHandle>>,
}

impl SkinBinding {
    pub fn new(
        bind_shape_matrix: Mat4,
        joint_names: Vec<String>,
        inverse_bind_matrices: Vec<Mat4>,
    ) -> Result<Self> {
        if joint_names.len() != inverse_bind_matrices.len() {
            return Err(ArmatureError::InvalidSkin(format!(
                "{} joint names for {} inverse bind matrices",
                joint_names.len(),
                inverse_bind_matrices.len()
            )));
        }
        if joint_names.len() > MAX_JOINTS {
            return Err(ArmatureError::TooManyJoints {
                count: joint_names.len(),
                max: MAX_JOINTS,
            });
        }

        let joints = vec![None; joint_names.len()];
        Ok(Self {
            bind_shape_matrix,
            joint_names,
            inverse_bind_matrices,
            joints,
        })
    }

    pub fn from_descriptor(descriptor: &SkinDescriptor) -> Result<Self> {
        Self::new(
            descriptor.bind_matrix,
            descriptor.joint_names.clone(),
            descriptor.inverse_bind_matrices.clone(),
        )
    }

    #[inline]
    #[must_use]
    pub fn bind_shape_matrix(&self) -> &Mat4 {
        &self.bind_shape_matrix
    }

    #[inline]
    #[must_use]
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    #[inline]
    #[must_use]
    pub fn inverse_bind_matrices(&self) -> &[Mat4] {
        &self.inverse_bind_matrices
    }

    /// Resolved joint handles, `None` where a name was not found.
    #[inline]
    #[must_use]
    pub fn joints(&self) -> &[Option<NodeHandle>] {
        &self.joints
    }

    #[inline]
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.joints.iter().all(Option::is_some)
    }

    /// Looks every joint name up in `resolver` and returns the names that
    /// could not be found.
    pub fn resolve(&mut self, resolver: &impl NodeResolver) -> Vec<String> {
        let mut unresolved = Vec::new();
        for (slot, name) in self.joints.iter_mut().zip(&self.joint_names) {
            *slot = resolver.find_by_name(name);
            if slot.is_none() {
                unresolved.push(name.clone());
            }
        }
        unresolved
    }

    /// Computes the bone palette for the current pose.
    ///
    /// Entry `i` is `joint_world(i) * inverse_bind(i) * bind_shape`: the bind
    /// shape moves the mesh into skeleton space, the inverse bind matrix into
    /// the joint's bind-pose space, and the joint's current world transform
    /// back out. Unresolved joints and unused entries are identity.
    #[must_use]
    pub fn compute_palette(&self, tree: &NodeTree) -> BonePalette {
        let mut palette = BonePalette::identity(self.joints.len());

        for (i, joint) in self.joints.iter().enumerate() {
            let Some(joint_world) = joint.and_then(|handle| tree.world_transform(handle)) else {
                continue;
            };
            palette.matrices[i] = joint_world * self.inverse_bind_matrices[i] * self.bind_shape_matrix;
        }

        palette
    }
}

/// Fixed-capacity array of skinning matrices, sized for the GPU palette
/// buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BonePalette {
    matrices: Box<[Mat4; MAX_JOINTS]>,
    len: usize,
}

impl BonePalette {
    /// A palette of `len` active entries, all identity.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            matrices: Box::new([Mat4::IDENTITY; MAX_JOINTS]),
            len: len.min(MAX_JOINTS),
        }
    }

    /// Number of entries backed by a joint.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active entries.
    #[inline]
    #[must_use]
    pub fn joints(&self) -> &[Mat4] {
        &self.matrices[..self.len]
    }

    /// All entries, padded with identity.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[Mat4; MAX_JOINTS] {
        &self.matrices
    }

    /// Raw bytes of the full palette, ready for a constant buffer upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.matrices.as_slice())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Mat4> {
        self.matrices.get(index)
    }
}
