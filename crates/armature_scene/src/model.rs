//! Model container and two-phase construction.
//!
//! Building a model from importer data happens in two steps:
//!
//! 1. [`ModelBuilder::from_descriptor`] creates every node, skin binding,
//!    geometry and animation clip. Joint names and animation targets are
//!    kept as strings because they may refer to nodes that do not exist yet.
//! 2. [`ModelBuilder::bind`] resolves those names against the finished tree
//!    and yields a [`Model`]. Only a bound model can be evaluated.

use glam::Mat4;
use rustc_hash::FxHashSet;

use armature_animation::{AnimationManager, Binder};
use armature_assets::{ModelDescriptor, NodeDescriptor};
use armature_core::{ArmatureError, NodeHandle, ReferenceKind, Result};

use crate::geometry::{DrawTransforms, Geometry, ViewTransforms};
use crate::hierarchy::NodeTree;
use crate::node::Node;
use crate::settings::{BindingPolicy, ModelSettings};
use crate::skin::{BonePalette, SkinBinding};

/// A model whose name references are not resolved yet.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    tree: NodeTree,
    geometries: Vec<Geometry>,
    animations: Vec<AnimationManager>,
}

impl ModelBuilder {
    /// Phase one: builds the node tree, skins, geometries and clips.
    pub fn from_descriptor(descriptor: &ModelDescriptor) -> Result<Self> {
        let mut builder = Self {
            name: descriptor.name.clone(),
            tree: NodeTree::new(),
            geometries: Vec::new(),
            animations: Vec::with_capacity(descriptor.animations.len()),
        };

        let mut seen = FxHashSet::default();
        for node in &descriptor.nodes {
            builder.insert_node(node, None, &mut seen)?;
        }

        for animation in &descriptor.animations {
            builder.animations.push(AnimationManager::from_descriptor(animation)?);
        }

        log::debug!(
            "Built model '{}': {} nodes, {} geometries, {} animations",
            builder.name,
            builder.tree.len(),
            builder.geometries.len(),
            builder.animations.len()
        );

        Ok(builder)
    }

    fn insert_node(
        &mut self,
        descriptor: &NodeDescriptor,
        parent: Option<NodeHandle>,
        seen: &mut FxHashSet<String>,
    ) -> Result<NodeHandle> {
        if !seen.insert(descriptor.name.clone()) {
            log::warn!(
                "Duplicate node name '{}' in model '{}'; lookups return the first match",
                descriptor.name,
                self.name
            );
        }

        let mut node = Node::new(descriptor.name.clone(), descriptor.kind, descriptor.world);
        if let Some(skin) = &descriptor.skin {
            node.skin = Some(SkinBinding::from_descriptor(skin)?);
        }

        let handle = match parent {
            Some(parent) => self.tree.add_child(node, parent),
            None => self.tree.add_root(node),
        };

        // Children first: their geometries precede this node's in draw order.
        for child in &descriptor.children {
            self.insert_node(child, Some(handle), seen)?;
        }

        let skinned = descriptor.skin.is_some();
        for geometry in &descriptor.geometries {
            let index = self.geometries.len();
            self.geometries.push(Geometry::new(geometry.name.clone(), handle, skinned));
            if let Some(node) = self.tree.get_mut(handle) {
                node.geometries.push(index);
            }
        }

        Ok(handle)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[AnimationManager] {
        &self.animations
    }

    #[inline]
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.tree.find_by_name(name)
    }

    /// Phase two: resolves joint names and animation targets model-wide,
    /// then applies `settings.initial_time`.
    pub fn bind(mut self, settings: &ModelSettings) -> Result<Model> {
        let skinned: Vec<NodeHandle> = self
            .tree
            .iter()
            .filter(|(_, node)| node.skin.is_some())
            .map(|(handle, _)| handle)
            .collect();

        for handle in skinned {
            let Some(node) = self.tree.get_mut(handle) else {
                continue;
            };
            let Some(mut skin) = node.skin.take() else {
                continue;
            };
            let node_name = node.name.clone();

            let unresolved = skin.resolve(&self.tree);
            if let Some(node) = self.tree.get_mut(handle) {
                node.skin = Some(skin);
            }
            report_unresolved(settings.binding, ReferenceKind::Joint, &unresolved, &node_name)?;
        }

        for manager in &mut self.animations {
            let unresolved = Binder::bind(manager, &self.tree);
            if unresolved.is_empty() {
                continue;
            }
            let clip = manager.name().unwrap_or("<unnamed clip>").to_string();
            report_unresolved(settings.binding, ReferenceKind::AnimationTarget, &unresolved, &clip)?;
            manager.retain_bound();
        }

        let mut model = Model {
            name: self.name,
            tree: self.tree,
            geometries: self.geometries,
            animations: self.animations,
            active_animation: 0,
        };
        model.set_time(settings.initial_time)?;

        log::debug!("Bound model '{}'", model.name);
        Ok(model)
    }
}

fn report_unresolved(
    policy: BindingPolicy,
    kind: ReferenceKind,
    unresolved: &[String],
    context: &str,
) -> Result<()> {
    match policy {
        BindingPolicy::Strict => match unresolved.first() {
            Some(name) => Err(ArmatureError::NameResolution {
                kind,
                name: name.clone(),
                context: context.to_string(),
            }),
            None => Ok(()),
        },
        BindingPolicy::Lenient => {
            for name in unresolved {
                log::warn!("Unresolved {kind} '{name}' ({context})");
            }
            Ok(())
        }
    }
}

/// A bound model, ready for per-frame evaluation.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    tree: NodeTree,
    geometries: Vec<Geometry>,
    animations: Vec<AnimationManager>,
    active_animation: usize,
}

impl Model {
    /// Builds and binds a model in one step.
    pub fn from_descriptor(descriptor: &ModelDescriptor, settings: &ModelSettings) -> Result<Self> {
        ModelBuilder::from_descriptor(descriptor)?.bind(settings)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    #[inline]
    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.tree.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.tree.find_by_name(name)
    }

    #[inline]
    #[must_use]
    pub fn world_transform(&self, handle: NodeHandle) -> Option<Mat4> {
        self.tree.world_transform(handle)
    }

    #[inline]
    #[must_use]
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[AnimationManager] {
        &self.animations
    }

    /// The clip driven by [`set_time`](Self::set_time).
    #[inline]
    #[must_use]
    pub fn active_animation(&self) -> Option<&AnimationManager> {
        self.animations.get(self.active_animation)
    }

    #[inline]
    #[must_use]
    pub fn active_animation_index(&self) -> usize {
        self.active_animation
    }

    /// Selects which loaded clip [`set_time`](Self::set_time) drives. The
    /// first clip is active after binding.
    ///
    /// Switching to a different clip restores the bind pose, so nodes
    /// driven only by the previous clip do not keep its last pose.
    pub fn set_active_animation(&mut self, index: usize) -> Result<()> {
        if index >= self.animations.len() {
            return Err(ArmatureError::InvalidAnimationIndex {
                index,
                count: self.animations.len(),
            });
        }
        if index != self.active_animation {
            self.tree.reset_pose();
            self.active_animation = index;
        }
        Ok(())
    }

    /// Duration of the active clip, 0 without clips.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.active_animation().map_or(0.0, AnimationManager::duration)
    }

    /// Poses the model at `time` seconds of the active clip. Only that clip
    /// is applied; without clips this is a no-op.
    pub fn set_time(&mut self, time: f32) -> Result<()> {
        let Some(manager) = self.animations.get(self.active_animation) else {
            return Ok(());
        };
        log::trace!("Model '{}' set_time({time})", self.name);
        manager.apply_time(time, &mut self.tree)
    }

    /// Restores every node to its bind pose.
    pub fn reset_pose(&mut self) {
        self.tree.reset_pose();
    }

    /// Bone palette of the skin on `node`, `None` if it has no skin.
    #[must_use]
    pub fn palette(&self, node: NodeHandle) -> Option<BonePalette> {
        let skin = self.tree.get(node)?.skin()?;
        Some(skin.compute_palette(&self.tree))
    }

    /// Transforms of one geometry for the current pose.
    #[must_use]
    pub fn geometry_transforms(&self, index: usize, view: &ViewTransforms) -> Option<DrawTransforms> {
        let geometry = self.geometries.get(index)?;
        let node = self.tree.get(geometry.node())?;

        match node.skin().filter(|_| geometry.is_skinned()) {
            Some(skin) => Some(DrawTransforms::Skinned {
                world: view.world * node.precomputed,
                transform: view.transform,
                palette: skin.compute_palette(&self.tree),
            }),
            None => {
                let node_world = self.tree.world_transform(geometry.node())?;
                Some(DrawTransforms::Static {
                    world: view.world * node_world,
                    transform: view.transform * node_world,
                })
            }
        }
    }

    /// Transforms of every geometry, in load order. Recomputed on each call.
    #[must_use]
    pub fn draw_transforms(&self, view: &ViewTransforms) -> Vec<DrawTransforms> {
        (0..self.geometries.len())
            .filter_map(|index| self.geometry_transforms(index, view))
            .collect()
    }
}
