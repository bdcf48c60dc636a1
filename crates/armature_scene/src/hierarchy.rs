//! Node arena and hierarchy queries.
//!
//! [`NodeTree`] stores every node of a model in a slot map and keeps the
//! list of roots. Parents own their children top-down through handle lists;
//! the parent link of a child is a plain handle, so no ownership cycle
//! exists.
//!
//! # Matrix convention
//!
//! glam uses column vectors, so a parent transform multiplies from the
//! left: `world = root * ... * parent * local`. Row-vector code writes the
//! same product the other way round (`local * parent * ... * root`).

use glam::Mat4;
use slotmap::SlotMap;

use armature_animation::{NodeResolver, PoseTarget};
use armature_core::NodeHandle;

use crate::node::Node;

#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeHandle, Node>,
    roots: Vec<NodeHandle>,
}

impl NodeTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node as a new root.
    pub fn add_root(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.roots.push(handle);
        handle
    }

    /// Adds a node under `parent`. A stale parent handle makes the node a
    /// root instead.
    pub fn add_child(&mut self, mut node: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            return self.add_root(node);
        }

        node.parent = Some(parent);
        let handle = self.nodes.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeHandle] {
        &self.roots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeHandle, &mut Node)> {
        self.nodes.iter_mut()
    }

    /// Model-wide name lookup.
    ///
    /// Root names are checked first, in order. Then each root's descendants
    /// are searched pre-order, children before later siblings. The first
    /// match wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        let root_match = self
            .roots
            .iter()
            .copied()
            .find(|&root| self.nodes.get(root).is_some_and(|n| n.name == name));

        root_match.or_else(|| {
            self.roots
                .iter()
                .find_map(|&root| self.find_descendant(root, name))
        })
    }

    /// Depth-first search of the subtree rooted at `start`, `start` included.
    #[must_use]
    pub fn find_in_subtree(&self, start: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(start)?;
        if node.name == name {
            return Some(start);
        }
        self.find_descendant(start, name)
    }

    fn find_descendant(&self, start: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(start)?;
        for &child in &node.children {
            if self.nodes.get(child).is_some_and(|c| c.name == name) {
                return Some(child);
            }
            if let Some(found) = self.find_descendant(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Current world transform of `handle`: its `precomputed` matrix with
    /// every ancestor's `precomputed` folded in up to the root.
    #[must_use]
    pub fn world_transform(&self, handle: NodeHandle) -> Option<Mat4> {
        self.compose_to_root(handle, |node| node.precomputed)
    }

    /// World transform of `handle` in the bind pose.
    #[must_use]
    pub fn bind_world_transform(&self, handle: NodeHandle) -> Option<Mat4> {
        self.compose_to_root(handle, |node| node.world)
    }

    fn compose_to_root(&self, handle: NodeHandle, local: impl Fn(&Node) -> Mat4) -> Option<Mat4> {
        let mut node = self.nodes.get(handle)?;
        let mut result = local(node);
        while let Some(parent) = node.parent {
            let Some(parent_node) = self.nodes.get(parent) else {
                break;
            };
            node = parent_node;
            result = local(node) * result;
        }
        Some(result)
    }

    /// Restores every node to its bind pose.
    pub fn reset_pose(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset_pose();
        }
    }
}

impl NodeResolver for NodeTree {
    #[inline]
    fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        NodeTree::find_by_name(self, name)
    }
}

impl PoseTarget for NodeTree {
    #[inline]
    fn set_precomputed(&mut self, node: NodeHandle, matrix: Mat4) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.precomputed = matrix;
        }
    }
}
