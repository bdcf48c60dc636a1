use glam::Mat4;

use armature_core::NodeHandle;

use crate::manager::AnimationManager;

/// Name lookup over a node tree.
pub trait NodeResolver {
    fn find_by_name(&self, name: &str) -> Option<NodeHandle>;
}

/// Receiver of evaluated local transforms.
pub trait PoseTarget {
    /// Overwrites the current local transform of `node`. Stale handles are
    /// ignored.
    fn set_precomputed(&mut self, node: NodeHandle, matrix: Mat4);
}

pub struct Binder;

impl Binder {
    /// Resolves the target name of every set in `manager` against `resolver`.
    ///
    /// Sets whose target cannot be found stay unbound; their target names are
    /// returned in set order so the caller can decide whether that is fatal.
    pub fn bind(manager: &mut AnimationManager, resolver: &impl NodeResolver) -> Vec<String> {
        let mut unresolved = Vec::new();

        for set in manager.sets_mut() {
            if let Some(node) = resolver.find_by_name(set.target()) {
                set.bind(node);
            } else {
                unresolved.push(set.target().to_string());
            }
        }

        unresolved
    }
}
