//! Model Settings
//!
//! Configuration applied when a [`ModelBuilder`](crate::model::ModelBuilder)
//! is bound into a [`Model`](crate::model::Model).
//!
//! ```rust,ignore
//! use armature_scene::{BindingPolicy, ModelSettings};
//!
//! // Default: any unresolved joint or animation target is an error
//! let settings = ModelSettings::default();
//!
//! // Tolerate incomplete rigs, logging what could not be bound
//! let settings = ModelSettings {
//!     binding: BindingPolicy::Lenient,
//!     ..Default::default()
//! };
//! ```

/// How phase-two binding treats names that do not exist in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingPolicy {
    /// Fail with [`ArmatureError::NameResolution`](armature_core::ArmatureError::NameResolution)
    /// on the first unresolved name.
    #[default]
    Strict,
    /// Log a warning per unresolved name. Unbound animation sets are
    /// dropped; unresolved joints keep an identity palette entry.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSettings {
    pub binding: BindingPolicy,
    /// Time applied to the active clip right after binding.
    pub initial_time: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            binding: BindingPolicy::Strict,
            initial_time: 0.0,
        }
    }
}
