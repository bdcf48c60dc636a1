use armature_assets::AnimationDescriptor;
use armature_core::{InterpolationMode, Result};

use crate::binder::PoseTarget;
use crate::set::AnimationSet;

/// One animation clip: a group of sets sharing a timeline.
#[derive(Debug, Clone, Default)]
pub struct AnimationManager {
    name: Option<String>,
    sets: Vec<AnimationSet>,
    duration: f32,
}

impl AnimationManager {
    #[must_use]
    pub fn new(name: Option<String>, sets: Vec<AnimationSet>) -> Self {
        let duration = max_end_time(&sets);
        Self {
            name,
            sets,
            duration,
        }
    }

    /// Builds a clip from importer data.
    ///
    /// Nested channels are flattened depth-first. Channels without an
    /// interpolation mode carry no usable keyframes and are skipped.
    pub fn from_descriptor(descriptor: &AnimationDescriptor) -> Result<Self> {
        let mut channels = Vec::new();
        for channel in &descriptor.channels {
            channel.for_each_channel(&mut |c| channels.push(c));
        }

        let mut sets = Vec::with_capacity(channels.len());
        for channel in channels {
            if channel.interpolation == InterpolationMode::Undefined {
                log::debug!(
                    "Skipping channel targeting '{}' without interpolation mode",
                    channel.target
                );
                continue;
            }
            sets.push(AnimationSet::from_channel(channel)?);
        }

        Ok(Self::new(descriptor.name.clone(), sets))
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Largest keyframe time over all sets, 0 when there are none.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn sets(&self) -> &[AnimationSet] {
        &self.sets
    }

    #[inline]
    pub(crate) fn sets_mut(&mut self) -> &mut [AnimationSet] {
        &mut self.sets
    }

    /// Drops every set that is not bound to a node.
    pub fn retain_bound(&mut self) {
        self.sets.retain(AnimationSet::is_bound);
        self.duration = max_end_time(&self.sets);
    }

    /// Applies `time` to every set in order.
    ///
    /// Sets are expected to target distinct nodes; when two share a target
    /// the later one wins.
    pub fn apply_time(&self, time: f32, target: &mut impl PoseTarget) -> Result<()> {
        for set in &self.sets {
            set.set_time(time, target)?;
        }
        Ok(())
    }
}

fn max_end_time(sets: &[AnimationSet]) -> f32 {
    sets.iter().map(AnimationSet::end_time).fold(0.0_f32, f32::max)
}
