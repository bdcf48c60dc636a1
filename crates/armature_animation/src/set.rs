use glam::Mat4;

use armature_assets::ChannelDescriptor;
use armature_core::{ArmatureError, NodeHandle, Result, TransformData};

use crate::binder::PoseTarget;
use crate::tracks::KeyframeTrack;

/// A keyframe track driving the local transform of one named node.
///
/// The target starts as a name only. [`bind`](Self::bind) resolves it to a
/// node handle once the whole node tree exists.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    target: String,
    track: KeyframeTrack<TransformData>,
    target_node: Option<NodeHandle>,
}

impl AnimationSet {
    /// Creates a set from a validated track.
    pub fn new(target: impl Into<String>, track: KeyframeTrack<TransformData>) -> Result<Self> {
        let target = target.into();
        track
            .validate()
            .map_err(|reason| ArmatureError::InvalidTrack {
                target: target.clone(),
                reason,
            })?;
        Ok(Self {
            target,
            track,
            target_node: None,
        })
    }

    /// Builds a set from an importer channel, decomposing every matrix.
    pub fn from_channel(channel: &ChannelDescriptor) -> Result<Self> {
        let decompose = |matrices: &[Mat4]| -> Vec<TransformData> {
            matrices.iter().map(TransformData::from_matrix).collect()
        };

        let track = KeyframeTrack::new(
            channel.input.clone(),
            decompose(&channel.output),
            channel.interpolation,
        )
        .with_tangents(decompose(&channel.in_tangent), decompose(&channel.out_tangent));

        Self::new(channel.target.clone(), track)
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn track(&self) -> &KeyframeTrack<TransformData> {
        &self.track
    }

    #[inline]
    #[must_use]
    pub fn target_node(&self) -> Option<NodeHandle> {
        self.target_node
    }

    #[inline]
    pub fn bind(&mut self, node: NodeHandle) {
        self.target_node = Some(node);
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.target_node.is_some()
    }

    /// Time of the last keyframe.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.track.end_time()
    }

    /// Evaluates the track at `time` and recomposes the local matrix.
    pub fn evaluate(&self, time: f32) -> Result<Mat4> {
        let mode = self.track.interpolation();
        if !mode.is_supported() {
            return Err(ArmatureError::UnsupportedInterpolation {
                target: self.target.clone(),
                mode,
            });
        }

        match self.track.sample(time) {
            Some(data) => Ok(data.to_matrix()),
            None => Err(ArmatureError::InvalidTrack {
                target: self.target.clone(),
                reason: self
                    .track
                    .validate()
                    .err()
                    .unwrap_or_else(|| format!("no sample at time {time}")),
            }),
        }
    }

    /// Evaluates at `time` and writes the result into the bound node.
    pub fn set_time(&self, time: f32, target: &mut impl PoseTarget) -> Result<()> {
        let node = self.target_node.ok_or_else(|| ArmatureError::UnboundTarget {
            target: self.target.clone(),
        })?;
        let matrix = self.evaluate(time)?;
        target.set_precomputed(node, matrix);
        Ok(())
    }
}
