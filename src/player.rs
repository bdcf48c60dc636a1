//! Playback loop on top of [`Model::set_time`].
//!
//! A model only knows how to pose itself at an absolute time. The player
//! owns the running clock: it accumulates frame deltas, applies the
//! looping policy and feeds the result to the model.

use armature_core::Result;
use armature_scene::Model;

use crate::utils::Timer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Restart from 0 once the clip end is reached. When false the clip
    /// holds its last pose.
    pub looping: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            looping: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    pub settings: PlaybackSettings,
    pub paused: bool,
    elapsed: f32,
    finished: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new(PlaybackSettings::default())
    }
}

impl AnimationPlayer {
    #[must_use]
    pub fn new(settings: PlaybackSettings) -> Self {
        Self {
            settings,
            paused: false,
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Current clip time in seconds.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True once a non-looping clip reached its end.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.finished = false;
    }

    /// Advances the clock by `dt` seconds and poses `model`.
    ///
    /// Reaching or passing the clip duration restarts at exactly 0 rather
    /// than carrying the overshoot into the next cycle. A clip of zero
    /// duration holds time at 0.
    pub fn advance(&mut self, model: &mut Model, dt: f32) -> Result<()> {
        if !self.paused && !self.finished {
            let duration = model.duration();
            let t = self.elapsed + dt * self.settings.time_scale;
            self.elapsed = if duration <= 0.0 {
                0.0
            } else if t >= duration {
                if self.settings.looping {
                    log::trace!("Clip wrapped at {t}s (duration {duration}s)");
                    0.0
                } else {
                    self.finished = true;
                    duration
                }
            } else {
                t.max(0.0)
            };
        }

        model.set_time(self.elapsed)
    }

    /// Advances by the timer's last frame delta.
    pub fn update(&mut self, model: &mut Model, timer: &Timer) -> Result<()> {
        self.advance(model, timer.dt_seconds())
    }
}
