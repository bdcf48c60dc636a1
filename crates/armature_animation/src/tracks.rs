use std::cmp::Ordering;

use armature_core::InterpolationMode;

use crate::values::Interpolatable;

/// Intervals shorter than this are treated as a single instant.
const MIN_INTERVAL: f32 = 1e-6;

/// Ordered keyframe samples of one animated value.
///
/// `times` is ascending. `values` has one entry per time. Bezier tracks also
/// carry one in-tangent and one out-tangent control value per time; other
/// modes leave both tangent lists empty.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub(crate) times: Vec<f32>,
    pub(crate) values: Vec<T>,
    pub(crate) in_tangents: Vec<T>,
    pub(crate) out_tangents: Vec<T>,
    pub(crate) interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            in_tangents: Vec::new(),
            out_tangents: Vec::new(),
            interpolation,
        }
    }

    #[must_use]
    pub fn with_tangents(mut self, in_tangents: Vec<T>, out_tangents: Vec<T>) -> Self {
        self.in_tangents = in_tangents;
        self.out_tangents = out_tangents;
        self
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn in_tangents(&self) -> &[T] {
        &self.in_tangents
    }

    #[inline]
    #[must_use]
    pub fn out_tangents(&self) -> &[T] {
        &self.out_tangents
    }

    #[inline]
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last sample, 0 for an empty track.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Checks the structural invariants, describing the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.times.is_empty() {
            return Err("track has no samples".to_string());
        }
        if self.values.len() != self.times.len() {
            return Err(format!(
                "{} output values for {} sample times",
                self.values.len(),
                self.times.len()
            ));
        }
        if self
            .times
            .windows(2)
            .any(|w| matches!(w[0].partial_cmp(&w[1]), Some(Ordering::Greater) | None))
        {
            return Err("sample times are not ascending".to_string());
        }
        if self.interpolation == InterpolationMode::Bezier
            && (self.in_tangents.len() != self.times.len()
                || self.out_tangents.len() != self.times.len())
        {
            return Err(format!(
                "bezier track has {} in-tangents and {} out-tangents for {} samples",
                self.in_tangents.len(),
                self.out_tangents.len(),
                self.times.len()
            ));
        }
        Ok(())
    }

    /// Finds the pair of sample indices whose interval contains `time`.
    ///
    /// Binary search over the intervals `[times[i], times[i + 1]]`, both ends
    /// inclusive. When no interval contains `time` (past the last sample, a
    /// single-sample track, NaN) both indices are the last index. Times
    /// before the first sample return `(0, 0)`.
    #[must_use]
    pub fn bracket(&self, time: f32) -> (usize, usize) {
        let len = self.times.len();
        let last_index = len.saturating_sub(1);
        if len < 2 {
            return (last_index, last_index);
        }
        if time < self.times[0] {
            return (0, 0);
        }

        let mut first = 0;
        let mut last = len - 2;
        while first <= last {
            let mid = first + (last - first) / 2;
            let (t0, t1) = (self.times[mid], self.times[mid + 1]);
            if time >= t0 && time <= t1 {
                return (mid, mid + 1);
            } else if time < t0 {
                if mid == 0 {
                    break;
                }
                last = mid - 1;
            } else if time > t0 {
                first = mid + 1;
            } else {
                break;
            }
        }

        (last_index, last_index)
    }

    /// Samples the track at `time`.
    ///
    /// Returns `None` when the interpolation mode cannot be evaluated or the
    /// track is empty.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if !self.interpolation.is_supported() || self.times.is_empty() {
            return None;
        }

        let (index_a, index_b) = self.bracket(time);
        if index_a == index_b {
            return self.values.get(index_a).copied();
        }

        let t0 = self.times[index_a];
        let t1 = self.times[index_b];
        let dt = t1 - t0;
        let u = if dt > MIN_INTERVAL { (time - t0) / dt } else { 0.0 };
        let u = u.clamp(0.0, 1.0);

        let start = *self.values.get(index_a)?;
        let end = *self.values.get(index_b)?;
        if u <= 0.0 {
            return Some(start);
        }
        if u >= 1.0 {
            return Some(end);
        }

        match self.interpolation {
            InterpolationMode::Linear => Some(T::interpolate_linear(start, end, u)),
            InterpolationMode::Bezier => {
                let out_tangent = *self.out_tangents.get(index_a)?;
                let in_tangent = *self.in_tangents.get(index_b)?;
                Some(T::interpolate_bezier(start, out_tangent, in_tangent, end, u))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(times: Vec<f32>) -> KeyframeTrack<f32> {
        let values = times.iter().map(|t| t * 10.0).collect();
        KeyframeTrack::new(times, values, InterpolationMode::Linear)
    }

    #[test]
    fn bracket_interior() {
        let track = linear(vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(track.bracket(0.5), (0, 1));
        assert_eq!(track.bracket(1.5), (1, 2));
        assert_eq!(track.bracket(2.9), (2, 3));
    }

    #[test]
    fn bracket_on_sample_boundaries() {
        let track = linear(vec![0.0, 1.0, 2.0]);
        assert_eq!(track.bracket(0.0), (0, 1));
        // Inclusive ends: an interior sample belongs to the first interval
        // the search probes.
        assert_eq!(track.bracket(1.0), (0, 1));
        assert_eq!(track.bracket(2.0), (1, 2));
    }

    #[test]
    fn bracket_clamps_past_the_end() {
        let track = linear(vec![0.0, 1.0, 2.0]);
        assert_eq!(track.bracket(5.0), (2, 2));
        assert_eq!(track.bracket(f32::NAN), (2, 2));
    }

    #[test]
    fn bracket_before_start_and_single_sample() {
        assert_eq!(linear(vec![1.0, 2.0]).bracket(0.0), (0, 0));
        assert_eq!(linear(vec![1.0]).bracket(3.0), (0, 0));
    }

    #[test]
    fn zero_length_interval_does_not_divide_by_zero() {
        let track = KeyframeTrack::new(
            vec![0.0, 1.0, 1.0, 2.0],
            vec![0.0_f32, 10.0, 20.0, 30.0],
            InterpolationMode::Linear,
        );
        let value = track.sample(1.0).unwrap();
        assert!(value.is_finite());
    }

    #[test]
    fn validate_reports_defects() {
        let mut track = linear(vec![0.0, 1.0]);
        assert!(track.validate().is_ok());

        track.values.pop();
        assert!(track.validate().is_err());

        let unsorted = linear(vec![1.0, 0.0]);
        assert!(unsorted.validate().is_err());

        let bezier = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 1.0], InterpolationMode::Bezier);
        assert!(bezier.validate().is_err());

        let empty: KeyframeTrack<f32> = KeyframeTrack::new(Vec::new(), Vec::new(), InterpolationMode::Linear);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn unsupported_mode_samples_nothing() {
        let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 1.0], InterpolationMode::Step);
        assert!(track.sample(0.5).is_none());
    }
}
