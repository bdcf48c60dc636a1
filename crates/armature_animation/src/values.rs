use glam::{Quat, Vec3, Vec4};

use armature_core::TransformData;

/// Values that can be blended between keyframes.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// Cubic Bezier through `start`, the two control points and `end`.
    fn interpolate_bezier(start: Self, control0: Self, control1: Self, end: Self, t: f32) -> Self;
}

/// Bernstein basis weights of a cubic Bezier at `t`.
#[inline]
#[must_use]
pub fn bernstein_weights(t: f32) -> [f32; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn interpolate_bezier(start: Self, control0: Self, control1: Self, end: Self, t: f32) -> Self {
        let [w0, w1, w2, w3] = bernstein_weights(t);
        start * w0 + control0 * w1 + control1 * w2 + end * w3
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn interpolate_bezier(start: Self, control0: Self, control1: Self, end: Self, t: f32) -> Self {
        let [w0, w1, w2, w3] = bernstein_weights(t);
        start * w0 + control0 * w1 + control1 * w2 + end * w3
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }

    /// Componentwise blend of the four quaternions.
    ///
    /// The result is not renormalized, so it is generally not a unit
    /// quaternion away from the endpoints.
    fn interpolate_bezier(start: Self, control0: Self, control1: Self, end: Self, t: f32) -> Self {
        let [w0, w1, w2, w3] = bernstein_weights(t);
        let blended = Vec4::from(start) * w0
            + Vec4::from(control0) * w1
            + Vec4::from(control1) * w2
            + Vec4::from(end) * w3;
        Quat::from_vec4(blended)
    }
}

impl Interpolatable for TransformData {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Self {
            rotation: Quat::interpolate_linear(start.rotation, end.rotation, t),
            translation: Vec3::interpolate_linear(start.translation, end.translation, t),
            scale: Vec3::interpolate_linear(start.scale, end.scale, t),
        }
    }

    fn interpolate_bezier(start: Self, control0: Self, control1: Self, end: Self, t: f32) -> Self {
        Self {
            rotation: Quat::interpolate_bezier(
                start.rotation,
                control0.rotation,
                control1.rotation,
                end.rotation,
                t,
            ),
            translation: Vec3::interpolate_bezier(
                start.translation,
                control0.translation,
                control1.translation,
                end.translation,
                t,
            ),
            scale: Vec3::interpolate_bezier(start.scale, control0.scale, control1.scale, end.scale, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bernstein_weights_sum_to_one() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let sum: f32 = bernstein_weights(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn bezier_quat_is_not_renormalized() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_z(std::f32::consts::PI);
        let q = Quat::interpolate_bezier(a, a, b, b, 0.5);
        // Halfway between (0,0,0,1) and (0,0,1,0) has length sqrt(0.5).
        assert!((q.length() - 0.5_f32.sqrt()).abs() < 1e-5);
    }
}
