use glam::{Mat4, Quat, Vec3};

/// Scale magnitudes below this are treated as collapsed axes.
const MIN_SCALE: f32 = 1e-6;

/// A transform decomposed into rotation, translation and scale.
///
/// Keyframes are stored in this form so that each component can be
/// interpolated on its own and recomposed afterwards.
///
/// Matrices follow glam's column-vector convention: the recomposed matrix
/// applies scale first, then rotation, then translation to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformData {
    pub rotation: Quat,
    pub translation: Vec3,
    pub scale: Vec3,
}

impl TransformData {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3, scale: Vec3) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Decomposes an affine matrix.
    ///
    /// Shear cannot be represented and is lost. A matrix with a (near) zero
    /// scale axis has no recoverable rotation and decomposes to an identity
    /// rotation with the zero scale kept.
    #[must_use]
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        let degenerate = scale.abs().cmplt(Vec3::splat(MIN_SCALE)).any() || !rotation.is_finite();
        Self {
            rotation: if degenerate { Quat::IDENTITY } else { rotation },
            translation,
            scale,
        }
    }

    /// Recomposes the matrix `T * R * S`.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for TransformData {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for TransformData {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(&matrix)
    }
}
