use glam::{Mat3, Mat4, Quat, Vec3};

/// Translation / rotation / scale factors of an affine transform.
///
/// Always derived on demand from a matrix and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Decomposed {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Recomposes `translate * rotate * scale`.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Decomposed {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Splits `matrix` into translation, rotation and scale.
///
/// Scale is the length of each basis column; a negative determinant flips the
/// sign of the x scale so the remaining basis is a proper rotation.
///
/// When `pre_rotation` is true the stored translation is assumed to live in
/// rotated space (as in many view matrices) and is brought back with the
/// inverse rotation. The animation path always passes `false`.
///
/// The input must be non-degenerate: every basis column needs a non-zero
/// length. Singular matrices produce meaningless output.
#[must_use]
pub fn decompose(matrix: &Mat4, pre_rotation: bool) -> Decomposed {
    let x_axis = matrix.x_axis.truncate();
    let y_axis = matrix.y_axis.truncate();
    let z_axis = matrix.z_axis.truncate();

    let det = Mat3::from_cols(x_axis, y_axis, z_axis).determinant();
    let scale = Vec3::new(
        x_axis.length() * det.signum(),
        y_axis.length(),
        z_axis.length(),
    );

    let basis = Mat3::from_cols(x_axis / scale.x, y_axis / scale.y, z_axis / scale.z);
    let rotation = Quat::from_mat3(&basis).normalize();

    let mut translation = matrix.w_axis.truncate();
    if pre_rotation {
        translation = rotation.inverse() * translation;
    }

    Decomposed {
        translation,
        rotation,
        scale,
    }
}
