use std::ops::{Add, Mul, Sub};

use glam::{Mat4, Quat, Vec3};

/// Below this `sin(theta)` the two rotations are treated as parallel and
/// [`slerp`] blends linearly.
const SLERP_EPSILON: f32 = 0.001;

/// Values that can be blended with a uniform Catmull-Rom spline.
///
/// `t` is the local parameter inside the segment spanned by `p1` and `p2`.
/// It is not clamped: values outside `[0, 1]` extrapolate along the cubic.
pub trait CatmullRom: Copy {
    fn catmull_rom(t: f32, p0: Self, p1: Self, p2: Self, p3: Self) -> Self;
}

#[inline]
fn catmull_rom_basis<T>(t: f32, p0: T, p1: T, p2: T, p3: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    let t2 = t * t;
    let t3 = t2 * t;

    let c1 = p2 - p0;
    let c2 = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let c3 = p1 * 3.0 - p0 - p2 * 3.0 + p3;

    (p1 * 2.0 + c1 * t + c2 * t2 + c3 * t3) * 0.5
}

impl CatmullRom for f32 {
    #[inline]
    fn catmull_rom(t: f32, p0: Self, p1: Self, p2: Self, p3: Self) -> Self {
        catmull_rom_basis(t, p0, p1, p2, p3)
    }
}

impl CatmullRom for Vec3 {
    #[inline]
    fn catmull_rom(t: f32, p0: Self, p1: Self, p2: Self, p3: Self) -> Self {
        catmull_rom_basis(t, p0, p1, p2, p3)
    }
}

impl CatmullRom for Mat4 {
    #[inline]
    fn catmull_rom(t: f32, p0: Self, p1: Self, p2: Self, p3: Self) -> Self {
        catmull_rom_basis(t, p0, p1, p2, p3)
    }
}

impl CatmullRom for Quat {
    /// Component-wise blend. The result is generally not unit length.
    #[inline]
    fn catmull_rom(t: f32, p0: Self, p1: Self, p2: Self, p3: Self) -> Self {
        catmull_rom_basis(t, p0, p1, p2, p3)
    }
}

#[must_use]
pub fn catmull_rom_scalar(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    f32::catmull_rom(t, p0, p1, p2, p3)
}

#[must_use]
pub fn catmull_rom_vector(t: f32, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    Vec3::catmull_rom(t, p0, p1, p2, p3)
}

/// Element-wise spline over all sixteen matrix entries.
///
/// Blending matrices directly does not preserve rigidity; use
/// [`interpolate_transform`](crate::animation::interpolate_transform) for
/// camera and light matrices.
#[must_use]
pub fn catmull_rom_matrix(t: f32, p0: Mat4, p1: Mat4, p2: Mat4, p3: Mat4) -> Mat4 {
    Mat4::catmull_rom(t, p0, p1, p2, p3)
}

/// Component-wise spline over the four quaternion components. Not normalized.
#[must_use]
pub fn catmull_rom_quaternion(t: f32, p0: Quat, p1: Quat, p2: Quat, p3: Quat) -> Quat {
    Quat::catmull_rom(t, p0, p1, p2, p3)
}

/// Spherical linear interpolation along the shortest arc.
///
/// Both inputs are normalized first. When the rotations are (anti)parallel
/// the result falls back to a normalized linear blend.
#[must_use]
pub fn slerp(t: f32, q1: Quat, q2: Quat) -> Quat {
    let start = q1.normalize();
    let mut end = q2.normalize();

    let mut dot = start.dot(end);

    // Shortest path
    if dot < 0.0 {
        end = -end;
        dot = -dot;
    }

    let dot = dot.clamp(-1.0, 1.0);
    let theta = dot.acos();
    let sin_theta = theta.sin();

    if sin_theta > SLERP_EPSILON {
        let inv_sin_theta = 1.0 / sin_theta;
        let coeff0 = ((1.0 - t) * theta).sin() * inv_sin_theta;
        let coeff1 = (t * theta).sin() * inv_sin_theta;
        start * coeff0 + end * coeff1
    } else {
        (start * (1.0 - t) + end * t).normalize()
    }
}

/// Samples a scalar Catmull-Rom curve through `values`.
///
/// Every consecutive window of four values contributes `num_segments + 1`
/// samples at `t = j / num_segments` for `j` in `0..=num_segments`, so shared
/// window endpoints appear twice. Fewer than four values, or zero segments,
/// yields an empty list.
#[must_use]
pub fn catmull_rom_interpolate_list(values: &[f32], num_segments: usize) -> Vec<f32> {
    if values.len() < 4 || num_segments == 0 {
        return Vec::new();
    }

    let step = 1.0 / num_segments as f32;
    let mut result = Vec::with_capacity((values.len() - 3) * (num_segments + 1));

    for window in values.windows(4) {
        for j in 0..=num_segments {
            let t = j as f32 * step;
            result.push(f32::catmull_rom(t, window[0], window[1], window[2], window[3]));
        }
    }

    result
}
