use glam::Mat4;

use crate::animation::decompose::{Decomposed, decompose};
use crate::animation::values::{catmull_rom_vector, slerp};

/// Blends four control transforms into one at local parameter `t`.
///
/// Translation and scale follow a Catmull-Rom spline through all four
/// controls. Rotation is a SLERP between the two inner controls only, so the
/// outer controls never affect orientation.
#[must_use]
pub fn interpolate_transform(t: f32, m0: &Mat4, m1: &Mat4, m2: &Mat4, m3: &Mat4) -> Mat4 {
    let d0 = decompose(m0, false);
    let d1 = decompose(m1, false);
    let d2 = decompose(m2, false);
    let d3 = decompose(m3, false);

    Decomposed {
        translation: catmull_rom_vector(t, d0.translation, d1.translation, d2.translation, d3.translation),
        rotation: slerp(t, d1.rotation, d2.rotation),
        scale: catmull_rom_vector(t, d0.scale, d1.scale, d2.scale, d3.scale),
    }
    .to_matrix()
}
