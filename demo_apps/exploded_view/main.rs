//! Exploded View Demo
//!
//! Builds a cube whose six faces are separate groups, captures four keyframes
//! while orbiting the camera and spreading the faces apart, then plays the
//! keyframes back and logs the interpolated camera and explosion.
//!
//! Usage: `exploded_view [settings.json]`

use glam::{Mat4, Vec2, Vec3};
use keyview::animation::decompose;
use keyview::{AnimationController, AnimationSettings, Group, Model, PlaybackState, ViewState, Vertex};

const ORBIT_RADIUS: f32 = 4.0;
const FRAME_LIMIT: usize = 10_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => AnimationSettings::from_json_file(path)?,
        None => AnimationSettings::default(),
    };

    let mut model = cube_model()?;
    let mut controller = AnimationController::new(settings)?;
    let mut viewer = ViewState::default();

    // Keyframes: a quarter turn around the cube per key, spreading the faces further each time
    for key in 0..4 {
        let angle = key as f32 * std::f32::consts::FRAC_PI_2;
        let eye = Vec3::new(angle.sin(), 0.5, angle.cos()) * ORBIT_RADIUS;
        viewer.view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        viewer.light = Mat4::from_translation(Vec3::new(0.0, 2.0 + key as f32, 0.0));

        controller.set_explosion(key as f32 * 0.5, &mut model);
        viewer.request_keyframe();
        controller.tick(&mut viewer, &mut model);
    }

    viewer.start_animation();
    let mut frames = 0;
    while controller.tick(&mut viewer, &mut model) == PlaybackState::Playing {
        if frames % 100 == 0 {
            let view = decompose(&viewer.view, false);
            log::info!(
                "frame {frames:4}: phase {:.3}, explosion {:.3}, view translation {:?}",
                controller.phase(),
                controller.explosion(),
                view.translation
            );
        }
        frames += 1;
        if frames > FRAME_LIMIT {
            anyhow::bail!("playback did not finish within {FRAME_LIMIT} frames");
        }
    }

    log::info!(
        "Playback finished after {frames} frames, vertex buffer version {} ({} bytes)",
        model.vertex_buffer().version(),
        model.vertex_buffer().as_bytes().len()
    );

    Ok(())
}

/// Unit cube with one group (and one explosion direction) per face.
fn cube_model() -> keyview::Result<Model> {
    let faces = [
        ("+x", Vec3::X, Vec3::Y, Vec3::Z),
        ("-x", Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        ("+y", Vec3::Y, Vec3::Z, Vec3::X),
        ("-y", Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
        ("+z", Vec3::Z, Vec3::Y, Vec3::NEG_X),
        ("-z", Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(faces.len() * 4);
    let mut groups = Vec::with_capacity(faces.len());

    for (face, (name, normal, up, right)) in faces.into_iter().enumerate() {
        let base = vertices.len() as u32;
        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let position = normal * 0.5 + right * (u - 0.5) + up * (v - 0.5);
            vertices.push(Vertex::new(position, normal, Vec2::new(u, v)));
        }

        let indices = (base..base + 4).collect();
        groups.push(Group::new(name, indices).with_draw_range(face as u32 * 6, 6));
    }

    Model::new(vertices, groups)
}
