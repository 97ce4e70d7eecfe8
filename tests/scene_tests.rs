//! Model, vertex buffer and settings tests
//!
//! Tests for:
//! - Group explosion vectors (computed and supplied)
//! - Model validation errors
//! - Non-cumulative displacement and full-buffer uploads
//! - AnimationSettings defaults, JSON loading and validation

use glam::{Vec2, Vec3};

use keyview::errors::ViewerError;
use keyview::{AnimationSettings, Group, Model, Vertex, VertexBuffer};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn vertex(position: Vec3) -> Vertex {
    Vertex::new(position, Vec3::Z, Vec2::ZERO)
}

/// Four quads around the origin: +X, -X, +Y and a centred one.
fn cross_model_parts() -> (Vec<Vertex>, Vec<Group>) {
    let vertices = vec![
        vertex(Vec3::new(2.0, 0.0, 0.0)),
        vertex(Vec3::new(3.0, 0.0, 0.0)),
        vertex(Vec3::new(-2.0, 0.0, 0.0)),
        vertex(Vec3::new(-3.0, 0.0, 0.0)),
        vertex(Vec3::new(0.0, 4.0, 0.0)),
        vertex(Vec3::new(0.0, -4.0, 0.0)),
    ];
    let groups = vec![
        Group::new("right", vec![0, 1]),
        Group::new("left", vec![2, 3]),
        Group::new("top", vec![4]),
        Group::new("spine", vec![4, 5]),
    ];
    (vertices, groups)
}

// ============================================================================
// Group vectors
// ============================================================================

#[test]
fn group_vectors_point_away_from_model_center() {
    let (vertices, groups) = cross_model_parts();
    let model = Model::new(vertices, groups).unwrap();
    let vectors = model.group_vectors();

    assert_eq!(vectors.len(), 4);
    assert!(vec3_approx(vectors[0], Vec3::X));
    assert!(vec3_approx(vectors[1], Vec3::NEG_X));
    assert!(vec3_approx(vectors[2], Vec3::Y));
    // Centred group stays put
    assert_eq!(vectors[3], Vec3::ZERO);
}

#[test]
fn empty_group_gets_zero_vector() {
    let (vertices, mut groups) = cross_model_parts();
    groups.push(Group::new("empty", Vec::new()));

    let model = Model::new(vertices, groups).unwrap();
    assert_eq!(model.group_vectors()[4], Vec3::ZERO);
}

#[test]
fn supplied_group_vectors_are_used_verbatim() {
    let (vertices, groups) = cross_model_parts();
    let supplied = vec![Vec3::Z, Vec3::Z * 2.0, Vec3::ZERO, Vec3::NEG_Y];

    let model = Model::with_group_vectors(vertices, groups, supplied.clone()).unwrap();
    assert_eq!(model.group_vectors(), supplied.as_slice());
}

#[test]
fn group_lookup_by_name() {
    let (vertices, groups) = cross_model_parts();
    let model = Model::new(vertices, groups).unwrap();

    let top = model.group_by_name("top").unwrap();
    assert_eq!(top.vertex_indices, vec![4]);
    assert!(model.group_by_name("missing").is_none());
}

#[test]
fn group_draw_range_is_independent_of_vertices() {
    let group = Group::new("quad", vec![0, 1, 2, 3]);
    assert_eq!(group.start_index, 0);
    assert_eq!(group.count, 0);

    let group = group.with_draw_range(12, 6);
    assert_eq!(group.start_index, 12);
    assert_eq!(group.count, 6);
    assert_eq!(group.vertex_indices.len(), 4);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn vector_count_mismatch_is_rejected() {
    let (vertices, groups) = cross_model_parts();
    let err = Model::with_group_vectors(vertices, groups, vec![Vec3::X]).unwrap_err();

    assert!(matches!(
        err,
        ViewerError::GroupVectorCountMismatch {
            groups: 4,
            vectors: 1
        }
    ));
}

#[test]
fn out_of_range_vertex_index_is_rejected() {
    let (vertices, mut groups) = cross_model_parts();
    groups.push(Group::new("broken", vec![0, 6]));

    let err = Model::new(vertices, groups).unwrap_err();
    match err {
        ViewerError::VertexIndexOutOfBounds { group, index, len } => {
            assert_eq!(group, "broken");
            assert_eq!(index, 6);
            assert_eq!(len, 6);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Displacement & upload
// ============================================================================

#[test]
fn displacement_scales_with_amount() {
    let (vertices, groups) = cross_model_parts();
    let model = Model::new(vertices, groups).unwrap();

    let displaced = model.displaced_vertices(1.5);
    assert!(vec3_approx(displaced[0].position, Vec3::new(3.5, 0.0, 0.0)));
    assert!(vec3_approx(displaced[3].position, Vec3::new(-4.5, 0.0, 0.0)));
    // Normals and texture coordinates are left alone
    assert_eq!(displaced[0].normal, Vec3::Z);
}

#[test]
fn shared_vertex_is_displaced_per_group() {
    let vertices = vec![vertex(Vec3::ZERO)];
    let groups = vec![Group::new("a", vec![0]), Group::new("b", vec![0])];
    let model = Model::with_group_vectors(vertices, groups, vec![Vec3::X, Vec3::Y]).unwrap();

    let displaced = model.displaced_vertices(2.0);
    assert!(vec3_approx(displaced[0].position, Vec3::new(2.0, 2.0, 0.0)));
}

#[test]
fn explode_replaces_buffer_without_accumulating() {
    let (vertices, groups) = cross_model_parts();
    let mut model = Model::new(vertices, groups).unwrap();
    assert_eq!(model.vertex_buffer().version(), 0);
    assert_eq!(model.vertex_buffer().vertices(), model.vertices());

    model.explode(1.0);
    model.explode(1.0);
    model.explode(1.0);

    assert_eq!(model.vertex_buffer().version(), 3);
    assert_eq!(model.vertex_buffer().vertices(), model.displaced_vertices(1.0).as_slice());

    model.explode(0.0);
    assert_eq!(model.vertex_buffer().vertices(), model.vertices());
}

#[test]
fn vertex_buffer_bytes_match_layout() {
    let buffer = VertexBuffer::new(vec![vertex(Vec3::ONE); 3]);

    assert_eq!(std::mem::size_of::<Vertex>(), 32);
    assert_eq!(buffer.as_bytes().len(), 3 * 32);

    let first: &[f32] = bytemuck::cast_slice(&buffer.as_bytes()[..12]);
    assert_eq!(first, &[1.0, 1.0, 1.0]);
}

// ============================================================================
// AnimationSettings
// ============================================================================

#[test]
fn settings_defaults() {
    let settings = AnimationSettings::default();
    assert!((settings.phase_step - 0.005).abs() < f32::EPSILON);
    assert_eq!(settings.explosion_min, 0.0);
    assert_eq!(settings.explosion_max, 5.0);
    assert!(settings.validate().is_ok());
}

#[test]
fn settings_from_partial_json() {
    let settings = AnimationSettings::from_json_str(r#"{ "phase_step": 0.01 }"#).unwrap();
    assert!((settings.phase_step - 0.01).abs() < f32::EPSILON);
    assert_eq!(settings.explosion_max, 5.0);
}

#[test]
fn settings_json_round_trip() {
    let settings = AnimationSettings {
        phase_step: 0.02,
        explosion_min: -1.0,
        explosion_max: 2.0,
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(AnimationSettings::from_json_str(&json).unwrap(), settings);
}

#[test]
fn settings_reject_bad_values() {
    let err = AnimationSettings::from_json_str(r#"{ "phase_step": 0.0 }"#).unwrap_err();
    assert!(matches!(err, ViewerError::InvalidSettings(_)));

    let err = AnimationSettings::from_json_str(r#"{ "explosion_min": 3.0, "explosion_max": 1.0 }"#)
        .unwrap_err();
    assert!(matches!(err, ViewerError::InvalidSettings(_)));

    let err = AnimationSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ViewerError::JsonError(_)));
}

#[test]
fn settings_missing_file_is_io_error() {
    let err = AnimationSettings::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ViewerError::IoError(_)));
}

#[test]
fn settings_clamp_explosion() {
    let settings = AnimationSettings::default();
    assert_eq!(settings.clamp_explosion(-2.0), 0.0);
    assert_eq!(settings.clamp_explosion(2.5), 2.5);
    assert_eq!(settings.clamp_explosion(7.0), 5.0);
}
