use glam::Vec3;

use crate::errors::{Result, ViewerError};
use crate::scene::vertex_buffer::{Vertex, VertexBuffer};

/// A named part of the model drawn with one material.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    /// First element in the index buffer.
    pub start_index: u32,
    /// Number of indices drawn for this group. Zero until a draw range is set.
    pub count: u32,
    pub material_index: usize,
    /// Vertices that move together when the model explodes.
    pub vertex_indices: Vec<u32>,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            vertex_indices,
            ..Default::default()
        }
    }

    /// Sets the index buffer range drawn for this group.
    #[must_use]
    pub fn with_draw_range(mut self, start_index: u32, count: u32) -> Self {
        self.start_index = start_index;
        self.count = count;
        self
    }
}

/// Grouped mesh with per-group explosion directions.
///
/// The rest-pose vertices are never modified. Exploding derives a displaced
/// copy from them and replaces the vertex buffer contents, so the displacement
/// is absolute rather than accumulated.
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Vec<Vertex>,
    groups: Vec<Group>,
    group_vectors: Vec<Vec3>,
    vertex_buffer: VertexBuffer,
}

impl Model {
    /// Builds a model whose explosion vectors point from the model centroid
    /// towards each group centroid.
    pub fn new(vertices: Vec<Vertex>, groups: Vec<Group>) -> Result<Self> {
        validate_groups(&vertices, &groups)?;
        let group_vectors = compute_group_vectors(&vertices, &groups);
        Ok(Self::from_parts(vertices, groups, group_vectors))
    }

    /// Builds a model with externally supplied explosion vectors, one per group.
    pub fn with_group_vectors(
        vertices: Vec<Vertex>,
        groups: Vec<Group>,
        group_vectors: Vec<Vec3>,
    ) -> Result<Self> {
        if group_vectors.len() != groups.len() {
            return Err(ViewerError::GroupVectorCountMismatch {
                groups: groups.len(),
                vectors: group_vectors.len(),
            });
        }
        validate_groups(&vertices, &groups)?;
        Ok(Self::from_parts(vertices, groups, group_vectors))
    }

    fn from_parts(vertices: Vec<Vertex>, groups: Vec<Group>, group_vectors: Vec<Vec3>) -> Self {
        let vertex_buffer = VertexBuffer::new(vertices.clone());
        Self {
            vertices,
            groups,
            group_vectors,
            vertex_buffer,
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn group_vectors(&self) -> &[Vec3] {
        &self.group_vectors
    }

    #[must_use]
    pub fn group_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    #[must_use]
    pub fn vertex_buffer(&self) -> &VertexBuffer {
        &self.vertex_buffer
    }

    /// Rest-pose vertices pushed `amount` units along their group vectors.
    ///
    /// A vertex shared by several groups is displaced once per group.
    #[must_use]
    pub fn displaced_vertices(&self, amount: f32) -> Vec<Vertex> {
        let mut vertices = self.vertices.clone();
        for (group, direction) in self.groups.iter().zip(&self.group_vectors) {
            let offset = *direction * amount;
            for &index in &group.vertex_indices {
                vertices[index as usize].position += offset;
            }
        }
        vertices
    }

    /// Displaces the rest pose by `amount` and uploads the result.
    pub fn explode(&mut self, amount: f32) {
        let vertices = self.displaced_vertices(amount);
        self.vertex_buffer.upload(vertices);
    }
}

fn validate_groups(vertices: &[Vertex], groups: &[Group]) -> Result<()> {
    for group in groups {
        if let Some(&index) = group
            .vertex_indices
            .iter()
            .find(|&&i| i as usize >= vertices.len())
        {
            return Err(ViewerError::VertexIndexOutOfBounds {
                group: group.name.clone(),
                index,
                len: vertices.len(),
            });
        }
    }
    Ok(())
}

fn centroid(positions: impl ExactSizeIterator<Item = Vec3>) -> Vec3 {
    let count = positions.len();
    if count == 0 {
        return Vec3::ZERO;
    }
    positions.sum::<Vec3>() / count as f32
}

/// Unit direction from the model centroid to each group centroid.
///
/// Groups centred on the model (or empty groups) get a zero vector and stay put.
/// Indices must already be validated.
fn compute_group_vectors(vertices: &[Vertex], groups: &[Group]) -> Vec<Vec3> {
    let model_center = centroid(vertices.iter().map(|v| v.position));

    groups
        .iter()
        .map(|group| {
            if group.vertex_indices.is_empty() {
                return Vec3::ZERO;
            }
            let group_center = centroid(
                group
                    .vertex_indices
                    .iter()
                    .map(|&i| vertices[i as usize].position),
            );
            (group_center - model_center).normalize_or_zero()
        })
        .collect()
}
