//! Scene data consumed by the animation core
//!
//! - Model: grouped mesh with rest-pose vertices and explosion directions
//! - Group: named vertex subset drawn with one material
//! - VertexBuffer: full-replacement upload target for displaced vertices

pub mod model;
pub mod vertex_buffer;

pub use model::{Group, Model};
pub use vertex_buffer::{Vertex, VertexBuffer};
