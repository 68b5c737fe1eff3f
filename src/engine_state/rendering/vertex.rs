//! Vertex data structures and layouts for voxel rendering.
//!
//! This module defines the interleaved vertex format a render collaborator uploads
//! for a drawable mesh.

use cgmath::{Vector2, Vector3};

/// A vertex of a voxel face quad.
///
/// The struct is plain old data so a slice of vertices can be handed to a GPU
/// buffer through `bytemuck::cast_slice` without copying.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Normal: 3x f32 (12 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in chunk-local world units
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// UV texture coordinates
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Size of one vertex in bytes, the stride of an interleaved vertex buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Creates a new vertex with the given parameters.
    ///
    /// # Arguments
    /// * `position` - The position of the vertex
    /// * `normal` - The outward normal of the face the vertex belongs to
    /// * `tex_coords` - The UV coordinates of the vertex
    ///
    /// # Returns
    /// A new `Vertex` instance
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>, tex_coords: Vector2<f32>) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            tex_coords: tex_coords.into(),
        }
    }
}
