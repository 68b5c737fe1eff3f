//! Rendering system for the voxel engine.
//!
//! This module contains everything between a generated chunk and a draw call: mesh
//! extraction, the per-tick visibility scheduler and the interface to whatever
//! actually puts triangles on screen.
//!
//! The engine never talks to a graphics API itself. Each tick the scheduler hands
//! [`DrawCommand`]s to a [`RenderSink`] supplied by the caller.

use cgmath::{Point3, Quaternion};

use super::voxels::block::material::MaterialEntry;

pub mod meshing;
mod vertex;
pub mod visibility;

// Re-export commonly used types
pub use meshing::DrawableMesh;
pub use vertex::Vertex;
pub use visibility::{SkipReason, TickReport, VisibilityScheduler};

/// A request to draw one mesh of one chunk this frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand<'a> {
    /// The mesh to draw, borrowed from the scheduler's cache
    pub mesh: &'a DrawableMesh,
    /// World position of the chunk's origin
    pub position: Point3<f32>,
    /// Always the identity rotation
    pub rotation: Quaternion<f32>,
    /// The material resolved from the mesh's material index
    pub material: &'a MaterialEntry,
}

/// The render collaborator the scheduler submits draw commands to.
///
/// Submission is fire-and-forget: the sink receives no feedback channel and the
/// scheduler assumes every command is accepted.
pub trait RenderSink {
    /// Receives one draw command for the current frame.
    fn submit(&mut self, command: DrawCommand<'_>);

    /// Called once for every freshly extracted mesh before it is cached.
    ///
    /// Sinks that want to reorder vertices for GPU cache locality do it here. The
    /// default leaves the mesh untouched.
    fn prepare_mesh(&mut self, _mesh: &mut DrawableMesh) {}
}
