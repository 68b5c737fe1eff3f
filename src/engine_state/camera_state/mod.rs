//! # Camera State
//!
//! What the visibility scheduler needs to know about the viewer: where it is and
//! which way it faces.
//!
//! ## Core Components
//! - `CameraView`: Position and forward direction, supplied per tick
//! - `Camera`: A yaw/pitch camera that produces a `CameraView`
//!
//! The scheduler only looks along the ground plane, so the forward vector is
//! flattened before it is used for culling.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

use super::{config::WorldConfig, math::round_to_int};

pub mod camera;

/// World position and facing of the viewer for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Camera position in world units
    pub position: Point3<f32>,
    /// Direction the camera faces; need not be normalized
    pub forward: Vector3<f32>,
}

impl CameraView {
    /// Creates a view from a position and a facing direction.
    pub fn new(position: Point3<f32>, forward: Vector3<f32>) -> Self {
        CameraView { position, forward }
    }

    /// Creates a view from yaw and pitch angles.
    pub fn from_yaw_pitch<Y, P>(position: Point3<f32>, yaw: Y, pitch: P) -> Self
    where
        Y: Into<cgmath::Rad<f32>>,
        P: Into<cgmath::Rad<f32>>,
    {
        camera::Camera::new(position, yaw, pitch).view()
    }

    /// The forward direction projected onto the ground plane and normalized.
    ///
    /// # Returns
    /// The zero vector when the camera looks straight up or down, which disables
    /// rear culling.
    pub fn flattened_forward(&self) -> Vector3<f32> {
        let flat = Vector3::new(self.forward.x, 0.0, self.forward.z);
        if flat.magnitude2() <= f32::EPSILON {
            Vector3::zero()
        } else {
            flat.normalize()
        }
    }

    /// The chunk grid cell the camera is centred on, rounded to the nearest chunk.
    ///
    /// # Returns
    /// `(x, z)` chunk coordinates; may lie outside the world.
    pub fn chunk_center(&self, config: &WorldConfig) -> (i32, i32) {
        let chunk_length = config.chunk_world_length();

        (
            round_to_int(self.position.x / chunk_length),
            round_to_int(self.position.z / chunk_length),
        )
    }
}
