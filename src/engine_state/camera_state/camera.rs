//! # Camera Implementation
//!
//! A yaw/pitch camera that produces the [`CameraView`] the visibility scheduler
//! reads each tick.
//!
//! Yaw is measured from the positive X axis towards positive Z; pitch from the
//! horizon towards positive Y.

use cgmath::*;
use std::f32::consts::FRAC_PI_2;

use super::CameraView;

/// Safe limit for pitch to prevent gimbal lock
const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// Represents a first-person camera in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis) in radians
    pub yaw: Rad<f32>,
    /// Vertical rotation (around X axis) in radians, kept short of straight up or down
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Arguments
    /// * `position` - Initial position of the camera in world space
    /// * `yaw` - Initial yaw; `0` faces positive X
    /// * `pitch` - Initial pitch; clamped just short of ±90°
    ///
    /// # Example
    /// ```rust
    /// use cgmath::{Deg, Point3};
    /// use voxel_world::engine_state::camera_state::camera::Camera;
    ///
    /// let camera = Camera::new(Point3::new(0.0, 10.0, 0.0), Deg(90.0), Deg(-30.0));
    /// assert!(camera.forward().z > 0.0);
    /// ```
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        let mut camera = Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: Rad(0.0),
        };
        camera.set_pitch(pitch);

        camera
    }

    /// Sets the pitch, clamped to avoid looking straight up or down.
    pub fn set_pitch<P: Into<Rad<f32>>>(&mut self, pitch: P) {
        self.pitch = Rad(pitch.into().0.clamp(-SAFE_FRAC_PI_2, SAFE_FRAC_PI_2));
    }

    /// Turns the camera to face `target`.
    pub fn look_at(&mut self, target: Point3<f32>) {
        let to_target = target - self.position;
        let horizontal = (to_target.x * to_target.x + to_target.z * to_target.z).sqrt();

        self.yaw = Rad(to_target.z.atan2(to_target.x));
        self.set_pitch(Rad(to_target.y.atan2(horizontal)));
    }

    /// Gets the camera's normalized forward direction vector.
    pub fn forward(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();

        Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
    }

    /// Snapshot of position and facing for the scheduler.
    pub fn view(&self) -> CameraView {
        CameraView::new(self.position, self.forward())
    }
}
