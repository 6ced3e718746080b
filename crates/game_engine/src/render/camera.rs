//! 2D orthographic camera

use crate::foundation::math::{Mat4, Vec3};
use nalgebra::Vector3;

/// Orthographic camera with a position and a rotation about Z
///
/// The cached projection-view matrix is recomputed whenever the position,
/// rotation or projection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    projection: Mat4,
    view: Mat4,
    projection_view: Mat4,
    position: Vec3,
    rotation: f32,
}

impl OrthographicCamera {
    /// Camera looking at the given world-space rectangle, depth range [-1, 1]
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let projection = Mat4::new_orthographic(left, right, bottom, top, -1.0, 1.0);
        Self {
            projection,
            view: Mat4::identity(),
            projection_view: projection,
            position: Vec3::zeros(),
            rotation: 0.0,
        }
    }

    /// Replace the visible rectangle
    pub fn set_projection(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.projection = Mat4::new_orthographic(left, right, bottom, top, -1.0, 1.0);
        self.projection_view = self.projection * self.view;
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recalculate_view();
    }

    /// Rotation about Z in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotate the camera about Z (degrees)
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
        self.recalculate_view();
    }

    /// Projection matrix
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// View matrix (inverse of the camera transform)
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Projection * view
    pub fn projection_view(&self) -> &Mat4 {
        &self.projection_view
    }

    fn recalculate_view(&mut self) {
        let transform = Mat4::new_translation(&self.position)
            * Mat4::from_axis_angle(&Vector3::z_axis(), self.rotation.to_radians());
        // A rigid transform is always invertible
        self.view = transform.try_inverse().unwrap_or_else(Mat4::identity);
        self.projection_view = self.projection * self.view;
    }
}
