//! Math utilities and types
//!
//! Thin aliases over `nalgebra` used by the camera and the renderer.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Build a translation-then-uniform-scale model matrix
pub fn translate_scale(position: Vec3, scale: f32) -> Mat4 {
    Mat4::new_translation(&position) * Mat4::new_scaling(scale)
}

/// Column-major float array as expected by OpenGL uniform uploads
pub fn mat4_to_cols(matrix: &Mat4) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(matrix.as_slice());
    out
}

/// Column-major float array for a 3x3 matrix
pub fn mat3_to_cols(matrix: &Mat3) -> [f32; 9] {
    let mut out = [0.0; 9];
    out.copy_from_slice(matrix.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_scale_places_origin_at_position() {
        let m = translate_scale(Vec3::new(1.0, 2.0, 0.0), 0.1);
        let p = m.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 1.1, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_to_cols_is_column_major() {
        let m = Mat4::new_translation(&Vec3::new(3.0, 4.0, 5.0));
        let cols = mat4_to_cols(&m);
        // Translation lives in the last column
        assert_relative_eq!(cols[12], 3.0);
        assert_relative_eq!(cols[13], 4.0);
        assert_relative_eq!(cols[14], 5.0);
        assert_relative_eq!(cols[15], 1.0);
    }
}
