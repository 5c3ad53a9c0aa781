//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D places an object in the world. The quaternion path
//! ([`Transform3D::transform_point`]) and the matrix path
//! ([`Transform3D::world_matrix`]) agree; the matrix is what gets uploaded.

use rust3d_math::{Mat4, Quat, Vec3};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as a unit quaternion
    pub rotation: Quat,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Local-to-world matrix: scale, then rotation, then translation
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_uniform_scale(self.scale)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_translation(self.position)
    }

    /// World-to-local matrix
    ///
    /// A zero scale has no inverse; the result is then non-finite.
    pub fn inverse_matrix(&self) -> Mat4 {
        self.world_matrix().inverted()
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (p * self.scale).rotate(self.rotation) + self.position
    }

    /// Transform a direction from local space to world space (no translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        (d * self.scale).rotate(self.rotation)
    }

    /// Local +X in world space
    pub fn forward(&self) -> Vec3 {
        Vec3::UNIT_X.rotate(self.rotation)
    }

    /// Local +Y in world space
    pub fn right(&self) -> Vec3 {
        Vec3::UNIT_Y.rotate(self.rotation)
    }

    /// Compute the inverse transform
    ///
    /// `t.inverse().transform_point(t.transform_point(p)) == p`
    pub fn inverse(&self) -> Self {
        let inv_scale = 1.0 / self.scale;
        let inv_rotation = self.rotation.conjugate();
        let inv_position = (-self.position).rotate(inv_rotation) * inv_scale;

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }

    /// Compose two transforms: `other` is applied first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(other.position),
            rotation: Quat::concatenate(other.rotation, self.rotation),
            scale: self.scale * other.scale,
        }
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Apply an incremental rotation after the current one
    pub fn rotate_by(&mut self, q: Quat) {
        self.rotation = Quat::concatenate(self.rotation, q).normalized();
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn sample() -> Transform3D {
        Transform3D {
            position: Vec3::new(1.0, -2.0, 3.0),
            rotation: Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.2),
            scale: 2.5,
        }
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform3D::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
        assert_eq!(t.world_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_transform_order() {
        // Scale, then rotate, then translate
        let mut t = Transform3D::identity();
        t.scale = 2.0;
        t.rotation = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
        t.position = Vec3::new(10.0, 0.0, 0.0);

        // X * 2 = (2, 0, 0), rotated 90 degrees about Z = (0, 2, 0), + (10, 0, 0)
        let transformed = t.transform_point(Vec3::UNIT_X);
        assert!(vec_approx_eq(transformed, Vec3::new(10.0, 2.0, 0.0)),
            "Expected (10, 2, 0), got {:?}", transformed);
    }

    #[test]
    fn test_world_matrix_matches_quaternion_path() {
        let t = sample();
        let m = t.world_matrix();
        let p = Vec3::new(-3.0, 0.5, 7.0);
        assert!(vec_approx_eq(p.transform_point(&m), t.transform_point(p)));
        assert!(vec_approx_eq(p.transform_direction(&m), t.transform_direction(p)));
    }

    #[test]
    fn test_inverse() {
        let t = sample();
        let p = Vec3::new(1.0, 2.0, 3.0);
        let back = t.inverse().transform_point(t.transform_point(p));
        assert!(vec_approx_eq(p, back), "Expected {:?}, got {:?}", p, back);
    }

    #[test]
    fn test_inverse_matrix() {
        let t = sample();
        let p = Vec3::new(4.0, -1.0, 0.5);
        let world = t.transform_point(p);
        let back = world.transform_point(&t.inverse_matrix());
        assert!(vec_approx_eq(p, back), "Expected {:?}, got {:?}", p, back);
    }

    #[test]
    fn test_transform_direction_ignores_position() {
        let t = Transform3D::from_position(Vec3::new(100.0, 100.0, 100.0));
        assert!(vec_approx_eq(t.transform_direction(Vec3::UNIT_X), Vec3::UNIT_X));
    }

    #[test]
    fn test_compose() {
        let t1 = Transform3D::from_position(Vec3::new(1.0, 0.0, 0.0));
        let t2 = Transform3D::from_position_rotation(
            Vec3::new(0.0, 2.0, 0.0),
            Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2),
        );
        let composed = t1.compose(&t2);

        let p = Vec3::UNIT_X;
        let stepwise = t1.transform_point(t2.transform_point(p));
        assert!(vec_approx_eq(composed.transform_point(p), stepwise));
        // X -> Y (rotate) -> (0, 3, 0) (t2) -> (1, 3, 0) (t1)
        assert!(vec_approx_eq(stepwise, Vec3::new(1.0, 3.0, 0.0)));
    }

    #[test]
    fn test_rotate_by_and_axes() {
        let mut t = Transform3D::identity();
        assert!(vec_approx_eq(t.forward(), Vec3::UNIT_X));
        assert!(vec_approx_eq(t.right(), Vec3::UNIT_Y));

        t.rotate_by(Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2));
        assert!(vec_approx_eq(t.forward(), Vec3::UNIT_Y), "got {:?}", t.forward());
        t.rotate_by(Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2));
        assert!(vec_approx_eq(t.forward(), Vec3::UNIT_Z), "got {:?}", t.forward());
        assert!(approx_eq(t.rotation.length(), 1.0));
    }

    #[test]
    fn test_translate_and_scale() {
        let mut t = Transform3D::default();
        t.translate(Vec3::new(1.0, 1.0, 0.0));
        t.translate(Vec3::new(0.0, 1.0, -1.0));
        t.set_scale(3.0);
        assert_eq!(t.position, Vec3::new(1.0, 2.0, -1.0));
        assert!(vec_approx_eq(t.transform_point(Vec3::ONE), Vec3::new(4.0, 5.0, 2.0)));
    }
}
