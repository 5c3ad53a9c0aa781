//! Quaternion for representing 3D rotations
//!
//! Stored as a vector part `(x, y, z)` and a scalar part `w`. Rotation
//! routines assume unit length; nothing here normalizes implicitly except
//! [`Quat::lerp`] and [`Quat::slerp`].

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// Rotation quaternion
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Raw component constructor; does not build an axis/angle rotation
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`, which must be unit length
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin_h, cos_h) = (angle * 0.5).sin_cos();
        Self {
            x: axis.x * sin_h,
            y: axis.y * sin_h,
            z: axis.z * sin_h,
            w: cos_h,
        }
    }

    /// Vector part
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Conjugate; the inverse rotation for unit quaternions
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Component-wise interpolation, renormalized
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        (a * (1.0 - t) + b * t).normalized()
    }

    /// Spherical interpolation along the shortest arc
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let raw_cos = a.dot(b);
        let cos_omega = raw_cos.abs();

        let (scale0, mut scale1) = if cos_omega < 0.9999 {
            let omega = cos_omega.acos();
            let inv_sin = 1.0 / omega.sin();
            (((1.0 - t) * omega).sin() * inv_sin, (t * omega).sin() * inv_sin)
        } else {
            // Nearly parallel: sin(omega) is too small to divide by
            (1.0 - t, t)
        };

        if raw_cos < 0.0 {
            scale1 = -scale1;
        }

        (a * scale0 + b * scale1).normalized()
    }

    /// Rotation by `q` followed by rotation by `p`
    pub fn concatenate(q: Self, p: Self) -> Self {
        let qv = q.xyz();
        let pv = p.xyz();
        let v = p.w * qv + q.w * pv + pv.cross(qv);
        Self::new(v.x, v.y, v.z, p.w * q.w - pv.dot(qv))
    }
}

impl std::ops::Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl std::ops::Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    /// Equal as rotations (q and -q rotate identically)
    fn quat_same_rotation(a: Quat, b: Quat) -> bool {
        approx_eq(a.dot(b).abs(), 1.0)
    }

    #[test]
    fn test_identity_is_default() {
        assert_eq!(Quat::default(), Quat::IDENTITY);
        assert_eq!(Quat::IDENTITY.length(), 1.0);
    }

    #[test]
    fn test_from_axis_angle_is_unit() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalized();
        let q = Quat::from_axis_angle(axis, 2.1);
        assert!(approx_eq(q.length(), 1.0));
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::UNIT_Y, 1.1);
        let v = Vec3::new(3.0, -1.0, 2.0);
        let back = v.rotate(q).rotate(q.conjugate());
        assert!(vec_approx_eq(back, v), "got {:?}", back);
    }

    #[test]
    fn test_concatenate_applies_first_argument_first() {
        let q = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
        let p = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
        let v = Vec3::UNIT_X;

        let stepwise = v.rotate(q).rotate(p);
        let combined = v.rotate(Quat::concatenate(q, p));
        assert!(vec_approx_eq(stepwise, combined), "{:?} vs {:?}", stepwise, combined);
        // X -> Y about Z, then Y -> Z about X
        assert!(vec_approx_eq(combined, Vec3::UNIT_Z), "got {:?}", combined);
    }

    #[test]
    fn test_concatenate_same_axis_adds_angles() {
        let a = Quat::from_axis_angle(Vec3::UNIT_Y, 0.4);
        let b = Quat::from_axis_angle(Vec3::UNIT_Y, 0.7);
        let c = Quat::concatenate(a, b);
        assert!(quat_same_rotation(c, Quat::from_axis_angle(Vec3::UNIT_Y, 1.1)));
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quat::from_axis_angle(Vec3::UNIT_Z, 0.2);
        let b = Quat::from_axis_angle(Vec3::UNIT_Z, 1.8);
        assert!(quat_same_rotation(Quat::slerp(a, b, 0.0), a));
        assert!(quat_same_rotation(Quat::slerp(a, b, 1.0), b));
    }

    #[test]
    fn test_slerp_halfway() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::UNIT_X, PI / 2.0);
        let mid = Quat::slerp(a, b, 0.5);
        assert!(quat_same_rotation(mid, Quat::from_axis_angle(Vec3::UNIT_X, PI / 4.0)));
        assert!(approx_eq(mid.length(), 1.0));
    }

    #[test]
    fn test_slerp_takes_shortest_arc() {
        let a = Quat::from_axis_angle(Vec3::UNIT_Y, 0.3);
        let b = Quat::from_axis_angle(Vec3::UNIT_Y, 0.9);
        let neg_b = b * -1.0;
        let mid = Quat::slerp(a, neg_b, 0.5);
        assert!(quat_same_rotation(mid, Quat::from_axis_angle(Vec3::UNIT_Y, 0.6)));
    }

    #[test]
    fn test_slerp_nearly_parallel() {
        let a = Quat::from_axis_angle(Vec3::UNIT_Z, 0.5);
        let b = Quat::from_axis_angle(Vec3::UNIT_Z, 0.5001);
        let mid = Quat::slerp(a, b, 0.5);
        assert!(mid.x.is_finite() && mid.w.is_finite());
        assert!(quat_same_rotation(mid, a));
    }

    #[test]
    fn test_lerp_is_normalized() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::UNIT_X, 1.0);
        assert!(approx_eq(Quat::lerp(a, b, 0.3).length(), 1.0));
    }
}
