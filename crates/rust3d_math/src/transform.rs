//! Applying matrices and quaternions to vectors
//!
//! All matrix transforms use the row-vector convention
//! `result[j] = Σ_i input[i] * m[i][j]`, treating the input as a homogeneous
//! coordinate. For `Vec2`/`Vec3` the caller supplies the extra component `w`:
//! `1` for points (translation applies), `0` for directions (translation is
//! skipped). These are pure: inputs are untouched and a new vector returned.

use crate::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

impl Vec2 {
    /// `(self, w) * m`, dropping the resulting w
    #[inline]
    pub fn transform(self, m: &Mat3, w: f32) -> Vec2 {
        Vec2::new(
            self.x * m[0][0] + self.y * m[1][0] + w * m[2][0],
            self.x * m[0][1] + self.y * m[1][1] + w * m[2][1],
        )
    }

    #[inline]
    pub fn transform_point(self, m: &Mat3) -> Vec2 {
        self.transform(m, 1.0)
    }

    #[inline]
    pub fn transform_direction(self, m: &Mat3) -> Vec2 {
        self.transform(m, 0.0)
    }
}

impl Vec3 {
    /// `(self, w) * m`, dropping the resulting w
    #[inline]
    pub fn transform(self, m: &Mat4, w: f32) -> Vec3 {
        Vec3::new(
            self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0] + w * m[3][0],
            self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1] + w * m[3][1],
            self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2] + w * m[3][2],
        )
    }

    #[inline]
    pub fn transform_point(self, m: &Mat4) -> Vec3 {
        self.transform(m, 1.0)
    }

    #[inline]
    pub fn transform_direction(self, m: &Mat4) -> Vec3 {
        self.transform(m, 0.0)
    }

    /// `(self, w) * m`, then divide x/y/z by the resulting w.
    ///
    /// Used to project through a perspective matrix into normalized device
    /// coordinates. A resulting w of zero gives infinite or NaN components.
    #[inline]
    pub fn transform_with_persp_div(self, m: &Mat4, w: f32) -> Vec3 {
        let v = self.transform(m, w);
        let transformed_w =
            self.x * m[0][3] + self.y * m[1][3] + self.z * m[2][3] + w * m[3][3];
        v * (1.0 / transformed_w)
    }

    /// Rotate by a unit quaternion:
    /// `v + 2 * cross(q.xyz, cross(q.xyz, v) + q.w * v)`.
    ///
    /// Equivalent to `q * v * q⁻¹`. `q` is not normalized here; a non-unit
    /// quaternion scales and skews the result.
    #[inline]
    pub fn rotate(self, q: Quat) -> Vec3 {
        let qv = q.xyz();
        self + 2.0 * qv.cross(qv.cross(self) + q.w * self)
    }
}

impl Vec4 {
    /// Full homogeneous `self * m`, using this vector's own w
    #[inline]
    pub fn transform(self, m: &Mat4) -> Vec4 {
        Vec4::new(
            self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0] + self.w * m[3][0],
            self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1] + self.w * m[3][1],
            self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2] + self.w * m[3][2],
            self.x * m[0][3] + self.y * m[1][3] + self.z * m[2][3] + self.w * m[3][3],
        )
    }
}
