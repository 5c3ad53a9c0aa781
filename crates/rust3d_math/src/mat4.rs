//! 4x4 matrix for 3D homogeneous transforms
//!
//! Row-major storage, indexed `m[row][col]`, used with the row-vector
//! convention: `v' = v * M`. Translation lives in the last row, and `a * b`
//! means "apply `a`, then `b`".
//!
//! Two kinds of operations live here:
//! - constructors and `Mul`, which return fresh values;
//! - [`Mat4::invert`] and [`Mat4::transpose`], which overwrite the receiver in
//!   place and need exclusive access (`&mut self`). [`Mat4::inverted`] and
//!   [`Mat4::transposed`] are the by-value wrappers.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{Quat, Vec3};
use crate::scalar::cot;

/// 4x4 matrix, indexed `m[row][col]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Multiplicative identity
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Invert in place using the adjugate (cofactor) method.
    ///
    /// There is no determinant check: a singular matrix divides by zero and
    /// every entry becomes `inf` or `NaN`.
    pub fn invert(&mut self) {
        let m = &self.m;

        // Transposed copy of the matrix, flattened
        let src: [f32; 16] = [
            m[0][0], m[1][0], m[2][0], m[3][0],
            m[0][1], m[1][1], m[2][1], m[3][1],
            m[0][2], m[1][2], m[2][2], m[3][2],
            m[0][3], m[1][3], m[2][3], m[3][3],
        ];
        let mut dst = [0.0f32; 16];

        // Pairs for the first 8 cofactors
        let mut tmp: [f32; 12] = [
            src[10] * src[15],
            src[11] * src[14],
            src[9] * src[15],
            src[11] * src[13],
            src[9] * src[14],
            src[10] * src[13],
            src[8] * src[15],
            src[11] * src[12],
            src[8] * src[14],
            src[10] * src[12],
            src[8] * src[13],
            src[9] * src[12],
        ];

        dst[0] = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7];
        dst[0] -= tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7];
        dst[1] = tmp[1] * src[4] + tmp[6] * src[6] + tmp[9] * src[7];
        dst[1] -= tmp[0] * src[4] + tmp[7] * src[6] + tmp[8] * src[7];
        dst[2] = tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7];
        dst[2] -= tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7];
        dst[3] = tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6];
        dst[3] -= tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6];
        dst[4] = tmp[1] * src[1] + tmp[2] * src[2] + tmp[5] * src[3];
        dst[4] -= tmp[0] * src[1] + tmp[3] * src[2] + tmp[4] * src[3];
        dst[5] = tmp[0] * src[0] + tmp[7] * src[2] + tmp[8] * src[3];
        dst[5] -= tmp[1] * src[0] + tmp[6] * src[2] + tmp[9] * src[3];
        dst[6] = tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3];
        dst[6] -= tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3];
        dst[7] = tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2];
        dst[7] -= tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2];

        // Pairs for the second 8 cofactors
        tmp = [
            src[2] * src[7],
            src[3] * src[6],
            src[1] * src[7],
            src[3] * src[5],
            src[1] * src[6],
            src[2] * src[5],
            src[0] * src[7],
            src[3] * src[4],
            src[0] * src[6],
            src[2] * src[4],
            src[0] * src[5],
            src[1] * src[4],
        ];

        dst[8] = tmp[0] * src[13] + tmp[3] * src[14] + tmp[4] * src[15];
        dst[8] -= tmp[1] * src[13] + tmp[2] * src[14] + tmp[5] * src[15];
        dst[9] = tmp[1] * src[12] + tmp[6] * src[14] + tmp[9] * src[15];
        dst[9] -= tmp[0] * src[12] + tmp[7] * src[14] + tmp[8] * src[15];
        dst[10] = tmp[2] * src[12] + tmp[7] * src[13] + tmp[10] * src[15];
        dst[10] -= tmp[3] * src[12] + tmp[6] * src[13] + tmp[11] * src[15];
        dst[11] = tmp[5] * src[12] + tmp[8] * src[13] + tmp[11] * src[14];
        dst[11] -= tmp[4] * src[12] + tmp[9] * src[13] + tmp[10] * src[14];
        dst[12] = tmp[2] * src[10] + tmp[5] * src[11] + tmp[1] * src[9];
        dst[12] -= tmp[4] * src[11] + tmp[0] * src[9] + tmp[3] * src[10];
        dst[13] = tmp[8] * src[11] + tmp[0] * src[8] + tmp[7] * src[10];
        dst[13] -= tmp[6] * src[10] + tmp[9] * src[11] + tmp[1] * src[8];
        dst[14] = tmp[6] * src[9] + tmp[11] * src[11] + tmp[3] * src[8];
        dst[14] -= tmp[10] * src[11] + tmp[2] * src[8] + tmp[7] * src[9];
        dst[15] = tmp[10] * src[10] + tmp[4] * src[8] + tmp[9] * src[9];
        dst[15] -= tmp[8] * src[9] + tmp[11] * src[10] + tmp[5] * src[8];

        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];
        let inv_det = 1.0 / det;
        for d in dst.iter_mut() {
            *d *= inv_det;
        }

        self.m = bytemuck::cast(dst);
    }

    /// Inverse by value. See [`Mat4::invert`].
    #[inline]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// Transpose in place
    pub fn transpose(&mut self) {
        let temp = *self;
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    self.m[i][j] = temp.m[j][i];
                }
            }
        }
    }

    /// Transpose by value
    #[inline]
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Pure rotation matrix from a unit quaternion.
    ///
    /// A non-unit `q` produces scale and shear alongside the rotation.
    pub fn from_quat(q: Quat) -> Self {
        Self::from_rows([
            [
                1.0 - 2.0 * q.y * q.y - 2.0 * q.z * q.z,
                2.0 * q.x * q.y + 2.0 * q.w * q.z,
                2.0 * q.x * q.z - 2.0 * q.w * q.y,
                0.0,
            ],
            [
                2.0 * q.x * q.y - 2.0 * q.w * q.z,
                1.0 - 2.0 * q.x * q.x - 2.0 * q.z * q.z,
                2.0 * q.y * q.z + 2.0 * q.w * q.x,
                0.0,
            ],
            [
                2.0 * q.x * q.z + 2.0 * q.w * q.y,
                2.0 * q.y * q.z - 2.0 * q.w * q.x,
                1.0 - 2.0 * q.x * q.x - 2.0 * q.y * q.y,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_rows([
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_uniform_scale(scale: f32) -> Self {
        Self::from_scale(Vec3::new(scale, scale, scale))
    }

    /// Rotation about the x axis by `theta` radians
    pub fn from_rotation_x(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the y axis by `theta` radians
    pub fn from_rotation_y(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the z axis by `theta` radians
    pub fn from_rotation_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// View matrix looking from `eye` towards `target`.
    ///
    /// The view space is left-handed: +z points at the target.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z_axis = (target - eye).normalized();
        let x_axis = up.cross(z_axis).normalized();
        let y_axis = z_axis.cross(x_axis).normalized();

        Self::from_rows([
            [x_axis.x, y_axis.x, z_axis.x, 0.0],
            [x_axis.y, y_axis.y, z_axis.y, 0.0],
            [x_axis.z, y_axis.z, z_axis.z, 0.0],
            [-x_axis.dot(eye), -y_axis.dot(eye), -z_axis.dot(eye), 1.0],
        ])
    }

    /// Orthographic projection with depth mapped to [0, 1]
    pub fn ortho(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far - near), 0.0],
            [0.0, 0.0, near / (near - far), 1.0],
        ])
    }

    /// Perspective projection with vertical field of view `fov_y` (radians),
    /// depth mapped to [0, 1]
    pub fn perspective_fov(fov_y: f32, width: f32, height: f32, near: f32, far: f32) -> Self {
        let y_scale = cot(fov_y / 2.0);
        let x_scale = y_scale * height / width;

        Self::from_rows([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, far / (far - near), 1.0],
            [0.0, 0.0, -near * far / (far - near), 0.0],
        ])
    }

    /// Screen-space view-projection for 2D drawing: pixels centred on the
    /// screen map to [-1, 1]
    pub fn simple_view_proj(width: f32, height: f32) -> Self {
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ])
    }

    /// Translation component (last row)
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Normalized first row
    #[inline]
    pub fn x_axis(&self) -> Vec3 {
        Vec3::new(self.m[0][0], self.m[0][1], self.m[0][2]).normalized()
    }

    /// Normalized second row
    #[inline]
    pub fn y_axis(&self) -> Vec3 {
        Vec3::new(self.m[1][0], self.m[1][1], self.m[1][2]).normalized()
    }

    /// Normalized third row
    #[inline]
    pub fn z_axis(&self) -> Vec3 {
        Vec3::new(self.m[2][0], self.m[2][1], self.m[2][2]).normalized()
    }

    /// Per-axis scale, assuming no shear
    pub fn scale(&self) -> Vec3 {
        Vec3::new(
            Vec3::new(self.m[0][0], self.m[0][1], self.m[0][2]).length(),
            Vec3::new(self.m[1][0], self.m[1][1], self.m[1][2]).length(),
            Vec3::new(self.m[2][0], self.m[2][1], self.m[2][2]).length(),
        )
    }

    /// Flat row-major view, e.g. for uniform buffer uploads
    #[inline]
    pub fn as_floats(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.m)
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = [f32; 4];
    #[inline]
    fn index(&self, row: usize) -> &[f32; 4] {
        &self.m[row]
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.m[row]
    }
}

/// `a * b` applies `a` first, then `b`, to a row vector
impl std::ops::Mul for Mat4 {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        Self::from_rows(result)
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
