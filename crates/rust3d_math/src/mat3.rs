//! 3x3 matrix for 2D homogeneous transforms
//!
//! Row-major, row-vector convention: a point `(x, y, 1)` is multiplied on the
//! left, so translation lives in the last row.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// 3x3 matrix, indexed `m[row][col]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// Multiplicative identity
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn from_scale(x: f32, y: f32) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0],
            [0.0, y, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn from_uniform_scale(scale: f32) -> Self {
        Self::from_scale(scale, scale)
    }

    /// Rotation about the z axis by `theta` radians
    pub fn from_rotation(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([
            [c, s, 0.0],
            [-s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn from_translation(t: Vec2) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [t.x, t.y, 1.0],
        ])
    }

    /// Flat row-major view, e.g. for uniform buffer uploads
    #[inline]
    pub fn as_floats(&self) -> &[f32; 9] {
        bytemuck::cast_ref(&self.m)
    }
}

impl std::ops::Index<usize> for Mat3 {
    type Output = [f32; 3];
    #[inline]
    fn index(&self, row: usize) -> &[f32; 3] {
        &self.m[row]
    }
}

impl std::ops::IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [f32; 3] {
        &mut self.m[row]
    }
}

/// `a * b` applies `a` first, then `b`, to a row vector
impl std::ops::Mul for Mat3 {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = [[0.0f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        Self::from_rows(result)
    }
}

impl std::ops::MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
