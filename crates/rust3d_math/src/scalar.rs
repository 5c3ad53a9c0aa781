//! Scalar helpers shared by the matrix and quaternion constructors

pub use std::f32::consts::PI;

pub const TWO_PI: f32 = PI * 2.0;
pub const PI_OVER_2: f32 = PI / 2.0;

/// Default tolerance for [`near_zero`]
pub const NEAR_ZERO_EPSILON: f32 = 0.001;

/// True if `val` is within `epsilon` of zero (inclusive)
#[inline]
pub fn near_zero(val: f32, epsilon: f32) -> bool {
    val.abs() <= epsilon
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Cotangent. Infinite at multiples of PI.
#[inline]
pub fn cot(angle: f32) -> f32 {
    1.0 / angle.tan()
}
