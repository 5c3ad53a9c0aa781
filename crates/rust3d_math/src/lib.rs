//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix and quaternion types for the Rust3D
//! engine, plus the transform algebra between them.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - float vectors
//! - [`Mat3`], [`Mat4`] - row-major matrices (row-vector convention, `v * M`)
//! - [`Quat`] - rotation quaternion
//!
//! ## Conventions
//!
//! Every type is a `Copy` value. Operations that return a value never touch
//! their inputs; [`Mat4::invert`] and [`Mat4::transpose`] rewrite the receiver
//! in place. Nothing validates its input: degenerate cases (singular
//! inversion, a zero perspective w, normalizing a zero vector) produce `inf`
//! or `NaN` following IEEE-754.

mod vec2;
mod vec3;
mod vec4;
mod quat;
pub mod mat3;
pub mod mat4;
pub mod scalar;
pub mod transform;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use quat::Quat;
pub use mat3::Mat3;
pub use mat4::Mat4;
