//! Core types for the Rust3D engine
//!
//! These sit between game state and the math crate:
//!
//! - [`Transform3D`] - Position, rotation, and scale of an object
//! - [`Camera`] - View/projection matrices and screen <-> world mapping
//! - [`CameraSettings`] - Serializable camera description used by config files

mod transform;
mod camera;

pub use transform::Transform3D;
pub use camera::{Camera, CameraSettings, Projection, ProjectionKind};

// Re-export commonly used types from rust3d_math for convenience
pub use rust3d_math::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
