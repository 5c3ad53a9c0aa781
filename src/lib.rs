//! Rust3D - 3D math and camera demo
//!
//! Library half of the root package, shared by the `rust3d` binary and the
//! integration tests.

pub mod config;
