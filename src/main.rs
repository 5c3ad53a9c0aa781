//! Rust3D - projection demo
//!
//! Loads the camera from configuration, spins a unit cube in front of it and
//! logs where its corners land on screen, the way a renderer would per frame.

use rust3d::config::AppConfig;
use rust3d_core::{Camera, Quat, Transform3D, Vec3};

/// Frames to simulate
const FRAMES: u32 = 4;
/// Rotation per frame, radians
const SPIN_PER_FRAME: f32 = std::f32::consts::FRAC_PI_8;

fn cube_corners() -> impl Iterator<Item = Vec3> {
    (0..8).map(|i| {
        Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        )
    })
}

fn main() {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Rust3D");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let camera = Camera::from_settings(
        &config.camera,
        config.screen.width as f32,
        config.screen.height as f32,
    );
    let view_projection = camera.view_projection();

    let mut cube = Transform3D::identity();
    let spin = Quat::from_axis_angle(Vec3::UNIT_Z, SPIN_PER_FRAME);

    for frame in 0..FRAMES {
        let mvp = cube.world_matrix() * view_projection;
        log::info!("Frame {}: cube forward = {:?}", frame, cube.forward());

        for corner in cube_corners() {
            let ndc = corner.transform_with_persp_div(&mvp, 1.0);
            let screen = Vec3::new(
                ndc.x * camera.screen_width * 0.5,
                ndc.y * camera.screen_height * 0.5,
                ndc.z,
            );
            log::debug!("  {:?} -> screen ({:.1}, {:.1}) depth {:.4}",
                corner.to_array(), screen.x, screen.y, screen.z);
        }

        cube.rotate_by(spin);
    }

    let (start, dir) = camera.screen_ray(0.0, 0.0);
    log::info!("Centre pick ray: start {:?}, direction {:?}", start, dir);
}
