//! Integration tests for the object -> world -> clip pipeline
//!
//! These tests verify the path a renderer takes each frame:
//! 1. An object's Transform3D produces a world matrix
//! 2. The camera's view-projection takes world space to clip space
//! 3. Concatenated matrices agree with applying each stage separately
//! 4. Picking rays computed from the screen hit the objects that project there

use rust3d_core::{Camera, CameraSettings, Mat4, Projection, Quat, Transform3D, Vec3, Vec4};

const EPSILON: f32 = 0.005;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
    a.as_floats().iter().zip(b.as_floats()).all(|(x, y)| approx_eq(*x, *y))
}

fn camera() -> Camera {
    Camera::new(Vec3::new(-20.0, 0.0, 0.0), Vec3::ZERO, Vec3::UNIT_Z, 1024.0, 768.0)
        .with_projection(Projection::Perspective {
            fov_y: 60.0f32.to_radians(),
            near: 1.0,
            far: 200.0,
        })
}

fn crate_transform() -> Transform3D {
    Transform3D {
        position: Vec3::new(5.0, 2.0, -1.0),
        rotation: Quat::from_axis_angle(Vec3::UNIT_Z, 0.8),
        scale: 1.5,
    }
}

fn unit_cube() -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (i, c) in corners.iter_mut().enumerate() {
        *c = Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        );
    }
    corners
}

// ==================== Matrix Concatenation Tests ====================

#[test]
fn test_mvp_matches_stepwise_projection() {
    let cam = camera();
    let object = crate_transform();
    let mvp = object.world_matrix() * cam.view_projection();

    for local in unit_cube() {
        let combined = local.transform_with_persp_div(&mvp, 1.0);
        let stepwise = cam.project(object.transform_point(local));
        assert!(vec_approx_eq(combined, stepwise),
            "combined {:?} vs stepwise {:?}", combined, stepwise);
    }
}

#[test]
fn test_vec4_clip_coordinates_agree_with_persp_div() {
    let cam = camera();
    let vp = cam.view_projection();
    let world = Vec3::new(3.0, -1.0, 2.0);

    let clip = Vec4::from_vec3(world, 1.0).transform(&vp);
    let ndc = world.transform_with_persp_div(&vp, 1.0);
    assert!(vec_approx_eq(clip.xyz() / clip.w, ndc));
    // Perspective w is the view-space depth: 23 units in front of the eye
    assert!(approx_eq(clip.w, 23.0), "got w = {}", clip.w);
}

#[test]
fn test_world_matrix_inverse_cancels() {
    let object = crate_transform();
    let product = object.world_matrix() * object.inverse_matrix();
    assert!(mat_approx_eq(product, Mat4::IDENTITY));
}

#[test]
fn test_visible_cube_lands_inside_ndc() {
    let cam = camera();
    let object = crate_transform();
    for local in unit_cube() {
        let ndc = cam.project(object.transform_point(local));
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "outside: {:?}", ndc);
        assert!(ndc.z > 0.0 && ndc.z < 1.0, "depth out of range: {:?}", ndc);
    }
}

// ==================== Picking Tests ====================

#[test]
fn test_screen_ray_hits_projected_point() {
    let cam = camera();
    let target = crate_transform().position;
    let screen = cam.project_to_screen(target);

    let (start, dir) = cam.screen_ray(screen.x, screen.y);
    // Closest approach of the ray to the target
    let t = (target - start).dot(dir);
    let closest = start + dir * t;
    assert!(t > 0.0);
    assert!(vec_approx_eq(closest, target), "closest {:?} vs target {:?}", closest, target);
}

#[test]
fn test_screen_ray_starts_on_near_plane() {
    let cam = camera();
    let (start, _) = cam.screen_ray(100.0, -50.0);
    let view_space = start.transform_point(&cam.view());
    assert!(approx_eq(view_space.z, 1.0), "got {:?}", view_space);
}

// ==================== Settings Tests ====================

#[test]
fn test_default_settings_camera_sees_origin() {
    let cam = Camera::from_settings(&CameraSettings::default(), 1280.0, 720.0);
    let ndc = cam.project(Vec3::ZERO);
    assert!(approx_eq(ndc.x, 0.0) && approx_eq(ndc.y, 0.0), "got {:?}", ndc);
}
