//! Camera: view and projection matrices, plus the screen <-> world mapping
//!
//! Screen coordinates are in pixels with the origin at the centre of the
//! screen, +y up. Normalized device coordinates (NDC) have x and y in
//! [-1, 1] and depth in [0, 1].

use rust3d_math::{Mat4, Vec3};
use serde::{Serialize, Deserialize};

/// Which projection a camera uses
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Vertical field of view in radians
    Perspective { fov_y: f32, near: f32, far: f32 },
    /// One world unit per pixel
    Orthographic { near: f32, far: f32 },
}

/// Projection kind as written in config files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

/// Plain camera settings, loaded from configuration
///
/// Missing fields fall back to [`CameraSettings::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Eye position [x, y, z]
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Up direction
    pub up: [f32; 3],
    pub projection: ProjectionKind,
    /// Vertical field of view in degrees (perspective only)
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [-10.0, 0.0, 2.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            projection: ProjectionKind::Perspective,
            fov: 70.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// A camera looking from `eye` at `target`
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Camera {
    /// Create a perspective camera
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, screen_width: f32, screen_height: f32) -> Self {
        Self {
            eye,
            target,
            up,
            projection: Projection::Perspective {
                fov_y: 70.0f32.to_radians(),
                near: 0.1,
                far: 1000.0,
            },
            screen_width,
            screen_height,
        }
    }

    /// Build a camera from config settings and a screen size
    pub fn from_settings(settings: &CameraSettings, screen_width: f32, screen_height: f32) -> Self {
        let projection = match settings.projection {
            ProjectionKind::Perspective => Projection::Perspective {
                fov_y: settings.fov.to_radians(),
                near: settings.near,
                far: settings.far,
            },
            ProjectionKind::Orthographic => Projection::Orthographic {
                near: settings.near,
                far: settings.far,
            },
        };
        log::debug!(
            "Camera at {:?} looking at {:?}, {:?} on {}x{}",
            settings.position, settings.target, projection, screen_width, screen_height
        );

        Self {
            eye: settings.position.into(),
            target: settings.target.into(),
            up: settings.up.into(),
            projection,
            screen_width,
            screen_height,
        }
    }

    /// Use a different projection
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// World-to-view matrix
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// View-to-clip matrix
    pub fn projection(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y, near, far } => {
                Mat4::perspective_fov(fov_y, self.screen_width, self.screen_height, near, far)
            }
            Projection::Orthographic { near, far } => {
                Mat4::ortho(self.screen_width, self.screen_height, near, far)
            }
        }
    }

    /// View, then projection
    pub fn view_projection(&self) -> Mat4 {
        self.view() * self.projection()
    }

    /// World point to NDC.
    ///
    /// Points on the eye plane have a clip w of zero and come back non-finite.
    pub fn project(&self, world: Vec3) -> Vec3 {
        world.transform_with_persp_div(&self.view_projection(), 1.0)
    }

    /// World point to screen pixels (centre origin), keeping NDC depth in z
    pub fn project_to_screen(&self, world: Vec3) -> Vec3 {
        let ndc = self.project(world);
        Vec3::new(
            ndc.x * self.screen_width * 0.5,
            ndc.y * self.screen_height * 0.5,
            ndc.z,
        )
    }

    /// Screen point (pixels, centre origin, z = NDC depth in [0, 1]) to world
    pub fn unproject(&self, screen: Vec3) -> Vec3 {
        let device = Vec3::new(
            screen.x / (self.screen_width * 0.5),
            screen.y / (self.screen_height * 0.5),
            screen.z,
        );
        let mut unprojection = self.view_projection();
        unprojection.invert();
        device.transform_with_persp_div(&unprojection, 1.0)
    }

    /// Picking ray through a screen pixel: (start on the near plane, unit direction)
    pub fn screen_ray(&self, screen_x: f32, screen_y: f32) -> (Vec3, Vec3) {
        let start = self.unproject(Vec3::new(screen_x, screen_y, 0.0));
        let end = self.unproject(Vec3::new(screen_x, screen_y, 0.9));
        (start, (end - start).normalized())
    }
}
