use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::camera::frustum::{camera_space_frustum, FrustumCorners};
use crate::options::CameraOptions;

/// Scales and flips the local +Z forward axis into the -Z view convention.
const VIEW_FLIP: Vec3 = Vec3::new(1.0, 1.0, -1.0);

/// Local placement of a camera in the scene graph.
///
/// Local axes: +X right, +Y up, +Z forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world space.
    pub translation: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Per-axis scale applied before rotation.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity placement at the origin.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Build a transform from a position and yaw/pitch in degrees.
    #[must_use]
    pub fn from_position_euler(
        translation: Vec3,
        yaw_degrees: f32,
        pitch_degrees: f32,
    ) -> Self {
        Self {
            translation,
            rotation: Quat::from_euler(
                EulerRot::YXZ,
                yaw_degrees.to_radians(),
                pitch_degrees.to_radians(),
                0.0,
            ),
            scale: Vec3::ONE,
        }
    }

    /// Local-to-world matrix (`T * R * S`).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }

    /// Unit forward direction (+Z rotated into world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Unit right direction (+X rotated into world space).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Unit up direction (+Y rotated into world space).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Perspective camera defined by a transform and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Placement in the scene.
    pub transform: Transform,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }
}

impl Camera {
    /// Camera at the origin using the configured field of view.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            fovy: options.fovy,
            aspect,
            transform: Transform::IDENTITY,
        }
    }

    /// Camera-to-world matrix, including any scale on the transform.
    #[must_use]
    pub fn local_to_world(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// World-to-camera (view) matrix.
    ///
    /// Ignores scale and looks down -Z, so it is generally *not* the inverse
    /// of [`Camera::local_to_world`].
    #[must_use]
    pub fn world_to_camera(&self) -> Mat4 {
        let rigid = Mat4::from_rotation_translation(
            self.transform.rotation,
            self.transform.translation,
        );
        Mat4::from_scale(VIEW_FLIP) * rigid.inverse()
    }

    /// Camera-space to world matrix, the inverse of the view matrix.
    ///
    /// Use this (not [`Camera::local_to_world`]) to take rays built from
    /// [`Camera::frustum_matrix`] back into world space.
    #[must_use]
    pub fn camera_to_world(&self) -> Mat4 {
        self.world_to_camera().inverse()
    }

    /// Update the aspect ratio from a viewport size in pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Camera-space frustum corner matrix for the current state.
    #[must_use]
    pub fn frustum_matrix(&self) -> Mat4 {
        camera_space_frustum(
            self.fovy,
            self.aspect,
            self.local_to_world(),
            self.world_to_camera(),
        )
    }

    /// Camera-space frustum corners for the current state.
    #[must_use]
    pub fn frustum_corners(&self) -> FrustumCorners {
        FrustumCorners::from_rows(&self.frustum_matrix())
    }
}
