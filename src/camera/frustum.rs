//! Camera-space view-frustum corners for full-screen ray reconstruction.
//!
//! The corner matrix packs one frustum corner per row (top-left, top-right,
//! bottom-right, bottom-left) at unit depth along the camera's forward axis.
//! A full-screen pass interpolates those rows across the screen to recover a
//! per-pixel view ray.

use glam::{Mat4, Vec3};

/// A frustum corner, numbered by its row in the corner matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Row 0.
    TopLeft = 0,
    /// Row 1.
    TopRight = 1,
    /// Row 2.
    BottomRight = 2,
    /// Row 3.
    BottomLeft = 3,
}

impl Corner {
    /// All corners in row order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Row index of this corner in the corner matrix.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self as usize
    }
}

/// The four corner directions of a view frustum at unit forward distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    /// Forward - right + up.
    pub top_left: Vec3,
    /// Forward + right + up.
    pub top_right: Vec3,
    /// Forward + right - up.
    pub bottom_right: Vec3,
    /// Forward - right - up.
    pub bottom_left: Vec3,
}

impl FrustumCorners {
    /// Corners in the camera's local frame (+Z forward, +X right, +Y up).
    #[must_use]
    pub fn local(fovy_degrees: f32, aspect: f32) -> Self {
        let half_fov_scale = (fovy_degrees * 0.5).to_radians().tan();
        let up = Vec3::Y * half_fov_scale;
        let right = Vec3::X * (half_fov_scale * aspect);
        let forward = Vec3::Z;

        Self {
            top_left: forward - right + up,
            top_right: forward + right + up,
            bottom_right: forward + right - up,
            bottom_left: forward - right - up,
        }
    }

    /// Apply `matrix` to every corner as a point (translation included).
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            top_left: matrix.project_point3(self.top_left),
            top_right: matrix.project_point3(self.top_right),
            bottom_right: matrix.project_point3(self.bottom_right),
            bottom_left: matrix.project_point3(self.bottom_left),
        }
    }

    /// Direction of a single corner.
    #[must_use]
    pub const fn corner(&self, corner: Corner) -> Vec3 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Pack the corners as matrix rows with a zero W component.
    #[must_use]
    pub fn to_rows(&self) -> Mat4 {
        // glam is column-major: build columns from the rows, then transpose.
        Mat4::from_cols(
            self.top_left.extend(0.0),
            self.top_right.extend(0.0),
            self.bottom_right.extend(0.0),
            self.bottom_left.extend(0.0),
        )
        .transpose()
    }

    /// Recover corners from the rows of a corner matrix.
    #[must_use]
    pub fn from_rows(matrix: &Mat4) -> Self {
        let row = |corner: Corner| matrix.row(corner.row()).truncate();
        Self {
            top_left: row(Corner::TopLeft),
            top_right: row(Corner::TopRight),
            bottom_right: row(Corner::BottomRight),
            bottom_left: row(Corner::BottomLeft),
        }
    }

    /// Row-major array form, one corner per inner array, for uniform upload.
    #[must_use]
    pub fn to_rows_array_2d(&self) -> [[f32; 4]; 4] {
        Corner::ALL.map(|c| self.corner(c).extend(0.0).to_array())
    }
}

/// Compute the camera-space frustum corner matrix.
///
/// Corners are built in the camera's local frame, taken to world space by
/// `camera_to_world` and brought back by `world_to_camera`. The two matrices
/// need not be inverses; the result matches whatever the pipeline projects.
/// Row `i` of the result is [`Corner`] `i`. Degenerate input (zero aspect,
/// `fovy >= 180`) yields non-finite components instead of an error.
#[must_use]
pub fn camera_space_frustum(
    fovy_degrees: f32,
    aspect: f32,
    camera_to_world: Mat4,
    world_to_camera: Mat4,
) -> Mat4 {
    let corners = FrustumCorners::local(fovy_degrees, aspect)
        .transformed(&camera_to_world)
        .transformed(&world_to_camera);
    log::trace!("camera-space frustum: {corners:?}");
    corners.to_rows()
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec4};

    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    fn identity_frustum(fovy: f32, aspect: f32) -> FrustumCorners {
        FrustumCorners::from_rows(&camera_space_frustum(
            fovy,
            aspect,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
        ))
    }

    #[test]
    fn right_angle_fov_unit_aspect() {
        let c = identity_frustum(90.0, 1.0);
        assert!(approx(c.top_left, Vec3::new(-1.0, 1.0, 1.0)));
        assert!(approx(c.top_right, Vec3::new(1.0, 1.0, 1.0)));
        assert!(approx(c.bottom_right, Vec3::new(1.0, -1.0, 1.0)));
        assert!(approx(c.bottom_left, Vec3::new(-1.0, -1.0, 1.0)));
    }

    #[test]
    fn rows_hold_corners_with_zero_w() {
        let m = camera_space_frustum(90.0, 1.0, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(m.row(0).round(), Vec4::new(-1.0, 1.0, 1.0, 0.0));
        assert_eq!(m.row(2).w, 0.0);
        assert_eq!(m.row(3).truncate().round(), Vec3::new(-1.0, -1.0, 1.0));
    }

    #[test]
    fn corners_are_symmetric_about_forward() {
        for fovy in [10.0_f32, 45.0, 60.0, 120.0, 170.0] {
            let c = identity_frustum(fovy, 1.0);
            assert!((c.top_left.x + c.top_right.x).abs() < EPS);
            assert!((c.bottom_left.x + c.bottom_right.x).abs() < EPS);
            assert!((c.top_left.y + c.bottom_left.y).abs() < EPS);
            assert!((c.top_right.y + c.bottom_right.y).abs() < EPS);
            for corner in Corner::ALL {
                assert!((c.corner(corner).z - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn rotation_round_trip_matches_identity() {
        let rotation = Quat::from_euler(glam::EulerRot::YXZ, 0.7, -0.3, 0.2);
        let to_world = Mat4::from_quat(rotation);
        let rotated = FrustumCorners::from_rows(&camera_space_frustum(
            72.0,
            1.5,
            to_world,
            to_world.inverse(),
        ));
        let reference = identity_frustum(72.0, 1.5);
        for corner in Corner::ALL {
            assert!(approx(rotated.corner(corner), reference.corner(corner)));
        }
    }

    #[test]
    fn rigid_round_trip_cancels_translation() {
        let to_world = Mat4::from_rotation_translation(
            Quat::from_rotation_y(1.1),
            Vec3::new(10.0, -4.0, 2.5),
        );
        let moved = FrustumCorners::from_rows(&camera_space_frustum(
            60.0,
            1.0,
            to_world,
            to_world.inverse(),
        ));
        let reference = identity_frustum(60.0, 1.0);
        assert!((moved.top_left - reference.top_left).length() < 1e-4);
        assert!((moved.bottom_right - reference.bottom_right).length() < 1e-4);
    }

    #[test]
    fn aspect_scales_only_horizontal() {
        let narrow = identity_frustum(60.0, 1.0);
        let wide = identity_frustum(60.0, 2.5);
        for corner in Corner::ALL {
            let n = narrow.corner(corner);
            let w = wide.corner(corner);
            assert!((w.x - n.x * 2.5).abs() < EPS);
            assert!((w.y - n.y).abs() < EPS);
            assert!((w.z - n.z).abs() < EPS);
        }
    }

    #[test]
    fn zero_fov_collapses_to_forward() {
        let c = identity_frustum(0.0, 1.7);
        for corner in Corner::ALL {
            assert!(approx(c.corner(corner), Vec3::Z));
        }
    }

    #[test]
    fn degenerate_fov_does_not_panic() {
        let m = camera_space_frustum(180.0, 1.0, Mat4::IDENTITY, Mat4::IDENTITY);
        // tan(90°) is huge but finite in f32; the result is merely degenerate.
        assert!(m.row(0).x.abs() > 1e6);
        let nan = camera_space_frustum(
            f32::NAN,
            1.0,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
        );
        assert!(nan.row(0).x.is_nan());
    }

    #[test]
    fn rows_round_trip_through_matrix() {
        let corners = FrustumCorners::local(50.0, 1.3);
        assert_eq!(FrustumCorners::from_rows(&corners.to_rows()), corners);
        let rows = corners.to_rows_array_2d();
        assert_eq!(rows[Corner::TopRight.row()][0], corners.top_right.x);
        assert_eq!(rows[Corner::BottomLeft.row()][3], 0.0);
    }
}
