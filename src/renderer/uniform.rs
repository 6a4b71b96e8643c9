//! Per-frame uniform block for the raymarch pass.

use glam::Mat4;

use crate::camera::core::Camera;
use crate::options::{Options, MAX_SPHERES};

/// GPU uniform holding the frustum rows, camera matrix and every effect
/// parameter. All groups are 16 bytes wide so the layout is identical under
/// std140 and WGSL uniform rules.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RaymarchUniform {
    /// Camera-space frustum corners, one per row (TL, TR, BR, BL), w = 0.
    pub frustum_corners: [[f32; 4]; 4],
    /// Camera-to-world matrix, column-major.
    pub camera_to_world: [[f32; 4]; 4],

    /// Maximum march steps per ray.
    pub max_iteration: u32,
    /// Surface hit distance.
    pub hit_threshold: f32,
    /// Ray length cutoff.
    pub max_render_distance: f32,
    /// Number of live entries in `sphere_colors`.
    pub sphere_count: u32,

    /// Shadow ray start and end distance.
    pub min_max_shadow_distance: [f32; 2],
    /// Shadow darkness.
    pub shadow_intensity: f32,
    /// Shadow penumbra sharpness.
    pub shadow_penumbra: f32,

    /// Ambient occlusion sample count.
    pub ao_iteration: u32,
    /// Ambient occlusion step length.
    pub ao_distance: f32,
    /// Ambient occlusion strength.
    pub ao_intensity: f32,
    /// Reflection bounce count.
    pub reflection_count: u32,

    /// Surface reflection strength.
    pub reflection_intensity: f32,
    /// Cubemap reflection strength.
    pub env_reflection_intensity: f32,
    /// Cubemap blur amount.
    pub env_reflection_blur_intensity: f32,
    /// Ring radius of the spheres.
    pub sphere_distance: f32,

    /// Smooth-minimum radius between spheres.
    pub sphere_smooth: f32,
    /// Ring rotation speed.
    pub sphere_rotate_scale: f32,
    /// Smooth-minimum radius against the plane.
    pub plane_smooth: f32,
    /// Padding for GPU alignment.
    pub _pad: f32,

    /// Sphere center (xyz) and radius (w).
    pub sphere: [f32; 4],
    /// Base mesh color.
    pub mesh_color: [f32; 4],
    /// Ground plane color.
    pub plane_color: [f32; 4],
    /// Per-sphere colors; entries past `sphere_count` are zero.
    pub sphere_colors: [[f32; 4]; MAX_SPHERES as usize],
}

impl Default for RaymarchUniform {
    fn default() -> Self {
        Self::prepare(&Camera::default(), &Options::default())
    }
}

impl RaymarchUniform {
    /// Build this frame's uniform from live camera state and options.
    ///
    /// The camera's own field of view is used; `options.camera` seeds
    /// cameras built with [`Camera::from_options`].
    #[must_use]
    pub fn prepare(camera: &Camera, options: &Options) -> Self {
        let opts = options.sanitized();
        let corners = camera.frustum_corners();

        let mut sphere_colors = [[0.0; 4]; MAX_SPHERES as usize];
        for (slot, color) in
            sphere_colors.iter_mut().zip(opts.sdf.sphere_colors())
        {
            *slot = color;
        }
        log::debug!(
            "raymarch uniform: fovy={} aspect={} spheres={}",
            camera.fovy,
            camera.aspect,
            opts.sdf.sphere_count
        );

        Self {
            frustum_corners: corners.to_rows_array_2d(),
            camera_to_world: camera.camera_to_world().to_cols_array_2d(),
            max_iteration: opts.render.max_iteration,
            hit_threshold: opts.render.hit_threshold,
            max_render_distance: opts.render.max_render_distance,
            sphere_count: opts.sdf.sphere_count,
            min_max_shadow_distance: opts.shadow.min_max_distance,
            shadow_intensity: opts.shadow.intensity,
            shadow_penumbra: opts.shadow.penumbra,
            ao_iteration: opts.ambient_occlusion.iteration,
            ao_distance: opts.ambient_occlusion.distance,
            ao_intensity: opts.ambient_occlusion.intensity,
            reflection_count: opts.reflection.count,
            reflection_intensity: opts.reflection.intensity,
            env_reflection_intensity: opts.reflection.env_intensity,
            env_reflection_blur_intensity: opts.reflection.env_blur_intensity,
            sphere_distance: opts.sdf.sphere_distance,
            sphere_smooth: opts.sdf.sphere_smooth,
            sphere_rotate_scale: opts.sdf.sphere_rotate_scale,
            plane_smooth: opts.sdf.plane_smooth,
            _pad: 0.0,
            sphere: opts.sdf.sphere,
            mesh_color: opts.sdf.mesh_color,
            plane_color: opts.sdf.plane_color,
            sphere_colors,
        }
    }

    /// Frustum corner rows as a matrix (row `i` is corner `i`).
    #[must_use]
    pub fn frustum_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.frustum_corners).transpose()
    }

    /// Raw bytes for a buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
