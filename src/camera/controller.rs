use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::camera::core::Transform;
use crate::options::FlyCameraOptions;

/// Pitch limit in degrees; the camera never looks past straight up/down.
const PITCH_LIMIT: f32 = 90.0;

/// Axis input shorter than this is treated as no input.
const AXIS_EPSILON: f32 = 1e-5;

/// Per-frame input snapshot supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Cursor position in pixels, origin at the bottom-left, +Y up.
    pub mouse_position: Vec2,
    /// Viewport size in pixels.
    pub screen_size: Vec2,
    /// The rotate button went down this frame.
    pub rotate_pressed: bool,
    /// The rotate button is currently held.
    pub rotate_held: bool,
    /// Raw movement axes: x = strafe (right positive), y = forward.
    pub move_axes: Vec2,
    /// Seconds since the previous frame.
    pub delta_seconds: f32,
}

/// What a single [`FlyCameraController::update`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlyUpdate {
    /// The cursor lies outside the viewport and should be shown.
    pub cursor_visible: bool,
    /// Yaw or pitch changed.
    pub rotated: bool,
    /// The translation changed.
    pub moved: bool,
}

/// First-person fly camera: drag to look, axes to move.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCameraController {
    previous_mouse: Vec2,
    /// x = pitch, y = yaw, in degrees.
    euler_degrees: Vec2,
    rotate_multiplier: f32,
    translate_speed: f32,
}

impl FlyCameraController {
    /// Start from the transform's current orientation.
    #[must_use]
    pub fn new(
        transform: &Transform,
        initial_mouse: Vec2,
        options: &FlyCameraOptions,
    ) -> Self {
        let (yaw, pitch, _roll) = transform.rotation.to_euler(EulerRot::YXZ);
        Self {
            previous_mouse: initial_mouse,
            euler_degrees: Vec2::new(
                wrap_degrees(pitch.to_degrees()),
                wrap_degrees(yaw.to_degrees()),
            ),
            rotate_multiplier: options.rotate_multiplier,
            translate_speed: options.translate_speed,
        }
    }

    /// Current pitch in degrees, within [-90, 90] once rotated.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.euler_degrees.x
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.euler_degrees.y
    }

    /// Apply new sensitivity settings without resetting orientation.
    pub fn apply_options(&mut self, options: &FlyCameraOptions) {
        self.rotate_multiplier = options.rotate_multiplier;
        self.translate_speed = options.translate_speed;
    }

    /// Advance one frame: look with the held button, move along the axes.
    pub fn update(
        &mut self,
        input: &FrameInput,
        transform: &mut Transform,
    ) -> FlyUpdate {
        let cursor_visible =
            cursor_outside_viewport(input.mouse_position, input.screen_size);

        let mouse = input.mouse_position;
        if input.rotate_pressed {
            self.previous_mouse = mouse;
        }
        let delta = mouse - self.previous_mouse;
        self.previous_mouse = mouse;

        let before = self.euler_degrees;
        if input.rotate_held {
            self.euler_degrees.y += delta.x * self.rotate_multiplier;
            self.euler_degrees.x -= delta.y * self.rotate_multiplier;
            self.euler_degrees.x =
                self.euler_degrees.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        transform.rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.euler_degrees.y.to_radians(),
            self.euler_degrees.x.to_radians(),
            0.0,
        );

        let axes = normalize_axes(input.move_axes);
        let step = input.delta_seconds * self.translate_speed;
        let offset = transform.forward() * (axes.y * step)
            + transform.right() * (axes.x * step);
        transform.translation += offset;

        FlyUpdate {
            cursor_visible,
            rotated: self.euler_degrees != before,
            moved: offset != Vec3::ZERO,
        }
    }
}

/// True when the cursor maps outside the [0, 1] viewport square.
#[must_use]
pub fn cursor_outside_viewport(mouse: Vec2, screen_size: Vec2) -> bool {
    let view = mouse / screen_size;
    view.x < 0.0 || view.x > 1.0 || view.y < 0.0 || view.y > 1.0
}

fn normalize_axes(axes: Vec2) -> Vec2 {
    if axes.length() > AXIS_EPSILON {
        axes.normalize()
    } else {
        Vec2::ZERO
    }
}

/// Map an angle in degrees into (-180, 180].
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FlyCameraOptions {
        FlyCameraOptions {
            rotate_multiplier: 0.5,
            translate_speed: 2.0,
        }
    }

    fn input_at(x: f32, y: f32) -> FrameInput {
        FrameInput {
            mouse_position: Vec2::new(x, y),
            screen_size: Vec2::new(800.0, 600.0),
            delta_seconds: 0.5,
            ..FrameInput::default()
        }
    }

    #[test]
    fn press_resets_previous_mouse() {
        let mut transform = Transform::IDENTITY;
        let mut ctl =
            FlyCameraController::new(&transform, Vec2::ZERO, &options());
        let input = FrameInput {
            rotate_pressed: true,
            rotate_held: true,
            ..input_at(400.0, 300.0)
        };
        let update = ctl.update(&input, &mut transform);
        assert!(!update.rotated);
        assert_eq!(ctl.yaw(), 0.0);
        assert_eq!(ctl.pitch(), 0.0);
    }

    #[test]
    fn drag_rotates_and_pitch_clamps() {
        let mut transform = Transform::IDENTITY;
        let mut ctl = FlyCameraController::new(
            &transform,
            Vec2::new(400.0, 300.0),
            &options(),
        );
        let drag = FrameInput {
            rotate_held: true,
            ..input_at(420.0, 280.0)
        };
        let update = ctl.update(&drag, &mut transform);
        assert!(update.rotated);
        assert!((ctl.yaw() - 10.0).abs() < 1e-5);
        // Mouse moved down, so the camera pitches down (positive pitch).
        assert!((ctl.pitch() - 10.0).abs() < 1e-5);

        let far_drag = FrameInput {
            rotate_held: true,
            ..input_at(420.0, -1000.0)
        };
        let _ = ctl.update(&far_drag, &mut transform);
        assert_eq!(ctl.pitch(), 90.0);
        assert!(transform.forward().y < -0.999);
    }

    #[test]
    fn motion_without_button_does_not_rotate() {
        let mut transform = Transform::IDENTITY;
        let mut ctl =
            FlyCameraController::new(&transform, Vec2::ZERO, &options());
        let update = ctl.update(&input_at(500.0, 100.0), &mut transform);
        assert!(!update.rotated);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut transform = Transform::IDENTITY;
        let mut ctl =
            FlyCameraController::new(&transform, Vec2::ZERO, &options());
        let input = FrameInput {
            move_axes: Vec2::new(1.0, 1.0),
            ..input_at(0.0, 0.0)
        };
        let update = ctl.update(&input, &mut transform);
        assert!(update.moved);
        // dt * speed = 1.0, split evenly between right (+X) and forward (+Z).
        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!((transform.translation - expected).length() < 1e-5);
    }

    #[test]
    fn movement_follows_new_heading() {
        let mut transform = Transform::IDENTITY;
        let mut ctl = FlyCameraController::new(
            &transform,
            Vec2::new(0.0, 0.0),
            &FlyCameraOptions {
                rotate_multiplier: 1.0,
                translate_speed: 1.0,
            },
        );
        let input = FrameInput {
            rotate_held: true,
            move_axes: Vec2::new(0.0, 1.0),
            delta_seconds: 1.0,
            ..input_at(90.0, 0.0)
        };
        let _ = ctl.update(&input, &mut transform);
        assert!((transform.translation - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn tiny_axes_are_ignored() {
        let mut transform = Transform::IDENTITY;
        let mut ctl =
            FlyCameraController::new(&transform, Vec2::ZERO, &options());
        let input = FrameInput {
            move_axes: Vec2::new(1e-7, 0.0),
            ..input_at(0.0, 0.0)
        };
        assert!(!ctl.update(&input, &mut transform).moved);
        assert_eq!(transform.translation, Vec3::ZERO);
    }

    #[test]
    fn cursor_visibility_tracks_viewport() {
        let screen = Vec2::new(800.0, 600.0);
        assert!(!cursor_outside_viewport(Vec2::new(400.0, 300.0), screen));
        assert!(!cursor_outside_viewport(Vec2::new(800.0, 0.0), screen));
        assert!(cursor_outside_viewport(Vec2::new(-1.0, 300.0), screen));
        assert!(cursor_outside_viewport(Vec2::new(400.0, 601.0), screen));
        assert!(!cursor_outside_viewport(Vec2::ZERO, Vec2::ZERO));
    }

    #[test]
    fn initial_orientation_is_read_from_transform() {
        let transform =
            Transform::from_position_euler(Vec3::ZERO, 270.0, -30.0);
        let ctl = FlyCameraController::new(&transform, Vec2::ZERO, &options());
        assert!((ctl.yaw() + 90.0).abs() < 1e-3);
        assert!((ctl.pitch() + 30.0).abs() < 1e-3);
    }

    #[test]
    fn apply_options_keeps_orientation() {
        let mut transform = Transform::IDENTITY;
        let mut ctl = FlyCameraController::new(
            &transform,
            Vec2::new(400.0, 300.0),
            &options(),
        );
        let drag = FrameInput {
            rotate_held: true,
            ..input_at(440.0, 300.0)
        };
        let _ = ctl.update(&drag, &mut transform);
        let (yaw, pitch) = (ctl.yaw(), ctl.pitch());

        ctl.apply_options(&FlyCameraOptions {
            rotate_multiplier: 2.0,
            translate_speed: 8.0,
        });
        assert_eq!(ctl.yaw(), yaw);
        assert_eq!(ctl.pitch(), pitch);

        // Holding still keeps the heading; the new speed applies to movement.
        let start = transform.translation;
        let step = FrameInput {
            rotate_held: true,
            move_axes: Vec2::new(0.0, 1.0),
            ..input_at(440.0, 300.0)
        };
        let update = ctl.update(&step, &mut transform);
        assert!(!update.rotated);
        assert_eq!(ctl.yaw(), yaw);
        let travelled = (transform.translation - start).length();
        assert!((travelled - 4.0).abs() < 1e-5);
    }

    #[test]
    fn wrap_degrees_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
    }
}
