//! Top-Down Camera
//!
//! Fixed-rotation boom camera that looks down at the actor from behind and
//! above. It never rotates with the actor, which keeps screen directions
//! stable while swinging.

use glam::{Mat4, Quat, Vec2, Vec3};

use super::raycast::{ScreenDeprojector, deproject_ndc, screen_to_ndc};
use crate::config::CameraConfig;
use crate::math::{Plane, Ray};

/// Boom camera focused on a point (normally the actor).
#[derive(Clone, Debug)]
pub struct TopDownCamera {
    pub config: CameraConfig,
    /// Point the boom is attached to
    pub focus: Vec3,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Default for TopDownCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default(), Vec2::new(1280.0, 720.0))
    }
}

impl TopDownCamera {
    pub fn new(config: CameraConfig, viewport: Vec2) -> Self {
        Self {
            config,
            focus: Vec3::ZERO,
            viewport,
        }
    }

    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Unit view direction. Zero yaw and pitch looks down -Z.
    pub fn forward(&self) -> Vec3 {
        let rotation = Quat::from_rotation_y(self.config.yaw_degrees.to_radians())
            * Quat::from_rotation_x(self.config.pitch_degrees.to_radians());
        rotation * Vec3::NEG_Z
    }

    /// Eye position at the end of the boom.
    pub fn position(&self) -> Vec3 {
        self.focus - self.forward() * self.config.boom_length
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position(), self.forward(), Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            self.aspect_ratio(),
            self.config.near,
            self.config.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Screen-parallel plane through `point`, facing the camera.
    pub fn facing_plane(&self, point: Vec3) -> Plane {
        Plane::from_point_normal(point, -self.forward())
    }

    /// Projects a world point to pixels. `None` when it is behind the eye.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}

impl ScreenDeprojector for TopDownCamera {
    fn deproject(&self, screen: Vec2) -> Option<Ray> {
        let ndc = screen_to_ndc(screen, self.viewport)?;
        deproject_ndc(ndc, self.view_projection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down() {
        let camera = TopDownCamera::default();
        let forward = camera.forward();
        assert!(forward.y < -0.8);
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!(camera.position().y > camera.focus.y);
    }

    #[test]
    fn test_boom_length() {
        let mut camera = TopDownCamera::default();
        camera.set_focus(Vec3::new(3.0, 0.0, -2.0));
        let dist = (camera.position() - camera.focus).length();
        assert!((dist - camera.config.boom_length).abs() < 1e-4);
    }

    #[test]
    fn test_facing_plane_normal_points_at_camera() {
        let camera = TopDownCamera::default();
        let plane = camera.facing_plane(Vec3::ZERO);
        assert!(plane.signed_distance(camera.position()) > 0.0);
    }

    #[test]
    fn test_empty_viewport_cannot_deproject() {
        let mut camera = TopDownCamera::default();
        camera.set_viewport(0.0, 0.0);
        assert!(camera.deproject(Vec2::ZERO).is_none());
    }
}
