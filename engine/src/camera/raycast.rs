//! Raycast Module
//!
//! Screen-to-world deprojection. The swing driver only needs "a ray through
//! this pixel", so the camera is hidden behind [`ScreenDeprojector`].

use glam::{Mat4, Vec2, Vec3};

use crate::math::Ray;

/// Turns a screen position into a world-space ray.
pub trait ScreenDeprojector {
    /// Ray from the eye through `screen` (pixels, origin top-left).
    ///
    /// Returns `None` when the viewport is empty or the view is degenerate.
    fn deproject(&self, screen: Vec2) -> Option<Ray>;
}

/// Converts a pixel position to normalized device coordinates.
///
/// NDC x grows to the right, y grows upward, both in [-1, 1] across the
/// viewport. Returns `None` for an empty viewport.
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        1.0 - screen.y / viewport.y * 2.0,
    ))
}

/// Unprojects an NDC point through the inverse view-projection matrix.
///
/// Expects a 0..1 depth range (`Mat4::perspective_rh`). The ray starts on
/// the near plane.
pub fn deproject_ndc(ndc: Vec2, view_proj: Mat4) -> Option<Ray> {
    let inverse = view_proj.inverse();
    if !inverse.is_finite() {
        return None;
    }
    let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
    let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    Ray::new(near, far - near)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_ndc_corners() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            screen_to_ndc(Vec2::new(800.0, 600.0), viewport),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(
            screen_to_ndc(Vec2::new(400.0, 300.0), viewport),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn test_screen_to_ndc_empty_viewport() {
        assert!(screen_to_ndc(Vec2::ZERO, Vec2::new(0.0, 600.0)).is_none());
    }

    #[test]
    fn test_deproject_center_looks_forward() {
        let eye = Vec3::new(0.0, 5.0, 5.0);
        let forward = (Vec3::ZERO - eye).normalize();
        let view = Mat4::look_to_rh(eye, forward, Vec3::Y);
        let proj = Mat4::perspective_rh(1.0, 16.0 / 9.0, 0.1, 100.0);

        let ray = deproject_ndc(Vec2::ZERO, proj * view).unwrap();
        assert!((ray.direction - forward).length() < 1e-3);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_deproject_singular_matrix() {
        assert!(deproject_ndc(Vec2::ZERO, Mat4::ZERO).is_none());
    }
}
