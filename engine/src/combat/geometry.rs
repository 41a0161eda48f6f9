//! Combat Geometry
//!
//! The combat sphere, the combat plane, and the weapon's point on the sphere
//! with its local tangent frame.
//!
//! # Tangent frame
//!
//! For a weapon at relative location `r` (sphere center to weapon):
//!
//! ```text
//! to_origin   = normalize(-r)
//! radial      = normalize(to_origin × up)
//! latitudinal = radial × to_origin
//! ```
//!
//! `radial` runs horizontally around the actor (east/west on the sphere),
//! `latitudinal` runs over the top (north/south). The frame is recomputed on
//! every change to `r`, so readers never see a stale axis. When the weapon
//! sits straight above or below the center the frame collapses to zero and
//! downstream projection skips input until the weapon leaves the pole.

use glam::{Vec2, Vec3};

use super::updater::{TangentAxes, rotate_on_sphere};
use crate::math::{Plane, Sphere, VecExt, WORLD_UP};

/// Direction the weapon rests in when it has no usable pose.
const FALLBACK_DIRECTION: Vec3 = Vec3::NEG_Z;

/// True when `relative` runs along world up, where the radial axis is undefined.
fn is_polar(relative: Vec3) -> bool {
    relative.safe_normal().cross(WORLD_UP).safe_normal() == Vec3::ZERO
}

/// Sphere and weapon frame for one combat-capable actor.
#[derive(Clone, Debug)]
pub struct CombatGeometry {
    sphere: Sphere,
    combat_plane: Plane,
    /// Sphere center height above the actor origin
    vertical_offset: f32,
    weapon_relative_location: Vec3,
    axes: TangentAxes,
}

impl CombatGeometry {
    /// Geometry for an actor at the origin.
    pub fn new(radius: f32, vertical_offset: f32) -> Self {
        let mut geometry = Self {
            sphere: Sphere::new(Vec3::new(0.0, vertical_offset, 0.0), radius),
            combat_plane: Plane::from_point_normal(Vec3::new(0.0, vertical_offset, 0.0), WORLD_UP),
            vertical_offset,
            weapon_relative_location: FALLBACK_DIRECTION * radius,
            axes: TangentAxes::ZERO,
        };
        geometry.recompute_tangent_axes();
        geometry
    }

    /// Moves the sphere and combat plane with the actor, then refreshes the frame.
    pub fn update(&mut self, actor_position: Vec3) {
        let center = actor_position + WORLD_UP * self.vertical_offset;
        self.sphere.center = center;
        self.combat_plane = Plane::from_point_normal(center, WORLD_UP);
        self.recompute_tangent_axes();
    }

    pub fn recompute_tangent_axes(&mut self) {
        let to_origin = (-self.weapon_relative_location).safe_normal();
        let radial = to_origin.cross(WORLD_UP).safe_normal();
        let latitudinal = radial.cross(to_origin);
        self.axes = TangentAxes {
            radial,
            latitudinal,
            to_origin,
        };
    }

    /// Places the weapon on the sphere along the direction of `weapon_world`.
    ///
    /// Returns `false` when `weapon_world` sits on the center or straight
    /// above or below it, where the tangent frame would collapse, and the
    /// fallback direction had to be used.
    pub fn seed_from_world(&mut self, weapon_world: Vec3) -> bool {
        let relative = self
            .sphere
            .closest_surface_point(weapon_world)
            .map(|point| point - self.sphere.center)
            .filter(|relative| !is_polar(*relative));
        match relative {
            Some(relative) => {
                self.weapon_relative_location = relative;
                self.recompute_tangent_axes();
                true
            }
            None => {
                self.reset();
                false
            }
        }
    }

    /// Sets the relative location directly, rescaled onto the sphere.
    pub fn set_weapon_relative_location(&mut self, relative: Vec3) {
        let direction = relative.safe_normal();
        let direction = if direction == Vec3::ZERO {
            FALLBACK_DIRECTION
        } else {
            direction
        };
        self.weapon_relative_location = direction * self.sphere.radius;
        self.recompute_tangent_axes();
    }

    /// Sweeps the weapon across the sphere by a tangential input and returns
    /// the previous relative location.
    pub fn apply_tangential_input(&mut self, tangential_input: Vec2, input_strength: f32) -> Vec3 {
        let previous = self.weapon_relative_location;
        self.weapon_relative_location = rotate_on_sphere(
            previous,
            self.axes,
            tangential_input,
            self.sphere.radius,
            input_strength,
        );
        self.recompute_tangent_axes();
        previous
    }

    /// Back to the resting pose in front of the actor.
    pub fn reset(&mut self) {
        self.weapon_relative_location = FALLBACK_DIRECTION * self.sphere.radius;
        self.recompute_tangent_axes();
    }

    /// Plane touching the sphere at the weapon.
    ///
    /// Only meaningful while the weapon is on the sphere.
    pub fn tangential_plane(&self) -> Plane {
        Plane::from_point_normal(self.weapon_location(), self.weapon_relative_location.safe_normal())
    }

    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    pub fn combat_plane(&self) -> Plane {
        self.combat_plane
    }

    pub fn arm_length(&self) -> f32 {
        self.sphere.radius
    }

    pub fn weapon_relative_location(&self) -> Vec3 {
        self.weapon_relative_location
    }

    /// Weapon point on the sphere in world space.
    pub fn weapon_location(&self) -> Vec3 {
        self.sphere.center + self.weapon_relative_location
    }

    pub fn axes(&self) -> TangentAxes {
        self.axes
    }

    pub fn radial_axis(&self) -> Vec3 {
        self.axes.radial
    }

    pub fn latitudinal_axis(&self) -> Vec3 {
        self.axes.latitudinal
    }

    pub fn to_origin_axis(&self) -> Vec3 {
        self.axes.to_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(axes: TangentAxes) {
        assert!((axes.radial.length() - 1.0).abs() < 1e-5);
        assert!((axes.latitudinal.length() - 1.0).abs() < 1e-5);
        assert!((axes.to_origin.length() - 1.0).abs() < 1e-5);
        assert!(axes.radial.dot(axes.latitudinal).abs() < 1e-5);
        assert!(axes.radial.dot(axes.to_origin).abs() < 1e-5);
        assert!(axes.latitudinal.dot(axes.to_origin).abs() < 1e-5);
    }

    #[test]
    fn test_new_geometry_rests_in_front() {
        let geometry = CombatGeometry::new(2.0, 0.5);
        assert_eq!(geometry.weapon_relative_location(), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(geometry.sphere().center, Vec3::new(0.0, 0.5, 0.0));
        assert_orthonormal(geometry.axes());
    }

    #[test]
    fn test_frame_in_front_of_actor() {
        let geometry = CombatGeometry::new(2.0, 0.0);
        // Weapon at -Z: radial runs along -X, latitudinal points up
        assert!((geometry.radial_axis() - Vec3::NEG_X).length() < 1e-6);
        assert!((geometry.latitudinal_axis() - Vec3::Y).length() < 1e-6);
        assert!((geometry.to_origin_axis() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_update_follows_actor() {
        let mut geometry = CombatGeometry::new(2.0, 0.5);
        geometry.update(Vec3::new(4.0, 1.0, -3.0));
        assert_eq!(geometry.sphere().center, Vec3::new(4.0, 1.5, -3.0));
        assert!((geometry.combat_plane().signed_distance(Vec3::new(0.0, 1.5, 0.0))).abs() < 1e-6);
        assert_eq!(
            geometry.weapon_location(),
            Vec3::new(4.0, 1.5, -3.0) + geometry.weapon_relative_location()
        );
    }

    #[test]
    fn test_seed_rescales_to_radius() {
        let mut geometry = CombatGeometry::new(2.0, 0.0);
        assert!(geometry.seed_from_world(Vec3::new(0.3, 0.4, 0.0)));
        let rel = geometry.weapon_relative_location();
        assert!((rel.length() - 2.0).abs() < 1e-5);
        assert!((rel.normalize() - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-5);
        assert_orthonormal(geometry.axes());
    }

    #[test]
    fn test_seed_at_center_falls_back() {
        let mut geometry = CombatGeometry::new(2.0, 0.5);
        assert!(!geometry.seed_from_world(Vec3::new(0.0, 0.5, 0.0)));
        assert_eq!(geometry.weapon_relative_location(), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_seed_at_pole_falls_back() {
        let mut geometry = CombatGeometry::new(2.0, 0.5);
        assert!(!geometry.seed_from_world(Vec3::new(0.0, 3.0, 0.0)));
        assert_eq!(geometry.weapon_relative_location(), Vec3::new(0.0, 0.0, -2.0));
        assert_orthonormal(geometry.axes());

        assert!(!geometry.seed_from_world(Vec3::new(0.0, -1.0, 0.0)));
        assert_orthonormal(geometry.axes());
    }

    #[test]
    fn test_pole_collapses_frame() {
        let mut geometry = CombatGeometry::new(2.0, 0.0);
        geometry.set_weapon_relative_location(Vec3::Y);
        assert_eq!(geometry.radial_axis(), Vec3::ZERO);
        assert_eq!(geometry.latitudinal_axis(), Vec3::ZERO);
    }

    #[test]
    fn test_tangential_plane_touches_weapon() {
        let mut geometry = CombatGeometry::new(2.0, 0.5);
        geometry.update(Vec3::new(1.0, 0.0, 1.0));
        let plane = geometry.tangential_plane();
        assert!(plane.signed_distance(geometry.weapon_location()).abs() < 1e-5);
        assert!(plane.signed_distance(geometry.sphere().center) < 0.0);
    }
}
