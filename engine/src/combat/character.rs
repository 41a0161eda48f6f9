//! Combat Character
//!
//! The player character's combat side: owns the weapon pose, the combat
//! geometry, the top-down camera and the tuning, and implements
//! [`CombatCapable`] on top of them.

use glam::{Mat3, Quat, Vec2, Vec3};
use tracing::{debug, info, warn};

use super::capability::CombatCapable;
use super::geometry::CombatGeometry;
use crate::camera::TopDownCamera;
use crate::config::CombatConfig;
use crate::math::{Momentum, Plane, Sphere, VecExt, WORLD_UP, angular_and_linear_momentum};

/// Where the weapon currently lives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeaponPose {
    /// Attached to the body socket; follows the actor.
    Socketed,
    /// Detached for combat, posed in world space.
    Free { position: Vec3, orientation: Quat },
}

/// Player character with a combat stance.
#[derive(Clone, Debug)]
pub struct CombatCharacter {
    config: CombatConfig,
    actor_position: Vec3,
    camera: TopDownCamera,
    geometry: CombatGeometry,
    weapon: WeaponPose,
    kinematics: Momentum,
}

impl CombatCharacter {
    pub fn new(config: CombatConfig, camera: TopDownCamera) -> Self {
        let geometry = CombatGeometry::new(config.combat_sphere_radius, config.combat_plane_height);
        Self {
            config,
            actor_position: Vec3::ZERO,
            camera,
            geometry,
            weapon: WeaponPose::Socketed,
            kinematics: Momentum::ZERO,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn camera(&self) -> &TopDownCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut TopDownCamera {
        &mut self.camera
    }

    pub fn geometry(&self) -> &CombatGeometry {
        &self.geometry
    }

    pub fn weapon_pose(&self) -> WeaponPose {
        self.weapon
    }

    pub fn actor_position(&self) -> Vec3 {
        self.actor_position
    }

    /// World position of the body socket.
    pub fn socket_location(&self) -> Vec3 {
        self.actor_position + Vec3::from_array(self.config.socket_offset)
    }

    /// Orientation of the weapon, identity while socketed.
    pub fn weapon_orientation(&self) -> Quat {
        match self.weapon {
            WeaponPose::Socketed => Quat::IDENTITY,
            WeaponPose::Free { orientation, .. } => orientation,
        }
    }
}

/// Orientation whose local +Y follows `blade` and local +X follows `side`
/// (orthogonalized against the blade).
fn blade_orientation(blade: Vec3, side: Vec3) -> Quat {
    let y = blade.safe_normal();
    if y == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let x = (side - y * side.dot(y)).safe_normal();
    if x == Vec3::ZERO {
        return Quat::from_rotation_arc(Vec3::Y, y);
    }
    Quat::from_mat3(&Mat3::from_cols(x, y, x.cross(y)))
}

impl CombatCapable for CombatCharacter {
    fn enter_combat(&mut self) {
        if self.in_combat() {
            return;
        }
        let position = self.socket_location();
        self.geometry.update(self.actor_position);
        if !self.geometry.seed_from_world(position) {
            warn!(?position, "weapon socket is on the sphere axis, using rest pose");
        }
        let axes = self.geometry.axes();
        let orientation = blade_orientation(-axes.to_origin, axes.radial);
        self.weapon = WeaponPose::Free {
            position,
            orientation,
        };
        self.kinematics = Momentum::ZERO;
        info!(
            relative = ?self.geometry.weapon_relative_location(),
            "entered combat"
        );
    }

    fn exit_combat(&mut self) {
        if !self.in_combat() {
            return;
        }
        self.weapon = WeaponPose::Socketed;
        self.geometry.reset();
        self.kinematics = Momentum::ZERO;
        info!("exited combat");
    }

    fn in_combat(&self) -> bool {
        matches!(self.weapon, WeaponPose::Free { .. })
    }

    fn update_geometry(&mut self, actor_position: Vec3) {
        let delta = actor_position - self.actor_position;
        self.actor_position = actor_position;
        self.camera.set_focus(actor_position);
        self.geometry.update(actor_position);
        // A detached weapon keeps its offset from the actor.
        if let WeaponPose::Free { position, .. } = &mut self.weapon {
            *position += delta;
        }
    }

    fn handle_mouse_location(&mut self, point_on_plane: Vec3) {
        if !self.in_combat() {
            debug!("placement ignored outside combat");
            return;
        }

        let actor_on_plane = Vec3::new(self.actor_position.x, point_on_plane.y, self.actor_position.z);
        let to_mouse = point_on_plane - actor_on_plane;
        let direction = to_mouse.safe_normal();
        let distance_sq = to_mouse.length_squared();

        let min = self.config.min_weapon_distance;
        let max = self.config.max_weapon_distance;
        let position = if distance_sq > max * max {
            actor_on_plane + direction * max
        } else if distance_sq < min * min {
            actor_on_plane + direction * min
        } else {
            point_on_plane
        };

        // Hilt toward the player, blade pointing out along the cursor.
        let orientation = blade_orientation(direction, direction.cross(WORLD_UP));
        self.weapon = WeaponPose::Free {
            position,
            orientation,
        };
        self.geometry.seed_from_world(position);
        self.kinematics = Momentum::ZERO;
    }

    fn handle_mouse_motion(&mut self, start_point: Vec3, tangential_input: Vec2) {
        if !self.in_combat() {
            debug!("swing ignored outside combat");
            return;
        }

        let previous = self
            .geometry
            .apply_tangential_input(tangential_input, self.config.input_strength);
        let current = self.geometry.weapon_relative_location();
        self.kinematics = angular_and_linear_momentum(previous, current);

        let axes = self.geometry.axes();
        self.weapon = WeaponPose::Free {
            position: self.geometry.weapon_location(),
            orientation: blade_orientation(-axes.to_origin, axes.radial),
        };
        debug!(
            ?start_point,
            ?tangential_input,
            angle = self.kinematics.angle(),
            "weapon swept"
        );
    }

    fn weapon_location(&self) -> Vec3 {
        match self.weapon {
            WeaponPose::Socketed => self.socket_location(),
            WeaponPose::Free { position, .. } => position,
        }
    }

    fn weapon_radial_axis(&self) -> Vec3 {
        self.geometry.radial_axis()
    }

    fn weapon_latitudinal_axis(&self) -> Vec3 {
        self.geometry.latitudinal_axis()
    }

    fn weapon_angular_momentum(&self) -> Vec3 {
        self.kinematics.angular
    }

    fn weapon_linear_momentum(&self) -> Vec3 {
        self.kinematics.linear
    }

    fn combat_plane(&self) -> Plane {
        self.geometry.combat_plane()
    }

    fn combat_sphere(&self) -> Sphere {
        self.geometry.sphere()
    }

    fn tangential_plane(&self) -> Plane {
        self.geometry.tangential_plane()
    }

    fn input_plane_from_camera(&self) -> Plane {
        self.camera.facing_plane(self.actor_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character() -> CombatCharacter {
        CombatCharacter::new(CombatConfig::default(), TopDownCamera::default())
    }

    #[test]
    fn test_starts_socketed() {
        let c = character();
        assert!(!c.in_combat());
        assert_eq!(c.weapon_location(), c.socket_location());
    }

    #[test]
    fn test_enter_keeps_world_pose() {
        let mut c = character();
        c.update_geometry(Vec3::new(2.0, 0.0, 1.0));
        let before = c.weapon_location();
        c.enter_combat();
        assert!(c.in_combat());
        assert_eq!(c.weapon_location(), before);
        let rel = c.geometry().weapon_relative_location();
        assert!((rel.length() - c.config().combat_sphere_radius).abs() < 1e-5);
        let expected_dir = (before - c.combat_sphere().center).normalize();
        assert!((rel.normalize() - expected_dir).length() < 1e-5);
    }

    #[test]
    fn test_socket_above_center_still_swings() {
        let config = CombatConfig {
            socket_offset: [0.0, 1.5, 0.0],
            ..CombatConfig::default()
        };
        let mut c = CombatCharacter::new(config, TopDownCamera::default());
        c.enter_combat();
        assert_ne!(c.weapon_radial_axis(), Vec3::ZERO);

        let before = c.geometry().weapon_relative_location();
        c.handle_mouse_motion(Vec3::ZERO, Vec2::new(0.5, 0.0));
        assert!((c.geometry().weapon_relative_location() - before).length() > 0.1);
    }

    #[test]
    fn test_exit_returns_to_socket() {
        let mut c = character();
        c.enter_combat();
        c.handle_mouse_motion(Vec3::ZERO, Vec2::new(0.3, 0.1));
        c.exit_combat();
        assert!(!c.in_combat());
        assert_eq!(c.weapon_pose(), WeaponPose::Socketed);
        assert_eq!(c.weapon_angular_momentum(), Vec3::ZERO);
    }

    #[test]
    fn test_motion_ignored_outside_combat() {
        let mut c = character();
        let rel = c.geometry().weapon_relative_location();
        c.handle_mouse_motion(Vec3::ZERO, Vec2::new(1.0, 1.0));
        assert_eq!(c.geometry().weapon_relative_location(), rel);
    }

    #[test]
    fn test_motion_moves_weapon_on_sphere() {
        let mut c = character();
        c.enter_combat();
        c.handle_mouse_motion(Vec3::ZERO, Vec2::new(0.4, -0.2));
        let sphere = c.combat_sphere();
        let dist = (c.weapon_location() - sphere.center).length();
        assert!((dist - sphere.radius).abs() < 1e-4);
        assert!(c.weapon_angular_momentum().length() > 0.0);
    }

    #[test]
    fn test_weapon_follows_actor() {
        let mut c = character();
        c.enter_combat();
        let before = c.weapon_location();
        c.update_geometry(Vec3::new(1.0, 0.0, -2.0));
        assert!((c.weapon_location() - (before + Vec3::new(1.0, 0.0, -2.0))).length() < 1e-6);
    }

    #[test]
    fn test_placement_clamps_to_max() {
        let mut c = character();
        c.enter_combat();
        let plane_y = c.combat_plane().origin().y;
        c.handle_mouse_location(Vec3::new(10.0, plane_y, 0.0));
        let expected = Vec3::new(c.config().max_weapon_distance, plane_y, 0.0);
        assert!((c.weapon_location() - expected).length() < 1e-5);
    }

    #[test]
    fn test_placement_clamps_to_min() {
        let mut c = character();
        c.enter_combat();
        let plane_y = c.combat_plane().origin().y;
        c.handle_mouse_location(Vec3::new(0.0, plane_y, 0.05));
        let expected = Vec3::new(0.0, plane_y, c.config().min_weapon_distance);
        assert!((c.weapon_location() - expected).length() < 1e-5);
    }

    #[test]
    fn test_placement_within_range_is_exact() {
        let mut c = character();
        c.enter_combat();
        let plane_y = c.combat_plane().origin().y;
        let target = Vec3::new(0.3, plane_y, -0.4);
        c.handle_mouse_location(target);
        assert!((c.weapon_location() - target).length() < 1e-6);
    }

    #[test]
    fn test_placement_points_blade_away_from_actor() {
        let mut c = character();
        c.enter_combat();
        let plane_y = c.combat_plane().origin().y;
        c.handle_mouse_location(Vec3::new(0.0, plane_y, -0.5));
        let blade = c.weapon_orientation() * Vec3::Y;
        assert!((blade - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_input_plane_passes_through_actor() {
        let mut c = character();
        c.update_geometry(Vec3::new(5.0, 0.0, 5.0));
        let plane = c.input_plane_from_camera();
        assert!(plane.signed_distance(Vec3::new(5.0, 0.0, 5.0)).abs() < 1e-5);
    }
}
