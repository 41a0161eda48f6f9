//! Combat capability.
//!
//! Anything that can hold a weapon in combat stance implements
//! [`CombatCapable`]. The swing driver only talks to pawns through this trait.

use glam::{Vec2, Vec3};

use crate::math::{Plane, Sphere};

pub trait CombatCapable {
    /// Detaches the weapon from the body, keeping its world pose, and seeds
    /// the combat geometry from it.
    fn enter_combat(&mut self);

    /// Returns the weapon to its body socket and resets combat geometry.
    fn exit_combat(&mut self);

    fn in_combat(&self) -> bool;

    /// Moves the combat sphere and plane with the actor. Call once per frame
    /// before feeding input.
    fn update_geometry(&mut self, actor_position: Vec3);

    /// Places the weapon at a point on the combat plane (placement mode).
    fn handle_mouse_location(&mut self, point_on_plane: Vec3);

    /// Sweeps the weapon across the sphere (gesture mode). `start_point` is
    /// where the motion began on the input plane.
    fn handle_mouse_motion(&mut self, start_point: Vec3, tangential_input: Vec2);

    fn weapon_location(&self) -> Vec3;
    fn weapon_radial_axis(&self) -> Vec3;
    fn weapon_latitudinal_axis(&self) -> Vec3;

    /// Angular momentum of the last sweep (left-hand rule axis, radians).
    fn weapon_angular_momentum(&self) -> Vec3;
    fn weapon_linear_momentum(&self) -> Vec3;

    fn combat_plane(&self) -> Plane;
    fn combat_sphere(&self) -> Sphere;
    fn tangential_plane(&self) -> Plane;

    /// Camera-facing plane through the actor that cursor rays are cast onto.
    fn input_plane_from_camera(&self) -> Plane;
}
