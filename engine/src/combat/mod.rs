//! Combat Module
//!
//! Sphere-constrained weapon control: the combat geometry around the actor,
//! the projection from screen-space motion into the weapon's tangent frame,
//! and the character that ties them together behind [`CombatCapable`].

pub mod capability;
pub mod character;
pub mod geometry;
pub mod projection;
pub mod updater;

pub use capability::CombatCapable;
pub use character::{CombatCharacter, WeaponPose};
pub use geometry::CombatGeometry;
pub use projection::{InputBasis, decompose_into_basis, project_axes_onto_input_plane};
pub use updater::{TangentAxes, arc_to_angle, rotate_on_sphere};
