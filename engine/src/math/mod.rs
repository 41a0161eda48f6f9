//! Math Module
//!
//! Geometry helpers for the combat core. Vectors and quaternions are the
//! glam types; this module adds the plane/sphere/ray value types and the
//! solvers the swing pipeline is built on.
//!
//! # Conventions
//!
//! - Right-handed, **Y-up** world (`Vec3::Y` is up)
//! - 1 unit = 1 meter
//! - "Safe normal" means `normalize_or_zero`: nearly-zero vectors become zero
//!
//! # Submodules
//!
//! - [`shapes`] - `Plane`, `Sphere` and `Ray`
//! - [`solve`] - basis decomposition and line intersections
//! - [`momentum`] - angular/linear momentum between two points

pub mod momentum;
pub mod shapes;
pub mod solve;

pub use glam::{Mat3, Quat, Vec2, Vec3};
pub use momentum::{Momentum, angular_and_linear_momentum, extrapolate_point_from_angular_momentum};
pub use shapes::{Plane, Ray, Sphere};
pub use solve::{
    SphereHit, line_plane_intersection, line_sphere_intersection, linear_combination_of_basis,
};

/// Length below which a vector counts as zero.
pub const NEARLY_ZERO: f32 = 1e-4;

/// World up axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Extra vector operations the combat math leans on.
pub trait VecExt {
    /// True when every component is within `NEARLY_ZERO` of zero.
    fn is_nearly_zero(self) -> bool;

    /// Unit vector, or zero for nearly-zero input.
    fn safe_normal(self) -> Self;

    /// Rodrigues rotation by `angle` radians about `axis` (right-handed).
    ///
    /// The axis does not need to be normalized. A nearly-zero axis leaves
    /// the vector unchanged.
    fn rotate_angle_axis(self, angle: f32, axis: Vec3) -> Self;
}

impl VecExt for Vec3 {
    #[inline]
    fn is_nearly_zero(self) -> bool {
        self.abs().max_element() <= NEARLY_ZERO
    }

    #[inline]
    fn safe_normal(self) -> Self {
        if self.length_squared() <= NEARLY_ZERO * NEARLY_ZERO {
            Vec3::ZERO
        } else {
            self.normalize_or_zero()
        }
    }

    fn rotate_angle_axis(self, angle: f32, axis: Vec3) -> Self {
        let k = axis.safe_normal();
        if k == Vec3::ZERO {
            return self;
        }
        let (sin, cos) = angle.sin_cos();
        // v cosθ + (k × v) sinθ + k (k·v)(1 − cosθ)
        self * cos + k.cross(self) * sin + k * k.dot(self) * (1.0 - cos)
    }
}
