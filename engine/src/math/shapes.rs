//! Plane, sphere and ray value types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{NEARLY_ZERO, VecExt};

/// Infinite plane: every point `p` on it satisfies `normal.dot(p) == w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`
    pub w: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::Y,
            w: 0.0,
        }
    }
}

impl Plane {
    /// Plane through `point` facing `normal`. The normal is normalized
    /// with safe-normal semantics, so a zero normal yields a zero plane.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.safe_normal();
        Self {
            normal,
            w: normal.dot(point),
        }
    }

    /// The point of the plane closest to the origin.
    pub fn origin(&self) -> Vec3 {
        self.normal * self.w
    }

    /// Positive on the side the normal points to.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.w
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Removes the normal component of `vector`.
    pub fn project_vector(&self, vector: Vec3) -> Vec3 {
        vector - self.normal * vector.dot(self.normal)
    }

    /// True when the normal has collapsed to zero.
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_nearly_zero()
    }
}

/// Sphere in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Closest point on the surface to `point`, `None` when `point` is the center.
    pub fn closest_surface_point(&self, point: Vec3) -> Option<Vec3> {
        let dir = (point - self.center).safe_normal();
        if dir == Vec3::ZERO {
            return None;
        }
        Some(self.center + dir * self.radius)
    }
}

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`. Returns `None` for a zero direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.safe_normal();
        if direction == Vec3::ZERO {
            return None;
        }
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Forward hit against `plane`. Hits behind the origin and parallel
    /// rays return `None`.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < NEARLY_ZERO {
            return None;
        }
        let t = (plane.w - plane.normal.dot(self.origin)) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}
