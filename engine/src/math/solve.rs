//! Linear solves and line intersections.

use glam::{Mat3, Vec3};

use super::{NEARLY_ZERO, Plane, Sphere, VecExt};

/// Determinant, relative to the product of the basis lengths, below which
/// a basis counts as singular.
const SINGULAR_DETERMINANT: f32 = 1e-6;

/// Returns `[a, b, c]` such that `v = a*u + b*w1 + c*w2`.
///
/// The basis does not have to be orthonormal. A nearly-zero basis vector or
/// a (near-)singular basis returns `Vec3::ZERO`, which callers treat as
/// "skip this update".
pub fn linear_combination_of_basis(v: Vec3, u: Vec3, w1: Vec3, w2: Vec3) -> Vec3 {
    if u.is_nearly_zero() || w1.is_nearly_zero() || w2.is_nearly_zero() {
        return Vec3::ZERO;
    }

    let basis = Mat3::from_cols(u, w1, w2);
    let scale = u.length() * w1.length() * w2.length();
    if basis.determinant().abs() < SINGULAR_DETERMINANT * scale {
        return Vec3::ZERO;
    }

    basis.inverse() * v
}

/// Both points where a line crosses a sphere.
///
/// `p1 = start + t1 * dir` and `p2 = start + t2 * dir`, with `|t1| <= |t2|`.
/// The ordering is by parameter magnitude, so when the line starts inside
/// the sphere `t1` and `t2` can have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereHit {
    pub p1: Vec3,
    pub p2: Vec3,
    pub t1: f32,
    pub t2: f32,
}

/// Line (not ray) against sphere.
///
/// Solves `A t² + B t + C = 0` with
/// `A = |dir|²`, `B = 2 dir·(start − center)`, `C = |center − start|² − r²`.
/// A tangent line returns the same point twice. `dir` must be non-zero.
pub fn line_sphere_intersection(start: Vec3, dir: Vec3, sphere: &Sphere) -> Option<SphereHit> {
    if dir.is_nearly_zero() {
        return None;
    }

    let offset = start - sphere.center;
    let a = dir.length_squared();
    let b = 2.0 * dir.dot(offset);
    let c = offset.length_squared() - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);
    let (t1, t2) = if near.abs() <= far.abs() {
        (near, far)
    } else {
        (far, near)
    };

    Some(SphereHit {
        p1: start + dir * t1,
        p2: start + dir * t2,
        t1,
        t2,
    })
}

/// Line (not ray) against plane. Returns the point and its line parameter,
/// or `None` when the line runs parallel to the plane.
pub fn line_plane_intersection(start: Vec3, dir: Vec3, plane: &Plane) -> Option<(Vec3, f32)> {
    let denom = plane.normal.dot(dir);
    if dir.is_nearly_zero() || denom.abs() < NEARLY_ZERO {
        return None;
    }
    let t = (plane.w - plane.normal.dot(start)) / denom;
    Some((start + dir * t, t))
}
