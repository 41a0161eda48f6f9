//! Input-Space Projection
//!
//! Screen motion lands on the camera-facing input plane, while the weapon
//! moves in its own tangent frame on the sphere. This module builds a 2D
//! basis on the input plane that lines up with the weapon's radial and
//! latitudinal directions and expresses planar motion in it.

use glam::{Vec2, Vec3};

use crate::math::{VecExt, linear_combination_of_basis};

/// Orthonormal pair on the input plane matching the weapon frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputBasis {
    pub radial: Vec3,
    pub latitudinal: Vec3,
}

impl InputBasis {
    pub const ZERO: Self = Self {
        radial: Vec3::ZERO,
        latitudinal: Vec3::ZERO,
    };

    /// True when the projection collapsed and input must be skipped.
    pub fn is_degenerate(&self) -> bool {
        self.radial.is_nearly_zero() || self.latitudinal.is_nearly_zero()
    }
}

/// Projects the weapon's radial axis onto the input plane and completes it
/// into an orthonormal pair.
///
/// The input latitudinal axis is `radial' × normal`, so the result is
/// orthonormal even when the source axes are not parallel to the plane.
/// `_latitudinal_axis` and `_disambiguating_axis` are accepted for resolving
/// the case where the radial axis runs along the plane normal; that case
/// currently returns [`InputBasis::ZERO`].
pub fn project_axes_onto_input_plane(
    radial_axis: Vec3,
    _latitudinal_axis: Vec3,
    _disambiguating_axis: Vec3,
    input_plane_normal: Vec3,
) -> InputBasis {
    let normal = input_plane_normal.safe_normal();
    if normal == Vec3::ZERO {
        return InputBasis::ZERO;
    }

    let radial = (radial_axis - normal * radial_axis.dot(normal)).safe_normal();
    if radial == Vec3::ZERO {
        return InputBasis::ZERO;
    }

    InputBasis {
        radial,
        latitudinal: radial.cross(normal).safe_normal(),
    }
}

/// Splits planar motion into (radial, latitudinal) components.
///
/// Solves against (radial', latitudinal', normal) and drops the normal
/// component, which is ~0 for motion that already lies in the plane.
/// A degenerate basis yields `Vec2::ZERO`.
pub fn decompose_into_basis(planar_motion: Vec3, basis: &InputBasis, plane_normal: Vec3) -> Vec2 {
    let coefficients =
        linear_combination_of_basis(planar_motion, basis.radial, basis.latitudinal, plane_normal);
    coefficients.truncate()
}
