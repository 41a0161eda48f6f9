//! Weapon Position Updater
//!
//! Converts a 2D tangential input (arc lengths along the radial and
//! latitudinal directions) into two rotations of the weapon around the
//! sphere center, then pins the result back onto the sphere.

use glam::{Vec2, Vec3};

use crate::math::{VecExt, WORLD_UP};

/// Local frame of the weapon on the combat sphere. All unit length and
/// mutually orthogonal, or all zero at the poles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TangentAxes {
    pub radial: Vec3,
    pub latitudinal: Vec3,
    pub to_origin: Vec3,
}

impl TangentAxes {
    pub const ZERO: Self = Self {
        radial: Vec3::ZERO,
        latitudinal: Vec3::ZERO,
        to_origin: Vec3::ZERO,
    };
}

/// Rotation angle (radians) that sweeps `arc` along a great circle of
/// radius `arm_length`.
///
/// The full circumference is `2π·arm_length`, so the angle is
/// `2π · arc / (2π·arm_length)`, i.e. `arc / arm_length`.
#[inline]
pub fn arc_to_angle(arc: f32, arm_length: f32) -> f32 {
    arc / arm_length
}

/// Moves `relative` (sphere center to weapon) across the sphere.
///
/// 1. Scale the input into arc lengths by `input_strength`.
/// 2. Yaw by the radial angle around world up.
/// 3. Tilt by the latitudinal angle around `latitudinal × to_origin`, taken
///    from `axes` as they were before this step.
/// 4. Rescale to exactly `arm_length` to cancel rotation drift.
///
/// No validation: NaN in gives NaN out.
pub fn rotate_on_sphere(
    relative: Vec3,
    axes: TangentAxes,
    tangential_input: Vec2,
    arm_length: f32,
    input_strength: f32,
) -> Vec3 {
    let radial_arc = tangential_input.x * input_strength;
    let latitudinal_arc = tangential_input.y * input_strength;

    let radial_angle = arc_to_angle(radial_arc, arm_length);
    let latitudinal_angle = arc_to_angle(latitudinal_arc, arm_length);

    let tilt_axis = axes.latitudinal.cross(axes.to_origin);

    let swept = relative
        .rotate_angle_axis(radial_angle, WORLD_UP)
        .rotate_angle_axis(latitudinal_angle, tilt_axis);

    swept * (arm_length / swept.length())
}
