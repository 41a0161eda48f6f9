//! Rotational kinematics between two positions around a common origin.
//!
//! Angular momentum here is a per-step quantity: its direction is the
//! rotation axis and its magnitude is the angle (radians) swept in that step.
//! The axis follows the **left-hand rule** (`b × a` for a move from `a` to
//! `b`), so [`extrapolate_point_from_angular_momentum`] applies it clockwise.

use glam::{Quat, Vec3};

use super::VecExt;

/// Angular and linear momentum of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Momentum {
    /// Rotation axis scaled by the swept angle
    pub angular: Vec3,
    /// Direction of travel at the end point, scaled by the same angle
    pub linear: Vec3,
}

impl Momentum {
    pub const ZERO: Self = Self {
        angular: Vec3::ZERO,
        linear: Vec3::ZERO,
    };

    /// Swept angle in radians.
    pub fn angle(&self) -> f32 {
        self.angular.length()
    }
}

/// Momentum of a point that moved from `a` to `b` (both relative to the
/// rotation origin).
///
/// The linear term reuses the angular magnitude instead of deriving a
/// separate speed.
pub fn angular_and_linear_momentum(a: Vec3, b: Vec3) -> Momentum {
    if (a - b).is_nearly_zero() {
        return Momentum::ZERO;
    }
    let (from, to) = (a.safe_normal(), b.safe_normal());
    if from == Vec3::ZERO || to == Vec3::ZERO {
        return Momentum::ZERO;
    }

    let (_, angle) = Quat::from_rotation_arc(from, to).to_axis_angle();
    let rotational_axis = b.cross(a).safe_normal();
    let linear_axis = b.cross(rotational_axis).safe_normal();

    Momentum {
        angular: rotational_axis * angle,
        linear: linear_axis * angle,
    }
}

/// Where `point` ends up after one step of `angular_momentum` about `origin`.
pub fn extrapolate_point_from_angular_momentum(
    origin: Vec3,
    point: Vec3,
    angular_momentum: Vec3,
) -> Vec3 {
    let angle = angular_momentum.length();
    if angular_momentum.is_nearly_zero() {
        return point;
    }
    origin + (point - origin).rotate_angle_axis(-angle, angular_momentum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_same_point_has_no_momentum() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(angular_and_linear_momentum(p, p), Momentum::ZERO);
    }

    #[test]
    fn test_quarter_turn_momentum() {
        let m = angular_and_linear_momentum(Vec3::X, Vec3::Y);
        assert!((m.angle() - FRAC_PI_2).abs() < 1e-5);
        // Left-hand rule axis for X -> Y
        assert!((m.angular.normalize() - Vec3::NEG_Z).length() < 1e-5);
        // Travelling along -X when arriving at +Y
        assert!((m.linear.normalize() - Vec3::NEG_X).length() < 1e-5);
        assert!((m.linear.length() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_extrapolation_reproduces_step() {
        let a = Vec3::new(2.0, 0.5, -1.0);
        let b = Vec3::new(-0.5, 1.5, -1.7);
        let b = b.normalize() * a.length();
        let m = angular_and_linear_momentum(a, b);
        let predicted = extrapolate_point_from_angular_momentum(Vec3::ZERO, a, m.angular);
        assert!((predicted - b).length() < 1e-4);
    }

    #[test]
    fn test_extrapolation_continues_motion() {
        let m = angular_and_linear_momentum(Vec3::X, Vec3::Y);
        let next = extrapolate_point_from_angular_momentum(Vec3::ZERO, Vec3::Y, m.angular);
        assert!((next - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_extrapolation_about_offset_origin() {
        let origin = Vec3::new(10.0, 0.0, 0.0);
        let point = origin + Vec3::X;
        let next = extrapolate_point_from_angular_momentum(origin, point, Vec3::ZERO);
        assert_eq!(next, point);
    }
}
