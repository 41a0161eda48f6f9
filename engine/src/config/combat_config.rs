//! Combat Configuration
//!
//! Tunables for the weapon sphere and the two swing input modes.

use serde::{Deserialize, Serialize};

use super::{ConfigError, JsonConfig};

/// How cursor input drives the weapon while in combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingMode {
    /// Cursor motion sweeps the weapon across the combat sphere.
    #[default]
    Gesture,
    /// The weapon is placed where the cursor meets the combat plane.
    Placement,
}

/// Combat geometry and input tuning.
///
/// Distances are in meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Closest the weapon may be placed to the body (placement mode).
    pub min_weapon_distance: f32,
    /// Farthest the weapon may be placed from the body (placement mode).
    pub max_weapon_distance: f32,
    /// Height of the combat plane and sphere center above the actor origin.
    pub combat_plane_height: f32,
    /// Radius of the combat sphere; also the arm length.
    pub combat_sphere_radius: f32,
    /// Scales planar cursor motion into arc length on the sphere.
    pub input_strength: f32,
    /// Input mode used when combat starts.
    pub swing_mode: SwingMode,
    /// Weapon offset from the actor origin while socketed on the body.
    pub socket_offset: [f32; 3],
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            min_weapon_distance: 0.25,
            max_weapon_distance: 1.0,
            combat_plane_height: 0.5,
            combat_sphere_radius: 2.0,
            input_strength: 1.0,
            swing_mode: SwingMode::Gesture,
            socket_offset: [0.3, 0.9, -0.2],
        }
    }
}

impl JsonConfig for CombatConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.combat_sphere_radius.is_finite() || self.combat_sphere_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "combat_sphere_radius must be positive, got {}",
                self.combat_sphere_radius
            )));
        }
        if self.min_weapon_distance < 0.0 || self.min_weapon_distance > self.max_weapon_distance {
            return Err(ConfigError::Invalid(format!(
                "weapon distance range [{}, {}] is empty or negative",
                self.min_weapon_distance, self.max_weapon_distance
            )));
        }
        if !self.input_strength.is_finite() || !self.combat_plane_height.is_finite() {
            return Err(ConfigError::Invalid(
                "input_strength and combat_plane_height must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
