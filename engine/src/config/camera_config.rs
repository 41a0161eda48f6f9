//! Camera Configuration
//!
//! Boom and lens settings for the top-down camera.

use serde::{Deserialize, Serialize};

use super::{ConfigError, JsonConfig};

/// Top-down boom camera settings.
///
/// The boom keeps a fixed world rotation, so the camera does not turn with
/// the actor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the focus point to the camera (meters)
    pub boom_length: f32,
    /// Boom pitch in degrees, negative looks down
    pub pitch_degrees: f32,
    /// Boom yaw in degrees around world up
    pub yaw_degrees: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            boom_length: 8.0,
            pitch_degrees: -60.0,
            yaw_degrees: 0.0,
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl JsonConfig for CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.boom_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "boom_length must be positive, got {}",
                self.boom_length
            )));
        }
        if !(-89.0..=89.0).contains(&self.pitch_degrees) {
            return Err(ConfigError::Invalid(format!(
                "pitch_degrees must be within [-89, 89], got {}",
                self.pitch_degrees
            )));
        }
        if self.fov_degrees <= 1.0 || self.fov_degrees >= 179.0 {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees out of range: {}",
                self.fov_degrees
            )));
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(ConfigError::Invalid(format!(
                "clip range [{}, {}] is invalid",
                self.near, self.far
            )));
        }
        Ok(())
    }
}
