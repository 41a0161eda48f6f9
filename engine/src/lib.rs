//! Swordplay Engine Library
//!
//! Input core for mouse-driven melee combat. While the player holds combat
//! stance, the weapon is constrained to a sphere around the character and
//! cursor motion sweeps it across that sphere, projected through a top-down
//! camera into the weapon's own tangent frame.
//!
//! # Modules
//!
//! - [`math`] - Vector helpers, planes, spheres, rays and the small solvers
//! - [`combat`] - Combat geometry, input projection, the weapon updater and the combat character
//! - [`camera`] - Top-down boom camera and screen deprojection
//! - [`input`] - Cursor tracking and the per-frame swing driver
//! - [`config`] - JSON-backed tunables
//!
//! # Example
//!
//! ```ignore
//! use swordplay_engine::camera::TopDownCamera;
//! use swordplay_engine::combat::{CombatCapable, CombatCharacter};
//! use swordplay_engine::config::{CombatConfig, SwingMode};
//! use swordplay_engine::input::{CursorTracker, SwingDriver};
//!
//! let mut character = CombatCharacter::new(CombatConfig::default(), TopDownCamera::default());
//! let mut driver = SwingDriver::new(SwingMode::Gesture);
//! let mut cursor = CursorTracker::new();
//!
//! driver.begin_combat(&mut character);
//!
//! // Each frame
//! character.update_geometry(actor_position);
//! let camera = character.camera().clone();
//! driver.advance(dt, cursor.position(), &camera, &mut character);
//! ```

pub mod camera;
pub mod combat;
pub mod config;
pub mod input;
pub mod math;

pub use camera::{ScreenDeprojector, TopDownCamera};
pub use combat::{CombatCapable, CombatCharacter, CombatGeometry};
pub use config::{CombatConfig, ConfigError, JsonConfig, SwingMode};
pub use input::{CursorTracker, SwingDriver, SwingStep};
