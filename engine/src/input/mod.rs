//! Input Module
//!
//! Window-agnostic cursor tracking and the per-frame swing pipeline. Nothing
//! here depends on winit; the host translates its events into
//! [`CursorTracker`] calls and drives [`SwingDriver::advance`].
//!
//! # Example
//!
//! ```rust,ignore
//! use swordplay_engine::input::{CursorTracker, SwingDriver};
//!
//! let mut cursor = CursorTracker::new();
//! let mut driver = SwingDriver::new(SwingMode::Gesture);
//!
//! driver.begin_combat(&mut character);
//! cursor.set_position(Vec2::new(640.0, 360.0));
//!
//! // Once per frame, after character.update_geometry(..)
//! let camera = character.camera().clone();
//! let step = driver.advance(dt, cursor.position(), &camera, &mut character);
//! ```

pub mod cursor;
pub mod swing;

pub use cursor::CursorTracker;
pub use swing::{SkipReason, SwingDriver, SwingState, SwingStep};
