//! Camera Module
//!
//! Top-down camera and screen deprojection for the combat input pipeline.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod raycast;
pub mod top_down;

pub use raycast::{ScreenDeprojector, deproject_ndc, screen_to_ndc};
pub use top_down::TopDownCamera;
