//! Cursor Tracker
//!
//! Window-agnostic cursor position in screen pixels (origin top-left), fed
//! from the host's event loop and read once per frame by the swing driver.
//! The cursor is "unavailable" until the first move event and again after it
//! leaves the window.

use glam::Vec2;

/// Tracks the last known cursor position and the motion since the last frame.
///
/// # Example
///
/// ```rust,ignore
/// use swordplay_engine::input::CursorTracker;
///
/// let mut cursor = CursorTracker::new();
/// cursor.set_position(Vec2::new(640.0, 360.0));
/// cursor.set_position(Vec2::new(650.0, 355.0));
///
/// let delta = cursor.consume_delta();
/// // delta = (10.0, -5.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    position: Option<Vec2>,
    /// Motion accumulated since the last `consume_delta`.
    delta: Vec2,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move event.
    ///
    /// The first sample after the cursor (re)enters the window does not add
    /// to the delta, so re-entry never produces a jump.
    pub fn set_position(&mut self, position: Vec2) {
        if let Some(previous) = self.position {
            self.delta += position - previous;
        }
        self.position = Some(position);
    }

    /// Cursor left the window.
    pub fn clear(&mut self) {
        self.position = None;
        self.delta = Vec2::ZERO;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.position.is_some()
    }

    /// Returns the accumulated motion and resets it to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }
}
