//! Swing Driver
//!
//! Per-frame input pipeline for combat stance. The host calls
//! [`SwingDriver::advance`] once per frame (after the pawn's
//! `update_geometry`), passing the current cursor sample, a screen
//! deprojector and the pawn. The driver turns cursor motion into either a
//! tangential sweep of the weapon (gesture mode) or a direct placement on the
//! combat plane (placement mode).
//!
//! # States
//!
//! ```text
//! Idle --begin_combat--> Entering --first sample--> Tracking
//!   ^                                                  |
//!   +------------------- end_combat -------------------+
//! ```
//!
//! A frame without a cursor sample is skipped without touching any state. In
//! every other Tracking frame the current sample becomes the previous one,
//! even when the frame is skipped for geometric reasons, so a recovered frame
//! never replays stale motion.

use glam::{Vec2, Vec3};
use tracing::{debug, info};

use crate::camera::ScreenDeprojector;
use crate::combat::{CombatCapable, decompose_into_basis, project_axes_onto_input_plane};
use crate::config::SwingMode;
use crate::math::VecExt;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwingState {
    /// Not in combat; frames are ignored.
    #[default]
    Idle,
    /// Combat just began; waiting for the first cursor sample.
    Entering,
    /// Following the cursor from `previous`.
    Tracking { previous: Vec2 },
}

/// Why a frame produced no weapon update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No cursor position this frame.
    NoCursor,
    /// A cursor sample could not be deprojected.
    NoRay,
    /// A cursor ray missed the camera-facing input plane.
    MissedInputPlane,
    /// The cursor ray missed the combat plane (placement mode).
    MissedCombatPlane,
    /// The weapon frame has no usable projection onto the input plane.
    DegenerateBasis,
}

/// Result of one [`SwingDriver::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwingStep {
    /// Driver is idle.
    Idle,
    /// First sample recorded; no motion yet.
    Primed,
    /// Gesture mode: `handle_mouse_motion` was called with this input.
    Dispatched { tangential_input: Vec2 },
    /// Placement mode: `handle_mouse_location` was called with this point.
    Placed { point: Vec3 },
    Skipped(SkipReason),
}

/// Cursor-to-weapon state machine.
#[derive(Debug, Clone, Default)]
pub struct SwingDriver {
    state: SwingState,
    mode: SwingMode,
    /// Seconds of cursor-bearing frames since the last `begin_combat`
    stance_time: f32,
}

impl SwingDriver {
    pub fn new(mode: SwingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SwingState {
        self.state
    }

    pub fn mode(&self) -> SwingMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.state != SwingState::Idle
    }

    pub fn stance_time(&self) -> f32 {
        self.stance_time
    }

    /// Switches between gesture and placement. Takes effect next frame; the
    /// previous sample is kept so switching never jumps the weapon.
    pub fn set_mode(&mut self, mode: SwingMode) {
        if self.mode != mode {
            info!(?mode, "swing mode changed");
            self.mode = mode;
        }
    }

    /// Puts the pawn in combat stance and starts listening for cursor samples.
    /// No-op while already active.
    pub fn begin_combat(&mut self, pawn: &mut dyn CombatCapable) {
        if self.is_active() {
            return;
        }
        pawn.enter_combat();
        self.state = SwingState::Entering;
        self.stance_time = 0.0;
        info!(mode = ?self.mode, "combat stance begun");
    }

    /// Leaves combat stance from any state and forgets the previous sample.
    pub fn end_combat(&mut self, pawn: &mut dyn CombatCapable) {
        if !self.is_active() {
            return;
        }
        pawn.exit_combat();
        self.state = SwingState::Idle;
        info!(stance_time = self.stance_time, "combat stance ended");
    }

    /// Runs one frame of the pipeline.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame time in seconds
    /// * `cursor` - Cursor position in pixels, `None` when unavailable
    /// * `view` - Deprojects cursor samples into world rays
    /// * `pawn` - Receives the resulting motion or placement
    pub fn advance(
        &mut self,
        dt: f32,
        cursor: Option<Vec2>,
        view: &dyn ScreenDeprojector,
        pawn: &mut dyn CombatCapable,
    ) -> SwingStep {
        if self.state == SwingState::Idle {
            return SwingStep::Idle;
        }
        let Some(current) = cursor else {
            return Self::skipped(SkipReason::NoCursor);
        };
        self.stance_time += dt;

        let previous = match self.state {
            SwingState::Tracking { previous } => Some(previous),
            _ => None,
        };
        self.state = SwingState::Tracking { previous: current };

        let result = match (self.mode, previous) {
            (SwingMode::Gesture, None) => Ok(SwingStep::Primed),
            (SwingMode::Gesture, Some(previous)) => Self::sweep(previous, current, view, pawn),
            (SwingMode::Placement, _) => Self::place(current, view, pawn),
        };

        result.unwrap_or_else(Self::skipped)
    }

    fn skipped(reason: SkipReason) -> SwingStep {
        debug!(?reason, "swing frame skipped");
        SwingStep::Skipped(reason)
    }

    fn sweep(
        previous: Vec2,
        current: Vec2,
        view: &dyn ScreenDeprojector,
        pawn: &mut dyn CombatCapable,
    ) -> Result<SwingStep, SkipReason> {
        let start_ray = view.deproject(previous).ok_or(SkipReason::NoRay)?;
        let end_ray = view.deproject(current).ok_or(SkipReason::NoRay)?;

        let input_plane = pawn.input_plane_from_camera();
        let start = start_ray
            .intersect_plane(&input_plane)
            .ok_or(SkipReason::MissedInputPlane)?;
        let end = end_ray
            .intersect_plane(&input_plane)
            .ok_or(SkipReason::MissedInputPlane)?;
        let motion = end - start;

        let disambiguating = (pawn.combat_sphere().center - pawn.weapon_location()).safe_normal();
        let basis = project_axes_onto_input_plane(
            pawn.weapon_radial_axis(),
            pawn.weapon_latitudinal_axis(),
            disambiguating,
            input_plane.normal,
        );
        if basis.is_degenerate() {
            return Err(SkipReason::DegenerateBasis);
        }

        let tangential_input = decompose_into_basis(motion, &basis, input_plane.normal);
        pawn.handle_mouse_motion(start, tangential_input);
        Ok(SwingStep::Dispatched { tangential_input })
    }

    fn place(
        current: Vec2,
        view: &dyn ScreenDeprojector,
        pawn: &mut dyn CombatCapable,
    ) -> Result<SwingStep, SkipReason> {
        let ray = view.deproject(current).ok_or(SkipReason::NoRay)?;
        let point = ray
            .intersect_plane(&pawn.combat_plane())
            .ok_or(SkipReason::MissedCombatPlane)?;
        pawn.handle_mouse_location(point);
        Ok(SwingStep::Placed { point })
    }
}
