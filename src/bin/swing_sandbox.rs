//! Swing Sandbox
//!
//! Opens a window and feeds real cursor input through the combat pipeline.
//! Nothing is drawn; the weapon pose is logged instead.
//!
//! Run with: `cargo run --bin swing_sandbox -- [config.json]`
//! More detail: `RUST_LOG=swordplay_engine=debug cargo run --bin swing_sandbox`
//!
//! Controls:
//! - Hold right mouse: combat stance
//! - Move mouse: swing (gesture mode) or place (placement mode)
//! - P: toggle gesture / placement
//! - WASD: move the character
//! - ESC: exit

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use swordplay_engine::camera::TopDownCamera;
use swordplay_engine::combat::{CombatCapable, CombatCharacter};
use swordplay_engine::config::{JsonConfig, SandboxConfig, SwingMode};
use swordplay_engine::input::{CursorTracker, SwingDriver, SwingStep};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

/// Character walk speed in meters per second.
const MOVE_SPEED: f32 = 3.0;

/// Seconds between pose reports.
const REPORT_INTERVAL: f32 = 0.5;

#[derive(Debug, Default, Clone, Copy)]
struct MovementKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl MovementKeys {
    fn set(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            _ => {}
        }
    }

    /// World-space walk direction on the ground (camera looks down -Z).
    fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

struct SwingSandboxApp {
    config: SandboxConfig,
    window: Option<Arc<Window>>,
    character: CombatCharacter,
    driver: SwingDriver,
    cursor: CursorTracker,
    movement: MovementKeys,
    actor_position: Vec3,
    last_frame: Instant,
    since_report: f32,
}

impl SwingSandboxApp {
    fn new(config: SandboxConfig) -> Self {
        let (width, height) = config.window_size;
        let camera = TopDownCamera::new(config.camera, Vec2::new(width as f32, height as f32));
        let character = CombatCharacter::new(config.combat.clone(), camera);
        let driver = SwingDriver::new(config.combat.swing_mode);
        Self {
            config,
            window: None,
            character,
            driver,
            cursor: CursorTracker::new(),
            movement: MovementKeys::default(),
            actor_position: Vec3::ZERO,
            last_frame: Instant::now(),
            since_report: 0.0,
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.movement.set(key, pressed);
        if key == KeyCode::KeyP && pressed {
            let mode = match self.driver.mode() {
                SwingMode::Gesture => SwingMode::Placement,
                SwingMode::Placement => SwingMode::Gesture,
            };
            self.driver.set_mode(mode);
        }
    }

    fn handle_combat_button(&mut self, pressed: bool) {
        if pressed {
            self.driver.begin_combat(&mut self.character);
        } else {
            self.driver.end_combat(&mut self.character);
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.actor_position += self.movement.direction() * MOVE_SPEED * dt;
        self.character.update_geometry(self.actor_position);

        let camera = self.character.camera().clone();
        let step = self
            .driver
            .advance(dt, self.cursor.position(), &camera, &mut self.character);
        let cursor_delta = self.cursor.consume_delta();
        if let SwingStep::Dispatched { tangential_input } = step {
            debug!(?cursor_delta, ?tangential_input, "swing input");
        }

        self.since_report += dt;
        if self.since_report >= REPORT_INTERVAL {
            self.since_report = 0.0;
            if self.character.in_combat() {
                info!(
                    weapon = ?self.character.weapon_location(),
                    angular = ?self.character.weapon_angular_momentum(),
                    mode = ?self.driver.mode(),
                    "weapon pose"
                );
            }
        }
    }
}

impl ApplicationHandler for SwingSandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let (width, height) = self.config.window_size;
        let attrs = WindowAttributes::default()
            .with_title("Swing Sandbox")
            .with_inner_size(PhysicalSize::new(width, height));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.character
                    .camera_mut()
                    .set_viewport(size.width as f32, size.height as f32);
                self.last_frame = Instant::now();
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                error!(%err, "failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.character
                    .camera_mut()
                    .set_viewport(size.width as f32, size.height as f32);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if button == MouseButton::Right {
                    self.handle_combat_button(state == ElementState::Pressed);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor
                    .set_position(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => self.cursor.clear(),

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            SandboxConfig::load(&path).with_context(|| format!("loading sandbox config from {path}"))?
        }
        None => SandboxConfig::default(),
    };
    info!(mode = ?config.combat.swing_mode, "starting swing sandbox");

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = SwingSandboxApp::new(config);
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
