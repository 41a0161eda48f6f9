//! Driver Tests - Full Pipeline
//!
//! Cursor samples through the top-down camera into a real combat character.

use glam::{Vec2, Vec3};
use swordplay_engine::camera::TopDownCamera;
use swordplay_engine::combat::{CombatCapable, CombatCharacter};
use swordplay_engine::config::{CombatConfig, SwingMode};
use swordplay_engine::input::{CursorTracker, SkipReason, SwingDriver, SwingState, SwingStep};

const DT: f32 = 1.0 / 60.0;
const CENTER: Vec2 = Vec2::new(640.0, 360.0);

/// Socket straight in front of the sphere center, so the weapon seeds at -Z.
fn front_character() -> CombatCharacter {
    let config = CombatConfig {
        socket_offset: [0.0, 0.5, -1.0],
        ..CombatConfig::default()
    };
    CombatCharacter::new(config, TopDownCamera::default())
}

fn step(
    driver: &mut SwingDriver,
    character: &mut CombatCharacter,
    cursor: Option<Vec2>,
) -> SwingStep {
    character.update_geometry(character.actor_position());
    let camera = character.camera().clone();
    driver.advance(DT, cursor, &camera, character)
}

#[test]
fn test_enter_seeds_in_front() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    driver.begin_combat(&mut character);

    assert!(character.in_combat());
    let rel = character.geometry().weapon_relative_location();
    assert!((rel - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
}

#[test]
fn test_cursor_right_swings_weapon_right() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    driver.begin_combat(&mut character);

    assert_eq!(step(&mut driver, &mut character, Some(CENTER)), SwingStep::Primed);
    let result = step(&mut driver, &mut character, Some(CENTER + Vec2::new(80.0, 0.0)));
    let SwingStep::Dispatched { tangential_input } = result else {
        panic!("expected dispatch, got {result:?}");
    };
    assert!(tangential_input.x < 0.0);
    assert!(tangential_input.y.abs() < 1e-3);

    let weapon = character.weapon_location();
    assert!(weapon.x > 0.0);
    assert!((weapon.y - 0.5).abs() < 1e-3);
}

#[test]
fn test_cursor_up_raises_weapon() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    driver.begin_combat(&mut character);

    step(&mut driver, &mut character, Some(CENTER));
    step(&mut driver, &mut character, Some(CENTER - Vec2::new(0.0, 60.0)));
    assert!(character.weapon_location().y > 0.5);
    assert!(character.weapon_location().x.abs() < 1e-3);
}

#[test]
fn test_swinging_keeps_weapon_on_sphere() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    let mut cursor = CursorTracker::new();
    driver.begin_combat(&mut character);

    for i in 0..240 {
        let t = i as f32 * 0.05;
        cursor.set_position(CENTER + Vec2::new(t.cos() * 150.0, (t * 1.3).sin() * 90.0));
        step(&mut driver, &mut character, cursor.position());

        let sphere = character.combat_sphere();
        if matches!(driver.state(), SwingState::Tracking { .. }) && i > 0 {
            let distance = (character.weapon_location() - sphere.center).length();
            assert!((distance - sphere.radius).abs() < 1e-3, "frame {i}: {distance}");
        }
    }
}

#[test]
fn test_cursor_leaving_window_skips() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    let mut cursor = CursorTracker::new();
    driver.begin_combat(&mut character);

    cursor.set_position(CENTER);
    step(&mut driver, &mut character, cursor.position());
    cursor.clear();
    assert_eq!(
        step(&mut driver, &mut character, cursor.position()),
        SwingStep::Skipped(SkipReason::NoCursor)
    );
    assert_eq!(driver.state(), SwingState::Tracking { previous: CENTER });
}

#[test]
fn test_placement_mode_clamps_to_reach() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Placement);
    driver.begin_combat(&mut character);

    // Far corner of the screen is well outside reach.
    let result = step(&mut driver, &mut character, Some(Vec2::new(1200.0, 40.0)));
    assert!(matches!(result, SwingStep::Placed { .. }));

    let weapon = character.weapon_location();
    let reach = Vec2::new(weapon.x, weapon.z).length();
    assert!((reach - character.config().max_weapon_distance).abs() < 1e-4);
    assert!((weapon.y - 0.5).abs() < 1e-4);
}

#[test]
fn test_end_combat_returns_weapon_to_socket() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);
    driver.begin_combat(&mut character);
    step(&mut driver, &mut character, Some(CENTER));
    step(&mut driver, &mut character, Some(CENTER + Vec2::new(30.0, 30.0)));

    driver.end_combat(&mut character);
    assert!(!character.in_combat());
    assert_eq!(driver.state(), SwingState::Idle);
    assert_eq!(character.weapon_location(), character.socket_location());
    assert_eq!(step(&mut driver, &mut character, Some(CENTER)), SwingStep::Idle);
}

#[test]
fn test_reentry_reseeds_from_socket() {
    let mut character = front_character();
    let mut driver = SwingDriver::new(SwingMode::Gesture);

    driver.begin_combat(&mut character);
    step(&mut driver, &mut character, Some(CENTER));
    step(&mut driver, &mut character, Some(CENTER + Vec2::new(200.0, 0.0)));
    driver.end_combat(&mut character);

    driver.begin_combat(&mut character);
    assert_eq!(driver.state(), SwingState::Entering);
    let rel = character.geometry().weapon_relative_location();
    assert!((rel - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
}
