use flappy_game::config::GameConfig;
use flappy_game::entities::*;
use flappy_game::physics::*;

fn cfg() -> GameConfig {
    GameConfig::default()
}

fn normal_bird(y: f32, velocity: f32) -> BirdState {
    BirdState {
        y,
        velocity,
        phase: GravityPhase::Normal,
        grace_ticks: 0,
    }
}

// ── spawn_bird ────────────────────────────────────────────────────────────────

#[test]
fn spawn_is_centred_and_at_rest() {
    let bird = spawn_bird(&cfg());
    assert_eq!(bird.y, 300.0);
    assert_eq!(bird.velocity, 0.0);
    assert_eq!(bird.phase, GravityPhase::Initial);
    assert_eq!(bird.grace_ticks, 60);
}

#[test]
fn spawn_without_grace_window_is_normal() {
    let config = GameConfig { grace_ticks: 0, ..cfg() };
    assert_eq!(spawn_bird(&config).phase, GravityPhase::Normal);
}

// ── step ──────────────────────────────────────────────────────────────────────

#[test]
fn step_adds_gravity_then_velocity() {
    let config = cfg();
    let mut bird = normal_bird(100.0, 1.0);
    let mut input = InputState::default();
    step(&mut bird, &mut input, &config);
    assert!((bird.velocity - 1.18).abs() < 1e-6);
    assert!((bird.y - 101.18).abs() < 1e-4);
}

#[test]
fn grace_window_uses_initial_gravity_then_expires() {
    let config = cfg();
    let mut bird = spawn_bird(&config);
    let mut input = InputState::default();

    for _ in 0..59 {
        assert_eq!(active_gravity(&bird, &config), config.initial_gravity);
        step(&mut bird, &mut input, &config);
    }
    assert_eq!(bird.phase, GravityPhase::Initial);
    assert_eq!(bird.grace_ticks, 1);

    step(&mut bird, &mut input, &config);
    assert_eq!(bird.phase, GravityPhase::Normal);
    assert_eq!(active_gravity(&bird, &config), config.gravity);
}

#[test]
fn velocity_grows_monotonically_without_flaps() {
    let config = cfg();
    let mut bird = spawn_bird(&config);
    let mut input = InputState::default();
    let mut last = bird.velocity;
    for _ in 0..100 {
        step(&mut bird, &mut input, &config);
        assert!(bird.velocity > last);
        last = bird.velocity;
    }
}

#[test]
fn auto_flap_fires_every_interval_while_held() {
    let config = cfg();
    let mut bird = normal_bird(300.0, 0.0);
    let mut input = InputState { flap_held: true, auto_flap_ticks: 0 };

    let fired: Vec<bool> = (0..36)
        .map(|_| step(&mut bird, &mut input, &config))
        .collect();
    let fire_ticks: Vec<usize> = fired
        .iter()
        .enumerate()
        .filter(|(_, f)| **f)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(fire_ticks, vec![18, 36]);
}

#[test]
fn auto_flap_needs_the_key_held() {
    let config = cfg();
    let mut bird = normal_bird(300.0, 0.0);
    let mut input = InputState::default();
    for _ in 0..40 {
        assert!(!step(&mut bird, &mut input, &config));
    }
    assert_eq!(input.auto_flap_ticks, 0);
}

// ── flap / release ────────────────────────────────────────────────────────────

#[test]
fn flap_overrides_any_velocity() {
    let config = cfg();
    for v in [-10.0, -5.0, 0.0, 3.3, 12.0] {
        let mut bird = normal_bird(300.0, v);
        let mut input = InputState { flap_held: false, auto_flap_ticks: 7 };
        flap(&mut bird, &mut input, &config);
        assert_eq!(bird.velocity, config.flap_impulse);
        assert!(input.flap_held);
        assert_eq!(input.auto_flap_ticks, 0);
    }
}

#[test]
fn release_clears_hold_and_counter() {
    let mut input = InputState { flap_held: true, auto_flap_ticks: 11 };
    release_flap(&mut input);
    assert_eq!(input, InputState::default());
}
