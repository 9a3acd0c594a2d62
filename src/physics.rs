//! 1-D vertical integrator for the bird.

use crate::config::GameConfig;
use crate::entities::{BirdState, GravityPhase, InputState};

/// Bird centred vertically, at rest, at the start of its grace window.
pub fn spawn_bird(cfg: &GameConfig) -> BirdState {
    BirdState {
        y: cfg.height / 2.0,
        velocity: 0.0,
        phase: if cfg.grace_ticks > 0 {
            GravityPhase::Initial
        } else {
            GravityPhase::Normal
        },
        grace_ticks: cfg.grace_ticks,
    }
}

pub fn active_gravity(bird: &BirdState, cfg: &GameConfig) -> f32 {
    match bird.phase {
        GravityPhase::Initial => cfg.initial_gravity,
        GravityPhase::Normal => cfg.gravity,
    }
}

/// Advance one tick.  Returns `true` when an auto-flap fired this tick.
///
/// Order: gravity into velocity, auto-flap (may override velocity), velocity
/// into position, grace countdown.
pub fn step(bird: &mut BirdState, input: &mut InputState, cfg: &GameConfig) -> bool {
    bird.velocity += active_gravity(bird, cfg);

    let mut auto_flapped = false;
    if input.flap_held && bird.phase == GravityPhase::Normal {
        input.auto_flap_ticks += 1;
        if input.auto_flap_ticks >= cfg.auto_flap_interval {
            bird.velocity = cfg.flap_impulse * cfg.auto_flap_factor;
            input.auto_flap_ticks = 0;
            auto_flapped = true;
        }
    }

    bird.y += bird.velocity;

    if bird.grace_ticks > 0 {
        bird.grace_ticks -= 1;
        if bird.grace_ticks == 0 {
            bird.phase = GravityPhase::Normal;
        }
    }

    auto_flapped
}

/// Manual flap: full impulse, overriding whatever velocity the bird had.
/// Applies inside the grace window too.
pub fn flap(bird: &mut BirdState, input: &mut InputState, cfg: &GameConfig) {
    bird.velocity = cfg.flap_impulse;
    input.flap_held = true;
    input.auto_flap_ticks = 0;
}

pub fn release_flap(input: &mut InputState) {
    input.flap_held = false;
    input.auto_flap_ticks = 0;
}
