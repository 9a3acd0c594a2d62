use std::time::{Duration, Instant};

use flappy_game::clock::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── FixedStep ─────────────────────────────────────────────────────────────────

#[test]
fn first_advance_only_primes() {
    let mut step = FixedStep::default();
    assert_eq!(step.advance(Instant::now()), 0);
}

#[test]
fn one_tick_per_step() {
    let t0 = Instant::now();
    let mut step = FixedStep::default();
    step.advance(t0);
    assert_eq!(step.advance(t0 + ms(16)), 1);
    assert_eq!(step.advance(t0 + ms(20)), 0);
}

#[test]
fn remainder_carries_over() {
    let t0 = Instant::now();
    let mut step = FixedStep::default();
    step.advance(t0);
    assert_eq!(step.advance(t0 + ms(10)), 0);
    assert_eq!(step.advance(t0 + ms(20)), 1);
    assert_eq!(step.advance(t0 + ms(40)), 1);
    // 40 ms elapsed in total, 32 consumed, 8 carried
    assert_eq!(step.advance(t0 + ms(48)), 1);
}

#[test]
fn long_stall_is_clamped() {
    let t0 = Instant::now();
    let mut step = FixedStep::default();
    step.advance(t0);
    assert_eq!(step.advance(t0 + Duration::from_secs(5)), 6);
}

#[test]
fn backwards_time_yields_nothing() {
    let t0 = Instant::now() + ms(50);
    let mut step = FixedStep::default();
    step.advance(t0);
    assert_eq!(step.advance(t0 - ms(30)), 0);
}

// ── PauseCountdown ────────────────────────────────────────────────────────────

#[test]
fn countdown_steps_once_per_second() {
    let t0 = Instant::now();
    let mut countdown = PauseCountdown::start(t0);
    assert_eq!(countdown.remaining(), COUNTDOWN_FROM);

    assert!(!countdown.update(t0 + ms(999)));
    assert_eq!(countdown.remaining(), 3);
    assert!(!countdown.update(t0 + ms(1000)));
    assert_eq!(countdown.remaining(), 2);
    assert!(!countdown.update(t0 + ms(2000)));
    assert_eq!(countdown.remaining(), 1);
    assert!(countdown.update(t0 + ms(3000)));
    assert_eq!(countdown.remaining(), 0);
}

#[test]
fn countdown_takes_one_step_per_update() {
    let t0 = Instant::now();
    let mut countdown = PauseCountdown::start(t0);
    assert!(!countdown.update(t0 + ms(5000)));
    assert_eq!(countdown.remaining(), 2);
}

#[test]
fn finished_countdown_stays_at_zero() {
    let t0 = Instant::now();
    let mut countdown = PauseCountdown::start(t0);
    for s in 1..=3 {
        countdown.update(t0 + ms(1000 * s));
    }
    assert!(countdown.update(t0 + ms(9000)));
    assert_eq!(countdown.remaining(), 0);
}
