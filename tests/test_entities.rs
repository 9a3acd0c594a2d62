use flappy_game::compute::Game;
use flappy_game::audio::NullAudio;
use flappy_game::config::GameConfig;
use flappy_game::entities::*;
use flappy_game::persistence::MemoryStore;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn course_is_shown_in_gameplay_modes_only() {
    assert!(GameMode::Playing.shows_course());
    assert!(GameMode::Paused.shows_course());
    assert!(GameMode::PauseCountdown.shows_course());
    assert!(GameMode::GameOver.shows_course());

    assert!(!GameMode::Menu.shows_course());
    assert!(!GameMode::Shop.shows_course());
    assert!(!GameMode::Quit.shows_course());
}

#[test]
fn snapshot_clone_is_independent() {
    let game = Game::new(
        GameConfig::default(),
        NullAudio,
        MemoryStore::default(),
        &mut StdRng::seed_from_u64(7),
    );
    let original = game.snapshot();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.y = 1.0;
    cloned.score = 999;
    cloned.cosmetics.unlocked.insert(2);
    cloned.obstacles[0].x = -500.0;

    assert_eq!(original.bird.y, 300.0);
    assert_eq!(original.score, 0);
    assert!(!original.cosmetics.unlocked.contains(&2));
    assert_eq!(original.obstacles[0].x, 400.0);
}

#[test]
fn input_state_defaults_to_released() {
    let input = InputState::default();
    assert!(!input.flap_held);
    assert_eq!(input.auto_flap_ticks, 0);
}
