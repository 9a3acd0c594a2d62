//! The game state machine.
//!
//! `Game` owns the whole session.  The host feeds it input events as they
//! arrive and calls `tick` once per physics step; `tick` returns the snapshot
//! the renderer draws.  All randomness comes through the injected RNG so
//! callers control determinism (tests use a seeded RNG).

use rand::Rng;

use crate::audio::{AudioSink, Cue};
use crate::clock::{PauseCountdown, TickContext, COUNTDOWN_FROM};
use crate::collision;
use crate::config::GameConfig;
use crate::cosmetics::{self, PlayerCosmetics, SelectOutcome};
use crate::entities::{BirdState, GameMode, GameSession, InputState, RenderSnapshot};
use crate::input::{self, InputEvent, Key, MenuButton, ShopTarget};
use crate::obstacles::ObstacleStream;
use crate::persistence::{load_preferences, PreferenceStore};
use crate::physics;

pub struct Game<A: AudioSink, P: PreferenceStore> {
    pub config: GameConfig,
    pub session: GameSession,
    pub bird: BirdState,
    pub obstacles: ObstacleStream,
    pub input: InputState,
    pub cosmetics: PlayerCosmetics,
    /// Running only while in PauseCountdown; started by the first tick there.
    pub countdown: Option<PauseCountdown>,
    pub hovered: Option<MenuButton>,
    pub skin_frame: usize,
    anim_ticks: u32,
    /// Logical tick counter, independent of wall time.
    pub tick_count: u64,
    pub audio: A,
    pub store: P,
}

impl<A: AudioSink, P: PreferenceStore> Game<A, P> {
    /// Load preferences from `store` and sit in the menu with a fresh course.
    pub fn new(config: GameConfig, audio: A, store: P, rng: &mut impl Rng) -> Self {
        let prefs = load_preferences(&store);
        let bird = physics::spawn_bird(&config);
        let obstacles = ObstacleStream::new(&config, rng);
        Game {
            session: GameSession {
                mode: GameMode::Menu,
                score: 0,
                high_score: prefs.high_score,
            },
            bird,
            obstacles,
            input: InputState::default(),
            cosmetics: prefs.cosmetics,
            countdown: None,
            hovered: None,
            skin_frame: 0,
            anim_ticks: 0,
            tick_count: 0,
            audio,
            store,
            config,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.session.mode
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    fn enter(&mut self, mode: GameMode) {
        if self.session.mode != mode {
            tracing::info!(
                from = ?self.session.mode,
                to = ?mode,
                score = self.session.score,
                tick = self.tick_count,
                "mode change"
            );
        }
        self.session.mode = mode;
        if mode != GameMode::Menu {
            self.hovered = None;
        }
        if mode != GameMode::PauseCountdown {
            self.countdown = None;
        }
    }

    /// Score, bird, course, input and animation back to their start values.
    /// The high score and cosmetics survive.
    fn reset_session(&mut self, rng: &mut impl Rng) {
        self.session.score = 0;
        self.bird = physics::spawn_bird(&self.config);
        self.obstacles = ObstacleStream::new(&self.config, rng);
        self.input = InputState::default();
        self.countdown = None;
        self.skin_frame = 0;
        self.anim_ticks = 0;
    }

    fn start_round(&mut self, rng: &mut impl Rng) {
        self.reset_session(rng);
        self.enter(GameMode::Playing);
        self.audio.play(Cue::MusicStart);
    }

    fn quit(&mut self) {
        self.enter(GameMode::Quit);
        self.audio.play(Cue::MusicStop);
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: InputEvent, rng: &mut impl Rng) {
        match event {
            InputEvent::PointerMove(p) => {
                self.hovered = if self.session.mode == GameMode::Menu {
                    input::menu_button_at(p)
                } else {
                    None
                };
            }
            InputEvent::PointerClick(p) => match self.session.mode {
                GameMode::Menu => match input::menu_button_at(p) {
                    Some(MenuButton::Play) => self.start_round(rng),
                    Some(MenuButton::Shop) => self.enter(GameMode::Shop),
                    Some(MenuButton::Quit) => self.quit(),
                    None => {}
                },
                GameMode::Shop => {
                    match input::shop_target_at(p, self.config.height, cosmetics::catalog().len()) {
                        Some(ShopTarget::Back) => self.enter(GameMode::Menu),
                        Some(ShopTarget::Skin(id)) => {
                            self.select_skin(id);
                        }
                        None => {}
                    }
                }
                _ => {}
            },
            InputEvent::KeyUp(Key::Flap) => physics::release_flap(&mut self.input),
            InputEvent::KeyUp(_) => {}
            InputEvent::KeyDown(key) => self.handle_key(key, rng),
        }
    }

    fn handle_key(&mut self, key: Key, rng: &mut impl Rng) {
        match (self.session.mode, key) {
            (GameMode::Playing, Key::Flap) => {
                physics::flap(&mut self.bird, &mut self.input, &self.config);
                self.audio.play(Cue::Flap);
            }
            (GameMode::Playing, Key::Pause) => {
                self.enter(GameMode::Paused);
                self.audio.play(Cue::MusicStop);
            }
            (GameMode::Paused, Key::Pause) => self.enter(GameMode::PauseCountdown),
            (GameMode::PauseCountdown, Key::Pause) => self.enter(GameMode::Paused),
            (GameMode::GameOver, Key::Flap) => self.start_round(rng),
            (
                GameMode::Playing
                | GameMode::Paused
                | GameMode::PauseCountdown
                | GameMode::GameOver,
                Key::Quit,
            ) => self.quit(),
            _ => {}
        }
    }

    /// Wear skin `id`, buying it with the current session score if it is not
    /// owned yet.  Any change is persisted.
    pub fn select_skin(&mut self, id: u32) -> SelectOutcome {
        let outcome = cosmetics::attempt_select(&mut self.cosmetics, id, self.session.score);
        tracing::debug!(id, score = self.session.score, ?outcome, "skin selection");
        if outcome.changed() {
            self.skin_frame = 0;
            self.anim_ticks = 0;
            if let Err(e) = self.store.save_cosmetics(&self.cosmetics) {
                tracing::warn!(error = %e, "could not persist cosmetics");
            }
        }
        outcome
    }

    // ── Per-tick update ───────────────────────────────────────────────────────

    /// Advance one logical tick and return what to draw.
    pub fn tick(&mut self, ctx: TickContext, rng: &mut impl Rng) -> RenderSnapshot {
        self.tick_count += 1;

        match self.session.mode {
            GameMode::Quit => {
                self.reset_session(rng);
                self.enter(GameMode::Menu);
            }
            GameMode::PauseCountdown => {
                let countdown = self
                    .countdown
                    .get_or_insert_with(|| PauseCountdown::start(ctx.now));
                if countdown.update(ctx.now) {
                    self.enter(GameMode::Playing);
                    self.audio.play(Cue::MusicStart);
                }
            }
            GameMode::Playing => self.step_playing(rng),
            GameMode::Menu | GameMode::Shop | GameMode::Paused | GameMode::GameOver => {}
        }

        if self.session.mode.shows_course() {
            self.animate_skin();
        }

        self.snapshot()
    }

    fn step_playing(&mut self, rng: &mut impl Rng) {
        if physics::step(&mut self.bird, &mut self.input, &self.config) {
            self.audio.play(Cue::Flap);
        }

        if self.obstacles.advance(&self.config, rng) {
            self.score_point();
        }

        if let Some(hit) = collision::detect(&self.bird, &self.obstacles, &self.config) {
            tracing::info!(?hit, score = self.session.score, "collision");
            self.enter(GameMode::GameOver);
            self.audio.play(Cue::Death);
            self.audio.play(Cue::MusicStop);
        }
    }

    fn score_point(&mut self) {
        self.session.score += 1;
        self.audio.play(Cue::Point);
        tracing::debug!(score = self.session.score, "obstacle recycled");

        if self.session.score > self.session.high_score {
            self.session.high_score = self.session.score;
            if let Err(e) = self.store.save_high_score(self.session.high_score) {
                tracing::warn!(error = %e, "could not persist high score");
            }
        }
    }

    fn animate_skin(&mut self) {
        self.anim_ticks += 1;
        if self.anim_ticks >= self.config.anim_ticks_per_frame {
            self.anim_ticks = 0;
            let frames = self.cosmetics.selected_skin().frames.len();
            self.skin_frame = if frames == 0 { 0 } else { (self.skin_frame + 1) % frames };
        }
    }

    // ── Render view ───────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> RenderSnapshot {
        let countdown = match self.session.mode {
            GameMode::PauseCountdown => Some(
                self.countdown
                    .map(|c| c.remaining())
                    .unwrap_or(COUNTDOWN_FROM),
            ),
            _ => None,
        };
        RenderSnapshot {
            mode: self.session.mode,
            bird: self.bird,
            obstacles: self.obstacles.ordered(),
            score: self.session.score,
            high_score: self.session.high_score,
            countdown,
            hovered: self.hovered,
            cosmetics: self.cosmetics.clone(),
            skin_frame: self.skin_frame,
            width: self.config.width,
            height: self.config.height,
            pipe_width: self.config.pipe_width,
            pipe_gap: self.config.pipe_gap,
            bird_x: self.config.bird_x,
            bird_size: self.config.bird_size,
        }
    }
}
