//! All game entity types. Pure data, no logic.

use crate::cosmetics::PlayerCosmetics;
use crate::input::MenuButton;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Shop,
    Playing,
    Paused,
    /// "Get ready" countdown between Paused and Playing.
    PauseCountdown,
    GameOver,
    /// Transient: the next tick resets the session and returns to Menu.
    Quit,
}

impl GameMode {
    /// Modes that show the course (bird, obstacles, score) behind any overlay.
    pub fn shows_course(&self) -> bool {
        matches!(
            self,
            GameMode::Playing | GameMode::Paused | GameMode::PauseCountdown | GameMode::GameOver
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GravityPhase {
    /// Grace window after a (re)start: weaker gravity, no auto-flap.
    Initial,
    Normal,
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirdState {
    /// Vertical centre in world units (0 = ceiling).
    pub y: f32,
    /// Positive = falling.
    pub velocity: f32,
    pub phase: GravityPhase,
    /// Ticks left in the grace window.
    pub grace_ticks: u32,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// A pipe pair: solid above `gap_top` and below `gap_top + pipe_gap`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f32,
    pub gap_top: f32,
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub mode: GameMode,
    pub score: u32,
    /// Never decreases.
    pub high_score: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub flap_held: bool,
    pub auto_flap_ticks: u32,
}

// ── Snapshot handed to the renderer ──────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub mode: GameMode,
    pub bird: BirdState,
    /// Ordered left to right.
    pub obstacles: [Obstacle; 3],
    pub score: u32,
    pub high_score: u32,
    /// Digit shown during PauseCountdown.
    pub countdown: Option<u8>,
    pub hovered: Option<MenuButton>,
    pub cosmetics: PlayerCosmetics,
    pub skin_frame: usize,
    pub width: f32,
    pub height: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub bird_x: f32,
    pub bird_size: f32,
}
