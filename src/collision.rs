//! Bird-versus-world overlap tests.
//!
//! All comparisons are strict, so a bird edge exactly touching a pipe edge
//! or the ceiling/floor is not a hit.

use crate::config::GameConfig;
use crate::entities::{BirdState, Obstacle};
use crate::obstacles::ObstacleStream;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    /// Index counted from the leftmost obstacle.
    Obstacle(usize),
    Ceiling,
    Floor,
}

pub fn hits_obstacle(bird: &BirdState, obstacle: &Obstacle, cfg: &GameConfig) -> bool {
    let half = cfg.half_bird();
    let overlaps_column =
        cfg.bird_x + half > obstacle.x && cfg.bird_x - half < obstacle.x + cfg.pipe_width;
    let outside_gap =
        bird.y - half < obstacle.gap_top || bird.y + half > obstacle.gap_top + cfg.pipe_gap;
    overlaps_column && outside_gap
}

pub fn hits_bounds(bird: &BirdState, cfg: &GameConfig) -> Option<Collision> {
    let half = cfg.half_bird();
    if bird.y + half > cfg.height {
        Some(Collision::Floor)
    } else if bird.y - half < 0.0 {
        Some(Collision::Ceiling)
    } else {
        None
    }
}

/// First collision found, obstacles left to right before the bounds.
pub fn detect(bird: &BirdState, obstacles: &ObstacleStream, cfg: &GameConfig) -> Option<Collision> {
    obstacles
        .iter()
        .position(|o| hits_obstacle(bird, o, cfg))
        .map(Collision::Obstacle)
        .or_else(|| hits_bounds(bird, cfg))
}
