//! Endless obstacle course built from a fixed window of three pipes.
//!
//! The window is an index-rotated array: `head` is the leftmost obstacle and
//! recycling overwrites it in place with a new rightmost one, so the course
//! never allocates.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Obstacle;

pub const OBSTACLE_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleStream {
    slots: [Obstacle; OBSTACLE_COUNT],
    head: usize,
}

fn random_gap_top(cfg: &GameConfig, rng: &mut impl Rng) -> f32 {
    50.0 + rng.gen::<f32>() * cfg.gap_top_span()
}

impl ObstacleStream {
    /// Fresh course: first pipe at `first_pipe_x`, then one every `pipe_spacing`.
    pub fn new(cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let slots = std::array::from_fn(|i| Obstacle {
            x: cfg.first_pipe_x + i as f32 * cfg.pipe_spacing,
            gap_top: random_gap_top(cfg, rng),
        });
        ObstacleStream { slots, head: 0 }
    }

    /// Build from explicit obstacles, leftmost first.
    pub fn from_obstacles(obstacles: [Obstacle; OBSTACLE_COUNT]) -> Self {
        ObstacleStream { slots: obstacles, head: 0 }
    }

    /// Obstacle `i` counted from the left.
    pub fn get(&self, i: usize) -> &Obstacle {
        &self.slots[(self.head + i) % OBSTACLE_COUNT]
    }

    pub fn leftmost(&self) -> &Obstacle {
        self.get(0)
    }

    pub fn rightmost(&self) -> &Obstacle {
        self.get(OBSTACLE_COUNT - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        (0..OBSTACLE_COUNT).map(move |i| self.get(i))
    }

    /// Copy out in left-to-right order.
    pub fn ordered(&self) -> [Obstacle; OBSTACLE_COUNT] {
        std::array::from_fn(|i| *self.get(i))
    }

    pub fn scroll(&mut self, cfg: &GameConfig) {
        for obstacle in self.slots.iter_mut() {
            obstacle.x -= cfg.pipe_speed;
        }
    }

    /// The leftmost pipe's right edge has left the screen.
    pub fn needs_recycle(&self, cfg: &GameConfig) -> bool {
        self.leftmost().x < -cfg.pipe_width
    }

    /// Replace the leftmost pipe with a new one `pipe_spacing` past the rightmost.
    pub fn recycle(&mut self, cfg: &GameConfig, rng: &mut impl Rng) {
        let x = self.rightmost().x + cfg.pipe_spacing;
        self.slots[self.head] = Obstacle {
            x,
            gap_top: random_gap_top(cfg, rng),
        };
        self.head = (self.head + 1) % OBSTACLE_COUNT;
    }

    /// Scroll one tick and recycle if needed.  Returns `true` when a pipe was
    /// recycled (one scoring event).
    pub fn advance(&mut self, cfg: &GameConfig, rng: &mut impl Rng) -> bool {
        self.scroll(cfg);
        if self.needs_recycle(cfg) {
            self.recycle(cfg, rng);
            true
        } else {
            false
        }
    }
}
