use flappy_game::config::GameConfig;
use flappy_game::entities::Obstacle;
use flappy_game::obstacles::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn cfg() -> GameConfig {
    GameConfig::default()
}

fn course(xs: [f32; 3]) -> ObstacleStream {
    ObstacleStream::from_obstacles(xs.map(|x| Obstacle { x, gap_top: 150.0 }))
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_course_is_evenly_spaced() {
    let stream = ObstacleStream::new(&cfg(), &mut seeded_rng());
    let xs: Vec<f32> = stream.iter().map(|o| o.x).collect();
    assert_eq!(xs, vec![400.0, 600.0, 800.0]);
    assert_eq!(stream.iter().count(), OBSTACLE_COUNT);
}

#[test]
fn gap_tops_stay_in_band() {
    let config = cfg();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let stream = ObstacleStream::new(&config, &mut rng);
        for o in stream.iter() {
            assert!(o.gap_top >= 50.0);
            assert!(o.gap_top < 50.0 + config.height - config.pipe_gap - 100.0);
            assert!(o.gap_top + config.pipe_gap < config.height);
        }
    }
}

// ── scroll / recycle ──────────────────────────────────────────────────────────

#[test]
fn scroll_moves_every_obstacle_left() {
    let mut stream = course([100.0, 300.0, 500.0]);
    stream.scroll(&cfg());
    for (o, expected) in stream.iter().zip([98.8, 298.8, 498.8]) {
        assert!((o.x - expected).abs() < 1e-3);
    }
}

#[test]
fn recycle_threshold_is_strict() {
    let config = cfg();
    assert!(!course([-60.0, 140.0, 340.0]).needs_recycle(&config));
    assert!(course([-60.5, 140.0, 340.0]).needs_recycle(&config));
}

#[test]
fn recycle_appends_after_rightmost() {
    let config = cfg();
    let mut stream = course([-61.0, 139.0, 339.0]);
    stream.recycle(&config, &mut seeded_rng());

    assert_eq!(stream.leftmost().x, 139.0);
    assert_eq!(stream.get(1).x, 339.0);
    assert_eq!(stream.rightmost().x, 539.0);
    assert_eq!(stream.ordered().len(), 3);
}

#[test]
fn advance_reports_recycle_once() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut stream = course([-59.5, 140.5, 340.5]);
    assert!(stream.advance(&config, &mut rng));
    assert!(!stream.advance(&config, &mut rng));
}

#[test]
fn long_run_stays_sorted_and_bounded() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut stream = ObstacleStream::new(&config, &mut rng);
    let mut recycled = 0;
    for _ in 0..5000 {
        if stream.advance(&config, &mut rng) {
            recycled += 1;
        }
        let ordered = stream.ordered();
        assert!(ordered[0].x < ordered[1].x && ordered[1].x < ordered[2].x);
        assert!(ordered[0].x >= -config.pipe_width - config.pipe_speed);
    }
    // Pipe i is recycled once 1.2 * t > 460 + 200 * i; i = 0..=27 fit in 5000 ticks
    assert_eq!(recycled, 28);
}
