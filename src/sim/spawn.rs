//! Obstacle spawning and the difficulty curve
//!
//! Ground spawns get more frequent as the score rises, and the course pool
//! unlocks in three stages. All randomness comes from the caller's `Rng`.

use rand::Rng;

use super::state::{Course, FallingObstacle, GameState, GroundObstacle, ObstacleColor, ObstacleKind};
use crate::consts::*;

/// Score at which the middle course tier unlocks
pub const MID_TIER_SCORE: u32 = 3;
/// Score at which every course is in play
pub const TOP_TIER_SCORE: u32 = 8;

/// Ticks between ground spawns at a given score
pub fn spawn_interval(score: u32) -> u32 {
    BASE_SPAWN_INTERVAL
        .saturating_sub(score / 3)
        .max(MIN_SPAWN_INTERVAL)
}

/// Courses that may appear at a given score
pub fn course_pool(score: u32) -> &'static [Course] {
    let unlocked = if score < MID_TIER_SCORE {
        2
    } else if score < TOP_TIER_SCORE {
        5
    } else {
        9
    };
    &Course::ALL[..unlocked]
}

/// Weighted draw over ten buckets: 2 classic, 3 bug, 5 course
pub fn pick_kind<R: Rng + ?Sized>(rng: &mut R, score: u32) -> ObstacleKind {
    let roll = rng.random_range(0..10);
    if roll < 2 {
        if rng.random_range(0..2) == 0 {
            ObstacleKind::SmallCactus
        } else {
            ObstacleKind::LargeCactus
        }
    } else if roll < 5 {
        ObstacleKind::SyntaxError
    } else {
        let pool = course_pool(score);
        ObstacleKind::Course(pool[rng.random_range(0..pool.len())])
    }
}

pub fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> ObstacleColor {
    let palette = &ObstacleColor::PALETTE;
    palette[rng.random_range(0..palette.len())]
}

/// Advance both spawn timers and add whatever fires this tick
pub fn update_spawns(state: &mut GameState) {
    state.ground_timer += 1;
    if state.ground_timer >= spawn_interval(state.score) {
        let kind = pick_kind(&mut state.rng, state.score);
        let color = pick_color(&mut state.rng);
        log::debug!("Spawn {:?} at score {}", kind, state.score);
        state
            .obstacles
            .push(GroundObstacle::new(kind, PLAYFIELD_WIDTH, color));
        state.ground_timer = 0;
    }

    state.falling_timer += 1;
    if state.falling_timer >= FALLING_SPAWN_TICKS {
        let x = state.rng.random_range(0..PLAYFIELD_WIDTH - FALLING_SIZE);
        log::debug!("Spawn falling obstacle at x={}", x);
        state.falling.push(FallingObstacle::new(x));
        state.falling_timer = 0;
    }
}
