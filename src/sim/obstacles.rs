//! Obstacle movement and retirement

use super::state::GameState;

/// Advance every live obstacle one tick and drop the ones that left the
/// playfield. Each ground obstacle retired scores one point; falling
/// obstacles leave the score alone.
///
/// Returns the number of ground obstacles retired.
pub fn advance_obstacles(state: &mut GameState) -> u32 {
    let before = state.obstacles.len();
    state.obstacles = std::mem::take(&mut state.obstacles)
        .into_iter()
        .filter_map(|mut obs| {
            obs.advance();
            (!obs.is_offscreen()).then_some(obs)
        })
        .collect();
    let retired = (before - state.obstacles.len()) as u32;
    state.score += retired;

    state.falling = std::mem::take(&mut state.falling)
        .into_iter()
        .filter_map(|mut f| {
            f.advance();
            (!f.is_offscreen()).then_some(f)
        })
        .collect();

    retired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{FallingObstacle, GroundObstacle, ObstacleColor, ObstacleKind};

    fn ground_at(x: i32) -> GroundObstacle {
        GroundObstacle::new(ObstacleKind::SmallCactus, x, ObstacleColor::DarkGreen)
    }

    #[test]
    fn test_ground_obstacle_moves_left() {
        let mut state = GameState::new(1);
        state.obstacles.push(ground_at(400));
        advance_obstacles(&mut state);
        assert_eq!(state.obstacles[0].pos.x, 400 - GROUND_OBSTACLE_SPEED);
        assert_eq!(state.obstacles[0].rotation, ROTATION_STEP);
    }

    #[test]
    fn test_retire_scores_exactly_one_each() {
        let mut state = GameState::new(1);
        // Small cactus is 30 wide: right edge at 0 survives, at -1 retires
        state.obstacles.push(ground_at(-30 + GROUND_OBSTACLE_SPEED));
        state.obstacles.push(ground_at(-30 + GROUND_OBSTACLE_SPEED - 1));
        state.obstacles.push(ground_at(200));

        let retired = advance_obstacles(&mut state);
        assert_eq!(retired, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].pos.x, -30);
    }

    #[test]
    fn test_adjacent_retirements_are_not_skipped() {
        let mut state = GameState::new(1);
        for _ in 0..3 {
            state.obstacles.push(ground_at(-40));
        }
        state.obstacles.push(ground_at(100));
        state.obstacles.push(ground_at(-40));

        assert_eq!(advance_obstacles(&mut state), 4);
        assert_eq!(state.score, 4);
        assert_eq!(state.obstacles.len(), 1);
        // Survivor was advanced exactly once
        assert_eq!(state.obstacles[0].pos.x, 100 - GROUND_OBSTACLE_SPEED);
    }

    #[test]
    fn test_falling_retirement_does_not_score() {
        let mut state = GameState::new(1);
        let mut f = FallingObstacle::new(0);
        f.pos.y = PLAYFIELD_HEIGHT;
        state.falling.push(f);
        state.falling.push(FallingObstacle::new(10));

        assert_eq!(advance_obstacles(&mut state), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.falling.len(), 1);
        assert_eq!(state.falling[0].pos.y, FALLING_START_Y + FALLING_SPEED);
    }

    #[test]
    fn test_falling_obstacle_lifetime() {
        let mut state = GameState::new(1);
        state.falling.push(FallingObstacle::new(100));

        let mut ticks = 0;
        while !state.falling.is_empty() {
            advance_obstacles(&mut state);
            ticks += 1;
        }

        // ceil((300 + 30) / 4)
        let expected = (PLAYFIELD_HEIGHT - FALLING_START_Y + FALLING_SPEED - 1) / FALLING_SPEED;
        assert_eq!(ticks, expected);
        assert_eq!(ticks, 83);
    }
}
