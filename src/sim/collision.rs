//! Axis-aligned hitbox collision
//!
//! Edges are exclusive: two rectangles intersect only when their overlap has
//! positive area. Rectangles that merely share an edge or a corner do not
//! collide, and empty rectangles never collide with anything.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{FallingObstacle, GroundObstacle, Player};

/// Integer rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Positive-area overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}

/// Check the player against every live obstacle
pub fn player_hits_any(
    player: &Player,
    obstacles: &[GroundObstacle],
    falling: &[FallingObstacle],
) -> bool {
    let hitbox = player.rect();
    obstacles.iter().any(|o| hitbox.intersects(&o.rect()))
        || falling.iter().any(|f| hitbox.intersects(&f.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Course, ObstacleColor, ObstacleKind};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn test_overlap_intersects() {
        assert!(rect(0, 0, 10, 10).intersects(&rect(5, 5, 10, 10)));
        assert!(rect(5, 5, 10, 10).intersects(&rect(0, 0, 10, 10)));
        // Containment
        assert!(rect(0, 0, 100, 100).intersects(&rect(40, 40, 1, 1)));
    }

    #[test]
    fn test_edge_touch_is_not_intersection() {
        assert!(!rect(0, 0, 10, 10).intersects(&rect(10, 0, 10, 10)));
        assert!(!rect(0, 0, 10, 10).intersects(&rect(0, 10, 10, 10)));
        // Corner touch
        assert!(!rect(0, 0, 10, 10).intersects(&rect(10, 10, 10, 10)));
    }

    #[test]
    fn test_near_miss() {
        assert!(!rect(0, 0, 10, 10).intersects(&rect(11, 0, 10, 10)));
        assert!(!rect(0, 0, 10, 10).intersects(&rect(0, -11, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        assert!(!rect(0, 0, 0, 10).intersects(&rect(0, 0, 10, 10)));
        assert!(!rect(0, 0, 10, 10).intersects(&rect(5, 5, 10, -3)));
    }

    #[test]
    fn test_player_vs_ground_obstacle_touch_and_overlap() {
        let player = Player::default();
        let kind = ObstacleKind::Course(Course::Cs101);

        // Left edge of obstacle exactly on player's right edge
        let mut obs = GroundObstacle::new(
            kind,
            PLAYER_START_X + PLAYER_WIDTH,
            ObstacleColor::DarkGreen,
        );
        assert!(!player_hits_any(&player, std::slice::from_ref(&obs), &[]));

        // One unit of overlap
        obs.pos.x -= 1;
        assert!(player_hits_any(&player, std::slice::from_ref(&obs), &[]));
    }

    #[test]
    fn test_player_vs_falling_obstacle() {
        let player = Player::default();
        let mut falling = FallingObstacle::new(PLAYER_START_X);

        // Bottom edge resting on player's top edge
        falling.pos.y = GROUND_Y - FALLING_SIZE;
        assert!(!player_hits_any(&player, &[], std::slice::from_ref(&falling)));

        falling.pos.y += 1;
        assert!(player_hits_any(&player, &[], std::slice::from_ref(&falling)));
    }

    #[test]
    fn test_jumping_clears_small_cactus() {
        let mut player = Player::default();
        player.jump();
        for _ in 0..10 {
            player.update();
        }
        let obs = GroundObstacle::new(
            ObstacleKind::SmallCactus,
            PLAYER_START_X,
            ObstacleColor::DarkBlue,
        );
        assert!(!player_hits_any(&player, &[obs], &[]));
    }
}
