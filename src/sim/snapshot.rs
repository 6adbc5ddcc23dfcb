//! Read-only view of one tick, handed to the renderer

use serde::Serialize;

use super::grade::Grade;
use super::state::{FallingObstacle, GameState, GroundObstacle, Label, Player};

/// A ground obstacle with its display label and colour resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    #[serde(flatten)]
    pub obstacle: GroundObstacle,
    pub label: Option<Label>,
    pub color_rgb: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: Player,
    pub obstacles: Vec<ObstacleView>,
    pub falling: Vec<FallingObstacle>,
    pub score: u32,
    pub grade: Grade,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            player: state.player.clone(),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    obstacle: o.clone(),
                    label: o.kind.label(),
                    color_rgb: o.color.rgb(),
                })
                .collect(),
            falling: state.falling.clone(),
            score: state.score,
            // Always derived from the live score
            grade: Grade::from_score(state.score),
            game_over: state.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Course, ObstacleColor, ObstacleKind};

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(3);
        state.score = 23;
        state
            .obstacles
            .push(GroundObstacle::new(ObstacleKind::SyntaxError, 300, ObstacleColor::DarkBlue));

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.score, 23);
        assert_eq!(snap.grade, Grade::B);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].label.map(|l| l.code), Some("ERROR"));
        assert_eq!(snap.obstacles[0].color_rgb, [60, 100, 180]);
        assert!(!snap.game_over);

        state.score = 30;
        assert_eq!(Snapshot::capture(&state).grade, Grade::A);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(3);
        state.score = 250;
        state.obstacles.push(GroundObstacle::new(
            ObstacleKind::Course(Course::Cs201),
            500,
            ObstacleColor::LightGreen,
        ));

        let json = serde_json::to_value(Snapshot::capture(&state)).unwrap();
        assert_eq!(json["score"], 250);
        assert_eq!(json["grade"], "A+");
        assert_eq!(json["game_over"], false);
        assert_eq!(json["obstacles"][0]["label"]["code"], "CS201");
        assert_eq!(json["obstacles"][0]["label"]["name"], "Java");
        assert_eq!(json["obstacles"][0]["rotation"], 0);
        assert_eq!(json["obstacles"][0]["color"], "LightGreen");
        assert_eq!(json["obstacles"][0]["color_rgb"], serde_json::json!([144, 238, 144]));
    }
}
