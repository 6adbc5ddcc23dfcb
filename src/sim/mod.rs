//! Fixed-tick simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per fixed interval, no wall-clock reads
//! - Randomness only through the state's injectable RNG
//! - Stable iteration order (oldest obstacle first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grade;
pub mod obstacles;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, player_hits_any};
pub use grade::Grade;
pub use obstacles::advance_obstacles;
pub use snapshot::{ObstacleView, Snapshot};
pub use spawn::{course_pool, pick_kind, spawn_interval, update_spawns};
pub use state::{
    Course, Drive, FallingObstacle, GamePhase, GameState, GroundObstacle, Label, ObstacleColor,
    ObstacleKind, Player,
};
pub use tick::{TickInput, tick};
