//! Course Dash - a side-scrolling avoidance game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (physics, spawning, collisions, scoring)
//! - `platform`: Input control values, tick pacing, simulation thread
//! - `settings`: Runtime configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval (~66 Hz)
    pub const TICK_INTERVAL_MS: u64 = 15;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 800;
    pub const PLAYFIELD_HEIGHT: i32 = 300;
    /// Player's resting y (top edge) when on the ground
    pub const GROUND_Y: i32 = 220;
    /// Line obstacles stand on
    pub const GROUND_LEVEL: i32 = GROUND_Y + 50;

    /// Player defaults
    pub const PLAYER_START_X: i32 = 50;
    pub const PLAYER_WIDTH: i32 = 50;
    pub const PLAYER_HEIGHT: i32 = 60;
    /// Rightmost x the player may reach (track width minus margin)
    pub const PLAYER_MAX_X: i32 = 750;
    /// Initial upward velocity of a jump
    pub const JUMP_IMPULSE: i32 = -18;
    /// Velocity added per airborne tick
    pub const GRAVITY: i32 = 1;
    /// Horizontal drive magnitude
    pub const DRIVE_SPEED: i32 = 5;

    /// Ground obstacle leftward speed per tick
    pub const GROUND_OBSTACLE_SPEED: i32 = 6;
    /// Cosmetic label rotation per tick (degrees)
    pub const ROTATION_STEP: u16 = 3;

    /// Falling obstacle defaults
    pub const FALLING_SIZE: i32 = 30;
    pub const FALLING_SPEED: i32 = 4;
    pub const FALLING_START_Y: i32 = -30;
    pub const FALLING_SPAWN_TICKS: u32 = 150;

    /// Ground spawn interval at score 0, and the floor it shrinks to
    pub const BASE_SPAWN_INTERVAL: u32 = 120;
    pub const MIN_SPAWN_INTERVAL: u32 = 30;
}
