//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one step.

use super::collision::player_hits_any;
use super::grade::Grade;
use super::obstacles::advance_obstacles;
use super::spawn::update_spawns;
use super::state::{Drive, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump pressed since the last tick (restarts when the run is over)
    pub jump: bool,
    /// Restart requested since the last tick
    pub restart: bool,
    /// Current horizontal drive level
    pub drive: Drive,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if state.phase == GamePhase::GameOver {
        if input.jump || input.restart {
            state.restart();
            log::info!("Game restarted");
        }
        // Frozen until restart
        return;
    }

    state.player.set_drive(input.drive);
    if input.jump {
        state.jump();
    }
    state.player.update();

    update_spawns(state);
    advance_obstacles(state);

    if player_hits_any(&state.player, &state.obstacles, &state.falling) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} grade {}",
            state.score,
            Grade::from_score(state.score)
        );
    }
}
