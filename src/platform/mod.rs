//! Platform abstraction layer
//!
//! Everything between the simulation and the outside world:
//! - Input events and the control values they set
//! - Tick pacing
//! - The simulation thread and its snapshot output

pub mod input;
pub mod runner;
pub mod time;

pub use input::{Controls, InputEvent, spawn_input_reader};
pub use runner::{SnapshotSlot, run_headless, spawn_simulation};
pub use time::TickClock;
