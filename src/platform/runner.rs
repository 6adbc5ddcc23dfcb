//! Simulation thread
//!
//! Owns the `GameState` outright. The only things crossing the thread
//! boundary are the `Controls` atomics (in) and the latest snapshot (out).

use std::io::{self, BufRead};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use super::input::{Controls, spawn_input_reader};
use super::time::TickClock;
use crate::settings::Settings;
use crate::sim::{GameState, Snapshot, tick};

/// Most recent snapshot published by the simulation
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    latest: Mutex<Option<Snapshot>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        // A panicked reader can't corrupt an Option; keep going
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Start the fixed-cadence simulation on its own thread.
///
/// Runs until quit is requested or `max_ticks` is reached, and returns the
/// number of ticks simulated.
pub fn spawn_simulation(
    settings: &Settings,
    controls: Arc<Controls>,
    snapshots: Arc<SnapshotSlot>,
) -> io::Result<JoinHandle<u64>> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    let interval = settings.tick_interval();
    let max_ticks = settings.max_ticks;
    let snapshot_every = settings.snapshot_every;

    thread::Builder::new()
        .name("simulation".into())
        .spawn(move || {
            let mut state = GameState::new(seed);
            log::info!("Game initialized with seed: {}", seed);

            let mut clock = TickClock::new(interval);
            while !controls.quit_requested() {
                if max_ticks.is_some_and(|max| state.time_ticks >= max) {
                    log::info!("Reached tick limit");
                    break;
                }

                let input = controls.take_tick_input();
                tick(&mut state, &input);

                let snapshot = Snapshot::capture(&state);
                if snapshot_every > 0 && state.time_ticks % snapshot_every == 0 {
                    log::debug!(
                        "{}",
                        serde_json::to_string(&snapshot).unwrap_or_default()
                    );
                }
                snapshots.publish(snapshot);

                clock.wait();
            }

            log::info!(
                "Simulation stopped after {} ticks ({} resyncs)",
                state.time_ticks,
                clock.resyncs
            );
            state.time_ticks
        })
}

/// Run a whole session: simulation plus an input reader over `input`.
///
/// Returns once the simulation stops, whether from quit, end of input or
/// the tick limit, without waiting for the reader. Yields the last snapshot.
pub fn run_headless<R>(settings: &Settings, input: R) -> io::Result<Option<Snapshot>>
where
    R: BufRead + Send + 'static,
{
    let controls = Arc::new(Controls::new());
    let snapshots = Arc::new(SnapshotSlot::new());

    let handle = spawn_simulation(settings, controls.clone(), snapshots.clone())?;
    spawn_input_reader(input, controls.clone())?;

    let ticks = handle
        .join()
        .map_err(|_| io::Error::other("simulation thread panicked"))?;
    log::info!("Stopped after {} ticks", ticks);

    Ok(snapshots.latest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::InputEvent;

    fn fast_settings(max_ticks: Option<u64>) -> Settings {
        Settings {
            tick_interval_ms: 1,
            seed: Some(2024),
            max_ticks,
            snapshot_every: 0,
        }
    }

    #[test]
    fn test_runs_to_tick_limit() {
        let controls = Arc::new(Controls::new());
        let slot = Arc::new(SnapshotSlot::new());
        let handle = spawn_simulation(&fast_settings(Some(50)), controls, slot.clone()).unwrap();

        assert_eq!(handle.join().unwrap(), 50);
        let snap = slot.latest().unwrap();
        assert_eq!(snap.tick, 50);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_quit_stops_loop() {
        let controls = Arc::new(Controls::new());
        let slot = Arc::new(SnapshotSlot::new());
        let handle =
            spawn_simulation(&fast_settings(None), controls.clone(), slot.clone()).unwrap();

        controls.apply(InputEvent::MoveRightPress);
        thread::sleep(std::time::Duration::from_millis(30));
        controls.apply(InputEvent::Quit);

        let ticks = handle.join().unwrap();
        assert!(ticks > 0);
        let snap = slot.latest().unwrap();
        assert_eq!(snap.tick, ticks);
    }

    /// Never yields a line, like a terminal nobody is typing into
    struct SilentInput;

    impl io::Read for SilentInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            loop {
                thread::park();
            }
        }
    }

    #[test]
    fn test_headless_returns_at_tick_limit_with_input_open() {
        let input = io::BufReader::new(SilentInput);
        let snap = run_headless(&fast_settings(Some(20)), input)
            .unwrap()
            .unwrap();
        assert_eq!(snap.tick, 20);
    }

    #[test]
    fn test_headless_returns_on_end_of_input() {
        let input = io::Cursor::new("right\n");
        let snap = run_headless(&fast_settings(None), input).unwrap();
        // Quit may land before the first tick
        if let Some(snap) = snap {
            assert!(!snap.game_over);
        }
    }

    #[test]
    fn test_empty_slot() {
        assert!(SnapshotSlot::new().latest().is_none());
    }
}
