//! Input events and the control values shared with the simulation thread
//!
//! The input side writes, the simulation reads once at the start of each
//! tick. Jump and restart are edge flags consumed by that read; drive is a
//! level that persists until the next press or release.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI8, Ordering};
use std::thread::{self, JoinHandle};

use crate::sim::{Drive, TickInput};

/// Device-independent input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    JumpPress,
    MoveRightPress,
    MoveRightRelease,
    MoveLeftPress,
    MoveLeftRelease,
    Restart,
    Quit,
}

impl InputEvent {
    /// Parse a driver token. Unknown tokens yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "jump" | "space" | "up" => Some(InputEvent::JumpPress),
            "right" => Some(InputEvent::MoveRightPress),
            "right-up" => Some(InputEvent::MoveRightRelease),
            "left" => Some(InputEvent::MoveLeftPress),
            "left-up" => Some(InputEvent::MoveLeftRelease),
            "restart" | "r" => Some(InputEvent::Restart),
            "quit" | "q" | "esc" => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

/// Control values shared between the input and simulation threads
#[derive(Debug, Default)]
pub struct Controls {
    jump: AtomicBool,
    restart: AtomicBool,
    /// Sign of the drive speed (-1, 0, 1)
    drive: AtomicI8,
    quit: AtomicBool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input event
    pub fn apply(&self, event: InputEvent) {
        match event {
            InputEvent::JumpPress => self.jump.store(true, Ordering::Release),
            InputEvent::Restart => self.restart.store(true, Ordering::Release),
            InputEvent::MoveRightPress => self.set_drive(Drive::Right),
            InputEvent::MoveLeftPress => self.set_drive(Drive::Left),
            // Either release stops the player
            InputEvent::MoveRightRelease | InputEvent::MoveLeftRelease => {
                self.set_drive(Drive::Stop)
            }
            InputEvent::Quit => self.request_quit(),
        }
    }

    fn set_drive(&self, drive: Drive) {
        self.drive.store(drive.speed().signum() as i8, Ordering::Release);
    }

    /// Read the controls for one tick, consuming pending edges
    pub fn take_tick_input(&self) -> TickInput {
        TickInput {
            jump: self.jump.swap(false, Ordering::AcqRel),
            restart: self.restart.swap(false, Ordering::AcqRel),
            drive: Drive::from_speed(self.drive.load(Ordering::Acquire) as i32),
        }
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}

/// Feed line-oriented input tokens into `controls` on a background thread.
///
/// Quit or end of input requests quit. The thread may stay blocked on a
/// read after the simulation has stopped; callers wait on the simulation,
/// not on this handle.
pub fn spawn_input_reader<R>(reader: R, controls: Arc<Controls>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                match InputEvent::from_str(&line) {
                    Some(InputEvent::Quit) => break,
                    Some(event) => controls.apply(event),
                    None => log::debug!("Ignoring input {:?}", line),
                }
            }
            // EOF counts as quit
            controls.request_quit();
        })
}
