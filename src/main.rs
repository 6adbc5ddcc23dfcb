//! Course Dash entry point
//!
//! Headless driver: reads input tokens from stdin (one per line), runs the
//! simulation on its own thread, and prints the final snapshot as JSON.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use course_dash::Settings;
use course_dash::platform::run_headless;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Course Dash starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());

    // Returns when the simulation stops, even if stdin is still open
    let snapshot = match run_headless(&settings, io::BufReader::new(io::stdin())) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(snapshot) = snapshot {
        log::info!(
            "Final score {} (grade {})",
            snapshot.score,
            snapshot.grade
        );
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }

    ExitCode::SUCCESS
}
