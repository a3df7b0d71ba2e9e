//! Application entry point — sign-to-text replay shell.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the [`SignTracker`] (rule classifier + fresh session).
//! 4. Open the event stream: the file named by the first argument, or stdin.
//! 5. Replay every event through the tracker.
//! 6. Print the final message.
//!
//! The event stream stands in for the external hand detector and the UI
//! controls; see [`sign_to_text::pipeline::runner`] for its format.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use sign_to_text::{
    config::AppConfig,
    pipeline::{ReplayRunner, SignTracker},
};

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("sign-to-text starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e:#}); using defaults");
        AppConfig::default()
    });
    let detector = &config.detector;
    log::info!(
        "detector options: max {} hand(s), complexity {}, confidence {}/{}, {}x{}",
        detector.max_num_hands,
        detector.model_complexity,
        detector.min_detection_confidence,
        detector.min_tracking_confidence,
        detector.frame_width,
        detector.frame_height
    );

    // 3. Tracker
    let tracker = SignTracker::new(&config);

    // 4–5. Replay
    let runner = ReplayRunner::new(tracker);
    let (tracker, summary) = match std::env::args_os().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening {}", path.to_string_lossy()))?;
            runner.run(BufReader::new(file))?
        }
        None => runner.run(io::stdin().lock())?,
    };

    log::info!(
        "done: {} frame(s), {} rejected hand(s), {} skipped line(s), {} sample(s) collected",
        summary.frames,
        summary.rejected_hands,
        summary.skipped_lines,
        tracker.session().samples().len()
    );
    for path in &summary.exports {
        log::info!("dataset exported to {}", path.display());
    }

    // 6. Output
    println!("{}", summary.final_message);
    Ok(())
}
