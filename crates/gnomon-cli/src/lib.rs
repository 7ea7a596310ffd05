//! CLI logic for the Gnomon layout tool.
//!
//! Reads a day's events from a JSON file, computes their layout, and writes
//! the records as JSON to a file or stdout. Intended for inspecting engine
//! output and for end-to-end smoke tests; real renderers consume the library
//! API directly.

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::{debug, info};

use gnomon::{Interval, Timestamp};

/// Parses a `HH:MM` day anchor.
fn parse_day_start(raw: &str) -> Result<Timestamp, CliError> {
    let invalid = || CliError::InvalidDayStart(raw.to_string());

    let (hour, minute) = raw.split_once(':').ok_or_else(invalid)?;
    let hour: i64 = hour.parse().map_err(|_| invalid())?;
    let minute: i64 = minute.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
        return Err(invalid());
    }
    Ok(Timestamp::from_hm(hour, minute))
}

/// Run the Gnomon CLI application
///
/// Reads the input events, computes the day layout on the configured track,
/// and writes the resulting records as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed events JSON or day-start argument
/// - Track geometry violations (non-positive scale, negative width)
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Computing day layout");

    let app_config = config::load_config(args.config.as_ref())?;
    let day_start = parse_day_start(&args.day_start)?;

    let source = fs::read_to_string(&args.input)?;
    let events: Vec<Interval> = serde_json::from_str(&source)?;
    debug!(events_len = events.len(); "Parsed events");

    let track = app_config.track.track(day_start)?;
    let layouts = track.layout(&events);
    info!(
        events_len = events.len(),
        track_width = track.width();
        "Layout computed"
    );

    let rendered = serde_json::to_string_pretty(&layouts)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Layout written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
