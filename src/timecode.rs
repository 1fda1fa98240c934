/*!
 * Timestamp rendering and parsing for caption timing lines.
 *
 * Cue offsets are whole milliseconds from the stream origin. Two textual
 * forms exist: WebVTT separates the millisecond field with a period
 * (HH:MM:SS.mmm), SRT with a comma (HH:MM:SS,mmm). Field extraction is pure
 * integer arithmetic; the only rounding in the pipeline happens once, in
 * [`seconds_to_ms`], when decimal seconds from the transcript are turned
 * into milliseconds.
 */

use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;

// Timing-line timestamp in either caption form
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2})[,.](\d{3})$").unwrap()
});

/// Convert decimal seconds into whole milliseconds, rounding half away
/// from zero. Returns `None` for negative or non-finite input.
pub fn seconds_to_ms(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some((seconds * 1000.0).round() as u64)
}

/// Format a millisecond offset as a WebVTT timestamp (HH:MM:SS.mmm)
pub fn format_vtt(ms: u64) -> String {
    let (hours, minutes, seconds, millis) = split_fields(ms);
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Format a millisecond offset as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_srt(ms: u64) -> String {
    let (hours, minutes, seconds, millis) = split_fields(ms);
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

fn split_fields(ms: u64) -> (u64, u64, u64, u64) {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    (hours, minutes, seconds, millis)
}

/// Parse a timestamp in either caption form back to milliseconds - used
/// by tests and external consumers
#[allow(dead_code)]
pub fn parse(timestamp: &str) -> Result<u64> {
    let caps = TIMESTAMP_REGEX
        .captures(timestamp)
        .ok_or_else(|| anyhow!("Invalid timestamp format: {}", timestamp))?;

    let hours: u64 = caps[1].parse().context("Failed to parse hours")?;
    let minutes: u64 = caps[2].parse().context("Failed to parse minutes")?;
    let seconds: u64 = caps[3].parse().context("Failed to parse seconds")?;
    let millis: u64 = caps[4].parse().context("Failed to parse milliseconds")?;

    // Validate time components
    if minutes >= 60 || seconds >= 60 {
        return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}
