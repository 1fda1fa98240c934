/*!
 * Caption file serialization.
 *
 * Two output forms: WebVTT is a header followed by timing blocks with
 * period-decimal timestamps, SRT is indexed blocks with comma-decimal
 * timestamps. Both serializers build the whole document in memory and write
 * it in one operation, so a failed conversion never leaves a truncated
 * caption file behind.
 */

use std::path::Path;

use anyhow::{Context, Result};

use crate::cue::Cue;
use crate::file_utils::FileManager;
use crate::timecode;

/// Literal between the two timestamps on a timing line
const TIMING_ARROW: &str = " --> ";

/// Caption file format, each paired with one segmentation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    /// SubRip captions, produced by the character-length policy
    Srt,
    /// WebVTT captions, produced by the word-count policy
    Vtt,
}

impl CaptionFormat {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            CaptionFormat::Srt => "srt",
            CaptionFormat::Vtt => "vtt",
        }
    }
}

/// Render a finished cue list as a WebVTT document
pub fn to_vtt_string(cues: &[Cue]) -> String {
    let mut output = String::from("WEBVTT\n");
    for cue in cues {
        output.push('\n');
        output.push_str(&timecode::format_vtt(cue.start_ms));
        output.push_str(TIMING_ARROW);
        output.push_str(&timecode::format_vtt(cue.end_ms));
        output.push('\n');
        output.push_str(&cue.text);
        output.push('\n');
    }
    output
}

/// Render a finished cue list as an SRT document
pub fn to_srt_string(cues: &[Cue]) -> String {
    // Each cue renders as its own block, trailing blank line included
    cues.iter().map(ToString::to_string).collect()
}

/// Render a cue list in the requested format
pub fn serialize(format: CaptionFormat, cues: &[Cue]) -> String {
    match format {
        CaptionFormat::Srt => to_srt_string(cues),
        CaptionFormat::Vtt => to_vtt_string(cues),
    }
}

/// Serialize and write a caption file in one operation
pub fn write_caption_file<P: AsRef<Path>>(
    path: P,
    format: CaptionFormat,
    cues: &[Cue],
) -> Result<()> {
    FileManager::write_to_file(&path, &serialize(format, cues))
        .with_context(|| format!("Failed to write caption file: {:?}", path.as_ref()))
}
