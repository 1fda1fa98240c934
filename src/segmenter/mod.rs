/*!
 * Segmentation policies that fold lexical items into caption cues.
 *
 * Both policies consume the same normalized item sequence and produce a
 * finished cue list; they never fail, because the transcript layer has
 * already rejected timing defects.
 *
 * # Architecture
 *
 * - `word_count`: fixed word window with a sentence-boundary preference,
 *   paired with WebVTT output
 * - `char_length`: broadcast-style line length with silence, combining and
 *   timing corrections, paired with SRT output
 */

pub mod char_length;
pub mod word_count;

// Re-export main types
pub use char_length::CharacterLengthSegmenter;
pub use word_count::{WordCountConfig, WordCountSegmenter};
