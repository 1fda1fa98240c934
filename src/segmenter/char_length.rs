/*!
 * Character-length segmentation policy.
 *
 * Folds the item stream into broadcast-style cues: lines are bounded by
 * character count, silence gaps open new cues, rapid follow-up lines merge
 * into the cue already on screen, and committed neighbours are corrected so
 * cues never overlap and never outstay their welcome.
 *
 * The line-length and timing constants follow common broadcast guidance,
 * see http://bbc.github.io/subtitle-guidelines/ for the recommended
 * practices they approximate.
 */

use log::debug;

use crate::cue::{Cue, CueLog};
use crate::transcript::LexicalItem;

/// Maximum characters in a flushed line before wrap consideration (37 * 2)
pub const MAX_LEN: usize = 74;

/// Maximum characters per physical line after wrapping
pub const MAX_LINE_LEN: usize = 37;

/// Minimum silence in ms that forces a new line, also the end padding
/// added to every flushed line
pub const INTERVAL_MS: u64 = 2_000;

/// A line starting within this window of the current cue's start merges
/// into it instead of opening a new cue
pub const COMBINE_WINDOW_MS: u64 = 500;

/// Longest a cue may stay on screen after correction
pub const MAX_CUE_DURATION_MS: u64 = 8_000;

/// Separation left between corrected neighbours, about one video frame
pub const FRAME_GAP_MS: u64 = 33;

/// Character-length segmenter
pub struct CharacterLengthSegmenter;

impl CharacterLengthSegmenter {
    pub fn new() -> Self {
        CharacterLengthSegmenter
    }

    /// Fold the item stream into a finished cue list
    pub fn segment(&self, items: &[LexicalItem]) -> Vec<Cue> {
        let mut log = CueLog::new();
        let mut line = LineBuffer::default();
        let mut last_end: u64 = 0;

        for (position, item) in items.iter().enumerate() {
            let text = item.content.as_str();

            // The line start is captured when the buffer opens
            if line.is_empty() {
                line.start_ms = item.start_ms.unwrap_or(last_end);
            }

            if position + 1 == items.len() {
                // Final item: close out the running line. The max keeps the
                // padded end at or after the line start when the stream ends
                // right after a silence gap
                line.append(item);
                let (text, start) = line.take();
                commit(&mut log, text, start, last_end.max(start) + INTERVAL_MS);
            } else if text == "."
                && line.char_len() + char_len(text) + char_len(&items[position + 1].content)
                    > MAX_LEN
            {
                // Sentence ends and the next word would not fit anyway
                debug!("Sentence end at the line limit");
                line.append(item);
                let (text, start) = line.take();
                commit(&mut log, text, start, last_end.max(start) + INTERVAL_MS);
            } else if item.start_ms.unwrap_or(last_end).saturating_sub(last_end) > INTERVAL_MS {
                debug!("Silence after {}ms exceeds {}ms", last_end, INTERVAL_MS);
                let start = item.start_ms.unwrap_or(last_end);
                if !line.is_empty() {
                    let (text, line_start) = line.take();
                    commit(&mut log, text, line_start, last_end.max(line_start) + INTERVAL_MS);
                }
                line.seed(item, start);
            } else if line.char_len() + char_len(text) < MAX_LEN {
                line.append(item);
            } else {
                let start = item.start_ms.unwrap_or(last_end);
                if !line.is_empty() {
                    let (text, line_start) = line.take();
                    commit(&mut log, text, line_start, last_end.max(line_start) + INTERVAL_MS);
                }
                line.seed(item, start);
            }

            if let Some(end) = item.end_ms {
                last_end = end;
            }
        }

        // The closing cue gets the duration cap like every other one
        if let Some(pending) = log.pending_mut() {
            clamp_duration(pending);
        }

        debug!("Character-length segmentation produced {} cues", log.len());
        log.finalize()
    }
}

impl Default for CharacterLengthSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// The running plain-text line and the timestamp captured when it opened
#[derive(Debug, Default)]
struct LineBuffer {
    text: String,
    start_ms: u64,
}

impl LineBuffer {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Append an item: no space before punctuation, one space between words
    fn append(&mut self, item: &LexicalItem) {
        if !self.text.is_empty() && !item.is_punctuation() {
            self.text.push(' ');
        }
        self.text.push_str(&item.content);
    }

    /// Restart the buffer with a single item
    fn seed(&mut self, item: &LexicalItem, start_ms: u64) {
        self.text.clear();
        self.text.push_str(&item.content);
        self.start_ms = start_ms;
    }

    /// Take the finished line out, leaving an empty buffer
    fn take(&mut self) -> (String, u64) {
        (std::mem::take(&mut self.text), self.start_ms)
    }
}

/// Fold a candidate line into the cue log.
///
/// A candidate inside the combine window becomes an extra physical line of
/// the cue already pending. A genuinely new cue first corrects the pending
/// one, then enters wrapped.
fn commit(log: &mut CueLog, text: String, start_ms: u64, end_ms: u64) {
    let Some(pending) = log.pending_mut() else {
        log.push(Cue::new(start_ms, end_ms, text));
        return;
    };

    if start_ms < pending.start_ms + COMBINE_WINDOW_MS {
        debug!("Combined line into cue starting at {}ms", pending.start_ms);
        pending.text.push('\n');
        pending.text.push_str(&text);
        return;
    }

    clamp_duration(pending);
    if pending.end_ms > start_ms {
        let corrected = start_ms.saturating_sub(FRAME_GAP_MS);
        debug!(
            "Reduced cue end from {}ms to {}ms to clear the next cue",
            pending.end_ms, corrected
        );
        pending.end_ms = corrected;
    }

    log.push(Cue::new(start_ms, end_ms, wrap_line(text)));
}

/// Cap how long a cue stays on screen
fn clamp_duration(cue: &mut Cue) {
    if cue.duration_ms() > MAX_CUE_DURATION_MS {
        let clamped = cue.start_ms + MAX_CUE_DURATION_MS;
        debug!("Capped cue duration: end {}ms becomes {}ms", cue.end_ms, clamped);
        cue.end_ms = clamped;
    }
}

/// Split an over-long candidate into two physical lines at a word boundary.
///
/// Whole words pack greedily into the first line while it stays within
/// [`MAX_LINE_LEN`], joining spaces counted; everything left joins into the
/// second line, which may run long when a single word cannot be split.
fn wrap_line(text: String) -> String {
    if char_len(&text) <= MAX_LINE_LEN || text.contains('\n') {
        return text;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut wrapped = String::with_capacity(text.len() + 1);
    for (position, word) in words.iter().enumerate() {
        if position == 0 {
            wrapped.push_str(word);
        } else if char_len(&wrapped) + 1 + char_len(word) <= MAX_LINE_LEN {
            wrapped.push(' ');
            wrapped.push_str(word);
        } else {
            wrapped.push('\n');
            wrapped.push_str(&words[position..].join(" "));
            break;
        }
    }

    debug!("Wrapped candidate longer than {} chars", MAX_LINE_LEN);
    wrapped
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
