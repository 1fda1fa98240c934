/*!
 * Word-count segmentation policy.
 *
 * Folds the item stream into cues holding between `min_words` and
 * `max_words` words. A cue closes as soon as it reaches the upper bound,
 * or earlier when sentence-terminal punctuation lands after the lower
 * bound is met, so cues prefer to break where sentences do.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cue::{Cue, CueLog};
use crate::errors::ConfigError;
use crate::transcript::{ItemKind, LexicalItem};

/// Glyphs that close a sentence and allow an early flush
const SENTENCE_TERMINALS: [&str; 3] = [".", "!", "?"];

fn default_min_words() -> u32 {
    8
}

fn default_max_words() -> u32 {
    12
}

/// Word window for the word-count policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountConfig {
    /// Fewest words a cue needs before sentence punctuation may close it
    #[serde(default = "default_min_words")]
    pub min_words: u32,

    /// Most words a cue may hold before it closes unconditionally
    #[serde(default = "default_max_words")]
    pub max_words: u32,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
        }
    }
}

impl WordCountConfig {
    /// Validate the window bounds before any processing begins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words == 0 || self.max_words == 0 {
            return Err(ConfigError::ZeroWordBound {
                min: self.min_words,
                max: self.max_words,
            });
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::InvertedWordBounds {
                min: self.min_words,
                max: self.max_words,
            });
        }
        Ok(())
    }
}

/// Word-count segmenter
pub struct WordCountSegmenter {
    config: WordCountConfig,
}

impl WordCountSegmenter {
    /// Create a segmenter with the default word window
    pub fn new() -> Self {
        Self {
            config: WordCountConfig::default(),
        }
    }

    /// Create a segmenter with a custom window, rejecting unusable bounds
    pub fn with_config(config: WordCountConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Fold the item stream into a finished cue list
    pub fn segment(&self, items: &[LexicalItem]) -> Vec<Cue> {
        let mut log = CueLog::new();
        let mut chunk = Chunk::default();

        for item in items {
            match item.kind {
                // Punctuation never opens a word slot: it glues onto the
                // word before it
                ItemKind::Punctuation if !chunk.is_empty() => {
                    if let Some(last) = chunk.words.last_mut() {
                        last.push_str(&item.content);
                    }
                }
                // Punctuation right after a flush belongs to the cue that
                // was just emitted
                ItemKind::Punctuation => {
                    match log.pending_mut() {
                        Some(cue) => cue.text.push_str(&item.content),
                        None => warn!(
                            "Dropping punctuation {:?} that precedes any caption text",
                            item.content
                        ),
                    }
                    continue;
                }
                ItemKind::Word => {
                    if chunk.start_ms.is_none() {
                        chunk.start_ms = Some(item.start_ms.unwrap_or(0));
                    }
                    if let Some(end) = item.end_ms {
                        chunk.end_ms = Some(end);
                    }
                    chunk.words.push(item.content.clone());
                }
            }

            let at_sentence_end = SENTENCE_TERMINALS.contains(&item.content.as_str());
            if chunk.words.len() >= self.config.max_words as usize
                || (chunk.words.len() >= self.config.min_words as usize && at_sentence_end)
            {
                log.push(chunk.flush());
            }
        }

        if !chunk.is_empty() {
            log.push(chunk.flush());
        }

        debug!("Word-count segmentation produced {} cues", log.len());
        log.finalize()
    }
}

impl Default for WordCountSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold state between flushes
#[derive(Debug, Default)]
struct Chunk {
    start_ms: Option<u64>,
    end_ms: Option<u64>,
    words: Vec<String>,
}

impl Chunk {
    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drain the chunk into a cue, leaving it ready for the next one
    fn flush(&mut self) -> Cue {
        let start = self.start_ms.take().unwrap_or(0);
        let end = self.end_ms.take().unwrap_or(start);
        let text = std::mem::take(&mut self.words).join(" ");
        Cue::new(start, end, text)
    }
}
