/*!
 * Transcript document parsing and the lexical item model.
 *
 * Recognizer output arrives as a JSON document whose `results.items` array
 * holds the recognized words and punctuation glyphs in spoken order. This
 * module normalizes that document into a flat sequence of [`LexicalItem`]s:
 * timestamps become whole milliseconds, the item kind becomes an enum, and
 * timing defects are rejected here so the segmentation policies never have
 * to re-check them.
 */

use log::debug;
use serde::Deserialize;

use crate::errors::TranscriptError;
use crate::timecode;

/// Whether an item is a spoken word or a punctuation glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A recognized word, normally carrying timing
    Word,
    /// A punctuation glyph inserted by the recognizer, never timed
    Punctuation,
}

/// One recognized word or punctuation glyph, with optional timing
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalItem {
    /// Word or punctuation
    pub kind: ItemKind,
    /// Text content of the item
    pub content: String,
    /// Start offset in ms, absent on punctuation
    pub start_ms: Option<u64>,
    /// End offset in ms, absent on punctuation
    pub end_ms: Option<u64>,
}

impl LexicalItem {
    /// Creates a timed word item - used by tests and benches
    #[allow(dead_code)]
    pub fn word(content: &str, start_ms: u64, end_ms: u64) -> Self {
        LexicalItem {
            kind: ItemKind::Word,
            content: content.to_string(),
            start_ms: Some(start_ms),
            end_ms: Some(end_ms),
        }
    }

    /// Creates an untimed punctuation item - used by tests and benches
    #[allow(dead_code)]
    pub fn punctuation(content: &str) -> Self {
        LexicalItem {
            kind: ItemKind::Punctuation,
            content: content.to_string(),
            start_ms: None,
            end_ms: None,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == ItemKind::Punctuation
    }
}

/// An ordered transcript normalized into lexical items
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Items in spoken order
    pub items: Vec<LexicalItem>,
}

impl Transcript {
    /// Parse a transcript JSON document into the ordered item sequence
    pub fn from_json_str(content: &str) -> Result<Self, TranscriptError> {
        let document: RawDocument = serde_json::from_str(content)?;
        Self::from_raw_items(document.results.items)
    }

    fn from_raw_items(raw_items: Vec<RawItem>) -> Result<Self, TranscriptError> {
        let mut items = Vec::with_capacity(raw_items.len());
        let mut previous_start: Option<u64> = None;

        for (index, raw) in raw_items.into_iter().enumerate() {
            let content = raw
                .alternatives
                .into_iter()
                .next()
                .and_then(|alternative| alternative.content)
                .ok_or(TranscriptError::MissingField {
                    index,
                    field: "alternatives[0].content",
                })?;

            // Anything the recognizer does not label as punctuation is
            // treated as a word
            let kind = match raw.kind.as_deref() {
                Some("punctuation") => ItemKind::Punctuation,
                _ => ItemKind::Word,
            };

            let start_ms = convert_seconds(raw.start_time, index, "start_time")?;
            let end_ms = convert_seconds(raw.end_time, index, "end_time")?;

            if let (Some(start), Some(end)) = (start_ms, end_ms) {
                if end < start {
                    return Err(TranscriptError::InvalidTiming {
                        index,
                        reason: format!("ends at {}ms before its start at {}ms", end, start),
                    });
                }
            }
            if let (Some(previous), Some(start)) = (previous_start, start_ms) {
                if start < previous {
                    return Err(TranscriptError::InvalidTiming {
                        index,
                        reason: format!(
                            "starts at {}ms after an earlier item starting at {}ms",
                            start, previous
                        ),
                    });
                }
            }
            if start_ms.is_some() {
                previous_start = start_ms;
            }

            items.push(LexicalItem {
                kind,
                content,
                start_ms,
                end_ms,
            });
        }

        debug!("{} transcript items found", items.len());
        Ok(Transcript { items })
    }
}

/// Top-level transcript document as the recognizer writes it
#[derive(Debug, Deserialize)]
struct RawDocument {
    results: RawResults,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    alternatives: Vec<RawAlternative>,
    #[serde(default)]
    start_time: Option<RawSeconds>,
    #[serde(default)]
    end_time: Option<RawSeconds>,
}

#[derive(Debug, Deserialize)]
struct RawAlternative {
    #[serde(default)]
    content: Option<String>,
}

/// Seconds on the wire arrive as JSON numbers or as decimal strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Number(f64),
    Text(String),
}

fn convert_seconds(
    value: Option<RawSeconds>,
    index: usize,
    field: &'static str,
) -> Result<Option<u64>, TranscriptError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let seconds = match value {
        RawSeconds::Number(number) => number,
        RawSeconds::Text(text) => match text.trim().parse::<f64>() {
            Ok(number) => number,
            Err(_) => {
                return Err(TranscriptError::UnreadableTimestamp {
                    index,
                    field,
                    value: text,
                });
            }
        },
    };

    match timecode::seconds_to_ms(seconds) {
        Some(ms) => Ok(Some(ms)),
        None => Err(TranscriptError::InvalidTiming {
            index,
            reason: format!("has a negative or non-finite {} ({})", field, seconds),
        }),
    }
}
