use std::fmt;

use crate::timecode;

// @module: Caption cue model and the append-ordered cue log

// @struct: Single display-ready caption cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: 1-based position in the finished list, assigned at finalize
    pub index: usize,

    // @field: Start offset in ms from the stream origin
    pub start_ms: u64,

    // @field: End offset in ms from the stream origin
    pub end_ms: u64,

    // @field: Cue text, physical lines separated by '\n'
    pub text: String,
}

impl Cue {
    /// Creates a cue with a placeholder index; the log assigns the real
    /// one when it finalizes
    pub fn new(start_ms: u64, end_ms: u64, text: String) -> Self {
        Cue {
            index: 0,
            start_ms,
            end_ms,
            text,
        }
    }

    /// On-screen duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Format the start offset as an SRT timestamp
    pub fn format_start_time(&self) -> String {
        timecode::format_srt(self.start_ms)
    }

    /// Format the end offset as an SRT timestamp
    pub fn format_end_time(&self) -> String {
        timecode::format_srt(self.end_ms)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

// @struct: Append-ordered cue list where only the newest cue may still change
//
// Committed cues are frozen. The pending cue stays amendable until the next
// push freezes it, which is the only mutation window the segmentation
// policies get.
#[derive(Debug, Default)]
pub struct CueLog {
    committed: Vec<Cue>,
    pending: Option<Cue>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of cues, pending included
    pub fn len(&self) -> usize {
        self.committed.len() + usize::from(self.pending.is_some())
    }

    #[allow(dead_code)] // used by tests and external consumers
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.pending.is_none()
    }

    /// The cue that may still be amended, if any - used by tests and
    /// external consumers
    #[allow(dead_code)]
    pub fn pending(&self) -> Option<&Cue> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut Cue> {
        self.pending.as_mut()
    }

    /// Freeze the current pending cue and make `cue` the new pending tail
    pub fn push(&mut self, cue: Cue) {
        if let Some(prev) = self.pending.take() {
            self.committed.push(prev);
        }
        self.pending = Some(cue);
    }

    /// Commit the pending cue and return the finished list, renumbered 1..n
    pub fn finalize(mut self) -> Vec<Cue> {
        if let Some(prev) = self.pending.take() {
            self.committed.push(prev);
        }
        for (position, cue) in self.committed.iter_mut().enumerate() {
            cue.index = position + 1;
        }
        self.committed
    }
}
