//! Transcript Model
//!
//! An append-only, speaker-tagged log of everything said in a session. The
//! speaker is a structural tag on every entry rather than a prefix baked into
//! the rendered text; a user whose message happens to begin with an agent's
//! name can therefore never be misattributed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    AgentA,
    AgentB,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::AgentA => write!(f, "agent_a"),
            Speaker::AgentB => write!(f, "agent_b"),
        }
    }
}

/// One spoken or typed turn. Entries are never mutated after being appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

/// The append-only message log for one session.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, preserving arrival order.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// All entries, in arrival order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries from a single speaker, in arrival order.
    pub fn by_speaker(&self, speaker: Speaker) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(move |e| e.speaker == speaker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
