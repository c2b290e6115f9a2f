//! An [`AudioSink`] that persists narration clips to disk.
//!
//! The console has no audio output device of its own, so each decoded clip is
//! written to the configured voices directory instead, one numbered MP3 per
//! agent turn. Swapping in a real playback sink is a matter of implementing
//! `AudioSink` against an audio library.

use async_trait::async_trait;
use discai_core::{AudioSink, PlaybackError, Speaker};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Writes each narration clip to `<dir>/<seq>-<speaker>.mp3`.
pub struct FileSink {
    dir: PathBuf,
    counter: AtomicU64,
}

impl FileSink {
    /// Creates the sink, ensuring the target directory exists.
    pub fn new(dir: PathBuf) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            counter: AtomicU64::new(0),
        })
    }
}

#[async_trait]
impl AudioSink for FileSink {
    async fn play(&self, speaker: Speaker, clip: Vec<u8>) -> Result<(), PlaybackError> {
        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        let path = self.dir.join(format!("{:04}-{}.mp3", seq, speaker));
        tokio::fs::write(&path, &clip)
            .await
            .map_err(|e| PlaybackError(format!("could not write {}: {}", path.display(), e)))?;
        info!(path = %path.display(), bytes = clip.len(), "narration clip saved");
        Ok(())
    }
}
