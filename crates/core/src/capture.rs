//! Voice Capture
//!
//! A two-state machine (idle, recording) around an external capture device.
//! The device handle is an owned resource: acquired on `start`, consumed on
//! `stop`, and never left dangling — a denied acquisition logs and leaves the
//! machine idle. Transcription is a pluggable capability behind the
//! [`Transcriber`] trait; deployments without a real speech-to-text backend
//! can wire in a stand-in.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// The capture device could not be acquired (permission denied, no
/// microphone, device busy). Recovered where it occurs.
#[derive(Debug, thiserror::Error)]
#[error("capture device unavailable: {0}")]
pub struct CaptureError(pub String);

/// An active recording. Stopping consumes the handle and yields the captured
/// audio as one blob.
#[async_trait]
pub trait CaptureHandle: Send {
    async fn stop(self: Box<Self>) -> Vec<u8>;
}

/// Acquires the external capture device.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    async fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError>;
}

/// Turns a captured audio blob into text, best effort.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>) -> anyhow::Result<String>;
}

/// The capture state machine for one controller instance.
///
/// At most one recording is active at a time: `start` while already
/// recording is a no-op rather than a second device acquisition.
pub struct VoiceCapture {
    device: Arc<dyn CaptureDevice>,
    transcriber: Arc<dyn Transcriber>,
    active: Option<Box<dyn CaptureHandle>>,
}

impl VoiceCapture {
    pub fn new(device: Arc<dyn CaptureDevice>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            device,
            transcriber,
            active: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Begins recording. Never returns an error to the caller: a denied
    /// device is logged and the machine stays idle.
    pub async fn start(&mut self) {
        if self.active.is_some() {
            warn!("capture already in progress; ignoring start");
            return;
        }
        match self.device.start().await {
            Ok(handle) => {
                debug!("capture started");
                self.active = Some(handle);
            }
            Err(error) => {
                warn!(%error, "could not start capture; staying idle");
            }
        }
    }

    /// Stops recording and returns the best-effort transcript of the captured
    /// audio, or `None` when nothing was recording or transcription failed.
    /// Always returns the machine to idle.
    pub async fn stop(&mut self) -> Option<String> {
        let handle = self.active.take()?;
        let blob = handle.stop().await;
        debug!(bytes = blob.len(), "capture stopped; transcribing");
        match self.transcriber.transcribe(blob).await {
            Ok(text) => Some(text),
            Err(error) => {
                warn!(%error, "transcription failed; discarding capture");
                None
            }
        }
    }
}
