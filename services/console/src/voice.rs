//! Stand-in implementations of the voice-capture capabilities.
//!
//! The console runs without a microphone or a speech-to-text backend:
//! [`StubCaptureDevice`] grants every acquisition and captures nothing, and
//! [`CannedTranscriber`] answers with a fixed phrase. Both sit behind the
//! core traits, so a deployment with real devices replaces them without
//! touching the controller.

use async_trait::async_trait;
use discai_core::{CaptureDevice, CaptureError, CaptureHandle, Transcriber};

/// A capture device that always grants and records an empty blob.
pub struct StubCaptureDevice;

struct StubHandle;

#[async_trait]
impl CaptureHandle for StubHandle {
    async fn stop(self: Box<Self>) -> Vec<u8> {
        Vec::new()
    }
}

#[async_trait]
impl CaptureDevice for StubCaptureDevice {
    async fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        Ok(Box::new(StubHandle))
    }
}

/// A transcriber that returns the same phrase for every blob.
pub struct CannedTranscriber {
    phrase: String,
}

impl CannedTranscriber {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }
}

#[async_trait]
impl Transcriber for CannedTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>) -> anyhow::Result<String> {
        Ok(self.phrase.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_device_grants_and_captures_nothing() {
        let handle = StubCaptureDevice.start().await.unwrap();
        assert!(handle.stop().await.is_empty());
    }

    #[tokio::test]
    async fn canned_transcriber_always_answers_with_its_phrase() {
        let transcriber = CannedTranscriber::new("the fixed phrase");
        let text = transcriber.transcribe(Vec::new()).await.unwrap();
        assert_eq!(text, "the fixed phrase");
        let text = transcriber.transcribe(b"anything".to_vec()).await.unwrap();
        assert_eq!(text, "the fixed phrase");
    }
}
