//! Audio Sequencer
//!
//! Plays the narration clips attached to one turn response, strictly in
//! order: Agent A settles before Agent B starts. Sequencing is expressed as a
//! small ordered task list consumed by one loop, so there is exactly one
//! completion point per call no matter how many clips (zero, one or two) were
//! played. A clip that fails to decode or play is logged and counts as
//! played; a broken payload must never stall the conversation.

use crate::protocol::TurnResponse;
use crate::transcript::Speaker;
use async_trait::async_trait;
use base64::Engine;
use std::sync::Arc;
use tracing::{debug, warn};

/// A single clip failed to play. Recovered where it occurs; never fatal.
#[derive(Debug, thiserror::Error)]
#[error("narration playback failed: {0}")]
pub struct PlaybackError(pub String);

/// Output device for decoded narration audio. Implementations may play the
/// clip, persist it, or discard it; the sequencer only requires that `play`
/// eventually settles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioSink: Send + Sync {
    async fn play(&self, speaker: Speaker, clip: Vec<u8>) -> Result<(), PlaybackError>;
}

/// Drives narration for one round at a time.
pub struct AudioSequencer {
    sink: Arc<dyn AudioSink>,
}

impl AudioSequencer {
    pub fn new(sink: Arc<dyn AudioSink>) -> Self {
        Self { sink }
    }

    /// Narrates one turn response.
    ///
    /// When `muted` is set no audio is decoded or played at all. Otherwise
    /// Agent A's clip (if present) is played to completion or error, then
    /// Agent B's likewise.
    pub async fn narrate(&self, response: &TurnResponse, muted: bool) {
        if muted {
            debug!("narration muted; skipping playback");
            return;
        }

        let clips = [
            (Speaker::AgentA, response.agent_a_voice.as_deref()),
            (Speaker::AgentB, response.agent_b_voice.as_deref()),
        ];

        for (speaker, encoded) in clips {
            let Some(encoded) = encoded else { continue };
            let bytes = match base64::engine::general_purpose::STANDARD.decode(encoded) {
                Ok(bytes) => bytes,
                Err(error) => {
                    warn!(%speaker, %error, "narration clip is not valid base64; skipping");
                    continue;
                }
            };
            debug!(%speaker, bytes = bytes.len(), "playing narration clip");
            if let Err(error) = self.sink.play(speaker, bytes).await {
                // A playback error settles the clip just like completion does.
                warn!(%speaker, %error, "narration clip failed to play; continuing");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn encode(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    fn response_with_both_voices() -> TurnResponse {
        TurnResponse {
            agent_a_voice: Some(encode(b"clip-a")),
            agent_b_voice: Some(encode(b"clip-b")),
            ..TurnResponse::default()
        }
    }

    #[tokio::test]
    async fn plays_agent_a_before_agent_b() {
        let mut sink = MockAudioSink::new();
        let mut order = Sequence::new();
        sink.expect_play()
            .with(eq(Speaker::AgentA), eq(b"clip-a".to_vec()))
            .times(1)
            .in_sequence(&mut order)
            .returning(|_, _| Ok(()));
        sink.expect_play()
            .with(eq(Speaker::AgentB), eq(b"clip-b".to_vec()))
            .times(1)
            .in_sequence(&mut order)
            .returning(|_, _| Ok(()));

        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&response_with_both_voices(), false).await;
    }

    #[tokio::test]
    async fn muted_narration_never_touches_the_sink() {
        let mut sink = MockAudioSink::new();
        sink.expect_play().times(0);

        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&response_with_both_voices(), true).await;
    }

    #[tokio::test]
    async fn absent_voice_fields_play_nothing() {
        let mut sink = MockAudioSink::new();
        sink.expect_play().times(0);

        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&TurnResponse::default(), false).await;
    }

    #[tokio::test]
    async fn a_failed_clip_does_not_block_the_next_one() {
        let mut sink = MockAudioSink::new();
        let mut order = Sequence::new();
        sink.expect_play()
            .with(eq(Speaker::AgentA), eq(b"clip-a".to_vec()))
            .times(1)
            .in_sequence(&mut order)
            .returning(|_, _| Err(PlaybackError("decoder exploded".to_string())));
        sink.expect_play()
            .with(eq(Speaker::AgentB), eq(b"clip-b".to_vec()))
            .times(1)
            .in_sequence(&mut order)
            .returning(|_, _| Ok(()));

        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&response_with_both_voices(), false).await;
    }

    #[tokio::test]
    async fn invalid_base64_is_skipped_without_reaching_the_sink() {
        let mut sink = MockAudioSink::new();
        sink.expect_play()
            .with(eq(Speaker::AgentB), eq(b"clip-b".to_vec()))
            .times(1)
            .returning(|_, _| Ok(()));

        let response = TurnResponse {
            agent_a_voice: Some("!!not base64!!".to_string()),
            agent_b_voice: Some(encode(b"clip-b")),
            ..TurnResponse::default()
        };
        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&response, false).await;
    }

    #[tokio::test]
    async fn single_clip_plays_alone() {
        let mut sink = MockAudioSink::new();
        sink.expect_play()
            .with(eq(Speaker::AgentB), eq(b"solo".to_vec()))
            .times(1)
            .returning(|_, _| Ok(()));

        let response = TurnResponse {
            agent_b_voice: Some(encode(b"solo")),
            ..TurnResponse::default()
        };
        let sequencer = AudioSequencer::new(Arc::new(sink));
        sequencer.narrate(&response, false).await;
    }
}
