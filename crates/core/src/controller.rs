//! Session Controller
//!
//! The top-level orchestrator for one conversation. It owns the session
//! state, the transcript, the narration sequencer and the voice-capture
//! machine, and composes them into rounds: disclose, request, append,
//! narrate, advance. Input is gated so at most one round-trip is ever in
//! flight; the gate only reopens after narration has settled.

use crate::audio::{AudioSequencer, AudioSink};
use crate::capture::{CaptureDevice, Transcriber, VoiceCapture};
use crate::client::TurnClient;
use crate::disclosure::{DisclosureSnapshot, disclose};
use crate::material::ReferenceMaterial;
use crate::protocol::TurnRequest;
use crate::session::{Phase, Session};
use crate::transcript::{Speaker, Transcript, TranscriptEntry};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// One conversation: reference material, session state, transcript, and the
/// collaborators needed to run rounds. Constructed per conversation; several
/// controllers can coexist in one process.
pub struct SessionController {
    material: ReferenceMaterial,
    session: Session,
    phase: Phase,
    transcript: Transcript,
    client: Arc<dyn TurnClient>,
    narrator: AudioSequencer,
    voice: VoiceCapture,
    pending_input: Option<String>,
}

impl SessionController {
    pub fn new(
        material: ReferenceMaterial,
        client: Arc<dyn TurnClient>,
        sink: Arc<dyn AudioSink>,
        device: Arc<dyn CaptureDevice>,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            material,
            session: Session::new(),
            phase: Phase::NotStarted,
            transcript: Transcript::new(),
            client,
            narrator: AudioSequencer::new(sink),
            voice: VoiceCapture::new(device, transcriber),
            pending_input: None,
        }
    }

    // --- Read-only views for the presentation layer ---

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn material(&self) -> &ReferenceMaterial {
        &self.material
    }

    /// The slice of material disclosed as of the current round.
    pub fn disclosure(&self) -> DisclosureSnapshot {
        disclose(&self.material, self.session.round)
    }

    /// Whether the user may submit right now. Derived from phase, loading and
    /// recording state so it can never disagree with `is_loading`.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::AwaitingUserInput
            && !self.session.is_loading
            && !self.voice.is_recording()
    }

    pub fn is_recording(&self) -> bool {
        self.voice.is_recording()
    }

    /// Voice-captured text waiting to be reviewed and submitted by the user.
    pub fn pending_input(&self) -> Option<&str> {
        self.pending_input.as_deref()
    }

    pub fn take_pending_input(&mut self) -> Option<String> {
        self.pending_input.take()
    }

    // --- Commands ---

    /// Opens the conversation by running round 0 with empty user input.
    /// Valid only once, before any other round has run.
    pub async fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            warn!(phase = %self.phase, "start ignored; session already started");
            return;
        }
        info!(topic = %self.material.title, "starting session");
        self.run_round("").await;
    }

    /// Submits one user turn. Ignored while the gate is closed or when the
    /// trimmed text is empty. The user's entry is appended before the network
    /// call and survives a failed round.
    pub async fn submit(&mut self, user_text: &str) {
        let text = user_text.trim();
        if text.is_empty() {
            debug!("submit ignored: empty input");
            return;
        }
        if !self.can_submit() {
            debug!(phase = %self.phase, "submit ignored: input gate closed");
            return;
        }

        // The first substantive reply (round 1) doubles as the user's name.
        if self.session.round == 1 {
            self.session.user_name = text.to_string();
            debug!(user_name = %self.session.user_name, "captured user name");
        }

        self.transcript
            .append(TranscriptEntry::new(Speaker::User, text));
        self.run_round(text).await;
    }

    /// Flips narration on or off. Takes effect from the next round; has no
    /// bearing on the protocol or the transcript.
    pub fn toggle_mute(&mut self) {
        self.session.is_muted = !self.session.is_muted;
        debug!(is_muted = self.session.is_muted, "mute toggled");
    }

    /// Starts voice capture. Ignored mid-round and while already recording;
    /// a denied device is logged inside the capture machine.
    pub async fn start_recording(&mut self) {
        if self.session.is_loading {
            debug!("start_recording ignored: round in flight");
            return;
        }
        self.voice.start().await;
    }

    /// Stops voice capture and stores the best-effort transcript as pending
    /// input for the user to review and submit.
    pub async fn stop_recording(&mut self) {
        if !self.voice.is_recording() {
            debug!("stop_recording ignored: not recording");
            return;
        }
        self.session.is_loading = true;
        if let Some(text) = self.voice.stop().await {
            self.pending_input = Some(text);
        }
        self.session.is_loading = false;
    }

    // --- Round execution ---

    /// Runs one complete round: request, append, narrate, advance.
    ///
    /// The input gate stays closed from the first line to the last; the round
    /// index moves only on protocol success, and a failure leaves the session
    /// identifier and transcript exactly as they were.
    async fn run_round(&mut self, user_text: &str) {
        self.session.is_loading = true;
        self.phase = Phase::AwaitingResponse;

        let request = TurnRequest::build(&self.session, &self.material, user_text);
        match self.client.request_turn(&request).await {
            Ok(response) => {
                // The service is authoritative for the session identifier.
                if let Some(id) = &response.session_id {
                    self.session.session_id = Some(id.clone());
                }
                if let Some(text) = &response.agent_a_message {
                    self.transcript
                        .append(TranscriptEntry::new(Speaker::AgentA, text.clone()));
                }
                if let Some(text) = &response.agent_b_message {
                    self.transcript
                        .append(TranscriptEntry::new(Speaker::AgentB, text.clone()));
                }

                self.narrator
                    .narrate(&response, self.session.is_muted)
                    .await;

                self.session.round += 1;
                debug!(round = self.session.round, "round complete");
            }
            Err(error) => {
                error!(%error, round = self.session.round, "turn request failed; round not advanced");
            }
        }

        self.session.is_loading = false;
        self.phase = Phase::AwaitingUserInput;
    }
}
