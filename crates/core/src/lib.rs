//! Disc AI Core
//!
//! The session-controller logic for an interactive two-agent discussion over
//! a piece of reference material: the disclosure policy, the append-only
//! transcript, the turn protocol client, the narration sequencer, the
//! voice-capture machine, and the controller that composes them into rounds.
//! Presentation (rendering, devices, a real speech-to-text backend) lives
//! behind traits and is supplied by the host application.

pub mod audio;
pub mod capture;
pub mod client;
pub mod controller;
pub mod disclosure;
pub mod material;
pub mod protocol;
pub mod session;
pub mod transcript;

pub use audio::{AudioSequencer, AudioSink, PlaybackError};
pub use capture::{CaptureDevice, CaptureError, CaptureHandle, Transcriber, VoiceCapture};
pub use client::{HttpTurnClient, TurnClient, TurnError};
pub use controller::SessionController;
pub use disclosure::{DisclosureSnapshot, disclose};
pub use material::{BlockKind, DescriptionBlock, ReferenceMaterial};
pub use protocol::{TurnRequest, TurnResponse};
pub use session::{Phase, Session};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
